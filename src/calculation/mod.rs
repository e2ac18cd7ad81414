//! Calculation logic for the punch timesheet engine.
//!
//! This module contains the date-order disambiguation over a batch of date
//! cells, time-of-day parsing, event resolution and filtering, the
//! single-pass in/out pairing that produces daily summaries, week-of-month
//! bucketing, and weekly and period totals.

mod date_parsing;
mod disambiguation;
mod event_resolution;
mod pairing;
mod time_parsing;
mod totals;
mod week_bucket;

pub use date_parsing::{parse_date, parse_dates};
pub use disambiguation::{DateResolution, dominant_period, resolve_dates};
pub use event_resolution::{EventResolution, resolve_events};
pub use pairing::{HOURS_DP, aggregate, hours_between, summarize_day};
pub use time_parsing::parse_time;
pub use totals::{period_totals, weekly_totals};
pub use week_bucket::{MAX_WEEK_BUCKET, week_of_month};
