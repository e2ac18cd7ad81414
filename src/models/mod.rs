//! Core data models for the punch timesheet engine.
//!
//! This module contains the domain types that flow through the pipeline:
//! raw rows in, resolved punch events in the middle, daily summaries out.

mod period;
mod punch;
mod summary;

pub use period::{DateOrder, DominantPeriod};
pub use punch::{Direction, RawPunchRow, ResolvedEvent, normalize_column_name};
pub use summary::{
    DailySummary, DropCounts, HypothesisOutcome, PeriodTotals, ResolutionAudit, SummaryReport,
    WeeklyTotal,
};
