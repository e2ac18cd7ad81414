//! Single-pass in/out pairing and per-day aggregation.
//!
//! Events for one employee on one day are sorted by time and walked once with
//! two pending markers: the most recent clock-in and the most recent
//! clock-out. Each marker is simply overwritten by the next event of its kind,
//! so an "in" that is never closed is dropped from worked time when another
//! "in" arrives. There is no stack of open punches.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{DailySummary, Direction, ResolvedEvent};

use super::week_bucket::week_of_month;

const SECONDS_PER_HOUR: i64 = 3600;

/// Decimal places kept on reported hours.
pub const HOURS_DP: u32 = 4;

/// Converts whole seconds to hours, rounded to [`HOURS_DP`] places.
fn hours_from_seconds(seconds: i64) -> Decimal {
    (Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR)).round_dp(HOURS_DP)
}

/// Returns `later - earlier` in hours, rounded to [`HOURS_DP`] places.
///
/// # Example
///
/// ```
/// use punch_timesheet::calculation::hours_between;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// let start = day.and_hms_opt(8, 0, 0).unwrap();
/// let end = day.and_hms_opt(17, 30, 0).unwrap();
/// assert_eq!(hours_between(start, end), Decimal::new(95, 1));
/// assert_eq!(hours_between(end, start), Decimal::new(-95, 1));
/// ```
pub fn hours_between(earlier: NaiveDateTime, later: NaiveDateTime) -> Decimal {
    hours_from_seconds((later - earlier).num_seconds())
}

/// Summarizes the punches of one employee on one day.
///
/// The events are assumed to share an employee and a calendar date; the
/// first event's employee id is used. Returns `None` for an empty slice.
///
/// # Example
///
/// ```
/// use punch_timesheet::calculation::summarize_day;
/// use punch_timesheet::models::{Direction, ResolvedEvent};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// let punch = |h, direction| ResolvedEvent {
///     employee_id: "E1".to_string(),
///     timestamp: day.and_hms_opt(h, 0, 0).unwrap(),
///     direction,
///     row_index: 0,
/// };
/// let events = [
///     punch(8, Direction::In),
///     punch(12, Direction::Out),
///     punch(13, Direction::In),
///     punch(17, Direction::Out),
/// ];
///
/// let summary = summarize_day(&events).unwrap();
/// assert_eq!(summary.worked_hours, Decimal::from(8));
/// assert_eq!(summary.resting_hours, Decimal::from(1));
/// ```
pub fn summarize_day(events: &[ResolvedEvent]) -> Option<DailySummary> {
    let first = events.first()?;

    // sort_by_key is stable: equal timestamps keep input order
    let mut sorted: Vec<&ResolvedEvent> = events.iter().collect();
    sorted.sort_by_key(|event| event.timestamp);

    // Spans are summed in seconds and converted once per day
    let mut worked_seconds: i64 = 0;
    let mut resting_seconds: i64 = 0;
    let mut last_in: Option<NaiveDateTime> = None;
    let mut last_out: Option<NaiveDateTime> = None;

    for event in &sorted {
        match event.direction {
            Direction::In => {
                if let Some(out_at) = last_out {
                    let gap = (event.timestamp - out_at).num_seconds();
                    if gap > 0 {
                        resting_seconds += gap;
                    }
                }
                last_in = Some(event.timestamp);
            }
            Direction::Out => {
                if let Some(in_at) = last_in {
                    let span = (event.timestamp - in_at).num_seconds();
                    if span > 0 {
                        worked_seconds += span;
                    }
                }
                last_out = Some(event.timestamp);
            }
        }
    }

    let earliest = sorted.first()?.timestamp;
    let latest = sorted.last()?.timestamp;

    let first_in = sorted
        .iter()
        .filter(|e| e.direction == Direction::In)
        .map(|e| e.timestamp)
        .min()
        .unwrap_or(earliest);
    let last_out = sorted
        .iter()
        .filter(|e| e.direction == Direction::Out)
        .map(|e| e.timestamp)
        .max()
        .unwrap_or(latest);

    Some(DailySummary {
        employee_id: first.employee_id.clone(),
        date: first.date(),
        worked_hours: hours_from_seconds(worked_seconds),
        resting_hours: hours_from_seconds(resting_seconds),
        first_in,
        last_out,
        week_of_month: week_of_month(first_in.date()),
    })
}

/// Groups events by (employee id, calendar date) and summarizes each group.
///
/// Summaries come back ordered by employee id, then date. Input order is kept
/// within a group so that punches with identical timestamps pair in the order
/// they were recorded.
pub fn aggregate(events: Vec<ResolvedEvent>) -> Vec<DailySummary> {
    let mut groups: BTreeMap<(String, NaiveDate), Vec<ResolvedEvent>> = BTreeMap::new();
    for event in events {
        groups
            .entry((event.employee_id.clone(), event.date()))
            .or_default()
            .push(event);
    }

    groups
        .values()
        .filter_map(|group| summarize_day(group))
        .collect()
}
