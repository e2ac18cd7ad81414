//! Turning raw rows into punch events.
//!
//! Each row's resolved date is combined with its parsed time of day. Rows are
//! dropped, and counted by reason, when the date or time is missing, when the
//! date lies outside the batch's dominant period, or when the direction is not
//! "in" or "out". The checks run in that order and a row is counted once.

use crate::config::DetectedColumns;
use crate::models::{Direction, DropCounts, RawPunchRow, ResolvedEvent};

use super::disambiguation::DateResolution;
use super::time_parsing::parse_time;

/// Events that survived resolution, plus what was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventResolution {
    /// Surviving events, in input row order.
    pub events: Vec<ResolvedEvent>,
    /// Rows dropped, by reason.
    pub dropped: DropCounts,
}

/// Resolves every row into a [`ResolvedEvent`] or a drop.
///
/// `resolution.dates` must be aligned with `rows`, as produced by running
/// [`resolve_dates`](super::resolve_dates) over the rows' date cells.
pub fn resolve_events(
    rows: &[RawPunchRow],
    columns: &DetectedColumns,
    resolution: &DateResolution,
) -> EventResolution {
    let mut outcome = EventResolution::default();

    for (row_index, row) in rows.iter().enumerate() {
        let Some(date) = resolution.dates.get(row_index).copied().flatten() else {
            outcome.dropped.unparsed_date += 1;
            continue;
        };

        let Some(time) = row.get(&columns.punch_time).and_then(parse_time) else {
            outcome.dropped.unparsed_time += 1;
            continue;
        };

        let timestamp = date.and_time(time);
        if !resolution.period.contains(timestamp.date()) {
            outcome.dropped.out_of_period += 1;
            continue;
        }

        let Some(direction) = row.get(&columns.direction).and_then(Direction::parse) else {
            outcome.dropped.unknown_direction += 1;
            continue;
        };

        outcome.events.push(ResolvedEvent {
            employee_id: row
                .get(&columns.employee_id)
                .unwrap_or_default()
                .trim()
                .to_string(),
            timestamp,
            direction,
            row_index,
        });
    }

    outcome
}
