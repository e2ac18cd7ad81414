//! End-to-end summarization of a punch table for one employee.
//!
//! The stages run strictly in order over the whole batch:
//!
//! 1. Detect which headers hold the date, time, direction and employee id.
//! 2. Resolve the day/month order of the date column across *all* rows, so
//!    other employees' punches still help decide an ambiguous batch.
//! 3. Turn rows into events, dropping anything unparseable or out of period.
//! 4. Keep the requested employee's events.
//! 5. Pair and aggregate per (employee, day), then total per week and period.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::{
    aggregate, period_totals, resolve_dates, resolve_events, weekly_totals,
};
use crate::config::ColumnAliases;
use crate::error::{TimesheetError, TimesheetResult};
use crate::models::{RawPunchRow, ResolutionAudit, SummaryReport};

/// Summarizes one employee's punches from a raw table.
///
/// The employee id is matched case-insensitively against the trimmed cells of
/// the employee id column.
///
/// # Errors
///
/// - `InvalidRequest` if `employee_id` is blank.
/// - `NoValidDates` if the table is empty or no date cell parses.
/// - `MissingColumn` if a required column cannot be found.
/// - `EmployeeNotFound` if no usable row belongs to the employee.
///
/// # Example
///
/// ```
/// use punch_timesheet::config::ColumnAliases;
/// use punch_timesheet::models::{DateOrder, RawPunchRow};
/// use punch_timesheet::pipeline::summarize_employee;
/// use rust_decimal::Decimal;
///
/// let punch = |date: &str, time: &str, direction: &str| {
///     RawPunchRow::from_cells([
///         ("Employee ID", "E1"),
///         ("Punch Date", date),
///         ("Punch Time", time),
///         ("Directionality", direction),
///     ])
/// };
/// let rows = vec![
///     punch("05-03-2024", "08:00:00", "In"),
///     punch("05-03-2024", "17:30:00", "Out"),
///     punch("18-03-2024", "09:00:00", "In"),
///     punch("18-03-2024", "13:00:00", "Out"),
/// ];
///
/// let report = summarize_employee(&rows, "e1", &ColumnAliases::default()).unwrap();
/// assert_eq!(report.date_order, DateOrder::DayFirst);
/// assert_eq!(report.days.len(), 2);
/// assert_eq!(report.days[0].worked_hours, Decimal::new(95, 1));
/// assert_eq!(report.totals.worked_hours, Decimal::new(135, 1));
/// ```
pub fn summarize_employee(
    rows: &[RawPunchRow],
    employee_id: &str,
    aliases: &ColumnAliases,
) -> TimesheetResult<SummaryReport> {
    let employee_id = employee_id.trim();
    if employee_id.is_empty() {
        return Err(TimesheetError::InvalidRequest {
            message: "employee_id must not be blank".to_string(),
        });
    }
    if rows.is_empty() {
        return Err(TimesheetError::NoValidDates { rows: 0 });
    }

    let columns = aliases.detect(rows)?;
    debug!(?columns, "Detected punch columns");

    let date_cells: Vec<&str> = rows
        .iter()
        .map(|row| row.get(&columns.punch_date).unwrap_or_default())
        .collect();
    let resolution =
        resolve_dates(&date_cells).ok_or(TimesheetError::NoValidDates { rows: rows.len() })?;

    info!(
        period = %resolution.period,
        order = %resolution.order,
        month_first_count = resolution.month_first.count,
        day_first_count = resolution.day_first.count,
        "Resolved batch date order"
    );

    let resolved = resolve_events(rows, &columns, &resolution);
    let mut dropped = resolved.dropped;

    let wanted = employee_id.to_lowercase();
    let (mut events, others): (Vec<_>, Vec<_>) = resolved
        .events
        .into_iter()
        .partition(|event| event.employee_id.to_lowercase() == wanted);
    dropped.other_employee = others.len();

    // Spellings that differ only in case are one employee
    for event in &mut events {
        event.employee_id = employee_id.to_string();
    }

    if events.is_empty() {
        return Err(TimesheetError::EmployeeNotFound {
            employee_id: employee_id.to_string(),
        });
    }

    let events_kept = events.len();
    let days = aggregate(events);
    let weekly = weekly_totals(&days);
    let totals = period_totals(&days);

    info!(
        employee_id,
        rows_in = rows.len(),
        events_kept,
        rows_dropped = dropped.total(),
        days = days.len(),
        worked_hours = %totals.worked_hours,
        "Summarized punches"
    );

    Ok(SummaryReport {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        employee_id: employee_id.to_string(),
        period: resolution.period,
        date_order: resolution.order,
        days,
        weekly,
        totals,
        audit: ResolutionAudit {
            rows_in: rows.len(),
            events_kept,
            provisional_period: resolution.provisional_period,
            month_first: resolution.month_first,
            day_first: resolution.day_first,
            chosen: resolution.order,
            dropped,
        },
    })
}
