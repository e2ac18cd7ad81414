//! Summary and report models.
//!
//! This module contains the [`DailySummary`] produced per employee and day,
//! and the [`SummaryReport`] that bundles a batch's summaries with totals and
//! an audit of how the batch's date order was chosen.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DateOrder, DominantPeriod};

/// Worked and resting time for one employee on one calendar day.
///
/// # Example
///
/// ```
/// use punch_timesheet::models::DailySummary;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// let summary = DailySummary {
///     employee_id: "E1".to_string(),
///     date,
///     worked_hours: Decimal::new(95, 1),
///     resting_hours: Decimal::ZERO,
///     first_in: date.and_hms_opt(8, 0, 0).unwrap(),
///     last_out: date.and_hms_opt(17, 30, 0).unwrap(),
///     week_of_month: 1,
/// };
/// assert_eq!(summary.worked_hours, Decimal::new(95, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Employee identifier.
    pub employee_id: String,
    /// The calendar day summarized.
    pub date: NaiveDate,
    /// Sum of in→out intervals, in hours.
    pub worked_hours: Decimal,
    /// Sum of out→in intervals, in hours.
    pub resting_hours: Decimal,
    /// Earliest clock-in, or the earliest punch if there was no clock-in.
    pub first_in: NaiveDateTime,
    /// Latest clock-out, or the latest punch if there was no clock-out.
    pub last_out: NaiveDateTime,
    /// Week-of-month bucket (1-5) of `first_in`.
    pub week_of_month: u8,
}

/// Hours summed over one week-of-month bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTotal {
    /// Week-of-month bucket (1-5).
    pub week_of_month: u8,
    /// Number of days with punches in this bucket.
    pub days: u32,
    /// Total worked hours.
    pub worked_hours: Decimal,
    /// Total resting hours.
    pub resting_hours: Decimal,
}

/// Hours summed over the whole period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Number of days with punches.
    pub days: u32,
    /// Total worked hours.
    pub worked_hours: Decimal,
    /// Total resting hours.
    pub resting_hours: Decimal,
}

/// How one date-order hypothesis fared over the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypothesisOutcome {
    /// The reading that was tried.
    pub order: DateOrder,
    /// Number of cells that produced a date under this reading.
    pub parsed: usize,
    /// The most frequent (year, month) under this reading alone.
    pub period: Option<DominantPeriod>,
    /// How many of this reading's dates fall in its own period.
    pub count: usize,
}

/// Why input rows did not become events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropCounts {
    /// Date cell empty or unparseable under the chosen order.
    pub unparsed_date: usize,
    /// Time cell empty or not `HH:MM[:SS]`.
    pub unparsed_time: usize,
    /// Date outside the dominant period.
    pub out_of_period: usize,
    /// Direction was neither "in" nor "out".
    pub unknown_direction: usize,
    /// Row belongs to a different employee.
    pub other_employee: usize,
}

impl DropCounts {
    /// Total number of dropped rows.
    pub fn total(&self) -> usize {
        self.unparsed_date
            + self.unparsed_time
            + self.out_of_period
            + self.unknown_direction
            + self.other_employee
    }
}

/// Record of how a batch was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionAudit {
    /// Rows received.
    pub rows_in: usize,
    /// Events that reached the aggregator.
    pub events_kept: usize,
    /// Most frequent (year, month) across both readings combined.
    pub provisional_period: DominantPeriod,
    /// Month-first reading outcome.
    pub month_first: HypothesisOutcome,
    /// Day-first reading outcome.
    pub day_first: HypothesisOutcome,
    /// The reading that won.
    pub chosen: DateOrder,
    /// Rows dropped, by reason.
    pub dropped: DropCounts,
}

/// The complete result of summarizing one batch for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Unique identifier for this report.
    pub id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The employee that was requested.
    pub employee_id: String,
    /// The canonical (year, month) of the batch.
    pub period: DominantPeriod,
    /// The date order used to read the batch.
    pub date_order: DateOrder,
    /// One entry per (employee, day), ordered by employee then date.
    pub days: Vec<DailySummary>,
    /// Totals per week-of-month bucket, ascending.
    pub weekly: Vec<WeeklyTotal>,
    /// Totals over the whole period.
    pub totals: PeriodTotals,
    /// How the batch was resolved.
    pub audit: ResolutionAudit,
}
