//! Dominant period and date-order models.
//!
//! A batch of punches is summarized one calendar month at a time. The
//! [`DominantPeriod`] names that month, and [`DateOrder`] records which reading
//! of ambiguous numeric dates produced it.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The order in which the day and month fields of a numeric date are read.
///
/// # Example
///
/// ```
/// use punch_timesheet::models::DateOrder;
///
/// assert_eq!(DateOrder::DayFirst.to_string(), "day-first");
/// assert_eq!(DateOrder::DayFirst.swapped(), DateOrder::MonthFirst);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `MM-DD-YYYY`.
    MonthFirst,
    /// `DD-MM-YYYY`.
    DayFirst,
}

impl DateOrder {
    /// Returns the other reading.
    pub fn swapped(self) -> Self {
        match self {
            DateOrder::MonthFirst => DateOrder::DayFirst,
            DateOrder::DayFirst => DateOrder::MonthFirst,
        }
    }
}

impl std::fmt::Display for DateOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateOrder::MonthFirst => write!(f, "month-first"),
            DateOrder::DayFirst => write!(f, "day-first"),
        }
    }
}

/// A single (year, month) pair treated as canonical for a batch.
///
/// Ordering is chronological, so the earliest period sorts first.
///
/// # Example
///
/// ```
/// use punch_timesheet::models::DominantPeriod;
/// use chrono::NaiveDate;
///
/// let period = DominantPeriod::new(2024, 3);
/// assert!(period.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
/// assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
/// assert_eq!(period.to_string(), "2024-03");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DominantPeriod {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1 through 12.
    pub month: u32,
}

impl DominantPeriod {
    /// Creates a period from a year and a 1-based month.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Returns the period a date falls in.
    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Checks whether a date lies inside this period.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl std::fmt::Display for DominantPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
