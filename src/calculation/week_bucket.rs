//! Week-of-month bucketing.

use chrono::{Datelike, NaiveDate};

/// The highest bucket, covering days 29 through 31.
pub const MAX_WEEK_BUCKET: u8 = 5;

/// Maps a date to a week-of-month bucket in fixed seven-day spans.
///
/// Days 1-7 are bucket 1, 8-14 bucket 2, 15-21 bucket 3, 22-28 bucket 4 and
/// 29-31 bucket 5. The weekday plays no part.
///
/// # Example
///
/// ```
/// use punch_timesheet::calculation::week_of_month;
/// use chrono::NaiveDate;
///
/// assert_eq!(week_of_month(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()), 1);
/// assert_eq!(week_of_month(NaiveDate::from_ymd_opt(2024, 3, 8).unwrap()), 2);
/// assert_eq!(week_of_month(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()), 5);
/// ```
pub fn week_of_month(date: NaiveDate) -> u8 {
    // day() is 1..=31, so this is 1..=5
    ((date.day() - 1) / 7 + 1) as u8
}
