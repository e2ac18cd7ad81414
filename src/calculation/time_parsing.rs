//! Time-of-day parsing for punch time cells.

use chrono::NaiveTime;

/// Accepted 24-hour layouts, tried in order.
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Parses a punch time cell as `HH:MM:SS` or `HH:MM` (24-hour).
///
/// Surrounding whitespace is ignored. Empty cells, AM/PM suffixes and
/// fractional seconds all yield `None`.
///
/// # Examples
///
/// ```
/// use punch_timesheet::calculation::parse_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time("17:30:00"), NaiveTime::from_hms_opt(17, 30, 0));
/// assert_eq!(parse_time(" 08:15 "), NaiveTime::from_hms_opt(8, 15, 0));
/// assert_eq!(parse_time("8:15 PM"), None);
/// assert_eq!(parse_time(""), None);
/// ```
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
}
