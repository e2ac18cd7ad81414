//! Numeric date parsing under a fixed day/month order.
//!
//! A date cell is three numeric fields separated by `-`, `/` or `.`, with an
//! optional trailing time part that is ignored. A four-digit first field means
//! the cell is year-first and reads the same under either order. Otherwise the
//! last field is the year and the requested order is tried first; when that
//! order names an impossible date the swapped order is tried before giving up.

use chrono::NaiveDate;

use crate::models::DateOrder;

/// Characters accepted between the day, month and year fields.
const DATE_SEPARATORS: [char; 3] = ['-', '/', '.'];

/// Parses one date cell under the given order.
///
/// Returns `None` for empty cells and for anything that is not a real
/// calendar date under either field order.
///
/// # Examples
///
/// ```
/// use punch_timesheet::calculation::parse_date;
/// use punch_timesheet::models::DateOrder;
/// use chrono::NaiveDate;
///
/// // Ambiguous: the order decides.
/// assert_eq!(
///     parse_date("05-03-2024", DateOrder::DayFirst),
///     NaiveDate::from_ymd_opt(2024, 3, 5)
/// );
/// assert_eq!(
///     parse_date("05-03-2024", DateOrder::MonthFirst),
///     NaiveDate::from_ymd_opt(2024, 5, 3)
/// );
///
/// // Unambiguous: 15 cannot be a month, so both orders agree.
/// assert_eq!(
///     parse_date("15-04-2024", DateOrder::MonthFirst),
///     NaiveDate::from_ymd_opt(2024, 4, 15)
/// );
///
/// assert_eq!(parse_date("not a date", DateOrder::DayFirst), None);
/// ```
pub fn parse_date(value: &str, order: DateOrder) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value
        .split(|c: char| c.is_whitespace() || c == 'T')
        .next()
        .filter(|part| !part.is_empty())?;

    let [first, second, third] = split_fields(date_part)?;

    if first.len() == 4 {
        if second.len() > 2 || third.len() > 2 {
            return None;
        }
        return NaiveDate::from_ymd_opt(
            first.parse::<i32>().ok()?,
            second.parse::<u32>().ok()?,
            third.parse::<u32>().ok()?,
        );
    }

    if first.len() > 2 || second.len() > 2 {
        return None;
    }
    let year = parse_year(third)?;
    let first: u32 = first.parse().ok()?;
    let second: u32 = second.parse().ok()?;

    let (day, month) = match order {
        DateOrder::DayFirst => (first, second),
        DateOrder::MonthFirst => (second, first),
    };

    NaiveDate::from_ymd_opt(year, month, day).or_else(|| NaiveDate::from_ymd_opt(year, day, month))
}

/// Parses every cell under the given order, keeping positions aligned.
///
/// # Example
///
/// ```
/// use punch_timesheet::calculation::parse_dates;
/// use punch_timesheet::models::DateOrder;
///
/// let parsed = parse_dates(&["01-02-2024", "", "garbage"], DateOrder::DayFirst);
/// assert_eq!(parsed.len(), 3);
/// assert!(parsed[0].is_some());
/// assert!(parsed[1].is_none());
/// assert!(parsed[2].is_none());
/// ```
pub fn parse_dates<S: AsRef<str>>(cells: &[S], order: DateOrder) -> Vec<Option<NaiveDate>> {
    cells
        .iter()
        .map(|cell| parse_date(cell.as_ref(), order))
        .collect()
}

/// Splits a date into exactly three all-digit fields on a single separator.
fn split_fields(value: &str) -> Option<[&str; 3]> {
    let separator = value.chars().find(|c| DATE_SEPARATORS.contains(c))?;

    let mut fields = value.split(separator);
    let parts = [fields.next()?, fields.next()?, fields.next()?];
    if fields.next().is_some() {
        return None;
    }

    let well_formed = parts
        .iter()
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));
    well_formed.then_some(parts)
}

/// Two-digit years land in 2000-2099.
fn parse_year(value: &str) -> Option<i32> {
    let year: i32 = value.parse().ok()?;
    match value.len() {
        4 => Some(year),
        2 => Some(2000 + year),
        _ => None,
    }
}
