//! Punch row and event models.
//!
//! [`RawPunchRow`] is the untyped input handed over by whatever loaded the
//! spreadsheet. [`ResolvedEvent`] is what survives date resolution, time
//! parsing and direction checks.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Normalizes a column header for lookup: trimmed and lower-cased.
///
/// # Example
///
/// ```
/// use punch_timesheet::models::normalize_column_name;
///
/// assert_eq!(normalize_column_name("  Punch Date "), "punch date");
/// ```
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// One row of the input table: string cells keyed by normalized column name.
///
/// When two headers normalize to the same name, the first one inserted wins.
///
/// # Example
///
/// ```
/// use punch_timesheet::models::RawPunchRow;
///
/// let row = RawPunchRow::from_cells([("Punch Date", "05-03-2024"), ("Directionality", "In")]);
/// assert_eq!(row.get("punch date"), Some("05-03-2024"));
/// assert_eq!(row.get("DIRECTIONALITY"), Some("In"));
/// assert_eq!(row.get("punch time"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct RawPunchRow {
    cells: BTreeMap<String, String>,
}

impl From<BTreeMap<String, String>> for RawPunchRow {
    fn from(cells: BTreeMap<String, String>) -> Self {
        Self::from_cells(cells)
    }
}

impl From<RawPunchRow> for BTreeMap<String, String> {
    fn from(row: RawPunchRow) -> Self {
        row.cells
    }
}

impl RawPunchRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row from (header, value) pairs.
    pub fn from_cells<I, K, V>(cells: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut row = Self::new();
        for (column, value) in cells {
            row.insert(column.as_ref(), value);
        }
        row
    }

    /// Inserts a cell unless a cell with the same normalized header exists.
    pub fn insert(&mut self, column: &str, value: impl Into<String>) {
        self.cells
            .entry(normalize_column_name(column))
            .or_insert_with(|| value.into());
    }

    /// Looks up a cell by header, normalizing the header first.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .get(&normalize_column_name(column))
            .map(String::as_str)
    }

    /// Returns true if the row has a cell under this header.
    pub fn has_column(&self, column: &str) -> bool {
        self.cells.contains_key(&normalize_column_name(column))
    }

    /// Iterates over the normalized headers present in the row.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }
}

/// Punch direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Clocking in.
    In,
    /// Clocking out.
    Out,
}

impl Direction {
    /// Parses a direction cell, ignoring case and surrounding whitespace.
    ///
    /// Anything other than "in" or "out" yields `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use punch_timesheet::models::Direction;
    ///
    /// assert_eq!(Direction::parse(" IN "), Some(Direction::In));
    /// assert_eq!(Direction::parse("Out"), Some(Direction::Out));
    /// assert_eq!(Direction::parse("break"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("in") {
            Some(Direction::In)
        } else if value.eq_ignore_ascii_case("out") {
            Some(Direction::Out)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::In => write!(f, "In"),
            Direction::Out => write!(f, "Out"),
        }
    }
}

/// A punch with a fully resolved timestamp and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEvent {
    /// Employee identifier, trimmed, as it appeared in the row.
    pub employee_id: String,
    /// Date plus time of day, no time zone.
    pub timestamp: NaiveDateTime,
    /// Whether this is a clock-in or a clock-out.
    pub direction: Direction,
    /// Position of the source row in the input table.
    pub row_index: usize,
}

impl ResolvedEvent {
    /// The calendar date the event belongs to.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
