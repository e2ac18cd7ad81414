//! Configuration types for punch table ingestion.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{TimesheetError, TimesheetResult};
use crate::models::{RawPunchRow, normalize_column_name};

/// Metadata about a configuration profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    /// Short name of the profile (e.g., "default").
    pub name: String,
    /// The version of the profile.
    pub version: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

impl Default for ProfileMetadata {
    fn default() -> Self {
        Self {
            name: "builtin".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Built-in punch report headers".to_string(),
        }
    }
}

/// Accepted header names for each logical column, in order of preference.
///
/// Header matching is exact after trimming and lower-casing both sides.
///
/// # Example
///
/// ```
/// use punch_timesheet::config::ColumnAliases;
/// use punch_timesheet::models::RawPunchRow;
///
/// let rows = vec![RawPunchRow::from_cells([
///     ("Punch Date", "05-03-2024"),
///     ("Punch Time", "08:00"),
///     ("Directionality", "In"),
///     ("Employee ID", "E1"),
/// ])];
///
/// let detected = ColumnAliases::default().detect(&rows).unwrap();
/// assert_eq!(detected.punch_date, "punch date");
/// assert_eq!(detected.employee_id, "employee id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAliases {
    /// Headers accepted for the punch date column.
    pub punch_date: Vec<String>,
    /// Headers accepted for the punch time column.
    pub punch_time: Vec<String>,
    /// Headers accepted for the in/out direction column.
    pub direction: Vec<String>,
    /// Headers accepted for the employee id column.
    pub employee_id: Vec<String>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        fn names(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }
        Self {
            punch_date: names(&["punch date", "date"]),
            punch_time: names(&["punch time", "time"]),
            direction: names(&["directionality", "direction"]),
            employee_id: names(&["employee id", "employee_id", "emp id"]),
        }
    }
}

/// The normalized header found for each logical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedColumns {
    /// Header holding punch dates.
    pub punch_date: String,
    /// Header holding punch times.
    pub punch_time: String,
    /// Header holding directions.
    pub direction: String,
    /// Header holding employee ids.
    pub employee_id: String,
}

impl ColumnAliases {
    /// Finds the header to use for each logical column.
    ///
    /// A header counts as present if any row carries it. For each column the
    /// first alias present wins.
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` naming the first logical column with no alias
    /// present.
    pub fn detect(&self, rows: &[RawPunchRow]) -> TimesheetResult<DetectedColumns> {
        let present: BTreeSet<&str> = rows.iter().flat_map(|row| row.columns()).collect();

        Ok(DetectedColumns {
            punch_date: find_column(&present, "punch_date", &self.punch_date)?,
            punch_time: find_column(&present, "punch_time", &self.punch_time)?,
            direction: find_column(&present, "direction", &self.direction)?,
            employee_id: find_column(&present, "employee_id", &self.employee_id)?,
        })
    }
}

fn find_column(
    present: &BTreeSet<&str>,
    column: &str,
    aliases: &[String],
) -> TimesheetResult<String> {
    aliases
        .iter()
        .map(|alias| normalize_column_name(alias))
        .find(|alias| present.contains(alias.as_str()))
        .ok_or_else(|| TimesheetError::MissingColumn {
            column: column.to_string(),
            accepted: aliases.join(", "),
        })
}

/// Columns configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnsConfig {
    /// Header aliases per logical column.
    pub columns: ColumnAliases,
}

/// The complete configuration loaded from YAML files.
#[derive(Debug, Clone, Default)]
pub struct TimesheetConfig {
    /// Profile metadata.
    profile: ProfileMetadata,
    /// Header aliases.
    columns: ColumnAliases,
}

impl TimesheetConfig {
    /// Creates a new TimesheetConfig from its component parts.
    pub fn new(profile: ProfileMetadata, columns: ColumnAliases) -> Self {
        Self { profile, columns }
    }

    /// Returns the profile metadata.
    pub fn profile(&self) -> &ProfileMetadata {
        &self.profile
    }

    /// Returns the header aliases.
    pub fn columns(&self) -> &ColumnAliases {
        &self.columns
    }
}
