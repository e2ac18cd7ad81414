//! Error types for the punch timesheet engine.
//!
//! Per-row anomalies (unparseable dates or times, unknown directions) are never
//! errors; they are absorbed by the pipeline and counted in the resolution
//! audit. Only batch-level conditions surface here.

use thiserror::Error;

/// The main error type for the punch timesheet engine.
///
/// # Example
///
/// ```
/// use punch_timesheet::error::TimesheetError;
///
/// let error = TimesheetError::EmployeeNotFound {
///     employee_id: "E042".to_string(),
/// };
/// assert_eq!(error.to_string(), "No punch data found for employee 'E042'");
/// ```
#[derive(Debug, Error)]
pub enum TimesheetError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required column is absent from the input table.
    #[error("Required column '{column}' not found (accepted headers: {accepted})")]
    MissingColumn {
        /// The logical column name.
        column: String,
        /// The header names that would have been accepted, comma separated.
        accepted: String,
    },

    /// No date cell in the batch parsed under either day/month order.
    #[error("No valid dates found in {rows} input rows")]
    NoValidDates {
        /// Number of rows that were inspected.
        rows: usize,
    },

    /// The batch contains no usable rows for the requested employee.
    #[error("No punch data found for employee '{employee_id}'")]
    EmployeeNotFound {
        /// The employee identifier that was requested.
        employee_id: String,
    },

    /// The request itself was unusable.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// A description of what was wrong.
        message: String,
    },
}

/// A type alias for Results that return TimesheetError.
pub type TimesheetResult<T> = Result<T, TimesheetError>;
