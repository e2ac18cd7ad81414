//! Request types for the punch timesheet API.
//!
//! Spreadsheet exports are loosely typed: an employee id column may arrive as
//! a number and empty cells as `null`. [`CellValue`] accepts any JSON scalar
//! and renders it back to the string the core expects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::RawPunchRow;

/// A single cell of the posted table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Text cell.
    Text(String),
    /// Numeric cell, kept as written.
    Number(serde_json::Number),
    /// Boolean cell.
    Bool(bool),
    /// Empty cell.
    Empty,
}

impl CellValue {
    /// Renders the cell as the string the pipeline works on.
    pub fn into_text(self) -> String {
        match self {
            CellValue::Text(text) => text,
            CellValue::Number(number) => number.to_string(),
            CellValue::Bool(flag) => flag.to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

/// The request body for summarizing a punch table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The employee to summarize.
    pub employee_id: String,
    /// The raw table, one object per row, keyed by header.
    pub rows: Vec<BTreeMap<String, CellValue>>,
}

impl SummaryRequest {
    /// Converts the posted rows into [`RawPunchRow`]s.
    pub fn into_rows(self) -> (String, Vec<RawPunchRow>) {
        let rows = self
            .rows
            .into_iter()
            .map(|cells| {
                RawPunchRow::from_cells(
                    cells
                        .into_iter()
                        .map(|(column, value)| (column, value.into_text())),
                )
            })
            .collect();
        (self.employee_id, rows)
    }
}
