//! Raw spreadsheet grid and the located data table.
//!
//! A [`RawGrid`] is the uploaded report exactly as materialized: rows of
//! opaque cells with no assumed types or shape. The table locator scans it
//! for the arrival-pattern sub-rectangle and produces a [`DataTable`],
//! which promotes the matched header row to column labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One spreadsheet cell value.
///
/// Cells are opaque until a pipeline stage interprets them; the locator
/// works on their [`Display`](fmt::Display) form, the normalizer on
/// [`Cell::as_number`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// A textual cell.
    Text(String),
    /// A numeric cell.
    Number(f64),
    /// A blank cell.
    Empty,
}

impl Cell {
    /// Numeric interpretation: the value of a number cell, or a parseable
    /// text cell. `None` for blanks and non-numeric text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse().ok(),
            Cell::Empty => None,
        }
    }

    /// Whether the cell is blank.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Empty => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<i32> for Cell {
    fn from(n: i32) -> Self {
        Cell::Number(n.into())
    }
}

/// The uploaded report as a rows × columns grid of cells.
///
/// Rows may be ragged; nothing about the grid is trusted until the
/// locator finds the arrival table inside it. Immutable once built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawGrid {
    rows: Vec<Vec<Cell>>,
}

impl RawGrid {
    /// Wraps materialized rows as a grid.
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// All rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the grid has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The located arrival table: a header row of column labels plus the data
/// rows beneath it, cut out of the surrounding grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTable {
    /// Stringified header cells ("Time" plus the day names, typically).
    pub header: Vec<String>,
    /// Data rows, excluding the header and anything at or past the end
    /// marker.
    pub rows: Vec<Vec<Cell>>,
}

impl DataTable {
    /// Index of the column whose header label matches `label`
    /// (whitespace-trimmed exact match).
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.header.iter().position(|h| h.trim() == label)
    }
}
