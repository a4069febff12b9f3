//! Grid locator: finds the arrival table inside an arbitrary grid.
//!
//! Exports bury the table under title rows, blank rows, and footers. The
//! table is identified by signature, not position:
//!
//! 1. The header row is the first row containing both a `Time` cell and a
//!    `Sunday` cell (stringified, exact match).
//! 2. The table ends at the first later row whose *first* cell mentions
//!    `Totals` or `Units` — the report's footer. Reports that omit the
//!    footer fall back to a fixed 30-row bound instead of failing.

use crate::error::AnalysisError;
use crate::models::{Cell, DataTable, RawGrid};

/// Header-row signature cells.
const HEADER_TIME: &str = "Time";
const HEADER_SUNDAY: &str = "Sunday";

/// First-column substrings marking the row after the last data row.
const END_MARKERS: [&str; 2] = ["Totals", "Units"];

/// Row span (header included) assumed when no end marker is present.
const FALLBACK_ROW_SPAN: usize = 30;

/// Locates the arrival table in `grid`.
///
/// Returns the header labels and the data rows strictly between the header
/// and the end marker (or fallback bound). Fails with
/// [`AnalysisError::TableNotFound`] when no header signature exists.
pub fn locate_table(grid: &RawGrid) -> Result<DataTable, AnalysisError> {
    let rows = grid.rows();

    let start = rows
        .iter()
        .position(|row| is_header_row(row))
        .ok_or(AnalysisError::TableNotFound)?;

    let end = rows[start + 1..]
        .iter()
        .position(|row| is_end_marker(row))
        .map(|offset| start + 1 + offset)
        .unwrap_or_else(|| (start + FALLBACK_ROW_SPAN).min(rows.len()));

    let header = rows[start]
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();
    let data_rows = rows[start + 1..end].to_vec();

    Ok(DataTable {
        header,
        rows: data_rows,
    })
}

fn is_header_row(row: &[Cell]) -> bool {
    let matches = |wanted: &str| {
        row.iter()
            .any(|cell| cell.to_string().trim() == wanted)
    };
    matches(HEADER_TIME) && matches(HEADER_SUNDAY)
}

fn is_end_marker(row: &[Cell]) -> bool {
    let Some(first) = row.first() else {
        return false;
    };
    let text = first.to_string();
    END_MARKERS.iter().any(|marker| text.contains(marker))
}
