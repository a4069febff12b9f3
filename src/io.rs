//! CSV ingestion.
//!
//! Arrival-pattern exports arrive as spreadsheets; hosts that already hold
//! a materialized grid can skip this module, but CSV exports can be loaded
//! directly. The file is read with no header row and ragged rows allowed —
//! the real table is located by scanning, so the CSV's own shape carries
//! no meaning.

use std::io::Read;
use std::path::Path;

use crate::models::{Cell, RawGrid};

/// Reads a CSV file into a raw grid.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<RawGrid, csv::Error> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    collect_grid(reader)
}

/// Reads CSV data from any reader into a raw grid.
pub fn read_csv<R: Read>(input: R) -> Result<RawGrid, csv::Error> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    collect_grid(reader)
}

fn collect_grid<R: Read>(mut reader: csv::Reader<R>) -> Result<RawGrid, csv::Error> {
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(parse_field).collect());
    }
    Ok(RawGrid::new(rows))
}

/// Types a CSV field: blank → empty, numeric → number, anything else →
/// text. Mirrors how spreadsheet readers materialize typed cells.
fn parse_field(field: &str) -> Cell {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Cell::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(n) => Cell::Number(n),
        Err(_) => Cell::Text(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv_types_cells() {
        let data = b"Arrival Patterns,,\nTime,Sunday,Monday\n07:00,0,12\n07:30,,11.5\n";
        let grid = read_csv(&data[..]).unwrap();

        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.rows()[1][0], Cell::Text("Time".into()));
        assert_eq!(grid.rows()[2][0], Cell::Text("07:00".into()));
        assert_eq!(grid.rows()[2][2], Cell::Number(12.0));
        assert_eq!(grid.rows()[3][1], Cell::Empty);
        assert_eq!(grid.rows()[3][2], Cell::Number(11.5));
    }

    #[test]
    fn test_read_csv_ragged_rows() {
        let data = b"a,b,c\nd\n";
        let grid = read_csv(&data[..]).unwrap();
        assert_eq!(grid.rows()[0].len(), 3);
        assert_eq!(grid.rows()[1].len(), 1);
    }
}
