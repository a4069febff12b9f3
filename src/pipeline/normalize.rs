//! Table normalizer: wide day-columns → long (day, slot, count) records.
//!
//! Every data row crossed with every recognized day column yields one
//! record. Cell problems are recovered locally:
//!
//! - A row whose `Time` cell does not parse contributes nothing — it is
//!   logged and dropped, since a count without a slot is meaningless.
//! - A day cell that is blank or non-numeric coerces to 0, so every
//!   (day, slot) pair present in the table yields exactly one record.

use crate::error::AnalysisError;
use crate::models::{ArrivalRecord, Cell, DataTable, Day, SlotTime};

/// Melts the located table into the long-form arrival relation.
pub fn normalize(table: &DataTable) -> Result<Vec<ArrivalRecord>, AnalysisError> {
    let time_col = table
        .column_index("Time")
        .ok_or(AnalysisError::MissingTimeColumn)?;

    let day_columns: Vec<(Day, usize)> = table
        .header
        .iter()
        .enumerate()
        .filter_map(|(index, label)| Day::from_label(label).map(|day| (day, index)))
        .collect();

    let mut records = Vec::with_capacity(table.rows.len() * day_columns.len());
    for row in &table.rows {
        let time_text = row
            .get(time_col)
            .map(Cell::to_string)
            .unwrap_or_default();
        let Some(slot) = SlotTime::parse(&time_text) else {
            log::warn!("dropping row with unparsable time cell {time_text:?}");
            continue;
        };

        for &(day, column) in &day_columns {
            let count = row.get(column).map(cell_count).unwrap_or(0.0);
            records.push(ArrivalRecord::new(day, slot, count));
        }
    }

    Ok(records)
}

/// Coerces a day cell to a non-negative count. Blanks and non-numeric
/// text become 0 rather than failing the run.
fn cell_count(cell: &Cell) -> f64 {
    cell.as_number().map(|n| n.max(0.0)).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven_day_header() -> Vec<String> {
        let mut header = vec!["Time".to_string()];
        header.extend(Day::ALL.iter().map(|d| d.label().to_string()));
        header
    }

    fn table(rows: Vec<Vec<Cell>>) -> DataTable {
        DataTable {
            header: seven_day_header(),
            rows,
        }
    }

    #[test]
    fn test_melts_every_day_column() {
        let t = table(vec![
            vec![
                Cell::from("07:00"),
                Cell::from(1.0),
                Cell::from(2.0),
                Cell::from(3.0),
                Cell::from(4.0),
                Cell::from(5.0),
                Cell::from(6.0),
                Cell::from(7.0),
            ],
        ]);
        let records = normalize(&t).unwrap();

        assert_eq!(records.len(), 7);
        let monday = records.iter().find(|r| r.day == Day::Monday).unwrap();
        assert_eq!(monday.slot, SlotTime::hm(7, 0));
        assert_eq!(monday.count, 2.0);
        let saturday = records.iter().find(|r| r.day == Day::Saturday).unwrap();
        assert_eq!(saturday.count, 7.0);
    }

    #[test]
    fn test_unparsable_time_drops_row() {
        let t = table(vec![
            vec![Cell::from("not a time"); 8],
            {
                let mut row = vec![Cell::from("08:00")];
                row.extend(std::iter::repeat(Cell::from(2.0)).take(7));
                row
            },
        ]);
        let records = normalize(&t).unwrap();
        assert_eq!(records.len(), 7);
        assert!(records.iter().all(|r| r.slot == SlotTime::hm(8, 0)));
    }

    #[test]
    fn test_bad_counts_coerce_to_zero() {
        let t = table(vec![vec![
            Cell::from("07:00"),
            Cell::Empty,
            Cell::from("closed"),
            Cell::from(" 4 "),
            Cell::from(-3.0), // counts are non-negative; clamp
            Cell::from(5.0),
            Cell::Empty,
            Cell::Empty,
        ]]);
        let records = normalize(&t).unwrap();

        let count_for = |day: Day| records.iter().find(|r| r.day == day).unwrap().count;
        assert_eq!(count_for(Day::Sunday), 0.0);
        assert_eq!(count_for(Day::Monday), 0.0);
        assert_eq!(count_for(Day::Tuesday), 4.0);
        assert_eq!(count_for(Day::Wednesday), 0.0);
        assert_eq!(count_for(Day::Thursday), 5.0);
    }

    #[test]
    fn test_short_rows_fill_with_zero() {
        let t = table(vec![vec![Cell::from("07:00"), Cell::from(9.0)]]);
        let records = normalize(&t).unwrap();
        assert_eq!(records.len(), 7);
        assert_eq!(
            records.iter().find(|r| r.day == Day::Sunday).unwrap().count,
            9.0
        );
        assert_eq!(
            records.iter().find(|r| r.day == Day::Friday).unwrap().count,
            0.0
        );
    }

    #[test]
    fn test_missing_time_column() {
        let t = DataTable {
            header: vec!["Sunday".into(), "Monday".into()],
            rows: Vec::new(),
        };
        assert!(matches!(
            normalize(&t),
            Err(AnalysisError::MissingTimeColumn)
        ));
    }
}
