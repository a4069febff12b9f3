//! Volume adjustment and slot aggregation.
//!
//! Two pure record-to-record passes between normalization and selection:
//!
//! - **Period adjustment** divides every count by the configured number of
//!   reporting periods. A 4-week rollup report already holds the *sum*
//!   over its weeks, so dividing approximates the single-week average.
//! - **Hourly aggregation** re-buckets half-hour records onto floor-of-hour
//!   slots by summation. Half-hour mode passes records through unchanged.

use std::collections::BTreeMap;

use crate::models::{ArrivalRecord, Day, Granularity, SlotTime};

/// Rescales counts for a multi-period rollup. A divisor of 1 is the
/// identity.
pub fn adjust_for_period(records: Vec<ArrivalRecord>, period_divisor: u32) -> Vec<ArrivalRecord> {
    if period_divisor <= 1 {
        return records;
    }
    let divisor = f64::from(period_divisor);
    records
        .into_iter()
        .map(|r| ArrivalRecord::new(r.day, r.slot, r.count / divisor))
        .collect()
}

/// Re-buckets records to the requested granularity.
///
/// Hourly mode sums all records sharing (day, floor-of-hour) into one
/// record keyed by the floor-hour slot; the total volume is conserved.
pub fn aggregate(records: Vec<ArrivalRecord>, granularity: Granularity) -> Vec<ArrivalRecord> {
    match granularity {
        Granularity::HalfHour => records,
        Granularity::Hour => {
            let mut buckets: BTreeMap<(Day, SlotTime), f64> = BTreeMap::new();
            for r in records {
                *buckets.entry((r.day, r.slot.floor_hour())).or_insert(0.0) += r.count;
            }
            buckets
                .into_iter()
                .map(|((day, slot), count)| ArrivalRecord::new(day, slot, count))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(day: Day, hour: u16, minute: u16, count: f64) -> ArrivalRecord {
        ArrivalRecord::new(day, SlotTime::hm(hour, minute), count)
    }

    #[test]
    fn test_divisor_one_is_identity() {
        let records = vec![rec(Day::Monday, 7, 0, 12.0), rec(Day::Monday, 7, 30, 3.0)];
        assert_eq!(adjust_for_period(records.clone(), 1), records);
    }

    #[test]
    fn test_four_week_rollup_divides() {
        let adjusted = adjust_for_period(vec![rec(Day::Monday, 7, 0, 42.0)], 4);
        assert_eq!(adjusted[0].count, 10.5);
    }

    #[test]
    fn test_half_hour_mode_is_identity() {
        let records = vec![rec(Day::Monday, 7, 0, 12.0), rec(Day::Monday, 7, 30, 3.0)];
        assert_eq!(aggregate(records.clone(), Granularity::HalfHour), records);
    }

    #[test]
    fn test_hourly_sums_half_hours() {
        let records = vec![
            rec(Day::Monday, 7, 0, 12.0),
            rec(Day::Monday, 7, 30, 11.0),
            rec(Day::Monday, 8, 0, 4.0),
        ];
        let hourly = aggregate(records, Granularity::Hour);

        assert_eq!(hourly.len(), 2);
        assert_eq!(hourly[0], rec(Day::Monday, 7, 0, 23.0));
        assert_eq!(hourly[1], rec(Day::Monday, 8, 0, 4.0));
    }

    #[test]
    fn test_hourly_keeps_days_separate() {
        let records = vec![
            rec(Day::Monday, 7, 0, 5.0),
            rec(Day::Tuesday, 7, 30, 6.0),
        ];
        let hourly = aggregate(records, Granularity::Hour);
        assert_eq!(hourly.len(), 2);
        assert_eq!(hourly[0].day, Day::Monday);
        assert_eq!(hourly[1].day, Day::Tuesday);
        assert_eq!(hourly[1].slot, SlotTime::hm(7, 0));
    }

    #[test]
    fn test_aggregation_conserves_volume() {
        let records: Vec<_> = (0u16..48)
            .map(|i| rec(Day::Friday, i / 2, (i % 2) * 30, f64::from(i)))
            .collect();
        let before: f64 = records.iter().map(|r| r.count).sum();
        let hourly = aggregate(records, Granularity::Hour);
        let after: f64 = hourly.iter().map(|r| r.count).sum();
        assert!((before - after).abs() < 1e-9);
    }
}
