//! Peak selection.
//!
//! One entry point, [`select_peaks`], switched on the run's [`Strategy`]
//! tag. All strategies share three conventions:
//!
//! - Selection is evaluated per day; no strategy compares slots across
//!   days.
//! - A day whose total adjusted volume is exactly 0 is *closed* and
//!   contributes nothing under the per-day-limited strategies, whatever
//!   their limits say.
//! - A selected slot whose adjusted count rounds to 0 is dropped before
//!   merging, so no block ever advertises a peak of zero donors.
//!
//! The percentile strategy derives its threshold from the data and
//! surfaces the derived value for display.

use std::collections::BTreeMap;

use crate::config::Strategy;
use crate::models::{ArrivalRecord, Day};

/// Output of peak selection.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Selected slots across all days, sorted by (day, slot).
    pub peaks: Vec<ArrivalRecord>,
    /// The data-derived trigger value, when the strategy computed one.
    pub computed_threshold: Option<f64>,
}

/// Classifies slots as peaks under the given strategy.
///
/// `records` is the full adjusted (and possibly hourly-aggregated)
/// relation; the strategy parameters are assumed already validated.
pub fn select_peaks(records: &[ArrivalRecord], strategy: &Strategy) -> Selection {
    let (mut peaks, computed_threshold) = match strategy {
        Strategy::FixedThreshold { threshold } => (threshold_filter(records, *threshold), None),
        Strategy::Percentile { percentile } => {
            let threshold = auto_threshold(records, *percentile);
            (threshold_filter(records, threshold), Some(threshold))
        }
        Strategy::TopPerDay { weekday, saturday } => {
            (top_per_day(records, *weekday, *saturday), None)
        }
        Strategy::AmPmSplit => (am_pm_split(records), None),
    };

    // A "peak" that would display as 0 donors is noise from rounding.
    peaks.retain(|r| r.count.round() >= 1.0);
    peaks.sort_by(|a, b| a.day.cmp(&b.day).then(a.slot.cmp(&b.slot)));

    Selection {
        peaks,
        computed_threshold,
    }
}

/// Every slot meeting the trigger, with no per-day limit.
fn threshold_filter(records: &[ArrivalRecord], threshold: f64) -> Vec<ArrivalRecord> {
    records
        .iter()
        .filter(|r| r.count >= threshold)
        .copied()
        .collect()
}

/// Data-derived trigger: the p-th percentile of all adjusted counts,
/// clamped below at 1 so quiet reports never trigger on empty slots.
fn auto_threshold(records: &[ArrivalRecord], percentile: f64) -> f64 {
    let mut counts: Vec<f64> = records.iter().map(|r| r.count).collect();
    counts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    quantile(&counts, percentile / 100.0).max(1.0)
}

/// Linear-interpolation quantile of a sorted sample (the estimator
/// spreadsheet tooling defaults to). Returns 0 for an empty sample.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let position = (n - 1) as f64 * q;
            let low = position.floor() as usize;
            let high = position.ceil() as usize;
            sorted[low] + (sorted[high] - sorted[low]) * (position - low as f64)
        }
    }
}

/// The N busiest slots of each open day, ties to the earlier slot.
/// Saturday uses its own limit.
fn top_per_day(records: &[ArrivalRecord], weekday: usize, saturday: usize) -> Vec<ArrivalRecord> {
    let mut peaks = Vec::new();
    for (day, mut slots) in by_day(records) {
        if is_closed(&slots) {
            continue;
        }
        let limit = if day == Day::Saturday { saturday } else { weekday };
        slots.sort_by(|a, b| {
            b.count
                .partial_cmp(&a.count)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.slot.cmp(&b.slot))
        });
        slots.truncate(limit);
        peaks.extend(slots);
    }
    peaks
}

/// Busiest AM slot plus busiest PM slot per open weekday; Saturday and
/// Sunday get the single busiest slot of the whole day.
fn am_pm_split(records: &[ArrivalRecord]) -> Vec<ArrivalRecord> {
    let mut peaks = Vec::new();
    for (day, slots) in by_day(records) {
        if is_closed(&slots) {
            continue;
        }
        if day.is_weekday() {
            peaks.extend(busiest(slots.iter().filter(|r| r.slot.is_am())));
            peaks.extend(busiest(slots.iter().filter(|r| !r.slot.is_am())));
        } else {
            peaks.extend(busiest(slots.iter()));
        }
    }
    peaks
}

/// Largest-count record; on ties the earliest slot wins because `slots`
/// iterates in slot order and only a strictly greater count replaces.
fn busiest<'a, I>(slots: I) -> Option<ArrivalRecord>
where
    I: Iterator<Item = &'a ArrivalRecord>,
{
    let mut best: Option<ArrivalRecord> = None;
    for r in slots {
        match best {
            Some(b) if r.count <= b.count => {}
            _ => best = Some(*r),
        }
    }
    best
}

/// Groups records by day, each day's slots sorted ascending by slot.
fn by_day(records: &[ArrivalRecord]) -> BTreeMap<Day, Vec<ArrivalRecord>> {
    let mut days: BTreeMap<Day, Vec<ArrivalRecord>> = BTreeMap::new();
    for r in records {
        days.entry(r.day).or_default().push(*r);
    }
    for slots in days.values_mut() {
        slots.sort_by(|a, b| a.slot.cmp(&b.slot));
    }
    days
}

/// A day with zero total volume is closed, even if a strategy would
/// otherwise pick one of its 0-count slots.
fn is_closed(slots: &[ArrivalRecord]) -> bool {
    slots.iter().map(|r| r.count).sum::<f64>() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotTime;

    fn rec(day: Day, hour: u16, minute: u16, count: f64) -> ArrivalRecord {
        ArrivalRecord::new(day, SlotTime::hm(hour, minute), count)
    }

    fn monday_sample() -> Vec<ArrivalRecord> {
        vec![
            rec(Day::Monday, 7, 0, 12.0),
            rec(Day::Monday, 7, 30, 11.0),
            rec(Day::Monday, 8, 0, 4.0),
            rec(Day::Monday, 14, 0, 9.0),
            rec(Day::Monday, 14, 30, 13.0),
        ]
    }

    #[test]
    fn test_fixed_threshold() {
        let selection = select_peaks(
            &monday_sample(),
            &Strategy::FixedThreshold { threshold: 10.0 },
        );
        let slots: Vec<_> = selection.peaks.iter().map(|r| r.slot).collect();
        assert_eq!(
            slots,
            vec![SlotTime::hm(7, 0), SlotTime::hm(7, 30), SlotTime::hm(14, 30)]
        );
        assert_eq!(selection.computed_threshold, None);
    }

    #[test]
    fn test_percentile_surfaces_threshold() {
        let selection = select_peaks(&monday_sample(), &Strategy::Percentile { percentile: 80.0 });
        let t = selection.computed_threshold.unwrap();
        assert!(t >= 1.0);
        assert!(selection.peaks.iter().all(|r| r.count >= t));
    }

    #[test]
    fn test_percentile_monotone_and_floored() {
        let records = monday_sample();
        let mut last = 0.0;
        for p in [10.0, 25.0, 50.0, 75.0, 90.0, 99.0] {
            let t = auto_threshold(&records, p);
            assert!(t >= 1.0);
            assert!(t >= last, "threshold decreased at p={p}");
            last = t;
        }
    }

    #[test]
    fn test_percentile_floor_on_quiet_data() {
        let quiet = vec![rec(Day::Monday, 7, 0, 0.2), rec(Day::Monday, 7, 30, 0.1)];
        assert_eq!(auto_threshold(&quiet, 90.0), 1.0);
    }

    #[test]
    fn test_quantile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, 0.5), 2.5);
        assert_eq!(quantile(&sorted, 0.0), 1.0);
        assert_eq!(quantile(&sorted, 1.0), 4.0);
    }

    #[test]
    fn test_top_per_day_bound() {
        let mut records = monday_sample();
        records.push(rec(Day::Saturday, 9, 0, 8.0));
        records.push(rec(Day::Saturday, 9, 30, 6.0));

        let selection = select_peaks(
            &records,
            &Strategy::TopPerDay {
                weekday: 2,
                saturday: 1,
            },
        );

        let monday: Vec<_> = selection
            .peaks
            .iter()
            .filter(|r| r.day == Day::Monday)
            .collect();
        assert_eq!(monday.len(), 2);
        assert!(monday.iter().any(|r| r.slot == SlotTime::hm(14, 30))); // 13
        assert!(monday.iter().any(|r| r.slot == SlotTime::hm(7, 0))); // 12

        let saturday: Vec<_> = selection
            .peaks
            .iter()
            .filter(|r| r.day == Day::Saturday)
            .collect();
        assert_eq!(saturday.len(), 1);
        assert_eq!(saturday[0].slot, SlotTime::hm(9, 0));
    }

    #[test]
    fn test_top_per_day_takes_all_when_fewer_exist() {
        let records = vec![rec(Day::Tuesday, 10, 0, 5.0)];
        let selection = select_peaks(
            &records,
            &Strategy::TopPerDay {
                weekday: 4,
                saturday: 1,
            },
        );
        assert_eq!(selection.peaks.len(), 1);
    }

    #[test]
    fn test_top_per_day_tie_goes_to_earlier_slot() {
        let records = vec![
            rec(Day::Monday, 9, 0, 7.0),
            rec(Day::Monday, 7, 0, 7.0),
            rec(Day::Monday, 8, 0, 7.0),
        ];
        let selection = select_peaks(
            &records,
            &Strategy::TopPerDay {
                weekday: 2,
                saturday: 1,
            },
        );
        let slots: Vec<_> = selection.peaks.iter().map(|r| r.slot).collect();
        assert_eq!(slots, vec![SlotTime::hm(7, 0), SlotTime::hm(8, 0)]);
    }

    #[test]
    fn test_am_pm_split_weekday() {
        let selection = select_peaks(&monday_sample(), &Strategy::AmPmSplit);
        let slots: Vec<_> = selection.peaks.iter().map(|r| r.slot).collect();
        // Best AM = 07:00 (12), best PM = 14:30 (13).
        assert_eq!(slots, vec![SlotTime::hm(7, 0), SlotTime::hm(14, 30)]);
    }

    #[test]
    fn test_am_pm_split_saturday_whole_day() {
        let records = vec![
            rec(Day::Saturday, 9, 0, 8.0),
            rec(Day::Saturday, 13, 0, 10.0),
        ];
        let selection = select_peaks(&records, &Strategy::AmPmSplit);
        assert_eq!(selection.peaks.len(), 1);
        assert_eq!(selection.peaks[0].slot, SlotTime::hm(13, 0));
    }

    #[test]
    fn test_am_pm_tie_goes_to_earlier_slot() {
        let records = vec![
            rec(Day::Wednesday, 8, 0, 6.0),
            rec(Day::Wednesday, 9, 0, 6.0),
        ];
        let selection = select_peaks(&records, &Strategy::AmPmSplit);
        assert_eq!(selection.peaks.len(), 1);
        assert_eq!(selection.peaks[0].slot, SlotTime::hm(8, 0));
    }

    #[test]
    fn test_closed_day_yields_nothing() {
        let closed = vec![
            rec(Day::Thursday, 7, 0, 0.0),
            rec(Day::Thursday, 7, 30, 0.0),
        ];
        for strategy in [
            Strategy::FixedThreshold { threshold: 1.0 },
            Strategy::Percentile { percentile: 50.0 },
            Strategy::TopPerDay {
                weekday: 3,
                saturday: 1,
            },
            Strategy::AmPmSplit,
        ] {
            let selection = select_peaks(&closed, &strategy);
            assert!(
                selection.peaks.is_empty(),
                "closed day selected under {strategy:?}"
            );
        }
    }

    #[test]
    fn test_rounds_to_zero_slots_are_dropped() {
        // Open day (nonzero volume) whose busiest slot still rounds to 0.
        let records = vec![
            rec(Day::Friday, 7, 0, 0.4),
            rec(Day::Friday, 7, 30, 0.2),
        ];
        let selection = select_peaks(
            &records,
            &Strategy::TopPerDay {
                weekday: 2,
                saturday: 1,
            },
        );
        assert!(selection.peaks.is_empty());
    }
}
