//! Interval merger: contiguous peak slots → shift blocks.
//!
//! Two selected slots belong to the same block when their start times are
//! exactly one granularity step apart. Each block's end is the last merged
//! slot's start plus one step, and its peak is the largest adjusted count
//! among its members.

use crate::models::{ArrivalRecord, Day, Granularity, ShiftBlock};

/// Merges one day's selected slots, which must be sorted ascending by
/// slot, into blocks in increasing start order.
pub fn merge_day(slots: &[ArrivalRecord], granularity: Granularity) -> Vec<ShiftBlock> {
    let step = granularity.step_minutes();
    let mut blocks = Vec::new();

    let mut iter = slots.iter();
    let Some(first) = iter.next() else {
        return blocks;
    };
    let day = first.day;
    let mut start = first.slot;
    let mut last = first.slot;
    let mut peak = first.count;

    for r in iter {
        if r.slot.minutes() == last.minutes() + step {
            last = r.slot;
            peak = peak.max(r.count);
        } else {
            blocks.push(ShiftBlock::new(day, start, last.plus_minutes(step), peak));
            start = r.slot;
            last = r.slot;
            peak = r.count;
        }
    }
    blocks.push(ShiftBlock::new(day, start, last.plus_minutes(step), peak));

    blocks
}

/// Merges selected slots for the whole week, grouped by day in display
/// order. Blocks within a day never overlap and ascend by start time.
pub fn merge_week(peaks: &[ArrivalRecord], granularity: Granularity) -> Vec<ShiftBlock> {
    let mut blocks = Vec::new();
    for day in Day::ALL {
        let mut slots: Vec<ArrivalRecord> =
            peaks.iter().filter(|r| r.day == day).copied().collect();
        slots.sort_by(|a, b| a.slot.cmp(&b.slot));
        blocks.extend(merge_day(&slots, granularity));
    }
    blocks
}
