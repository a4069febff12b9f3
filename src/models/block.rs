//! Merged staffing blocks.

use serde::{Deserialize, Serialize};

use super::time::{Day, SlotTime};

/// A maximal run of contiguous peak slots, presented as one recommended
/// staffing window.
///
/// Half-open interval: `start` is the first slot's start, `end` is the
/// last slot's start plus one slot width, so `end > start` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShiftBlock {
    /// Day of week.
    pub day: Day,
    /// Window start (inclusive).
    pub start: SlotTime,
    /// Window end (exclusive).
    pub end: SlotTime,
    /// Largest adjusted count among the merged slots.
    pub peak: f64,
}

impl ShiftBlock {
    /// Creates a block.
    pub fn new(day: Day, start: SlotTime, end: SlotTime, peak: f64) -> Self {
        Self {
            day,
            start,
            end,
            peak,
        }
    }

    /// Window length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// Peak count rounded to the nearest whole donor, for display.
    #[inline]
    pub fn peak_magnitude(&self) -> i64 {
        self.peak.round() as i64
    }
}
