//! Long-form arrival records.

use serde::{Deserialize, Serialize};

use super::time::{Day, SlotTime};

/// One (day, time slot, count) element of the long-form arrival relation.
///
/// The same shape flows through every pipeline stage: the normalizer emits
/// raw counts, the period adjuster rescales them, and hourly aggregation
/// re-buckets them onto floor-of-hour slots. Counts are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrivalRecord {
    /// Day of week.
    pub day: Day,
    /// Slot start time.
    pub slot: SlotTime,
    /// Arrival count for this slot (raw or adjusted, depending on stage).
    pub count: f64,
}

impl ArrivalRecord {
    /// Creates a record.
    pub fn new(day: Day, slot: SlotTime, count: f64) -> Self {
        Self { day, slot, count }
    }
}
