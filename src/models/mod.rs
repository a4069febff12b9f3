//! Arrival-analysis domain models.
//!
//! Read-only, single-run artifacts: everything here is derived from one
//! uploaded report and discarded once its schedule is produced.
//!
//! # Pipeline shapes
//!
//! | Type | Produced by | Consumed by |
//! |------|-------------|-------------|
//! | `RawGrid` | host / CSV loader | grid locator |
//! | `DataTable` | grid locator | normalizer |
//! | `ArrivalRecord` | normalizer | adjust / aggregate / select |
//! | `ShiftBlock` | interval merger | schedule report |

mod block;
mod grid;
mod record;
mod time;

pub use block::ShiftBlock;
pub use grid::{Cell, DataTable, RawGrid};
pub use record::ArrivalRecord;
pub use time::{Day, Granularity, SlotTime};
