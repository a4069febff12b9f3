//! Week schedule report.
//!
//! The sole surface handed to a presentation layer: seven days in fixed
//! Sunday → Saturday order, each carrying its merged blocks and a
//! ready-made coverage line, plus the copy-paste summary text the
//! analysts send to their teams.
//!
//! # Formats
//!
//! - Block: `"{start}-{end} (Peak: {magnitude})"`, magnitude rounded to
//!   whole donors.
//! - Day line: blocks joined with `", "`; a day with no blocks renders the
//!   fixed `"No coverage needed"` sentinel.

use serde::{Deserialize, Serialize};

use crate::models::{Day, ShiftBlock};

/// Line shown for a day with no recommended coverage.
pub const NO_COVERAGE: &str = "No coverage needed";

/// Separator between blocks on one day's line.
const BLOCK_SEPARATOR: &str = ", ";

/// One day's merged blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Day of week.
    pub day: Day,
    /// Blocks in increasing start order; empty for uncovered or closed
    /// days (the report does not distinguish the two).
    pub blocks: Vec<ShiftBlock>,
}

impl DaySchedule {
    /// The display line for this day.
    pub fn coverage_line(&self) -> String {
        if self.blocks.is_empty() {
            return NO_COVERAGE.to_string();
        }
        self.blocks
            .iter()
            .map(format_block)
            .collect::<Vec<_>>()
            .join(BLOCK_SEPARATOR)
    }
}

/// The full week's schedule in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekSchedule {
    /// Exactly seven entries, Sunday first.
    pub days: Vec<DaySchedule>,
}

impl WeekSchedule {
    /// Distributes merged blocks onto the fixed seven-day structure.
    pub fn from_blocks(blocks: Vec<ShiftBlock>) -> Self {
        let mut days: Vec<DaySchedule> = Day::ALL
            .iter()
            .map(|&day| DaySchedule {
                day,
                blocks: Vec::new(),
            })
            .collect();
        for block in blocks {
            days[block.day as usize].blocks.push(block);
        }
        Self { days }
    }

    /// One day's schedule.
    pub fn day(&self, day: Day) -> &DaySchedule {
        &self.days[day as usize]
    }

    /// Whether no day has any coverage.
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|d| d.blocks.is_empty())
    }

    /// Copy-paste text for email or chat: a heading plus one line per day
    /// with coverage. Days without blocks are omitted.
    pub fn summary_text(&self) -> String {
        let mut text = String::from("Power Hour Schedule:\n");
        for day in &self.days {
            if !day.blocks.is_empty() {
                text.push_str(&format!("{}: {}\n", day.day, day.coverage_line()));
            }
        }
        text
    }
}

fn format_block(block: &ShiftBlock) -> String {
    format!(
        "{}-{} (Peak: {})",
        block.start,
        block.end,
        block.peak_magnitude()
    )
}
