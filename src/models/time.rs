//! Day-of-week and time-of-day primitives.
//!
//! Arrival reports address slots by wall-clock time within a named day,
//! never by absolute date, so the time model is deliberately small:
//! a seven-value day enum in report display order and a minutes-since-
//! midnight slot time.
//!
//! # Granularity
//! Raw reports carry 30-minute slots. Hourly aggregation re-buckets them
//! onto floor-of-hour timestamps; [`Granularity::step_minutes`] is the
//! single source of truth for the slot width used by aggregation and by
//! contiguity checks when merging.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of week, ordered Sunday → Saturday as the reports print them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Day {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// All days in report display order.
    pub const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// The column label this day carries in a report header.
    pub fn label(&self) -> &'static str {
        match self {
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }

    /// Parses a header column label (whitespace-trimmed exact match).
    pub fn from_label(label: &str) -> Option<Day> {
        let label = label.trim();
        Day::ALL.iter().copied().find(|d| d.label() == label)
    }

    /// Whether this is a Monday–Friday weekday.
    pub fn is_weekday(&self) -> bool {
        !matches!(self, Day::Sunday | Day::Saturday)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A time of day, stored as minutes since midnight.
///
/// Slot starts are half-hour aligned in raw reports and hour aligned after
/// aggregation; block *ends* may reach `24:00` (the minute after the last
/// slot of the day), which this type represents and displays.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SlotTime {
    minutes: u16,
}

impl SlotTime {
    /// Creates a slot time from an hour and minute.
    pub fn hm(hour: u16, minute: u16) -> Self {
        Self {
            minutes: hour * 60 + minute,
        }
    }

    /// Parses an `"HH:MM"` 24-hour string (a trailing `":SS"` is tolerated,
    /// since spreadsheet exports sometimes stringify times with seconds).
    ///
    /// Returns `None` for anything that is not a valid time of day.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.trim().splitn(3, ':');
        let hour: u16 = parts.next()?.trim().parse().ok()?;
        let minute: u16 = parts.next()?.trim().parse().ok()?;
        if let Some(seconds) = parts.next() {
            let _: u8 = seconds.trim().parse().ok()?;
        }
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self::hm(hour, minute))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(&self) -> u16 {
        self.minutes
    }

    /// Hour component (0–24).
    #[inline]
    pub fn hour(&self) -> u16 {
        self.minutes / 60
    }

    /// Minute component within the hour.
    #[inline]
    pub fn minute(&self) -> u16 {
        self.minutes % 60
    }

    /// Whether this time falls in the morning (hour < 12).
    #[inline]
    pub fn is_am(&self) -> bool {
        self.hour() < 12
    }

    /// This time truncated to the start of its hour.
    pub fn floor_hour(&self) -> Self {
        Self {
            minutes: self.minutes - self.minutes % 60,
        }
    }

    /// This time advanced by `step` minutes. `23:30 + 30` yields `24:00`.
    pub fn plus_minutes(&self, step: u16) -> Self {
        Self {
            minutes: self.minutes + step,
        }
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Slot width of the records flowing through the pipeline.
///
/// Determines both how half-hour records are re-bucketed and what
/// "temporally contiguous" means when merging peaks into blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    /// 30-minute slots, as the report delivers them.
    #[default]
    HalfHour,
    /// 60-minute slots, summed from the half-hour raw data.
    Hour,
}

impl Granularity {
    /// Width of one slot in minutes.
    #[inline]
    pub fn step_minutes(&self) -> u16 {
        match self {
            Granularity::HalfHour => 30,
            Granularity::Hour => 60,
        }
    }
}
