//! Daily time windows compared as minute-of-day values.

use super::ScheduleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minutes in a calendar day.
const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time expressed as minutes since midnight.
///
/// All shift times are local wall-clock values; the domain performs no
/// timezone handling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    /// Creates a validated minute-of-day value.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidMinuteOfDay`] when the value is
    /// 1440 or greater.
    pub const fn new(minutes: u16) -> Result<Self, ScheduleError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ScheduleError::InvalidMinuteOfDay(minutes));
        }
        Ok(Self(minutes))
    }

    /// Creates a minute-of-day value from an hour and minute pair.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidMinuteOfDay`] when the pair does
    /// not name a valid wall-clock time.
    pub const fn from_hm(hour: u16, minute: u16) -> Result<Self, ScheduleError> {
        if hour >= 24 || minute >= 60 {
            return Err(ScheduleError::InvalidMinuteOfDay(hour * 60 + minute));
        }
        Self::new(hour * 60 + minute)
    }

    /// Returns the underlying minute count.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// A same-day time window shared by every scheduled date of a job.
///
/// Windows are half-open: the start is inclusive and the end exclusive.
/// Cross-midnight shifts are not supported — the end time is always a
/// same-day value and a window only has extent when its end is
/// numerically greater than its start. Degenerate windows (end ≤ start)
/// are accepted as input but never overlap anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    start: MinuteOfDay,
    end: MinuteOfDay,
}

impl TimeWindow {
    /// Creates a time window from start and end times.
    #[must_use]
    pub const fn new(start: MinuteOfDay, end: MinuteOfDay) -> Self {
        Self { start, end }
    }

    /// Returns the inclusive start time.
    #[must_use]
    pub const fn start(self) -> MinuteOfDay {
        self.start
    }

    /// Returns the exclusive end time.
    #[must_use]
    pub const fn end(self) -> MinuteOfDay {
        self.end
    }

    /// Returns `true` when the window has no extent (end ≤ start).
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        self.end.value() <= self.start.value()
    }

    /// Returns `true` when two windows share at least one minute.
    ///
    /// Degenerate windows never overlap. Otherwise two windows overlap
    /// iff `self.start < other.end && other.start < self.end`.
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.start.value() < other.end.value() && other.start.value() < self.end.value()
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
