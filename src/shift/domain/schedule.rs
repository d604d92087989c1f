//! Job schedules: the dates a job runs on and its daily time window.

use super::{ScheduleError, TimeWindow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The scheduled dates of a job together with the single daily time
/// window shared by all of them.
///
/// Dates are stored sorted and deduplicated. Legacy single-date jobs are
/// normalized into a one-element list via [`JobSchedule::single`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSchedule {
    dates: Vec<NaiveDate>,
    window: TimeWindow,
}

impl JobSchedule {
    /// Creates a schedule from a list of calendar dates and a daily
    /// window.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::EmptySchedule`] when no dates are given.
    pub fn new(
        dates: impl IntoIterator<Item = NaiveDate>,
        window: TimeWindow,
    ) -> Result<Self, ScheduleError> {
        let mut dates: Vec<NaiveDate> = dates.into_iter().collect();
        dates.sort_unstable();
        dates.dedup();
        if dates.is_empty() {
            return Err(ScheduleError::EmptySchedule);
        }
        Ok(Self { dates, window })
    }

    /// Normalizes a legacy single-date job into a one-element schedule.
    #[must_use]
    pub fn single(date: NaiveDate, window: TimeWindow) -> Self {
        Self {
            dates: vec![date],
            window,
        }
    }

    /// Returns the sorted, deduplicated scheduled dates.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns the daily time window.
    #[must_use]
    pub const fn window(&self) -> TimeWindow {
        self.window
    }

    /// Returns the number of scheduled dates.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` when the schedule has no dates.
    ///
    /// Never true for a schedule built through the validated
    /// constructors; present to satisfy the `len`/`is_empty` pairing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the dates present in both schedules.
    ///
    /// Dates are discrete: this is exact calendar-date equality, not
    /// range overlap.
    #[must_use]
    pub fn shared_dates(&self, other: &Self) -> Vec<NaiveDate> {
        self.dates
            .iter()
            .filter(|date| other.dates.binary_search(date).is_ok())
            .copied()
            .collect()
    }
}
