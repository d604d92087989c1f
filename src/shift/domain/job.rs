//! Job aggregate root and capacity state.

use super::{JobDomainError, JobId, JobSchedule};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Job capacity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityState {
    /// The job still needs workers and is visible for booking.
    Open,
    /// Enough workers are assigned; the job is no longer bookable.
    Assigned,
    /// Work on the job has started.
    InProgress,
    /// The job has finished.
    Completed,
    /// The job was cancelled by the posting company.
    Cancelled,
}

impl CapacityState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Assigned => "assigned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for CapacityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter object for creating a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    /// Job title shown to workers.
    pub title: String,
    /// Posting company name.
    pub company: String,
    /// Work location.
    pub location: String,
    /// Scheduled dates and daily time window.
    pub schedule: JobSchedule,
    /// Number of workers the job needs.
    pub required_workers: u32,
}

/// Job aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    id: JobId,
    title: String,
    company: String,
    location: String,
    schedule: JobSchedule,
    required_workers: u32,
    capacity_state: CapacityState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Job {
    /// Creates a new open job.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::EmptyTitle`] when the title is blank
    /// and [`JobDomainError::ZeroRequiredWorkers`] when no workers are
    /// required.
    pub fn new(data: NewJob, clock: &impl Clock) -> Result<Self, JobDomainError> {
        let title = data.title.trim().to_owned();
        if title.is_empty() {
            return Err(JobDomainError::EmptyTitle);
        }
        if data.required_workers == 0 {
            return Err(JobDomainError::ZeroRequiredWorkers);
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: JobId::new(),
            title,
            company: data.company,
            location: data.location,
            schedule: data.schedule,
            required_workers: data.required_workers,
            capacity_state: CapacityState::Open,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the job identifier.
    #[must_use]
    pub const fn id(&self) -> JobId {
        self.id
    }

    /// Returns the job title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the posting company name.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Returns the work location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the scheduled dates and time window.
    #[must_use]
    pub const fn schedule(&self) -> &JobSchedule {
        &self.schedule
    }

    /// Returns the number of workers the job needs.
    #[must_use]
    pub const fn required_workers(&self) -> u32 {
        self.required_workers
    }

    /// Returns the capacity state.
    #[must_use]
    pub const fn capacity_state(&self) -> CapacityState {
        self.capacity_state
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies the capacity rule for the given active-assignment count.
    ///
    /// An `Open` job with enough active assignments becomes `Assigned`;
    /// an `Assigned` job that dropped below its requirement reverts to
    /// `Open`. `InProgress`, `Completed`, and `Cancelled` are never
    /// downgraded. Idempotent: reapplying the same count leaves the
    /// state unchanged.
    pub fn recompute_capacity(&mut self, active_assignments: u32, clock: &impl Clock) -> CapacityState {
        let next = match self.capacity_state {
            CapacityState::Open if active_assignments >= self.required_workers => {
                CapacityState::Assigned
            }
            CapacityState::Assigned if active_assignments < self.required_workers => {
                CapacityState::Open
            }
            current => current,
        };
        if next != self.capacity_state {
            self.capacity_state = next;
            self.touch(clock);
        }
        next
    }

    /// Marks the job as in progress.
    ///
    /// Driven by the posting actor's own lifecycle, outside the booking
    /// flow; once set, capacity recomputation no longer touches the job.
    pub fn start_work(&mut self, clock: &impl Clock) {
        self.capacity_state = CapacityState::InProgress;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
