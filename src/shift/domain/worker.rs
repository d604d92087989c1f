//! Worker profiles: approval state and aggregate rating statistics.

use super::WorkerId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Administrative approval status of a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// The profile is awaiting administrative review.
    Pending,
    /// The worker may join jobs.
    Approved,
    /// The worker was rejected and may not join jobs.
    Rejected,
}

impl ApprovalStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Worker profile as seen by the booking flow.
///
/// The booking flow reads the approval status and maintains the
/// aggregate rating statistics; profile registration and review belong
/// to an out-of-scope administrative surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerProfile {
    id: WorkerId,
    name: String,
    approval_status: ApprovalStatus,
    average_rating: Option<f64>,
    completed_jobs: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WorkerProfile {
    /// Creates a profile awaiting approval.
    #[must_use]
    pub fn new(name: impl Into<String>, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: WorkerId::new(),
            name: name.into(),
            approval_status: ApprovalStatus::Pending,
            average_rating: None,
            completed_jobs: 0,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the worker identifier.
    #[must_use]
    pub const fn id(&self) -> WorkerId {
        self.id
    }

    /// Returns the worker's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the approval status.
    #[must_use]
    pub const fn approval_status(&self) -> ApprovalStatus {
        self.approval_status
    }

    /// Returns `true` when the worker may join jobs.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self.approval_status, ApprovalStatus::Approved)
    }

    /// Returns the running mean of the worker's assignment ratings.
    #[must_use]
    pub const fn average_rating(&self) -> Option<f64> {
        self.average_rating
    }

    /// Returns the number of assignments with completed attendance.
    #[must_use]
    pub const fn completed_jobs(&self) -> u32 {
        self.completed_jobs
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

    /// Approves the worker for booking.
    pub fn approve(&mut self, clock: &impl Clock) {
        self.approval_status = ApprovalStatus::Approved;
        self.touch(clock);
    }

    /// Rejects the worker.
    pub fn reject(&mut self, clock: &impl Clock) {
        self.approval_status = ApprovalStatus::Rejected;
        self.touch(clock);
    }

    /// Replaces the aggregate rating statistics.
    ///
    /// Called after every rating write with freshly recomputed values;
    /// the profile stores the aggregate, it does not derive it.
    pub fn record_rating_stats(
        &mut self,
        average_rating: Option<f64>,
        completed_jobs: u32,
        clock: &impl Clock,
    ) {
        self.average_rating = average_rating;
        self.completed_jobs = completed_jobs;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
