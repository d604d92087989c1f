//! Assignment aggregate root: the worker↔job relationship.

use super::{AssignmentDomainError, AssignmentId, JobId, WithdrawalReason, WorkerId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Assignment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// The assignment is awaiting confirmation.
    Pending,
    /// The worker is booked on the job.
    Confirmed,
    /// The worker finished the job.
    Completed,
    /// The worker never showed up.
    NoShow,
    /// The worker backed out before completion.
    Withdrawn,
}

impl AssignmentStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::NoShow => "no_show",
            Self::Withdrawn => "withdrawn",
        }
    }

    /// Returns `true` for statuses that occupy a capacity slot.
    ///
    /// Pending and Confirmed assignments count towards a job's capacity;
    /// Withdrawn and NoShow do not.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rating score on the 1–5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingScore(u8);

impl RatingScore {
    /// Creates a validated rating score.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidRatingScore`] when the
    /// value is outside 1–5.
    pub const fn new(value: u8) -> Result<Self, AssignmentDomainError> {
        if value < 1 || value > 5 {
            return Err(AssignmentDomainError::InvalidRatingScore(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for RatingScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A post-completion rating stored on the assignment.
///
/// Not a standalone entity: re-rating replaces the prior value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    score: RatingScore,
    feedback: String,
}

impl Rating {
    /// Creates a rating from a score and free-form feedback.
    #[must_use]
    pub fn new(score: RatingScore, feedback: impl Into<String>) -> Self {
        Self {
            score,
            feedback: feedback.into(),
        }
    }

    /// Returns the score.
    #[must_use]
    pub const fn score(&self) -> RatingScore {
        self.score
    }

    /// Returns the feedback text.
    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

/// Assignment aggregate root.
///
/// At most one logical assignment exists per (job, worker) pair across
/// its whole lifetime: a withdrawn assignment is reactivated rather than
/// duplicated, so rating and history keep a single identity. Assignments
/// are never hard-deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    id: AssignmentId,
    job_id: JobId,
    worker_id: WorkerId,
    status: AssignmentStatus,
    withdrawal_reason: Option<WithdrawalReason>,
    withdrawn_at: Option<DateTime<Utc>>,
    rating: Option<Rating>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Assignment {
    /// Creates a confirmed assignment for a worker joining a job.
    #[must_use]
    pub fn new(job_id: JobId, worker_id: WorkerId, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: AssignmentId::new(),
            job_id,
            worker_id,
            status: AssignmentStatus::Confirmed,
            withdrawal_reason: None,
            withdrawn_at: None,
            rating: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the assignment identifier.
    #[must_use]
    pub const fn id(&self) -> AssignmentId {
        self.id
    }

    /// Returns the job this assignment books the worker on.
    #[must_use]
    pub const fn job_id(&self) -> JobId {
        self.job_id
    }

    /// Returns the booked worker.
    #[must_use]
    pub const fn worker_id(&self) -> WorkerId {
        self.worker_id
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> AssignmentStatus {
        self.status
    }

    /// Returns `true` when the assignment occupies a capacity slot.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns the withdrawal reason, set only while withdrawn.
    #[must_use]
    pub const fn withdrawal_reason(&self) -> Option<&WithdrawalReason> {
        self.withdrawal_reason.as_ref()
    }

    /// Returns the withdrawal timestamp, set only while withdrawn.
    #[must_use]
    pub const fn withdrawn_at(&self) -> Option<DateTime<Utc>> {
        self.withdrawn_at
    }

    /// Returns the stored rating, if any.
    #[must_use]
    pub const fn rating(&self) -> Option<&Rating> {
        self.rating.as_ref()
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

    /// Withdraws the worker from the job.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::NotActive`] when the assignment
    /// is not Pending or Confirmed.
    pub fn withdraw(
        &mut self,
        reason: WithdrawalReason,
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        if !self.status.is_active() {
            return Err(AssignmentDomainError::NotActive {
                assignment_id: self.id,
                status: self.status,
            });
        }
        self.status = AssignmentStatus::Withdrawn;
        self.withdrawal_reason = Some(reason);
        self.withdrawn_at = Some(clock.utc());
        self.touch(clock);
        Ok(())
    }

    /// Reactivates a withdrawn assignment for a rejoining worker.
    ///
    /// Resets the status to Confirmed and clears the withdrawal fields.
    /// Any stored rating is kept: the assignment identity spans the
    /// whole worker↔job history.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::NotWithdrawn`] when the
    /// assignment is not in the Withdrawn state.
    pub fn reactivate(&mut self, clock: &impl Clock) -> Result<(), AssignmentDomainError> {
        if self.status != AssignmentStatus::Withdrawn {
            return Err(AssignmentDomainError::NotWithdrawn {
                assignment_id: self.id,
                status: self.status,
            });
        }
        self.status = AssignmentStatus::Confirmed;
        self.withdrawal_reason = None;
        self.withdrawn_at = None;
        self.touch(clock);
        Ok(())
    }

    /// Stores a rating on the assignment, replacing any prior one.
    pub fn set_rating(&mut self, rating: Rating, clock: &impl Clock) {
        self.rating = Some(rating);
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
