//! Withdrawal reasons and the append-only withdrawal audit log.

use super::{AssignmentId, JobId, WithdrawalDomainError, WithdrawalEntryId, WorkerId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, non-empty withdrawal reason.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WithdrawalReason(String);

impl WithdrawalReason {
    /// Creates a validated withdrawal reason.
    ///
    /// # Errors
    ///
    /// Returns [`WithdrawalDomainError::EmptyReason`] when the reason is
    /// blank after trimming.
    pub fn new(reason: impl Into<String>) -> Result<Self, WithdrawalDomainError> {
        let trimmed = reason.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(WithdrawalDomainError::EmptyReason);
        }
        Ok(Self(trimmed))
    }

    /// Returns the reason as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WithdrawalReason {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for WithdrawalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry in the append-only withdrawal audit log.
///
/// Entries are never mutated or deleted; they survive reactivation of
/// the withdrawn assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalHistoryEntry {
    id: WithdrawalEntryId,
    assignment_id: AssignmentId,
    job_id: JobId,
    worker_id: WorkerId,
    reason: WithdrawalReason,
    withdrawn_at: DateTime<Utc>,
}

impl WithdrawalHistoryEntry {
    /// Creates an audit entry for a withdrawal happening now.
    #[must_use]
    pub fn new(
        assignment_id: AssignmentId,
        job_id: JobId,
        worker_id: WorkerId,
        reason: WithdrawalReason,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: WithdrawalEntryId::new(),
            assignment_id,
            job_id,
            worker_id,
            reason,
            withdrawn_at: clock.utc(),
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> WithdrawalEntryId {
        self.id
    }

    /// Returns the withdrawn assignment.
    #[must_use]
    pub const fn assignment_id(&self) -> AssignmentId {
        self.assignment_id
    }

    /// Returns the job the worker withdrew from.
    #[must_use]
    pub const fn job_id(&self) -> JobId {
        self.job_id
    }

    /// Returns the withdrawing worker.
    #[must_use]
    pub const fn worker_id(&self) -> WorkerId {
        self.worker_id
    }

    /// Returns the withdrawal reason.
    #[must_use]
    pub const fn reason(&self) -> &WithdrawalReason {
        &self.reason
    }

    /// Returns the withdrawal timestamp.
    #[must_use]
    pub const fn withdrawn_at(&self) -> DateTime<Utc> {
        self.withdrawn_at
    }
}
