//! Per-date attendance records and their state machine.

use super::{AttendanceError, AttendanceRecordId, JobId, WorkerId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attendance lifecycle status for one scheduled date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The date has not started.
    Pending,
    /// The worker has checked in.
    CheckedIn,
    /// The worker checked out with a captured signature.
    Completed,
    /// The worker missed the date. Terminal, set administratively.
    Absent,
}

impl AttendanceStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::CheckedIn => "checked_in",
            Self::Completed => "completed",
            Self::Absent => "absent",
        }
    }

    /// Returns `true` for states no transition leaves.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Absent)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attendance action names, used in transition errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceAction {
    /// The worker starting the date.
    CheckIn,
    /// The worker finishing the date.
    CheckOut,
    /// An administrator recording an absence.
    MarkAbsent,
}

impl fmt::Display for AttendanceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CheckIn => "check in",
            Self::CheckOut => "check out",
            Self::MarkAbsent => "mark absent",
        };
        f.write_str(name)
    }
}

/// Opaque signature payload captured by an external collaborator.
///
/// The domain never interprets the bytes; it only refuses empty
/// payloads at check-out time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignaturePayload(Vec<u8>);

impl SignaturePayload {
    /// Wraps captured signature bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns `true` when no signature was captured.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Presence tracking for one (job, worker, scheduled date) triple.
///
/// The record moves Pending → CheckedIn → Completed through
/// [`check_in`](Self::check_in) and [`check_out`](Self::check_out), or
/// Pending → Absent administratively. Completed and Absent are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    id: AttendanceRecordId,
    job_id: JobId,
    worker_id: WorkerId,
    date: NaiveDate,
    status: AttendanceStatus,
    check_in_at: Option<DateTime<Utc>>,
    check_out_at: Option<DateTime<Utc>>,
    signature: Option<SignaturePayload>,
    signed_at: Option<DateTime<Utc>>,
}

impl AttendanceRecord {
    /// Creates a pending record for one scheduled date.
    #[must_use]
    pub fn new(job_id: JobId, worker_id: WorkerId, date: NaiveDate) -> Self {
        Self {
            id: AttendanceRecordId::new(),
            job_id,
            worker_id,
            date,
            status: AttendanceStatus::Pending,
            check_in_at: None,
            check_out_at: None,
            signature: None,
            signed_at: None,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> AttendanceRecordId {
        self.id
    }

    /// Returns the job the record belongs to.
    #[must_use]
    pub const fn job_id(&self) -> JobId {
        self.job_id
    }

    /// Returns the worker the record belongs to.
    #[must_use]
    pub const fn worker_id(&self) -> WorkerId {
        self.worker_id
    }

    /// Returns the scheduled date the record tracks.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the attendance status.
    #[must_use]
    pub const fn status(&self) -> AttendanceStatus {
        self.status
    }

    /// Returns the check-in timestamp, if checked in.
    #[must_use]
    pub const fn check_in_at(&self) -> Option<DateTime<Utc>> {
        self.check_in_at
    }

    /// Returns the check-out timestamp, if completed.
    #[must_use]
    pub const fn check_out_at(&self) -> Option<DateTime<Utc>> {
        self.check_out_at
    }

    /// Returns the captured signature, if completed.
    #[must_use]
    pub const fn signature(&self) -> Option<&SignaturePayload> {
        self.signature.as_ref()
    }

    /// Returns the signature capture timestamp, if completed.
    #[must_use]
    pub const fn signed_at(&self) -> Option<DateTime<Utc>> {
        self.signed_at
    }

    /// Records the worker's arrival.
    ///
    /// # Errors
    ///
    /// Returns [`AttendanceError::InvalidTransition`] when the record is
    /// not Pending (for example a double check-in). The record is left
    /// untouched on failure.
    pub fn check_in(&mut self, clock: &impl Clock) -> Result<(), AttendanceError> {
        if self.status != AttendanceStatus::Pending {
            return Err(self.invalid_transition(AttendanceAction::CheckIn));
        }
        self.check_in_at = Some(clock.utc());
        self.status = AttendanceStatus::CheckedIn;
        Ok(())
    }

    /// Records the worker's departure with a captured signature.
    ///
    /// # Errors
    ///
    /// Returns [`AttendanceError::InvalidTransition`] when the record is
    /// not CheckedIn, and [`AttendanceError::MissingSignature`] when the
    /// payload is empty. The record is left untouched on failure.
    pub fn check_out(
        &mut self,
        signature: SignaturePayload,
        clock: &impl Clock,
    ) -> Result<(), AttendanceError> {
        if self.status != AttendanceStatus::CheckedIn {
            return Err(self.invalid_transition(AttendanceAction::CheckOut));
        }
        if signature.is_empty() {
            return Err(AttendanceError::MissingSignature(self.id));
        }
        let timestamp = clock.utc();
        self.check_out_at = Some(timestamp);
        self.signed_at = Some(timestamp);
        self.signature = Some(signature);
        self.status = AttendanceStatus::Completed;
        Ok(())
    }

    /// Records an administrative absence.
    ///
    /// # Errors
    ///
    /// Returns [`AttendanceError::InvalidTransition`] when the record is
    /// not Pending.
    pub fn mark_absent(&mut self) -> Result<(), AttendanceError> {
        if self.status != AttendanceStatus::Pending {
            return Err(self.invalid_transition(AttendanceAction::MarkAbsent));
        }
        self.status = AttendanceStatus::Absent;
        Ok(())
    }

    const fn invalid_transition(&self, action: AttendanceAction) -> AttendanceError {
        AttendanceError::InvalidTransition {
            record_id: self.id,
            from: self.status,
            action,
        }
    }
}
