//! Attendance orchestration: check-in, check-out, and administrative
//! absences.

use crate::shift::{
    domain::{AttendanceError, AttendanceRecord, AttendanceRecordId, SignaturePayload},
    error::RepositoryError,
    ports::AttendanceRepository,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for attendance operations.
#[derive(Debug, Error)]
pub enum AttendanceServiceError {
    /// The attendance record does not exist.
    #[error("attendance record not found: {0}")]
    RecordNotFound(AttendanceRecordId),

    /// The record refused the transition (wrong state or missing
    /// signature). The stored record is unchanged.
    #[error(transparent)]
    Transition(#[from] AttendanceError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for attendance service operations.
pub type AttendanceServiceResult<T> = Result<T, AttendanceServiceError>;

/// Drives per-date attendance records through their lifecycle.
#[derive(Clone)]
pub struct AttendanceService<R, C>
where
    R: AttendanceRepository,
    C: Clock + Send + Sync,
{
    attendance: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> AttendanceService<R, C>
where
    R: AttendanceRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new attendance service.
    #[must_use]
    pub const fn new(attendance: Arc<R>, clock: Arc<C>) -> Self {
        Self { attendance, clock }
    }

    /// Records the worker's arrival for one scheduled date.
    ///
    /// # Errors
    ///
    /// Returns [`AttendanceServiceError::Transition`] when the record is
    /// not Pending (for example a double check-in).
    pub async fn check_in(
        &self,
        record_id: AttendanceRecordId,
    ) -> AttendanceServiceResult<AttendanceRecord> {
        let mut record = self.load(record_id).await?;
        record.check_in(&*self.clock)?;
        self.attendance.update(&record).await?;
        tracing::debug!(%record_id, date = %record.date(), "worker checked in");
        Ok(record)
    }

    /// Records the worker's departure with the captured signature.
    ///
    /// # Errors
    ///
    /// Returns [`AttendanceServiceError::Transition`] when the record is
    /// not CheckedIn or the signature payload is empty.
    pub async fn check_out(
        &self,
        record_id: AttendanceRecordId,
        signature: SignaturePayload,
    ) -> AttendanceServiceResult<AttendanceRecord> {
        let mut record = self.load(record_id).await?;
        record.check_out(signature, &*self.clock)?;
        self.attendance.update(&record).await?;
        tracing::debug!(%record_id, date = %record.date(), "worker checked out");
        Ok(record)
    }

    /// Records an administrative absence for one scheduled date.
    ///
    /// # Errors
    ///
    /// Returns [`AttendanceServiceError::Transition`] when the record is
    /// not Pending.
    pub async fn mark_absent(
        &self,
        record_id: AttendanceRecordId,
    ) -> AttendanceServiceResult<AttendanceRecord> {
        let mut record = self.load(record_id).await?;
        record.mark_absent()?;
        self.attendance.update(&record).await?;
        tracing::debug!(%record_id, date = %record.date(), "worker marked absent");
        Ok(record)
    }

    async fn load(&self, record_id: AttendanceRecordId) -> AttendanceServiceResult<AttendanceRecord> {
        self.attendance
            .find_by_id(record_id)
            .await?
            .ok_or(AttendanceServiceError::RecordNotFound(record_id))
    }
}
