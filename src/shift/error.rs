//! Shared repository error type for the shift ports.

use crate::shift::domain::{AssignmentId, AttendanceRecordId, JobId, WorkerId};
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by repository implementations.
///
/// Uniqueness violations are typed rather than parsed out of a backend's
/// duplicate-key message, so the services never depend on any particular
/// store's error format.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// A job with the same identifier already exists.
    #[error("duplicate job identifier: {0}")]
    DuplicateJob(JobId),

    /// A worker profile with the same identifier already exists.
    #[error("duplicate worker identifier: {0}")]
    DuplicateWorker(WorkerId),

    /// An assignment already exists for the (job, worker) pair.
    ///
    /// The pair uniqueness constraint belongs to the store; this variant
    /// is how it surfaces to the services.
    #[error("worker {worker_id} already has an assignment on job {job_id}")]
    DuplicateAssignment {
        /// The job of the clashing assignment.
        job_id: JobId,
        /// The worker of the clashing assignment.
        worker_id: WorkerId,
    },

    /// An attendance record already exists for the (job, worker, date)
    /// triple.
    #[error("worker {worker_id} already has an attendance record for {date} on job {job_id}")]
    DuplicateAttendanceRecord {
        /// The job of the clashing record.
        job_id: JobId,
        /// The worker of the clashing record.
        worker_id: WorkerId,
        /// The scheduled date of the clashing record.
        date: NaiveDate,
    },

    /// The job was not found.
    #[error("job not found: {0}")]
    JobNotFound(JobId),

    /// The worker profile was not found.
    #[error("worker not found: {0}")]
    WorkerNotFound(WorkerId),

    /// The assignment was not found.
    #[error("assignment not found: {0}")]
    AssignmentNotFound(AssignmentId),

    /// The attendance record was not found.
    #[error("attendance record not found: {0}")]
    AttendanceRecordNotFound(AttendanceRecordId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
