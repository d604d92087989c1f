//! Repository port for per-date attendance record persistence.

use super::RepositoryResult;
use crate::shift::domain::{AttendanceRecord, AttendanceRecordId, JobId, WorkerId};
use async_trait::async_trait;

/// Port for attendance record persistence operations.
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Stores the full set of records for an assignment in one
    /// operation.
    ///
    /// Implementations must make this all-or-nothing where the backend
    /// allows: a confirm that inserts only some of its dates leaves the
    /// assignment half-booked.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateAttendanceRecord`](crate::shift::error::RepositoryError::DuplicateAttendanceRecord)
    /// when a record for one of the (job, worker, date) triples already
    /// exists; no record is stored in that case.
    async fn store_batch(&self, records: &[AttendanceRecord]) -> RepositoryResult<()>;

    /// Persists changes to an existing record (status, timestamps,
    /// signature).
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::AttendanceRecordNotFound`](crate::shift::error::RepositoryError::AttendanceRecordNotFound)
    /// when the record does not exist.
    async fn update(&self, record: &AttendanceRecord) -> RepositoryResult<()>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: AttendanceRecordId)
    -> RepositoryResult<Option<AttendanceRecord>>;

    /// Returns the records for a (job, worker) pair ordered by date.
    async fn list_by_assignment(
        &self,
        job_id: JobId,
        worker_id: WorkerId,
    ) -> RepositoryResult<Vec<AttendanceRecord>>;

    /// Deletes every record for a (job, worker) pair.
    ///
    /// Returns the number of deleted records. Deleting for a pair with
    /// no records is not an error.
    async fn delete_by_assignment(
        &self,
        job_id: JobId,
        worker_id: WorkerId,
    ) -> RepositoryResult<u32>;
}
