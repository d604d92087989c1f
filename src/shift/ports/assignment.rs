//! Repository port for assignment persistence and lookup.

use super::RepositoryResult;
use crate::shift::domain::{Assignment, AssignmentId, JobId, WorkerId};
use async_trait::async_trait;

/// Port for assignment persistence operations.
///
/// Implementations must enforce at most one assignment per
/// (job, worker) pair; the services rely on this constraint to keep the
/// pair's lifecycle on a single identity.
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Stores a new assignment.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateAssignment`](crate::shift::error::RepositoryError::DuplicateAssignment)
    /// when an assignment for the (job, worker) pair already exists.
    async fn store(&self, assignment: &Assignment) -> RepositoryResult<()>;

    /// Persists changes to an existing assignment (status, withdrawal
    /// fields, rating, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::AssignmentNotFound`](crate::shift::error::RepositoryError::AssignmentNotFound)
    /// when the assignment does not exist.
    async fn update(&self, assignment: &Assignment) -> RepositoryResult<()>;

    /// Finds an assignment by identifier.
    ///
    /// Returns `None` when the assignment does not exist.
    async fn find_by_id(&self, id: AssignmentId) -> RepositoryResult<Option<Assignment>>;

    /// Finds the assignment for a (job, worker) pair regardless of
    /// status.
    ///
    /// Returns `None` when the worker never joined the job.
    async fn find_by_job_and_worker(
        &self,
        job_id: JobId,
        worker_id: WorkerId,
    ) -> RepositoryResult<Option<Assignment>>;

    /// Returns the worker's Pending and Confirmed assignments.
    async fn list_active_by_worker(&self, worker_id: WorkerId)
    -> RepositoryResult<Vec<Assignment>>;

    /// Returns all of the worker's assignments regardless of status.
    async fn list_by_worker(&self, worker_id: WorkerId) -> RepositoryResult<Vec<Assignment>>;

    /// Counts the job's Pending and Confirmed assignments.
    async fn count_active_by_job(&self, job_id: JobId) -> RepositoryResult<u32>;
}
