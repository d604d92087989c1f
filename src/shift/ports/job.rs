//! Repository port for job persistence.

use super::RepositoryResult;
use crate::shift::domain::{Job, JobId};
use async_trait::async_trait;

/// Port for job persistence operations.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Stores a new job.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateJob`](crate::shift::error::RepositoryError::DuplicateJob)
    /// when the identifier already exists.
    async fn store(&self, job: &Job) -> RepositoryResult<()>;

    /// Persists changes to an existing job (capacity state, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::JobNotFound`](crate::shift::error::RepositoryError::JobNotFound)
    /// when the job does not exist.
    async fn update(&self, job: &Job) -> RepositoryResult<()>;

    /// Finds a job by identifier.
    ///
    /// Returns `None` when the job does not exist.
    async fn find_by_id(&self, id: JobId) -> RepositoryResult<Option<Job>>;
}
