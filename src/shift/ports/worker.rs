//! Repository port for worker profile lookup and rating statistics.

use super::RepositoryResult;
use crate::shift::domain::{WorkerId, WorkerProfile};
use async_trait::async_trait;

/// Port for worker profile persistence operations.
///
/// The booking flow reads approval status and writes aggregate rating
/// statistics; profile registration and review happen elsewhere.
#[async_trait]
pub trait WorkerProfileRepository: Send + Sync {
    /// Stores a new worker profile.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateWorker`](crate::shift::error::RepositoryError::DuplicateWorker)
    /// when the identifier already exists.
    async fn store(&self, profile: &WorkerProfile) -> RepositoryResult<()>;

    /// Persists changes to an existing profile (approval, rating
    /// statistics, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::WorkerNotFound`](crate::shift::error::RepositoryError::WorkerNotFound)
    /// when the profile does not exist.
    async fn update(&self, profile: &WorkerProfile) -> RepositoryResult<()>;

    /// Finds a profile by worker identifier.
    ///
    /// Returns `None` when the profile does not exist.
    async fn find_by_id(&self, id: WorkerId) -> RepositoryResult<Option<WorkerProfile>>;
}
