//! In-memory worker profile repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::shift::{
    domain::{WorkerId, WorkerProfile},
    error::RepositoryError,
    ports::{RepositoryResult, WorkerProfileRepository},
};

/// Thread-safe in-memory worker profile repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkerProfileRepository {
    state: Arc<RwLock<HashMap<WorkerId, WorkerProfile>>>,
}

impl InMemoryWorkerProfileRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkerProfileRepository for InMemoryWorkerProfileRepository {
    async fn store(&self, profile: &WorkerProfile) -> RepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))?;
        if state.contains_key(&profile.id()) {
            return Err(RepositoryError::DuplicateWorker(profile.id()));
        }
        state.insert(profile.id(), profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &WorkerProfile) -> RepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))?;
        if !state.contains_key(&profile.id()) {
            return Err(RepositoryError::WorkerNotFound(profile.id()));
        }
        state.insert(profile.id(), profile.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: WorkerId) -> RepositoryResult<Option<WorkerProfile>> {
        let state = self
            .state
            .read()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.get(&id).cloned())
    }
}
