//! In-memory job repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::shift::{
    domain::{Job, JobId},
    error::RepositoryError,
    ports::{JobRepository, RepositoryResult},
};

/// Thread-safe in-memory job repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobRepository {
    state: Arc<RwLock<HashMap<JobId, Job>>>,
}

impl InMemoryJobRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn store(&self, job: &Job) -> RepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))?;
        if state.contains_key(&job.id()) {
            return Err(RepositoryError::DuplicateJob(job.id()));
        }
        state.insert(job.id(), job.clone());
        Ok(())
    }

    async fn update(&self, job: &Job) -> RepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))?;
        if !state.contains_key(&job.id()) {
            return Err(RepositoryError::JobNotFound(job.id()));
        }
        state.insert(job.id(), job.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: JobId) -> RepositoryResult<Option<Job>> {
        let state = self
            .state
            .read()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.get(&id).cloned())
    }
}
