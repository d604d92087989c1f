//! In-memory assignment repository with (job, worker) uniqueness.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::shift::{
    domain::{Assignment, AssignmentId, JobId, WorkerId},
    error::RepositoryError,
    ports::{AssignmentRepository, RepositoryResult},
};

/// Thread-safe in-memory assignment repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssignmentRepository {
    state: Arc<RwLock<InMemoryAssignmentState>>,
}

#[derive(Debug, Default)]
struct InMemoryAssignmentState {
    assignments: HashMap<AssignmentId, Assignment>,
    pair_index: HashMap<(JobId, WorkerId), AssignmentId>,
}

impl InMemoryAssignmentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RepositoryResult<std::sync::RwLockReadGuard<'_, InMemoryAssignmentState>> {
        self.state
            .read()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> RepositoryResult<std::sync::RwLockWriteGuard<'_, InMemoryAssignmentState>> {
        self.state
            .write()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl AssignmentRepository for InMemoryAssignmentRepository {
    async fn store(&self, assignment: &Assignment) -> RepositoryResult<()> {
        let mut state = self.write()?;
        let pair = (assignment.job_id(), assignment.worker_id());
        if state.pair_index.contains_key(&pair) || state.assignments.contains_key(&assignment.id())
        {
            return Err(RepositoryError::DuplicateAssignment {
                job_id: assignment.job_id(),
                worker_id: assignment.worker_id(),
            });
        }
        state.pair_index.insert(pair, assignment.id());
        state.assignments.insert(assignment.id(), assignment.clone());
        Ok(())
    }

    async fn update(&self, assignment: &Assignment) -> RepositoryResult<()> {
        let mut state = self.write()?;
        if !state.assignments.contains_key(&assignment.id()) {
            return Err(RepositoryError::AssignmentNotFound(assignment.id()));
        }
        state.assignments.insert(assignment.id(), assignment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: AssignmentId) -> RepositoryResult<Option<Assignment>> {
        let state = self.read()?;
        Ok(state.assignments.get(&id).cloned())
    }

    async fn find_by_job_and_worker(
        &self,
        job_id: JobId,
        worker_id: WorkerId,
    ) -> RepositoryResult<Option<Assignment>> {
        let state = self.read()?;
        let assignment = state
            .pair_index
            .get(&(job_id, worker_id))
            .and_then(|id| state.assignments.get(id))
            .cloned();
        Ok(assignment)
    }

    async fn list_active_by_worker(
        &self,
        worker_id: WorkerId,
    ) -> RepositoryResult<Vec<Assignment>> {
        let state = self.read()?;
        let mut active: Vec<Assignment> = state
            .assignments
            .values()
            .filter(|assignment| assignment.worker_id() == worker_id && assignment.is_active())
            .cloned()
            .collect();
        active.sort_by_key(Assignment::created_at);
        Ok(active)
    }

    async fn list_by_worker(&self, worker_id: WorkerId) -> RepositoryResult<Vec<Assignment>> {
        let state = self.read()?;
        let mut assignments: Vec<Assignment> = state
            .assignments
            .values()
            .filter(|assignment| assignment.worker_id() == worker_id)
            .cloned()
            .collect();
        assignments.sort_by_key(Assignment::created_at);
        Ok(assignments)
    }

    async fn count_active_by_job(&self, job_id: JobId) -> RepositoryResult<u32> {
        let state = self.read()?;
        let count = state
            .assignments
            .values()
            .filter(|assignment| assignment.job_id() == job_id && assignment.is_active())
            .count();
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }
}
