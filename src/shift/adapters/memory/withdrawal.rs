//! In-memory append-only withdrawal history log.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::shift::{
    domain::{AssignmentId, WithdrawalHistoryEntry, WorkerId},
    error::RepositoryError,
    ports::{RepositoryResult, WithdrawalHistoryRepository},
};

/// Thread-safe in-memory withdrawal history log.
///
/// Entries are held in append order; the port exposes no mutation
/// beyond [`append`](WithdrawalHistoryRepository::append).
#[derive(Debug, Clone, Default)]
pub struct InMemoryWithdrawalHistoryRepository {
    state: Arc<RwLock<Vec<WithdrawalHistoryEntry>>>,
}

impl InMemoryWithdrawalHistoryRepository {
    /// Creates an empty in-memory log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn filtered(
        &self,
        predicate: impl Fn(&WithdrawalHistoryEntry) -> bool,
    ) -> RepositoryResult<Vec<WithdrawalHistoryEntry>> {
        let state = self
            .state
            .read()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.iter().filter(|entry| predicate(entry)).cloned().collect())
    }
}

#[async_trait]
impl WithdrawalHistoryRepository for InMemoryWithdrawalHistoryRepository {
    async fn append(&self, entry: &WithdrawalHistoryEntry) -> RepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))?;
        state.push(entry.clone());
        Ok(())
    }

    async fn list_by_assignment(
        &self,
        assignment_id: AssignmentId,
    ) -> RepositoryResult<Vec<WithdrawalHistoryEntry>> {
        self.filtered(|entry| entry.assignment_id() == assignment_id)
    }

    async fn list_by_worker(
        &self,
        worker_id: WorkerId,
    ) -> RepositoryResult<Vec<WithdrawalHistoryEntry>> {
        self.filtered(|entry| entry.worker_id() == worker_id)
    }
}
