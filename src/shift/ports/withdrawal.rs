//! Repository port for the append-only withdrawal audit log.

use super::RepositoryResult;
use crate::shift::domain::{AssignmentId, WithdrawalHistoryEntry, WorkerId};
use async_trait::async_trait;

/// Port for withdrawal history persistence.
///
/// The log is append-only: entries are never updated or deleted, and a
/// reactivated assignment keeps every entry from its past withdrawals.
#[async_trait]
pub trait WithdrawalHistoryRepository: Send + Sync {
    /// Appends an audit entry.
    async fn append(&self, entry: &WithdrawalHistoryEntry) -> RepositoryResult<()>;

    /// Returns the entries for an assignment, oldest first.
    async fn list_by_assignment(
        &self,
        assignment_id: AssignmentId,
    ) -> RepositoryResult<Vec<WithdrawalHistoryEntry>>;

    /// Returns the entries for a worker, oldest first.
    async fn list_by_worker(
        &self,
        worker_id: WorkerId,
    ) -> RepositoryResult<Vec<WithdrawalHistoryEntry>>;
}
