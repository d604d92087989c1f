//! Capacity tracking: counting active assignments and flipping job
//! capacity state.

use crate::shift::{
    domain::{CapacityState, JobId},
    error::RepositoryError,
    ports::{AssignmentRepository, JobRepository},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for capacity recomputation.
#[derive(Debug, Error)]
pub enum CapacityError {
    /// The job to recompute does not exist.
    #[error("job not found: {0}")]
    JobNotFound(JobId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for capacity operations.
pub type CapacityResult<T> = Result<T, CapacityError>;

/// Recomputes job capacity state from the live assignment count.
///
/// Safe to call after every assignment creation, reactivation, or
/// withdrawal; recomputing an unchanged job is a no-op. Two workers
/// joining a near-full job concurrently can both be admitted before
/// either recompute runs — the store offers no cross-row locking, so
/// transient over-capacity is tolerated and corrected by the next
/// recompute only in count, never by evicting a worker.
#[derive(Clone)]
pub struct CapacityService<J, A, C>
where
    J: JobRepository,
    A: AssignmentRepository,
    C: Clock + Send + Sync,
{
    jobs: Arc<J>,
    assignments: Arc<A>,
    clock: Arc<C>,
}

impl<J, A, C> CapacityService<J, A, C>
where
    J: JobRepository,
    A: AssignmentRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new capacity service.
    #[must_use]
    pub const fn new(jobs: Arc<J>, assignments: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            jobs,
            assignments,
            clock,
        }
    }

    /// Recomputes the job's capacity state and persists a change.
    ///
    /// Counts the job's Pending and Confirmed assignments, applies the
    /// Open↔Assigned rule, and returns the resulting state. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::JobNotFound`] when the job does not
    /// exist and [`CapacityError::Repository`] on persistence failure.
    pub async fn recompute(&self, job_id: JobId) -> CapacityResult<CapacityState> {
        let mut job = self
            .jobs
            .find_by_id(job_id)
            .await?
            .ok_or(CapacityError::JobNotFound(job_id))?;
        let active = self.assignments.count_active_by_job(job_id).await?;

        let previous = job.capacity_state();
        let next = job.recompute_capacity(active, &*self.clock);
        if next != previous {
            self.jobs.update(&job).await?;
            tracing::info!(
                %job_id,
                %previous,
                %next,
                active,
                required = job.required_workers(),
                "job capacity state changed"
            );
        }
        Ok(next)
    }
}
