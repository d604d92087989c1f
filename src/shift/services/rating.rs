//! Rating linkage: attaching post-completion ratings and maintaining
//! worker aggregates.

use crate::shift::{
    domain::{
        Assignment, AssignmentDomainError, AssignmentId, AttendanceStatus, Rating, RatingScore,
        WorkerId,
    },
    error::RepositoryError,
    ports::{AssignmentRepository, AttendanceRepository, WorkerProfileRepository},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for rating operations.
#[derive(Debug, Error)]
pub enum RatingError {
    /// The assignment does not exist.
    #[error("assignment not found: {0}")]
    AssignmentNotFound(AssignmentId),

    /// The assignment has no completed attendance date yet.
    #[error("assignment {0} has no completed attendance to rate")]
    NotCompleted(AssignmentId),

    /// The worker profile behind the assignment does not exist.
    #[error("worker not found: {0}")]
    WorkerNotFound(WorkerId),

    /// The rating score is invalid.
    #[error(transparent)]
    Domain(#[from] AssignmentDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for rating service operations.
pub type RatingResult<T> = Result<T, RatingError>;

/// Attaches ratings to assignments and rolls them into the worker's
/// aggregate statistics.
#[derive(Clone)]
pub struct RatingService<A, R, W, C>
where
    A: AssignmentRepository,
    R: AttendanceRepository,
    W: WorkerProfileRepository,
    C: Clock + Send + Sync,
{
    assignments: Arc<A>,
    attendance: Arc<R>,
    workers: Arc<W>,
    clock: Arc<C>,
}

impl<A, R, W, C> RatingService<A, R, W, C>
where
    A: AssignmentRepository,
    R: AttendanceRepository,
    W: WorkerProfileRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new rating service.
    #[must_use]
    pub const fn new(
        assignments: Arc<A>,
        attendance: Arc<R>,
        workers: Arc<W>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            assignments,
            attendance,
            workers,
            clock,
        }
    }

    /// Rates an assignment and refreshes the worker's aggregates.
    ///
    /// The assignment must have at least one Completed attendance date.
    /// Re-rating replaces the stored value; it does not average with it.
    /// After the write, the worker's average rating is recomputed as the
    /// arithmetic mean of all of their stored assignment scores, and the
    /// completed-jobs counter as the number of assignments with at least
    /// one Completed attendance date (counted once per assignment, not
    /// per date).
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::NotCompleted`] when rated too early,
    /// [`RatingError::Domain`] for an out-of-range score, not-found
    /// variants for dangling identifiers, and repository errors on
    /// persistence failure.
    pub async fn rate(
        &self,
        assignment_id: AssignmentId,
        score: u8,
        feedback: &str,
    ) -> RatingResult<()> {
        let mut assignment = self
            .assignments
            .find_by_id(assignment_id)
            .await?
            .ok_or(RatingError::AssignmentNotFound(assignment_id))?;

        if !self.has_completed_date(&assignment).await? {
            return Err(RatingError::NotCompleted(assignment_id));
        }

        let validated = RatingScore::new(score)?;
        assignment.set_rating(Rating::new(validated, feedback), &*self.clock);
        self.assignments.update(&assignment).await?;

        self.refresh_worker_stats(assignment.worker_id()).await?;
        tracing::info!(
            %assignment_id,
            worker_id = %assignment.worker_id(),
            score = %validated,
            "assignment rated"
        );
        Ok(())
    }

    /// Returns `true` when the assignment has a Completed attendance
    /// date.
    async fn has_completed_date(&self, assignment: &Assignment) -> RatingResult<bool> {
        let records = self
            .attendance
            .list_by_assignment(assignment.job_id(), assignment.worker_id())
            .await?;
        Ok(records
            .iter()
            .any(|record| record.status() == AttendanceStatus::Completed))
    }

    /// Recomputes the worker's average rating and completed-jobs count
    /// from their full assignment history.
    async fn refresh_worker_stats(&self, worker_id: WorkerId) -> RatingResult<()> {
        let assignments = self.assignments.list_by_worker(worker_id).await?;

        let mut scores: Vec<f64> = Vec::new();
        let mut completed_jobs: u32 = 0;
        for assignment in &assignments {
            if let Some(rating) = assignment.rating() {
                scores.push(f64::from(rating.score().value()));
            }
            if self.has_completed_date(assignment).await? {
                completed_jobs += 1;
            }
        }

        let average = if scores.is_empty() {
            None
        } else {
            #[expect(
                clippy::cast_precision_loss,
                reason = "score counts stay far below 2^52"
            )]
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            Some(mean)
        };

        let mut profile = self
            .workers
            .find_by_id(worker_id)
            .await?
            .ok_or(RatingError::WorkerNotFound(worker_id))?;
        profile.record_rating_stats(average, completed_jobs, &*self.clock);
        self.workers.update(&profile).await?;
        Ok(())
    }
}
