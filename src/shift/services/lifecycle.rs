//! Assignment lifecycle orchestration: joining a job and withdrawing
//! from it.

use crate::shift::{
    domain::{
        Assignment, AssignmentDomainError, AssignmentId, AssignmentStatus, AttendanceRecord,
        ConflictDetails, Job, JobId, WithdrawalDomainError, WithdrawalHistoryEntry,
        WithdrawalReason, WorkerId, find_schedule_conflict,
    },
    error::RepositoryError,
    ports::{
        AssignmentRepository, AttendanceRepository, JobRepository, WithdrawalHistoryRepository,
        WorkerProfileRepository,
    },
    services::{CapacityError, CapacityService},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for joining a job.
#[derive(Debug, Error)]
pub enum JoinError {
    /// The worker profile does not exist.
    #[error("worker not found: {0}")]
    WorkerNotFound(WorkerId),

    /// The job does not exist.
    #[error("job not found: {0}")]
    JobNotFound(JobId),

    /// The worker has not been approved for booking.
    #[error("worker {0} is not approved for booking")]
    NotApproved(WorkerId),

    /// The candidate job clashes with one of the worker's bookings.
    #[error(
        "schedule conflict with '{}' ({}) on {} shared date(s)",
        .0.job_title,
        .0.window,
        .0.shared_dates.len()
    )]
    ScheduleConflict(ConflictDetails),

    /// The worker already holds an assignment on the job.
    ///
    /// A retried join lands here after the first attempt succeeded, so
    /// callers may treat this as success.
    #[error("worker {worker_id} is already assigned to job {job_id}")]
    AlreadyAssigned {
        /// The job the worker tried to join again.
        job_id: JobId,
        /// The joining worker.
        worker_id: WorkerId,
    },

    /// Assignment state transition failed.
    #[error(transparent)]
    Domain(#[from] AssignmentDomainError),

    /// Capacity recomputation failed.
    #[error(transparent)]
    Capacity(#[from] CapacityError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for join operations.
pub type JoinResult<T> = Result<T, JoinError>;

/// Service-level errors for withdrawing from a job.
#[derive(Debug, Error)]
pub enum WithdrawError {
    /// The withdrawal reason is missing or blank.
    #[error("a withdrawal reason is required")]
    ReasonRequired(#[from] WithdrawalDomainError),

    /// The assignment does not exist.
    #[error("assignment not found: {0}")]
    AssignmentNotFound(AssignmentId),

    /// Assignment state transition failed (already withdrawn, etc.).
    #[error(transparent)]
    Domain(#[from] AssignmentDomainError),

    /// Capacity recomputation failed.
    #[error(transparent)]
    Capacity(#[from] CapacityError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for withdraw operations.
pub type WithdrawResult<T> = Result<T, WithdrawError>;

/// Orchestrates the worker↔job assignment lifecycle.
///
/// Each operation runs as a sequence of independent store calls; the
/// store offers no multi-statement transactions, so the documented step
/// order is the only ordering guarantee. A reader can observe a
/// Confirmed assignment before its attendance records exist.
#[derive(Clone)]
pub struct AssignmentLifecycleService<J, A, R, W, H, C>
where
    J: JobRepository,
    A: AssignmentRepository,
    R: AttendanceRepository,
    W: WorkerProfileRepository,
    H: WithdrawalHistoryRepository,
    C: Clock + Send + Sync,
{
    jobs: Arc<J>,
    assignments: Arc<A>,
    attendance: Arc<R>,
    workers: Arc<W>,
    history: Arc<H>,
    capacity: CapacityService<J, A, C>,
    clock: Arc<C>,
}

impl<J, A, R, W, H, C> AssignmentLifecycleService<J, A, R, W, H, C>
where
    J: JobRepository,
    A: AssignmentRepository,
    R: AttendanceRepository,
    W: WorkerProfileRepository,
    H: WithdrawalHistoryRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new assignment lifecycle service.
    #[must_use]
    pub fn new(
        jobs: Arc<J>,
        assignments: Arc<A>,
        attendance: Arc<R>,
        workers: Arc<W>,
        history: Arc<H>,
        clock: Arc<C>,
    ) -> Self {
        let capacity =
            CapacityService::new(Arc::clone(&jobs), Arc::clone(&assignments), Arc::clone(&clock));
        Self {
            jobs,
            assignments,
            attendance,
            workers,
            history,
            capacity,
            clock,
        }
    }

    /// Books a worker onto a job.
    ///
    /// The worker must be approved and free of schedule conflicts across
    /// every active booking. A first join creates a Confirmed
    /// assignment; rejoining after a withdrawal reactivates the existing
    /// assignment so the (job, worker) pair keeps one identity. One
    /// pending attendance record is created per scheduled date, then the
    /// job's capacity state is recomputed.
    ///
    /// The operation does not retry. A caller re-invoking it after a
    /// transient failure gets [`JoinError::AlreadyAssigned`] when the
    /// first attempt had already written the assignment, and should
    /// treat that as success.
    ///
    /// # Errors
    ///
    /// Returns [`JoinError::NotApproved`], [`JoinError::ScheduleConflict`],
    /// or [`JoinError::AlreadyAssigned`] per the booking rules, not-found
    /// variants for dangling identifiers, and repository errors on
    /// persistence failure.
    pub async fn join(&self, worker_id: WorkerId, job_id: JobId) -> JoinResult<AssignmentId> {
        let worker = self
            .workers
            .find_by_id(worker_id)
            .await?
            .ok_or(JoinError::WorkerNotFound(worker_id))?;
        if !worker.is_approved() {
            return Err(JoinError::NotApproved(worker_id));
        }

        let job = self
            .jobs
            .find_by_id(job_id)
            .await?
            .ok_or(JoinError::JobNotFound(job_id))?;

        let booked = self.booked_jobs(worker_id).await?;
        if let Some(conflict) = find_schedule_conflict(&job, &booked) {
            tracing::debug!(
                %worker_id,
                %job_id,
                conflicting_job = %conflict.job_id,
                shared_dates = conflict.shared_dates.len(),
                "join refused: schedule conflict"
            );
            return Err(JoinError::ScheduleConflict(conflict));
        }

        let assignment = self.create_or_reactivate(&job, worker_id).await?;

        let records: Vec<AttendanceRecord> = job
            .schedule()
            .dates()
            .iter()
            .map(|date| AttendanceRecord::new(job_id, worker_id, *date))
            .collect();
        if let Err(err) = self.attendance.store_batch(&records).await {
            // The assignment is already Confirmed at this point; the
            // batch insert is atomic, so a failure leaves zero records
            // and the caller can retry the whole join.
            tracing::warn!(
                %worker_id,
                %job_id,
                error = %err,
                "attendance records not created for confirmed assignment"
            );
            return Err(err.into());
        }

        self.capacity.recompute(job_id).await?;
        tracing::info!(
            %worker_id,
            %job_id,
            assignment_id = %assignment.id(),
            dates = records.len(),
            "worker joined job"
        );
        Ok(assignment.id())
    }

    /// Withdraws a worker from a job.
    ///
    /// Steps run in the documented order with no cross-step atomicity:
    /// append the audit entry, mark the assignment Withdrawn, delete
    /// every attendance record for the pair, and recompute capacity so
    /// the job reopens when it is no longer full.
    ///
    /// # Errors
    ///
    /// Returns [`WithdrawError::ReasonRequired`] for a blank reason,
    /// [`WithdrawError::AssignmentNotFound`] for an unknown assignment,
    /// [`WithdrawError::Domain`] when the assignment is not active, and
    /// repository errors on persistence failure.
    pub async fn withdraw(&self, assignment_id: AssignmentId, reason: &str) -> WithdrawResult<()> {
        let validated_reason = WithdrawalReason::new(reason)?;
        let mut assignment = self
            .assignments
            .find_by_id(assignment_id)
            .await?
            .ok_or(WithdrawError::AssignmentNotFound(assignment_id))?;

        // Validate the transition before the first store write so an
        // already-withdrawn assignment never pollutes the audit log.
        assignment.withdraw(validated_reason.clone(), &*self.clock)?;

        let entry = WithdrawalHistoryEntry::new(
            assignment_id,
            assignment.job_id(),
            assignment.worker_id(),
            validated_reason,
            &*self.clock,
        );
        self.history.append(&entry).await?;
        self.assignments.update(&assignment).await?;

        let deleted = match self
            .attendance
            .delete_by_assignment(assignment.job_id(), assignment.worker_id())
            .await
        {
            Ok(deleted) => deleted,
            Err(err) => {
                tracing::warn!(
                    %assignment_id,
                    error = %err,
                    "attendance cleanup failed after withdrawal was recorded"
                );
                return Err(err.into());
            }
        };

        let state = self.capacity.recompute(assignment.job_id()).await?;
        tracing::info!(
            %assignment_id,
            job_id = %assignment.job_id(),
            worker_id = %assignment.worker_id(),
            deleted_records = deleted,
            capacity = %state,
            "worker withdrew from job"
        );
        Ok(())
    }

    /// Loads the jobs behind the worker's active assignments.
    async fn booked_jobs(&self, worker_id: WorkerId) -> JoinResult<Vec<Job>> {
        let active = self.assignments.list_active_by_worker(worker_id).await?;
        let mut booked = Vec::with_capacity(active.len());
        for assignment in &active {
            let job = self
                .jobs
                .find_by_id(assignment.job_id())
                .await?
                .ok_or(JoinError::JobNotFound(assignment.job_id()))?;
            booked.push(job);
        }
        Ok(booked)
    }

    /// Creates a new Confirmed assignment or reactivates a withdrawn
    /// one.
    async fn create_or_reactivate(
        &self,
        job: &Job,
        worker_id: WorkerId,
    ) -> JoinResult<Assignment> {
        let existing = self
            .assignments
            .find_by_job_and_worker(job.id(), worker_id)
            .await?;
        match existing {
            None => {
                let assignment = Assignment::new(job.id(), worker_id, &*self.clock);
                match self.assignments.store(&assignment).await {
                    Ok(()) => Ok(assignment),
                    // Lost a race against a concurrent join by the same
                    // worker; surface the idempotent-success variant.
                    Err(RepositoryError::DuplicateAssignment { job_id, worker_id: wid }) => {
                        Err(JoinError::AlreadyAssigned {
                            job_id,
                            worker_id: wid,
                        })
                    }
                    Err(err) => Err(err.into()),
                }
            }
            Some(mut withdrawn) if withdrawn.status() == AssignmentStatus::Withdrawn => {
                withdrawn.reactivate(&*self.clock)?;
                self.assignments.update(&withdrawn).await?;
                Ok(withdrawn)
            }
            Some(_) => Err(JoinError::AlreadyAssigned {
                job_id: job.id(),
                worker_id,
            }),
        }
    }
}
