//! End-to-end booking flow tests: join, conflict refusal, withdrawal,
//! and rejoin.

use crate::in_memory::helpers::{
    Stores, build_job, date, runtime, seed_approved_worker, seed_job, stores, window,
};
use escala::shift::{
    domain::{AssignmentStatus, CapacityState, WorkerProfile},
    ports::{
        AssignmentRepository, AttendanceRepository, JobRepository, WithdrawalHistoryRepository,
        WorkerProfileRepository,
    },
    services::JoinError,
};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

/// Walks one worker through the whole double-booking story: a booking
/// blocks an overlapping job, withdrawing frees the calendar, and the
/// previously refused job becomes joinable.
#[rstest]
fn conflicting_job_becomes_joinable_after_withdrawal(
    runtime: io::Result<Runtime>,
    stores: Stores,
) {
    let rt = runtime.expect("runtime creation");
    let worker_id = seed_approved_worker(&rt, &stores);

    let job_a = build_job(
        "Warehouse shift",
        &[date(2024, 6, 10), date(2024, 6, 11)],
        window(8, 17),
        1,
    );
    let job_a_id = seed_job(&rt, &stores, &job_a);
    let job_b = build_job("Evening bar", &[date(2024, 6, 11)], window(13, 20), 1);
    let job_b_id = seed_job(&rt, &stores, &job_b);

    // Join A: two pending attendance records, and A fills up.
    let assignment_id = rt
        .block_on(stores.lifecycle.join(worker_id, job_a_id))
        .expect("join A");
    let a_records = rt
        .block_on(stores.attendance_repo.list_by_assignment(job_a_id, worker_id))
        .expect("record listing");
    assert_eq!(a_records.len(), 2);
    let filled_a = rt
        .block_on(stores.jobs.find_by_id(job_a_id))
        .expect("job lookup")
        .expect("job A exists");
    assert_eq!(filled_a.capacity_state(), CapacityState::Assigned);

    // B overlaps A on the shared date and is refused.
    let refused = rt.block_on(stores.lifecycle.join(worker_id, job_b_id));
    match refused {
        Err(JoinError::ScheduleConflict(conflict)) => {
            assert_eq!(conflict.job_id, job_a_id);
            assert_eq!(conflict.shared_dates, [date(2024, 6, 11)]);
        }
        other => panic!("expected a schedule conflict, got {other:?}"),
    }
    let b_records = rt
        .block_on(stores.attendance_repo.list_by_assignment(job_b_id, worker_id))
        .expect("record listing");
    assert!(b_records.is_empty(), "a refused join must not book anything");

    // Withdraw from A: records go, the audit entry stays, A reopens.
    rt.block_on(stores.lifecycle.withdraw(assignment_id, "illness"))
        .expect("withdraw");
    let assignment = rt
        .block_on(stores.assignments.find_by_id(assignment_id))
        .expect("assignment lookup")
        .expect("assignment exists");
    assert_eq!(assignment.status(), AssignmentStatus::Withdrawn);
    assert_eq!(
        assignment.withdrawal_reason().map(|r| r.as_str()),
        Some("illness")
    );
    let remaining = rt
        .block_on(stores.attendance_repo.list_by_assignment(job_a_id, worker_id))
        .expect("record listing");
    assert!(remaining.is_empty());
    let entries = rt
        .block_on(stores.history.list_by_assignment(assignment_id))
        .expect("history listing");
    assert_eq!(entries.len(), 1);
    let entry = entries.first().expect("one audit entry");
    assert_eq!(entry.reason().as_str(), "illness");
    let reopened_a = rt
        .block_on(stores.jobs.find_by_id(job_a_id))
        .expect("job lookup")
        .expect("job A exists");
    assert_eq!(reopened_a.capacity_state(), CapacityState::Open);

    // The calendar is free again, so B now accepts the worker.
    rt.block_on(stores.lifecycle.join(worker_id, job_b_id))
        .expect("join B after withdrawal");
    let booked_b = rt
        .block_on(stores.attendance_repo.list_by_assignment(job_b_id, worker_id))
        .expect("record listing");
    assert_eq!(booked_b.len(), 1);
}

/// Rejoining the same job after a withdrawal reactivates the original
/// assignment instead of creating a second one.
#[rstest]
fn rejoin_reactivates_the_original_assignment(runtime: io::Result<Runtime>, stores: Stores) {
    let rt = runtime.expect("runtime creation");
    let worker_id = seed_approved_worker(&rt, &stores);
    let job = build_job("Warehouse shift", &[date(2024, 6, 10)], window(8, 17), 1);
    let job_id = seed_job(&rt, &stores, &job);

    let first = rt
        .block_on(stores.lifecycle.join(worker_id, job_id))
        .expect("first join");
    rt.block_on(stores.lifecycle.withdraw(first, "schedule change"))
        .expect("withdraw");
    let second = rt
        .block_on(stores.lifecycle.join(worker_id, job_id))
        .expect("rejoin");

    assert_eq!(first, second);
    let assignment = rt
        .block_on(stores.assignments.find_by_id(second))
        .expect("assignment lookup")
        .expect("assignment exists");
    assert_eq!(assignment.status(), AssignmentStatus::Confirmed);
    assert!(assignment.withdrawal_reason().is_none());

    // The audit trail outlives the reactivation.
    let entries = rt
        .block_on(stores.history.list_by_assignment(first))
        .expect("history listing");
    assert_eq!(entries.len(), 1);
}

/// A multi-worker job only flips to Assigned once the last slot fills,
/// and reopens as soon as one of the workers withdraws.
#[rstest]
fn capacity_follows_the_active_headcount(runtime: io::Result<Runtime>, stores: Stores) {
    let rt = runtime.expect("runtime creation");
    let first_worker = seed_approved_worker(&rt, &stores);
    let second_worker = seed_approved_worker(&rt, &stores);
    let job = build_job("Event crew", &[date(2024, 6, 15)], window(18, 23), 2);
    let job_id = seed_job(&rt, &stores, &job);

    rt.block_on(stores.lifecycle.join(first_worker, job_id))
        .expect("first join");
    let after_first = rt
        .block_on(stores.jobs.find_by_id(job_id))
        .expect("job lookup")
        .expect("job exists");
    assert_eq!(after_first.capacity_state(), CapacityState::Open);

    let second_assignment = rt
        .block_on(stores.lifecycle.join(second_worker, job_id))
        .expect("second join");
    let after_second = rt
        .block_on(stores.jobs.find_by_id(job_id))
        .expect("job lookup")
        .expect("job exists");
    assert_eq!(after_second.capacity_state(), CapacityState::Assigned);

    rt.block_on(stores.lifecycle.withdraw(second_assignment, "found other work"))
        .expect("withdraw");
    let after_withdraw = rt
        .block_on(stores.jobs.find_by_id(job_id))
        .expect("job lookup")
        .expect("job exists");
    assert_eq!(after_withdraw.capacity_state(), CapacityState::Open);
}

/// An unapproved worker is refused before any booking state is touched.
#[rstest]
fn unapproved_workers_cannot_join(runtime: io::Result<Runtime>, stores: Stores) {
    let rt = runtime.expect("runtime creation");
    let profile = WorkerProfile::new("Pending person", &DefaultClock);
    rt.block_on(stores.workers.store(&profile)).expect("worker store");
    let job = build_job("Warehouse shift", &[date(2024, 6, 10)], window(8, 17), 1);
    let job_id = seed_job(&rt, &stores, &job);

    let result = rt.block_on(stores.lifecycle.join(profile.id(), job_id));
    assert!(matches!(result, Err(JoinError::NotApproved(id)) if id == profile.id()));
    let records = rt
        .block_on(stores.attendance_repo.list_by_assignment(job_id, profile.id()))
        .expect("record listing");
    assert!(records.is_empty());
}
