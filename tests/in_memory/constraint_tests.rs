//! Constraint tests for the in-memory repositories.
//!
//! Tests duplicate detection and the all-or-nothing batch insert.

use crate::in_memory::helpers::{
    Stores, build_job, date, runtime, seed_approved_worker, seed_job, stores, window,
};
use escala::shift::{
    domain::{Assignment, AttendanceRecord, JobId, WorkerId},
    error::RepositoryError,
    ports::{AssignmentRepository, AttendanceRepository, JobRepository},
    services::JoinError,
};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

#[rstest]
fn duplicate_job_ids_are_rejected(runtime: io::Result<Runtime>, stores: Stores) {
    let rt = runtime.expect("runtime creation");
    let job = build_job("Warehouse shift", &[date(2024, 6, 10)], window(8, 17), 1);

    rt.block_on(stores.jobs.store(&job)).expect("first store");
    let result = rt.block_on(stores.jobs.store(&job));
    assert!(matches!(result, Err(RepositoryError::DuplicateJob(id)) if id == job.id()));
}

#[rstest]
fn one_assignment_per_job_and_worker_pair(runtime: io::Result<Runtime>, stores: Stores) {
    let rt = runtime.expect("runtime creation");
    let job_id = JobId::new();
    let worker_id = WorkerId::new();
    let first = Assignment::new(job_id, worker_id, &DefaultClock);
    let second = Assignment::new(job_id, worker_id, &DefaultClock);

    rt.block_on(stores.assignments.store(&first)).expect("first store");
    let result = rt.block_on(stores.assignments.store(&second));
    assert!(matches!(
        result,
        Err(RepositoryError::DuplicateAssignment {
            job_id: jid,
            worker_id: wid,
        }) if jid == job_id && wid == worker_id
    ));
}

/// A retried join surfaces the pair constraint as `AlreadyAssigned`
/// without booking a second set of records.
#[rstest]
fn a_repeated_join_is_already_assigned(runtime: io::Result<Runtime>, stores: Stores) {
    let rt = runtime.expect("runtime creation");
    let worker_id = seed_approved_worker(&rt, &stores);
    let job = build_job("Warehouse shift", &[date(2024, 6, 10)], window(8, 17), 1);
    let job_id = seed_job(&rt, &stores, &job);

    rt.block_on(stores.lifecycle.join(worker_id, job_id))
        .expect("first join");
    let result = rt.block_on(stores.lifecycle.join(worker_id, job_id));
    assert!(matches!(
        result,
        Err(JoinError::AlreadyAssigned { job_id: jid, worker_id: wid })
            if jid == job_id && wid == worker_id
    ));

    let records = rt
        .block_on(stores.attendance_repo.list_by_assignment(job_id, worker_id))
        .expect("record listing");
    assert_eq!(records.len(), 1);
}

/// A batch with one clashing date inserts nothing at all.
#[rstest]
fn batch_inserts_are_all_or_nothing(runtime: io::Result<Runtime>, stores: Stores) {
    let rt = runtime.expect("runtime creation");
    let job_id = JobId::new();
    let worker_id = WorkerId::new();
    let existing = AttendanceRecord::new(job_id, worker_id, date(2024, 6, 11));
    rt.block_on(stores.attendance_repo.store_batch(std::slice::from_ref(&existing)))
        .expect("seed record");

    let batch = [
        AttendanceRecord::new(job_id, worker_id, date(2024, 6, 10)),
        AttendanceRecord::new(job_id, worker_id, date(2024, 6, 11)),
    ];
    let result = rt.block_on(stores.attendance_repo.store_batch(&batch));
    assert!(matches!(
        result,
        Err(RepositoryError::DuplicateAttendanceRecord { date: clash, .. })
            if clash == date(2024, 6, 11)
    ));

    // The clean record from the failed batch was not inserted.
    let records = rt
        .block_on(stores.attendance_repo.list_by_assignment(job_id, worker_id))
        .expect("record listing");
    assert_eq!(records.len(), 1);
    let survivor = records.first().expect("seeded record");
    assert_eq!(survivor.id(), existing.id());
}

/// Deleting one pair's records leaves other pairs untouched and frees
/// the dates for re-insertion.
#[rstest]
fn deletion_is_scoped_to_the_pair(runtime: io::Result<Runtime>, stores: Stores) {
    let rt = runtime.expect("runtime creation");
    let job_id = JobId::new();
    let first_worker = WorkerId::new();
    let second_worker = WorkerId::new();
    let batch = [
        AttendanceRecord::new(job_id, first_worker, date(2024, 6, 10)),
        AttendanceRecord::new(job_id, first_worker, date(2024, 6, 11)),
        AttendanceRecord::new(job_id, second_worker, date(2024, 6, 10)),
    ];
    rt.block_on(stores.attendance_repo.store_batch(&batch))
        .expect("seed records");

    let deleted = rt
        .block_on(stores.attendance_repo.delete_by_assignment(job_id, first_worker))
        .expect("delete");
    assert_eq!(deleted, 2);

    let remaining = rt
        .block_on(stores.attendance_repo.list_by_assignment(job_id, second_worker))
        .expect("record listing");
    assert_eq!(remaining.len(), 1);

    // The freed dates accept a fresh booking.
    let rebooked = AttendanceRecord::new(job_id, first_worker, date(2024, 6, 10));
    rt.block_on(stores.attendance_repo.store_batch(std::slice::from_ref(&rebooked)))
        .expect("re-insert after delete");
}
