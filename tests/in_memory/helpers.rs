//! Shared test helpers for in-memory repository integration tests.

use chrono::NaiveDate;
use escala::shift::{
    adapters::memory::{
        InMemoryAssignmentRepository, InMemoryAttendanceRepository, InMemoryJobRepository,
        InMemoryWithdrawalHistoryRepository, InMemoryWorkerProfileRepository,
    },
    domain::{
        Job, JobId, JobSchedule, MinuteOfDay, NewJob, TimeWindow, WorkerId, WorkerProfile,
    },
    ports::{JobRepository, WorkerProfileRepository},
    services::{AssignmentLifecycleService, AttendanceService, RatingService},
};
use mockable::DefaultClock;
use rstest::fixture;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Lifecycle service wired over the in-memory repositories.
pub type Lifecycle = AssignmentLifecycleService<
    InMemoryJobRepository,
    InMemoryAssignmentRepository,
    InMemoryAttendanceRepository,
    InMemoryWorkerProfileRepository,
    InMemoryWithdrawalHistoryRepository,
    DefaultClock,
>;

/// Attendance service wired over the in-memory repository.
pub type Attendance = AttendanceService<InMemoryAttendanceRepository, DefaultClock>;

/// Rating service wired over the in-memory repositories.
pub type Rating = RatingService<
    InMemoryAssignmentRepository,
    InMemoryAttendanceRepository,
    InMemoryWorkerProfileRepository,
    DefaultClock,
>;

/// A complete set of stores and services sharing one state.
pub struct Stores {
    pub jobs: Arc<InMemoryJobRepository>,
    pub assignments: Arc<InMemoryAssignmentRepository>,
    pub attendance_repo: Arc<InMemoryAttendanceRepository>,
    pub workers: Arc<InMemoryWorkerProfileRepository>,
    pub history: Arc<InMemoryWithdrawalHistoryRepository>,
    pub lifecycle: Lifecycle,
    pub attendance: Attendance,
    pub rating: Rating,
}

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides fresh stores and services for each test.
#[fixture]
pub fn stores() -> Stores {
    let jobs = Arc::new(InMemoryJobRepository::new());
    let assignments = Arc::new(InMemoryAssignmentRepository::new());
    let attendance_repo = Arc::new(InMemoryAttendanceRepository::new());
    let workers = Arc::new(InMemoryWorkerProfileRepository::new());
    let history = Arc::new(InMemoryWithdrawalHistoryRepository::new());
    let shared_clock = Arc::new(DefaultClock);

    let lifecycle = AssignmentLifecycleService::new(
        Arc::clone(&jobs),
        Arc::clone(&assignments),
        Arc::clone(&attendance_repo),
        Arc::clone(&workers),
        Arc::clone(&history),
        Arc::clone(&shared_clock),
    );
    let attendance = AttendanceService::new(Arc::clone(&attendance_repo), Arc::clone(&shared_clock));
    let rating = RatingService::new(
        Arc::clone(&assignments),
        Arc::clone(&attendance_repo),
        Arc::clone(&workers),
        shared_clock,
    );

    Stores {
        jobs,
        assignments,
        attendance_repo,
        workers,
        history,
        lifecycle,
        attendance,
        rating,
    }
}

/// Builds a calendar date, panicking on invalid components.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Builds a time window from whole hours.
pub fn window(start_h: u16, end_h: u16) -> TimeWindow {
    let start = MinuteOfDay::from_hm(start_h, 0).expect("valid start time");
    let end = MinuteOfDay::from_hm(end_h, 0).expect("valid end time");
    TimeWindow::new(start, end)
}

/// Builds a job over the given dates and window.
pub fn build_job(
    title: &str,
    dates: &[NaiveDate],
    time_window: TimeWindow,
    required_workers: u32,
) -> Job {
    Job::new(
        NewJob {
            title: title.to_owned(),
            company: "Acme Logistics".to_owned(),
            location: "São Paulo".to_owned(),
            schedule: JobSchedule::new(dates.iter().copied(), time_window)
                .expect("non-empty schedule"),
            required_workers,
        },
        &DefaultClock,
    )
    .expect("valid job")
}

/// Stores an approved worker and returns its identifier.
pub fn seed_approved_worker(rt: &Runtime, stores: &Stores) -> WorkerId {
    let clock = DefaultClock;
    let mut profile = WorkerProfile::new("Maria Souza", &clock);
    profile.approve(&clock);
    rt.block_on(stores.workers.store(&profile)).expect("worker store");
    profile.id()
}

/// Stores a job and returns its identifier.
pub fn seed_job(rt: &Runtime, stores: &Stores, job: &Job) -> JobId {
    rt.block_on(stores.jobs.store(job)).expect("job store");
    job.id()
}
