//! Shared builders for shift engine tests.

use crate::shift::domain::{Job, JobSchedule, MinuteOfDay, NewJob, TimeWindow};
use chrono::NaiveDate;
use mockable::DefaultClock;

/// Builds a calendar date, panicking on invalid components.
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Builds a time window from hour/minute pairs.
pub(crate) fn window(start_h: u16, start_m: u16, end_h: u16, end_m: u16) -> TimeWindow {
    let start = MinuteOfDay::from_hm(start_h, start_m).expect("valid start time");
    let end = MinuteOfDay::from_hm(end_h, end_m).expect("valid end time");
    TimeWindow::new(start, end)
}

/// Builds an open job over the given dates and window.
pub(crate) fn job(dates: &[NaiveDate], time_window: TimeWindow, required_workers: u32) -> Job {
    Job::new(
        NewJob {
            title: "Warehouse shift".to_owned(),
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

/// Builds a job with distinguishable display fields.
pub(crate) fn named_job(
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
