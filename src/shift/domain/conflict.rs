//! Schedule conflict detection between a candidate job and a worker's
//! existing bookings.

use super::{Job, JobId, TimeWindow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Diagnostic description of a schedule conflict.
///
/// Carries enough of the conflicting job for user-facing display
/// without another lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictDetails {
    /// The already-booked job that clashes with the candidate.
    pub job_id: JobId,
    /// Title of the conflicting job.
    pub job_title: String,
    /// Company posting the conflicting job.
    pub company: String,
    /// Location of the conflicting job.
    pub location: String,
    /// Daily time window of the conflicting job.
    pub window: TimeWindow,
    /// Every scheduled date the two jobs share.
    pub shared_dates: Vec<NaiveDate>,
}

/// Finds the first of the worker's booked jobs that clashes with the
/// candidate job.
///
/// Two jobs clash when they share at least one scheduled date (exact
/// calendar-date equality) and their daily time windows overlap. The
/// candidate itself is skipped, so rechecking an existing booking never
/// self-conflicts. Only the first clash is reported; later bookings are
/// not aggregated.
///
/// Returns `None` when the candidate can be booked.
#[must_use]
pub fn find_schedule_conflict(candidate: &Job, booked: &[Job]) -> Option<ConflictDetails> {
    booked
        .iter()
        .filter(|job| job.id() != candidate.id())
        .find_map(|job| {
            let shared_dates = candidate.schedule().shared_dates(job.schedule());
            if shared_dates.is_empty() {
                return None;
            }
            if !candidate.schedule().window().overlaps(job.schedule().window()) {
                return None;
            }
            Some(ConflictDetails {
                job_id: job.id(),
                job_title: job.title().to_owned(),
                company: job.company().to_owned(),
                location: job.location().to_owned(),
                window: job.schedule().window(),
                shared_dates,
            })
        })
}
