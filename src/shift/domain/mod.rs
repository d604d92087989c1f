//! Domain model for the shift assignment and attendance engine.
//!
//! The shift domain models jobs with multi-date schedules, the
//! worker↔job assignment lifecycle, per-date attendance tracking,
//! withdrawal audit history, and post-completion ratings, while keeping
//! all infrastructure concerns outside of the domain boundary.

mod assignment;
mod attendance;
mod conflict;
mod error;
mod ids;
mod job;
mod schedule;
mod time_window;
mod withdrawal;
mod worker;

pub use assignment::{Assignment, AssignmentStatus, Rating, RatingScore};
pub use attendance::{
    AttendanceAction, AttendanceRecord, AttendanceStatus, SignaturePayload,
};
pub use conflict::{ConflictDetails, find_schedule_conflict};
pub use error::{
    AssignmentDomainError, AttendanceError, JobDomainError, ScheduleError, WithdrawalDomainError,
};
pub use ids::{AssignmentId, AttendanceRecordId, JobId, WithdrawalEntryId, WorkerId};
pub use job::{CapacityState, Job, NewJob};
pub use schedule::JobSchedule;
pub use time_window::{MinuteOfDay, TimeWindow};
pub use withdrawal::{WithdrawalHistoryEntry, WithdrawalReason};
pub use worker::{ApprovalStatus, WorkerProfile};
