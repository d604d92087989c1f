//! Error types for shift domain validation and state transitions.

use super::{
    AssignmentId, AssignmentStatus, AttendanceAction, AttendanceRecordId, AttendanceStatus,
};
use thiserror::Error;

/// Errors returned while constructing schedule and time-window values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The minute-of-day value does not fit a 24-hour day.
    #[error("invalid minute of day {0}, expected a value below 1440")]
    InvalidMinuteOfDay(u16),

    /// The schedule has no dates after normalization.
    #[error("job schedule must contain at least one date")]
    EmptySchedule,
}

/// Errors returned while constructing job values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JobDomainError {
    /// The job title is empty after trimming.
    #[error("job title must not be empty")]
    EmptyTitle,

    /// The required-worker count is zero.
    #[error("job must require at least one worker")]
    ZeroRequiredWorkers,
}

/// Errors returned by assignment lifecycle transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssignmentDomainError {
    /// The assignment is not in an active (Pending or Confirmed) state.
    #[error("assignment {assignment_id} is {status}, expected an active assignment")]
    NotActive {
        /// Assignment the transition was attempted on.
        assignment_id: AssignmentId,
        /// Status the assignment was found in.
        status: AssignmentStatus,
    },

    /// The assignment is not withdrawn, so it cannot be reactivated.
    #[error("assignment {assignment_id} is {status}, expected withdrawn")]
    NotWithdrawn {
        /// Assignment the reactivation was attempted on.
        assignment_id: AssignmentId,
        /// Status the assignment was found in.
        status: AssignmentStatus,
    },

    /// The rating score is outside the 1–5 scale.
    #[error("invalid rating score {0}, expected 1 to 5")]
    InvalidRatingScore(u8),
}

/// Errors returned by attendance record state transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AttendanceError {
    /// The record is not in the state the action requires.
    #[error("cannot {action} attendance record {record_id} in state {from}")]
    InvalidTransition {
        /// Record the transition was attempted on.
        record_id: AttendanceRecordId,
        /// Status the record was found in.
        from: AttendanceStatus,
        /// Action that was attempted.
        action: AttendanceAction,
    },

    /// Check-out was attempted without a captured signature.
    #[error("attendance record {0} cannot complete without a signature")]
    MissingSignature(AttendanceRecordId),
}

/// Errors returned while constructing withdrawal values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WithdrawalDomainError {
    /// The withdrawal reason is empty after trimming.
    #[error("withdrawal reason must not be empty")]
    EmptyReason,
}
