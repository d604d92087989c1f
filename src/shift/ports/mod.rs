//! Port contracts for the shift engine's external collaborators.
//!
//! The entity store behind these traits offers single-statement
//! atomicity only; no multi-statement transactions are assumed. Each
//! port documents which operations must be atomic on their own.

mod assignment;
mod attendance;
mod job;
mod withdrawal;
mod worker;

pub use assignment::AssignmentRepository;
pub use attendance::AttendanceRepository;
pub use job::JobRepository;
pub use withdrawal::WithdrawalHistoryRepository;
pub use worker::WorkerProfileRepository;

use crate::shift::error::RepositoryError;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
