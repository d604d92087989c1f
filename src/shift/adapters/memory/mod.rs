//! In-memory adapter implementations for testing.
//!
//! These adapters provide simple, thread-safe implementations suitable
//! for unit testing without database dependencies. They enforce the
//! same uniqueness constraints the ports document, so the services see
//! the same typed errors a real store would surface.

mod assignment;
mod attendance;
mod job;
mod withdrawal;
mod worker;

pub use assignment::InMemoryAssignmentRepository;
pub use attendance::InMemoryAttendanceRepository;
pub use job::InMemoryJobRepository;
pub use withdrawal::InMemoryWithdrawalHistoryRepository;
pub use worker::InMemoryWorkerProfileRepository;
