//! Application services orchestrating the shift engine.

mod attendance;
mod capacity;
mod lifecycle;
mod rating;

pub use attendance::{AttendanceService, AttendanceServiceError, AttendanceServiceResult};
pub use capacity::{CapacityError, CapacityResult, CapacityService};
pub use lifecycle::{
    AssignmentLifecycleService, JoinError, JoinResult, WithdrawError, WithdrawResult,
};
pub use rating::{RatingError, RatingResult, RatingService};
