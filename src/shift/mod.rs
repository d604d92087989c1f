//! Shift assignment and attendance lifecycle engine.
//!
//! This module brokers the relationship between posted jobs and the
//! workers who take them: vetting a candidate booking against the
//! worker's other active assignments, tracking how many workers a job
//! still needs, driving each scheduled date's attendance through
//! check-in, check-out, and signature capture, and handling withdrawal
//! including capacity reopening and its audit trail. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
