//! Escala: shift brokering engine.
//!
//! This crate provides the core logic for brokering short-term shifts
//! ("diárias") between companies and workers: schedule conflict
//! detection, job capacity tracking, per-date attendance lifecycles,
//! withdrawal handling, and post-completion ratings.
//!
//! # Architecture
//!
//! Escala follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, etc.)
//!
//! # Modules
//!
//! - [`shift`]: Assignment and attendance lifecycle engine

pub mod shift;
