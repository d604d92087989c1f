//! Unit tests for the shift engine.

mod support;
