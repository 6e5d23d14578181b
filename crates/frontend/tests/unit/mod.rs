//! Unit tests for the front-end components.

/// Address generator tests: burst shaping, ordering, and misalignment.
pub mod agu;
