//! Address generator unit tests.

pub mod bursts;
pub mod misaligned;
pub mod ordering;
