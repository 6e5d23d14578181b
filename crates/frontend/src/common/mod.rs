//! Common types and constants shared by the decoder and the address generator.

/// System-wide constants (register geometry, page/burst limits, field masks).
pub mod constants;
/// Error taxonomy for decode and address generation.
pub mod error;

pub use error::VectorError;
