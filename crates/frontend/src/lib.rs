//! Vector coprocessor front-end library.
//!
//! This crate implements the control logic of a RISC-V "V"-extension coprocessor
//! front end with the following:
//! 1. **Decoder:** Vector configuration state (`vl`/`vstart`/`vtype`), per-register
//!    element-width tracking, and decode/dispatch of vector instructions into
//!    backend micro-operation requests.
//! 2. **Address generator:** Translation of vector memory micro-operations into
//!    page-bounded, burst-length-bounded bus burst descriptors.
//! 3. **ISA:** Field extraction and encoding tables for the vector opcode space.
//! 4. **Configuration:** Hierarchical, JSON-deserializable hardware parameters.
//!
//! Execution lanes, the floating-point pipeline, the scalar core, and the bus
//! fabric are external collaborators reached through the plain-data signal
//! structures in [`decoder`] and [`agu`].

/// Address generator (burst emission, descriptor queue, memory-unit channel).
pub mod agu;
/// Common types and constants (errors, page/burst limits, field masks).
pub mod common;
/// Front-end configuration (defaults and hierarchical config structures).
pub mod config;
/// Vector configuration state and instruction decode/dispatch.
pub mod decoder;
/// Vector instruction set encodings (opcodes, operand classes, function codes).
pub mod isa;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Address generation engine; feed with [`decoder::MemRequest`] values.
pub use crate::agu::AddressGenerator;
/// Main decode/dispatch unit; advance with [`decoder::Decoder::step`].
pub use crate::decoder::Decoder;
