//! Major opcodes carrying vector instructions.
//!
//! Defines the major opcodes (bits 6-0) the front end accepts.

/// Vector arithmetic/logical and configuration instructions (OP-V).
pub const OP_V: u32 = 0b1010111;

/// Vector load instructions (shared with scalar FP loads, LOAD-FP).
pub const OP_LOAD_V: u32 = 0b0000111;

/// Vector store instructions (shared with scalar FP stores, STORE-FP).
pub const OP_STORE_V: u32 = 0b0100111;
