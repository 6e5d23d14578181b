//! Global front-end constants.
//!
//! This module defines system-wide constants used across the front end. It includes:
//! 1. **Register Geometry:** Vector register width and count.
//! 2. **Bus Constants:** Page size, maximum burst length, native transfer width.
//! 3. **Instruction Constants:** Opcode masks and field shifts for vector decoding.

/// Vector register width in bits (VLEN).
pub const VLEN: u32 = 128;

/// Vector register width in bytes (VLENB).
pub const VLENB: u64 = (VLEN as u64) / 8;

/// Maximum supported element width in bits (ELEN).
pub const ELEN: u32 = 64;

/// Number of architectural vector registers.
pub const VREG_COUNT: usize = 32;

/// Page size in bytes (4KB). A single burst must never cross this boundary.
pub const PAGE_SIZE: u64 = 4096;

/// Mask for extracting the page offset from an address.
pub const PAGE_OFFSET_MASK: u64 = PAGE_SIZE - 1;

/// Maximum number of beats in a single bus burst.
pub const MAX_BURST_BEATS: u64 = 256;

/// Native bus transfer width in bytes per beat.
pub const BUS_WIDTH: u64 = 16;

/// Bit mask for extracting the major opcode field from an instruction.
pub const OPCODE_MASK: u32 = 0x7F;

/// Bit mask for extracting a 5-bit register field.
pub const REG_MASK: u32 = 0x1F;

/// Bit mask for extracting the funct6 field (bits 26-31).
pub const FUNCT6_MASK: u32 = 0x3F;

/// Bit mask for extracting the funct3 operand-class field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;

/// Number of width steps between the minimum (8-bit) and maximum (64-bit)
/// element width. EMUL arithmetic is bounded to this many steps either way.
pub const MAX_WIDTH_STEPS: i8 = 3;
