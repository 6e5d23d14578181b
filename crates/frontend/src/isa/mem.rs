//! Memory addressing-mode and width field codes for vector loads/stores.
//!
//! Vector memory instructions carry a 2-bit addressing-mode field (`mop`), a
//! 3-bit width field selecting the effective element width, and a 5-bit
//! sub-mode field (`lumop`/`sumop`) that carves composite behaviors (mask and
//! whole-register accesses) out of the unit-stride space.

/// Unit-stride addressing (`mop = 00`).
pub const MOP_UNIT: u32 = 0b00;

/// Indexed-unordered addressing (`mop = 01`).
pub const MOP_INDEXED_UNORDERED: u32 = 0b01;

/// Strided addressing, byte stride in rs2 (`mop = 10`).
pub const MOP_STRIDED: u32 = 0b10;

/// Indexed-ordered addressing (`mop = 11`).
pub const MOP_INDEXED_ORDERED: u32 = 0b11;

/// Unit-stride sub-mode: plain access.
pub const UMOP_UNIT: u32 = 0b00000;

/// Unit-stride sub-mode: whole register group; the nf field encodes the
/// register count and the access executes regardless of `vl`.
pub const UMOP_WHOLE_REG: u32 = 0b01000;

/// Unit-stride sub-mode: mask access; element width forced to 8 bits and
/// the effective length is `ceil(vl / 8)` bytes.
pub const UMOP_MASK: u32 = 0b01011;

/// Width field code for 8-bit elements.
pub const WIDTH_E8: u32 = 0b000;

/// Width field code for 16-bit elements.
pub const WIDTH_E16: u32 = 0b101;

/// Width field code for 32-bit elements.
pub const WIDTH_E32: u32 = 0b110;

/// Width field code for 64-bit elements.
pub const WIDTH_E64: u32 = 0b111;
