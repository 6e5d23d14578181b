//! Vector instruction field extraction.
//!
//! Provides bit extraction for vector instruction fields from 32-bit
//! encodings: register indices, operand class, function code, mask bit, and
//! the memory and configuration sub-fields.

use crate::common::constants::{FUNCT3_MASK, FUNCT6_MASK, OPCODE_MASK, REG_MASK};

/// Trait for extracting vector instruction fields from encoded instructions.
///
/// All OP-V and vector load/store formats share the same field positions for
/// the destination register, scalar source, vector sources, operand class,
/// and mask bit; the memory and configuration fields overlay bits 20-31.
pub trait VInstructionBits {
    /// Extracts the major opcode (bits 0-6).
    fn opcode(&self) -> u32;
    /// Extracts the destination register field `vd`/`rd` (bits 7-11).
    fn vd(&self) -> u8;
    /// Extracts the scalar source register field `rs1` (bits 15-19), which
    /// doubles as `vs1`, the 5-bit immediate, and the unary sub-code.
    fn rs1(&self) -> u8;
    /// Extracts the second vector source field `vs2`/`rs2` (bits 20-24).
    fn vs2(&self) -> u8;
    /// Extracts the operand-class field funct3 (bits 12-14).
    fn funct3(&self) -> u32;
    /// Extracts the function code funct6 (bits 26-31).
    fn funct6(&self) -> u32;
    /// Extracts the mask-enable bit `vm` (bit 25); 0 means masked.
    fn vm(&self) -> bool;
    /// Extracts the memory addressing-mode field `mop` (bits 26-27).
    fn mop(&self) -> u32;
    /// Extracts the field count `nf` (bits 29-31) of a memory instruction.
    fn nf(&self) -> u32;
    /// Extracts the unit-stride sub-mode field `lumop`/`sumop` (bits 20-24).
    fn umop(&self) -> u32;
    /// Extracts the memory width field (bits 12-14).
    fn mem_width(&self) -> u32;
    /// Extracts the 11-bit `vtype` immediate of `vsetvli` (bits 20-30).
    fn zimm11(&self) -> u32;
    /// Extracts the 10-bit `vtype` immediate of `vsetivli` (bits 20-29).
    fn zimm10(&self) -> u32;
    /// Sign-extends the 5-bit immediate in the rs1 position (OPIVI).
    fn simm5(&self) -> i64;
}

impl VInstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn vd(&self) -> u8 {
        ((self >> 7) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rs1(&self) -> u8 {
        ((self >> 15) & REG_MASK) as u8
    }

    #[inline(always)]
    fn vs2(&self) -> u8 {
        ((self >> 20) & REG_MASK) as u8
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct6(&self) -> u32 {
        (self >> 26) & FUNCT6_MASK
    }

    #[inline(always)]
    fn vm(&self) -> bool {
        (self >> 25) & 1 != 0
    }

    #[inline(always)]
    fn mop(&self) -> u32 {
        (self >> 26) & 0x3
    }

    #[inline(always)]
    fn nf(&self) -> u32 {
        (self >> 29) & 0x7
    }

    #[inline(always)]
    fn umop(&self) -> u32 {
        (self >> 20) & REG_MASK
    }

    #[inline(always)]
    fn mem_width(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn zimm11(&self) -> u32 {
        (self >> 20) & 0x7FF
    }

    #[inline(always)]
    fn zimm10(&self) -> u32 {
        (self >> 20) & 0x3FF
    }

    #[inline(always)]
    fn simm5(&self) -> i64 {
        i64::from((((self >> 15) & REG_MASK) as i32) << 27 >> 27)
    }
}
