//! Operand-class codes (funct3) under the vector major opcode.
//!
//! The funct3 field selects the operand sourcing for an OP-V instruction:
//! vector-vector, vector-scalar (integer register or immediate), the
//! floating-point analogues, or the configuration (vset*) group.

/// Integer vector-vector (`.vv`) operands.
pub const OPIVV: u32 = 0b000;

/// Floating-point vector-vector (`.vv`) operands.
pub const OPFVV: u32 = 0b001;

/// Integer vector-vector under the mask/multiply group (`.vv`).
pub const OPMVV: u32 = 0b010;

/// Integer vector with sign-extended 5-bit immediate (`.vi`).
pub const OPIVI: u32 = 0b011;

/// Integer vector with scalar integer register (`.vx`).
pub const OPIVX: u32 = 0b100;

/// Floating-point vector with scalar FP register (`.vf`).
pub const OPFVF: u32 = 0b101;

/// Mask/multiply group with scalar integer register (`.vx`).
pub const OPMVX: u32 = 0b110;

/// Configuration instructions (`vsetvli`/`vsetivli`/`vsetvl`).
pub const OPCFG: u32 = 0b111;
