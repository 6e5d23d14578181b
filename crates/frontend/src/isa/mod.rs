//! Vector instruction set encodings.
//!
//! Field extraction and encoding constants for the RISC-V V-extension opcode
//! space: major opcodes, operand-class codes (funct3), function codes (funct6),
//! memory addressing/width fields, and the `vtype` CSR layout.

/// Instruction field extraction trait for raw 32-bit encodings.
pub mod bits;
/// Operand-class (funct3) codes under the vector major opcode.
pub mod funct3;
/// 6-bit function codes for the arithmetic/logical opcode groups.
pub mod funct6;
/// Memory addressing-mode and width field codes for vector loads/stores.
pub mod mem;
/// Major opcodes carrying vector instructions.
pub mod opcodes;
/// Element width, group multiplier, and `vtype` CSR field types.
pub mod vtype;
