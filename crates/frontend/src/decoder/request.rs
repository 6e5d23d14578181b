//! Decoded micro-operation and address-generation request types.
//!
//! This module defines the signals the decoder exchanges with its
//! collaborators. It covers:
//! 1. **Micro-operations:** The operation tags handed to the backend lanes.
//! 2. **Backend requests:** One fully decoded instruction with operand slots.
//! 3. **Memory requests:** The address-generation parameters for loads/stores.
//! 4. **Scalar interface:** Issue and response records for the upstream core.

use crate::isa::vtype::{Lmul, Sew};

/// Operation tags for backend micro-operation requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MicroOp {
    /// Default value (integer add).
    #[default]
    Add,
    /// Integer subtract.
    Sub,
    /// Reverse subtract (scalar minus vector).
    Rsub,
    /// Unsigned minimum.
    Minu,
    /// Signed minimum.
    Min,
    /// Unsigned maximum.
    Maxu,
    /// Signed maximum.
    Max,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Compare equal, mask result.
    Mseq,
    /// Compare not-equal, mask result.
    Msne,
    /// Compare less-than unsigned, mask result.
    Msltu,
    /// Compare less-than signed, mask result.
    Mslt,
    /// Compare less-or-equal unsigned, mask result.
    Msleu,
    /// Compare less-or-equal signed, mask result.
    Msle,
    /// Compare greater-than unsigned, mask result.
    Msgtu,
    /// Compare greater-than signed, mask result.
    Msgt,
    /// Slide elements up by an offset.
    SlideUp,
    /// Slide elements down by an offset (offset zero is a plain copy; the
    /// reshuffle protocol relies on this).
    SlideDown,
    /// Slide up by one with scalar fill.
    Slide1Up,
    /// Slide down by one with scalar fill.
    Slide1Down,
    /// Merge under mask, or move when unmasked.
    Merge,
    /// Integer multiply, low half.
    Mul,
    /// Signed multiply, high half.
    Mulh,
    /// Unsigned multiply, high half.
    Mulhu,
    /// Signed-unsigned multiply, high half.
    Mulhsu,
    /// Multiply-add overwriting the multiplicand.
    Madd,
    /// Negated multiply-subtract.
    Nmsub,
    /// Multiply-accumulate.
    Macc,
    /// Negated multiply-accumulate.
    Nmsac,
    /// Zero extension from a narrower source width.
    Zext,
    /// Sign extension from a narrower source width.
    Sext,
    /// Mask AND-NOT.
    Mandn,
    /// Mask AND.
    Mand,
    /// Mask OR.
    Mor,
    /// Mask XOR.
    Mxor,
    /// Mask OR-NOT.
    Morn,
    /// Mask NAND.
    Mnand,
    /// Mask NOR.
    Mnor,
    /// Mask XNOR.
    Mxnor,
    /// Widening unsigned add.
    Waddu,
    /// Widening signed add.
    Wadd,
    /// Widening unsigned subtract.
    Wsubu,
    /// Widening signed subtract.
    Wsub,
    /// Widening unsigned multiply.
    Wmulu,
    /// Widening signed-unsigned multiply.
    Wmulsu,
    /// Widening signed multiply.
    Wmul,
    /// Widening unsigned multiply-accumulate.
    Wmaccu,
    /// Widening signed multiply-accumulate.
    Wmacc,
    /// Widening unsigned-signed multiply-accumulate.
    Wmaccus,
    /// Widening signed-unsigned multiply-accumulate.
    Wmaccsu,
    /// Floating-point add.
    FAdd,
    /// Floating-point subtract.
    FSub,
    /// Floating-point reverse subtract.
    FRsub,
    /// Floating-point minimum.
    FMin,
    /// Floating-point maximum.
    FMax,
    /// Floating-point sign injection.
    FSgnj,
    /// Floating-point sign injection, negated.
    FSgnjn,
    /// Floating-point sign injection, XOR.
    FSgnjx,
    /// Floating-point merge/move.
    FMerge,
    /// Floating-point divide.
    FDiv,
    /// Floating-point reverse divide.
    FRdiv,
    /// Floating-point multiply.
    FMul,
    /// Fused multiply-add overwriting the multiplicand.
    FMadd,
    /// Negated fused multiply-add.
    FNmadd,
    /// Fused multiply-subtract.
    FMsub,
    /// Negated fused multiply-subtract.
    FNmsub,
    /// Fused multiply-accumulate.
    FMacc,
    /// Negated fused multiply-accumulate.
    FNmacc,
    /// Fused multiply-subtract-accumulate.
    FMsac,
    /// Negated fused multiply-subtract-accumulate.
    FNmsac,
    /// Floating-point compare equal, mask result.
    Mfeq,
    /// Floating-point compare less-or-equal, mask result.
    Mfle,
    /// Floating-point compare less-than, mask result.
    Mflt,
    /// Floating-point compare not-equal, mask result.
    Mfne,
    /// Floating-point compare greater-than, mask result.
    Mfgt,
    /// Floating-point compare greater-or-equal, mask result.
    Mfge,
    /// Convert float to unsigned integer.
    FCvtFToXu,
    /// Convert float to signed integer.
    FCvtFToX,
    /// Convert unsigned integer to float.
    FCvtXuToF,
    /// Convert signed integer to float.
    FCvtXToF,
    /// Widening float-to-float conversion.
    FCvtWiden,
    /// Narrowing float-to-float conversion.
    FCvtNarrow,
    /// Widening floating-point add.
    FWadd,
    /// Widening floating-point subtract.
    FWsub,
    /// Widening floating-point multiply.
    FWmul,
    /// Widening fused multiply-accumulate.
    FWmacc,
    /// Widening negated fused multiply-accumulate.
    FWnmacc,
    /// Widening fused multiply-subtract-accumulate.
    FWmsac,
    /// Widening negated fused multiply-subtract-accumulate.
    FWnmsac,
    /// Vector load.
    Load,
    /// Vector store.
    Store,
}

/// One operand slot of a backend request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operand {
    /// Register index (0..31).
    pub reg: u8,
    /// Whether this slot participates in the operation.
    pub used: bool,
    /// Effective element width for this operand.
    pub sew: Sew,
}

impl Operand {
    /// An active operand slot.
    pub fn active(reg: u8, sew: Sew) -> Self {
        Self {
            reg,
            used: true,
            sew,
        }
    }
}

/// One decoded micro-operation, constructed fresh each decode step and
/// handed to the backend as soon as it is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackendRequest {
    /// Operation tag.
    pub op: MicroOp,
    /// Destination register slot.
    pub vd: Operand,
    /// First vector source slot (the rs1 position).
    pub vs1: Operand,
    /// Second vector source slot.
    pub vs2: Operand,
    /// Immediate or scalar register operand value.
    pub scalar: u64,
    /// Whether the operation is executed under the v0 mask.
    pub masked: bool,
    /// Effective group multiplier of the destination.
    pub emul: Lmul,
    /// Effective element count for this operation.
    pub evl: u64,
    /// Whether the backend must swap vs2 and the vs1/scalar operand.
    pub swap_operands: bool,
    /// Whether the destination register is read as an extra source before
    /// being overwritten (multiply-accumulate family).
    pub vd_is_source: bool,
    /// In-flight instruction tag.
    pub tag: u8,
}

/// Transfer direction of a memory operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Memory to register file.
    #[default]
    Load,
    /// Register file to memory.
    Store,
}

/// Addressing mode of a memory request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddressMode {
    /// Contiguous, one element after another.
    #[default]
    Unit,
    /// Constant byte stride between consecutive elements.
    Strided,
    /// Per-element byte offsets from the base address; the offsets come from
    /// an index register group read by the lanes, so the issuer fills
    /// [`MemRequest::offsets`] before the request reaches address generation.
    Indexed,
}

/// Address-generation parameters for one vector load or store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemRequest {
    /// Base byte address.
    pub base: u64,
    /// Number of elements to transfer.
    pub elements: u64,
    /// Byte stride between elements; equals the element size for
    /// unit-stride requests.
    pub stride: i64,
    /// Effective element width.
    pub sew: Sew,
    /// Transfer direction.
    pub dir: Direction,
    /// Addressing mode.
    pub mode: AddressMode,
    /// Whether contiguous multi-beat bursts may be used; only unit-stride
    /// requests qualify.
    pub burst_eligible: bool,
    /// Per-element byte offsets for [`AddressMode::Indexed`]; empty for the
    /// other modes.
    pub offsets: Vec<u64>,
    /// Tag of the originating instruction.
    pub tag: u8,
}

/// One instruction presented by the scalar core, with its operand values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Issue {
    /// Encoded instruction word.
    pub inst: u32,
    /// Value of the scalar register in the rs1 position.
    pub rs1: u64,
    /// Value of the scalar register in the rs2 position.
    pub rs2: u64,
    /// Tag identifying this instruction while in flight.
    pub tag: u8,
}

/// Signals sampled from the backend each decode step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackendSignals {
    /// All backend lanes drained.
    pub idle: bool,
    /// Backend accepts the request presented this step.
    pub accept: bool,
    /// Error flag accompanying a completion pulse.
    pub error: bool,
    /// A pending load finished this step.
    pub load_complete: bool,
    /// A pending store finished this step.
    pub store_complete: bool,
    /// OR-reduced floating-point exception flags from the lanes.
    pub fflags: u8,
}

/// Response returned to the scalar core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// Result value (new `vl` for configuration instructions, zero
    /// otherwise).
    pub value: u64,
    /// A pending load/store completed.
    pub mem_complete: bool,
    /// The instruction failed (illegal encoding or backend error).
    pub error: bool,
    /// Raw floating-point exception flags.
    pub fflags: u8,
}

/// Everything one decode step produces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepOutput {
    /// The presented instruction was consumed this step; the scalar core
    /// may advance. When false the same instruction must be presented again.
    pub accepted: bool,
    /// Scalar-core response, when one is due this step.
    pub response: Option<Response>,
    /// Backend micro-operation request emitted this step.
    pub request: Option<BackendRequest>,
    /// Address-generation request for loads/stores.
    pub mem_request: Option<MemRequest>,
}
