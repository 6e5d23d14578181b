//! Data-driven dispatch for the arithmetic/logical opcode space.
//!
//! Every (operand class, funct6) pair maps to a small [`OpSpec`] descriptor
//! carrying the operation tag, the width-resize behavior, and the legality
//! flags the decoder needs. The unary groups (extension, conversion) key on
//! the vs1 field as well. Keeping the whole opcode space in one lookup makes
//! each entry individually testable.

use crate::decoder::request::MicroOp;
use crate::isa::funct3;
use crate::isa::funct6::{ext, fcvt, opf, opi, opm};

/// Operand sourcing class, decoded from funct3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandClass {
    /// Integer vector-vector.
    Ivv,
    /// Integer vector-scalar (integer register).
    Ivx,
    /// Integer vector-immediate.
    Ivi,
    /// Mask/multiply vector-vector.
    Mvv,
    /// Mask/multiply vector-scalar.
    Mvx,
    /// Floating-point vector-vector.
    Fvv,
    /// Floating-point vector-scalar (FP register).
    Fvf,
}

impl OperandClass {
    /// Maps a funct3 value to its class; the configuration class has no
    /// dispatch entry.
    pub fn from_funct3(funct3: u32) -> Option<Self> {
        match funct3 {
            funct3::OPIVV => Some(Self::Ivv),
            funct3::OPFVV => Some(Self::Fvv),
            funct3::OPMVV => Some(Self::Mvv),
            funct3::OPIVI => Some(Self::Ivi),
            funct3::OPIVX => Some(Self::Ivx),
            funct3::OPFVF => Some(Self::Fvf),
            funct3::OPMVX => Some(Self::Mvx),
            _ => None,
        }
    }

    /// Whether the rs1 position names a vector register (as opposed to a
    /// scalar register or immediate).
    pub fn vs1_is_vector(self) -> bool {
        matches!(self, Self::Ivv | Self::Mvv | Self::Fvv)
    }

    /// Whether this class is a floating-point form.
    pub fn is_fp(self) -> bool {
        matches!(self, Self::Fvv | Self::Fvf)
    }
}

/// How an operation's element widths relate to the configured width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Resize {
    /// All operands at the configured width.
    #[default]
    Same,
    /// Sources at the configured width, destination one step wider.
    WideDest,
    /// Destination and vs2 one step wider, vs1 at the configured width
    /// (the ".w" forms).
    WideSrc2,
    /// vs2 one step wider, destination and shift amount at the configured
    /// width; the second operand is zero-extended by the backend.
    NarrowSrc2,
    /// vs2 one width step below the destination (extension by 2).
    ExtendHalf,
    /// vs2 two width steps below the destination (extension by 4).
    ExtendQuarter,
    /// vs2 three width steps below the destination (extension by 8).
    ExtendEighth,
}

impl Resize {
    /// Width-step delta of the destination relative to the configured width.
    pub fn dest_delta(self) -> i8 {
        match self {
            Self::WideDest | Self::WideSrc2 => 1,
            _ => 0,
        }
    }

    /// Width-step delta of vs2 relative to the configured width.
    pub fn vs2_delta(self) -> i8 {
        match self {
            Self::WideSrc2 | Self::NarrowSrc2 => 1,
            Self::ExtendHalf => -1,
            Self::ExtendQuarter => -2,
            Self::ExtendEighth => -3,
            _ => 0,
        }
    }
}

/// Dispatch descriptor for one opcode-space entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpSpec {
    /// Operation tag forwarded to the backend.
    pub op: MicroOp,
    /// Operand width relationship.
    pub resize: Resize,
    /// The destination is read as an extra source before being overwritten.
    pub vd_is_source: bool,
    /// The destination holds a one-bit-per-element mask result.
    pub mask_result: bool,
    /// Both vector sources are single mask registers (the mask-logic
    /// forms), exempt from the group alignment rule.
    pub mask_sources: bool,
    /// The backend must swap the two operands (reverse-operand forms).
    pub swap_operands: bool,
    /// The rs1 position is a sub-operation code, not an operand (extension
    /// and conversion groups).
    pub unary: bool,
    /// The immediate form takes an unsigned 5-bit value (shift amounts and
    /// slide offsets) instead of the default sign-extended one.
    pub zext_imm: bool,
}

impl OpSpec {
    const fn new(op: MicroOp) -> Self {
        Self {
            op,
            resize: Resize::Same,
            vd_is_source: false,
            mask_result: false,
            mask_sources: false,
            swap_operands: false,
            unary: false,
            zext_imm: false,
        }
    }

    const fn resize(mut self, resize: Resize) -> Self {
        self.resize = resize;
        self
    }

    const fn vd_source(mut self) -> Self {
        self.vd_is_source = true;
        self
    }

    const fn mask(mut self) -> Self {
        self.mask_result = true;
        self
    }

    const fn mask_logic(mut self) -> Self {
        self.mask_result = true;
        self.mask_sources = true;
        self
    }

    const fn swapped(mut self) -> Self {
        self.swap_operands = true;
        self
    }

    const fn unary(mut self) -> Self {
        self.unary = true;
        self
    }

    const fn uimm(mut self) -> Self {
        self.zext_imm = true;
        self
    }
}

/// Looks up the dispatch entry for one instruction.
///
/// `vs1` is the raw rs1-position field, consulted only by the unary groups
/// where it selects the sub-operation. Returns `None` for every encoding
/// the front end does not recognize, which the decoder reports as an
/// illegal instruction.
pub fn lookup(class: OperandClass, funct6: u32, vs1: u8) -> Option<OpSpec> {
    match class {
        OperandClass::Ivv | OperandClass::Ivx | OperandClass::Ivi => lookup_opi(class, funct6),
        OperandClass::Mvv | OperandClass::Mvx => lookup_opm(class, funct6, vs1),
        OperandClass::Fvv | OperandClass::Fvf => lookup_opf(class, funct6, vs1),
    }
}

fn lookup_opi(class: OperandClass, funct6: u32) -> Option<OpSpec> {
    use MicroOp as Op;
    let spec = match funct6 {
        opi::VADD => OpSpec::new(Op::Add),
        // vsub has no .vi form; vrsub exists only in the scalar forms.
        opi::VSUB if class != OperandClass::Ivi => OpSpec::new(Op::Sub),
        opi::VRSUB if class != OperandClass::Ivv => OpSpec::new(Op::Rsub).swapped(),
        opi::VMINU if class != OperandClass::Ivi => OpSpec::new(Op::Minu),
        opi::VMIN if class != OperandClass::Ivi => OpSpec::new(Op::Min),
        opi::VMAXU if class != OperandClass::Ivi => OpSpec::new(Op::Maxu),
        opi::VMAX if class != OperandClass::Ivi => OpSpec::new(Op::Max),
        opi::VAND => OpSpec::new(Op::And),
        opi::VOR => OpSpec::new(Op::Or),
        opi::VXOR => OpSpec::new(Op::Xor),
        opi::VSLIDEUP if class != OperandClass::Ivv => OpSpec::new(Op::SlideUp).uimm(),
        opi::VSLIDEDOWN if class != OperandClass::Ivv => OpSpec::new(Op::SlideDown).uimm(),
        opi::VMERGE => OpSpec::new(Op::Merge),
        opi::VMSEQ => OpSpec::new(Op::Mseq).mask(),
        opi::VMSNE => OpSpec::new(Op::Msne).mask(),
        opi::VMSLTU if class != OperandClass::Ivi => OpSpec::new(Op::Msltu).mask(),
        opi::VMSLT if class != OperandClass::Ivi => OpSpec::new(Op::Mslt).mask(),
        opi::VMSLEU => OpSpec::new(Op::Msleu).mask(),
        opi::VMSLE => OpSpec::new(Op::Msle).mask(),
        opi::VMSGTU if class != OperandClass::Ivv => OpSpec::new(Op::Msgtu).mask(),
        opi::VMSGT if class != OperandClass::Ivv => OpSpec::new(Op::Msgt).mask(),
        opi::VSLL => OpSpec::new(Op::Sll).uimm(),
        opi::VSRL => OpSpec::new(Op::Srl).uimm(),
        opi::VSRA => OpSpec::new(Op::Sra).uimm(),
        opi::VNSRL => OpSpec::new(Op::Srl).resize(Resize::NarrowSrc2).uimm(),
        opi::VNSRA => OpSpec::new(Op::Sra).resize(Resize::NarrowSrc2).uimm(),
        _ => return None,
    };
    Some(spec)
}

fn lookup_opm(class: OperandClass, funct6: u32, vs1: u8) -> Option<OpSpec> {
    use MicroOp as Op;
    let spec = match funct6 {
        opm::VXUNARY0 if class == OperandClass::Mvv => match u32::from(vs1) {
            ext::ZEXT_VF2 => OpSpec::new(Op::Zext).resize(Resize::ExtendHalf).unary(),
            ext::SEXT_VF2 => OpSpec::new(Op::Sext).resize(Resize::ExtendHalf).unary(),
            ext::ZEXT_VF4 => OpSpec::new(Op::Zext).resize(Resize::ExtendQuarter).unary(),
            ext::SEXT_VF4 => OpSpec::new(Op::Sext).resize(Resize::ExtendQuarter).unary(),
            ext::ZEXT_VF8 => OpSpec::new(Op::Zext).resize(Resize::ExtendEighth).unary(),
            ext::SEXT_VF8 => OpSpec::new(Op::Sext).resize(Resize::ExtendEighth).unary(),
            _ => return None,
        },
        opm::VSLIDE1UP if class == OperandClass::Mvx => OpSpec::new(Op::Slide1Up),
        opm::VSLIDE1DOWN if class == OperandClass::Mvx => OpSpec::new(Op::Slide1Down),
        opm::VMANDN if class == OperandClass::Mvv => OpSpec::new(Op::Mandn).mask_logic(),
        opm::VMAND if class == OperandClass::Mvv => OpSpec::new(Op::Mand).mask_logic(),
        opm::VMOR if class == OperandClass::Mvv => OpSpec::new(Op::Mor).mask_logic(),
        opm::VMXOR if class == OperandClass::Mvv => OpSpec::new(Op::Mxor).mask_logic(),
        opm::VMORN if class == OperandClass::Mvv => OpSpec::new(Op::Morn).mask_logic(),
        opm::VMNAND if class == OperandClass::Mvv => OpSpec::new(Op::Mnand).mask_logic(),
        opm::VMNOR if class == OperandClass::Mvv => OpSpec::new(Op::Mnor).mask_logic(),
        opm::VMXNOR if class == OperandClass::Mvv => OpSpec::new(Op::Mxnor).mask_logic(),
        opm::VMULHU => OpSpec::new(Op::Mulhu),
        opm::VMUL => OpSpec::new(Op::Mul),
        opm::VMULHSU => OpSpec::new(Op::Mulhsu),
        opm::VMULH => OpSpec::new(Op::Mulh),
        opm::VMADD => OpSpec::new(Op::Madd).vd_source(),
        opm::VNMSUB => OpSpec::new(Op::Nmsub).vd_source(),
        opm::VMACC => OpSpec::new(Op::Macc).vd_source(),
        opm::VNMSAC => OpSpec::new(Op::Nmsac).vd_source(),
        opm::VWADDU => OpSpec::new(Op::Waddu).resize(Resize::WideDest),
        opm::VWADD => OpSpec::new(Op::Wadd).resize(Resize::WideDest),
        opm::VWSUBU => OpSpec::new(Op::Wsubu).resize(Resize::WideDest),
        opm::VWSUB => OpSpec::new(Op::Wsub).resize(Resize::WideDest),
        opm::VWADDU_W => OpSpec::new(Op::Waddu).resize(Resize::WideSrc2),
        opm::VWADD_W => OpSpec::new(Op::Wadd).resize(Resize::WideSrc2),
        opm::VWSUBU_W => OpSpec::new(Op::Wsubu).resize(Resize::WideSrc2),
        opm::VWSUB_W => OpSpec::new(Op::Wsub).resize(Resize::WideSrc2),
        opm::VWMULU => OpSpec::new(Op::Wmulu).resize(Resize::WideDest),
        opm::VWMULSU => OpSpec::new(Op::Wmulsu).resize(Resize::WideDest),
        opm::VWMUL => OpSpec::new(Op::Wmul).resize(Resize::WideDest),
        opm::VWMACCU => OpSpec::new(Op::Wmaccu).resize(Resize::WideDest).vd_source(),
        opm::VWMACC => OpSpec::new(Op::Wmacc).resize(Resize::WideDest).vd_source(),
        opm::VWMACCUS if class == OperandClass::Mvx => {
            OpSpec::new(Op::Wmaccus).resize(Resize::WideDest).vd_source()
        }
        opm::VWMACCSU => OpSpec::new(Op::Wmaccsu).resize(Resize::WideDest).vd_source(),
        _ => return None,
    };
    Some(spec)
}

fn lookup_opf(class: OperandClass, funct6: u32, vs1: u8) -> Option<OpSpec> {
    use MicroOp as Op;
    let spec = match funct6 {
        opf::VFADD => OpSpec::new(Op::FAdd),
        opf::VFSUB => OpSpec::new(Op::FSub),
        opf::VFMIN => OpSpec::new(Op::FMin),
        opf::VFMAX => OpSpec::new(Op::FMax),
        opf::VFSGNJ => OpSpec::new(Op::FSgnj),
        opf::VFSGNJN => OpSpec::new(Op::FSgnjn),
        opf::VFSGNJX => OpSpec::new(Op::FSgnjx),
        opf::VFUNARY0 if class == OperandClass::Fvv => match u32::from(vs1) {
            fcvt::F_TO_XU => OpSpec::new(Op::FCvtFToXu).unary(),
            fcvt::F_TO_X => OpSpec::new(Op::FCvtFToX).unary(),
            fcvt::XU_TO_F => OpSpec::new(Op::FCvtXuToF).unary(),
            fcvt::X_TO_F => OpSpec::new(Op::FCvtXToF).unary(),
            fcvt::WIDEN_F_TO_F => OpSpec::new(Op::FCvtWiden).resize(Resize::WideDest).unary(),
            fcvt::NARROW_F_TO_F => OpSpec::new(Op::FCvtNarrow).resize(Resize::NarrowSrc2).unary(),
            _ => return None,
        },
        opf::VFMERGE if class == OperandClass::Fvf => OpSpec::new(Op::FMerge),
        opf::VMFEQ => OpSpec::new(Op::Mfeq).mask(),
        opf::VMFLE => OpSpec::new(Op::Mfle).mask(),
        opf::VMFLT => OpSpec::new(Op::Mflt).mask(),
        opf::VMFNE => OpSpec::new(Op::Mfne).mask(),
        opf::VMFGT if class == OperandClass::Fvf => OpSpec::new(Op::Mfgt).mask(),
        opf::VMFGE if class == OperandClass::Fvf => OpSpec::new(Op::Mfge).mask(),
        opf::VFDIV => OpSpec::new(Op::FDiv),
        opf::VFRDIV if class == OperandClass::Fvf => OpSpec::new(Op::FRdiv).swapped(),
        opf::VFMUL => OpSpec::new(Op::FMul),
        opf::VFRSUB if class == OperandClass::Fvf => OpSpec::new(Op::FRsub).swapped(),
        opf::VFMADD => OpSpec::new(Op::FMadd).vd_source(),
        opf::VFNMADD => OpSpec::new(Op::FNmadd).vd_source(),
        opf::VFMSUB => OpSpec::new(Op::FMsub).vd_source(),
        opf::VFNMSUB => OpSpec::new(Op::FNmsub).vd_source(),
        opf::VFMACC => OpSpec::new(Op::FMacc).vd_source(),
        opf::VFNMACC => OpSpec::new(Op::FNmacc).vd_source(),
        opf::VFMSAC => OpSpec::new(Op::FMsac).vd_source(),
        opf::VFNMSAC => OpSpec::new(Op::FNmsac).vd_source(),
        opf::VFWADD => OpSpec::new(Op::FWadd).resize(Resize::WideDest),
        opf::VFWSUB => OpSpec::new(Op::FWsub).resize(Resize::WideDest),
        opf::VFWADD_W => OpSpec::new(Op::FWadd).resize(Resize::WideSrc2),
        opf::VFWSUB_W => OpSpec::new(Op::FWsub).resize(Resize::WideSrc2),
        opf::VFWMUL => OpSpec::new(Op::FWmul).resize(Resize::WideDest),
        opf::VFWMACC => OpSpec::new(Op::FWmacc).resize(Resize::WideDest).vd_source(),
        opf::VFWNMACC => OpSpec::new(Op::FWnmacc).resize(Resize::WideDest).vd_source(),
        opf::VFWMSAC => OpSpec::new(Op::FWmsac).resize(Resize::WideDest).vd_source(),
        opf::VFWNMSAC => OpSpec::new(Op::FWnmsac).resize(Resize::WideDest).vd_source(),
        _ => return None,
    };
    Some(spec)
}
