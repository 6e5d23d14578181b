//! 6-bit function codes for the vector arithmetic/logical opcode groups.
//!
//! The funct6 field (bits 31-26) selects the operation within an operand
//! class. The same code can mean different operations in the OPI (integer),
//! OPM (mask/multiply), and OPF (floating-point) groups, so the constants are
//! split into one module per group.

/// Function codes shared by OPIVV/OPIVX/OPIVI.
pub mod opi {
    /// Integer add (`vadd`).
    pub const VADD: u32 = 0b000000;
    /// Integer subtract (`vsub`).
    pub const VSUB: u32 = 0b000010;
    /// Reverse subtract, scalar minus vector (`vrsub`).
    pub const VRSUB: u32 = 0b000011;
    /// Unsigned minimum (`vminu`).
    pub const VMINU: u32 = 0b000100;
    /// Signed minimum (`vmin`).
    pub const VMIN: u32 = 0b000101;
    /// Unsigned maximum (`vmaxu`).
    pub const VMAXU: u32 = 0b000110;
    /// Signed maximum (`vmax`).
    pub const VMAX: u32 = 0b000111;
    /// Bitwise AND (`vand`).
    pub const VAND: u32 = 0b001001;
    /// Bitwise OR (`vor`).
    pub const VOR: u32 = 0b001010;
    /// Bitwise XOR (`vxor`).
    pub const VXOR: u32 = 0b001011;
    /// Slide up by offset (`vslideup`).
    pub const VSLIDEUP: u32 = 0b001110;
    /// Slide down by offset (`vslidedown`).
    pub const VSLIDEDOWN: u32 = 0b001111;
    /// Merge under mask, or whole-register/scalar move when unmasked
    /// (`vmerge`/`vmv.v`).
    pub const VMERGE: u32 = 0b010111;
    /// Compare equal, mask result (`vmseq`).
    pub const VMSEQ: u32 = 0b011000;
    /// Compare not-equal, mask result (`vmsne`).
    pub const VMSNE: u32 = 0b011001;
    /// Compare less-than unsigned, mask result (`vmsltu`).
    pub const VMSLTU: u32 = 0b011010;
    /// Compare less-than signed, mask result (`vmslt`).
    pub const VMSLT: u32 = 0b011011;
    /// Compare less-or-equal unsigned, mask result (`vmsleu`).
    pub const VMSLEU: u32 = 0b011100;
    /// Compare less-or-equal signed, mask result (`vmsle`).
    pub const VMSLE: u32 = 0b011101;
    /// Compare greater-than unsigned, mask result (`vmsgtu`).
    pub const VMSGTU: u32 = 0b011110;
    /// Compare greater-than signed, mask result (`vmsgt`).
    pub const VMSGT: u32 = 0b011111;
    /// Shift left logical (`vsll`).
    pub const VSLL: u32 = 0b100101;
    /// Shift right logical (`vsrl`).
    pub const VSRL: u32 = 0b101000;
    /// Shift right arithmetic (`vsra`).
    pub const VSRA: u32 = 0b101001;
    /// Narrowing shift right logical (`vnsrl`); vs2 is read one width step
    /// wider than the destination and the shift amount is zero-extended.
    pub const VNSRL: u32 = 0b101100;
    /// Narrowing shift right arithmetic (`vnsra`).
    pub const VNSRA: u32 = 0b101101;
}

/// Function codes shared by OPMVV/OPMVX.
pub mod opm {
    /// Sign/zero extension group (`vzext`/`vsext`); the vs1 field selects the
    /// extension mode (see [`super::ext`]).
    pub const VXUNARY0: u32 = 0b010010;
    /// Mask AND-NOT (`vmandn`).
    pub const VMANDN: u32 = 0b011000;
    /// Mask AND (`vmand`).
    pub const VMAND: u32 = 0b011001;
    /// Mask OR (`vmor`).
    pub const VMOR: u32 = 0b011010;
    /// Mask XOR (`vmxor`).
    pub const VMXOR: u32 = 0b011011;
    /// Mask OR-NOT (`vmorn`).
    pub const VMORN: u32 = 0b011100;
    /// Mask NAND (`vmnand`).
    pub const VMNAND: u32 = 0b011101;
    /// Mask NOR (`vmnor`).
    pub const VMNOR: u32 = 0b011110;
    /// Mask XNOR (`vmxnor`).
    pub const VMXNOR: u32 = 0b011111;
    /// Slide up by one, scalar fill (`vslide1up`, OPMVX only).
    pub const VSLIDE1UP: u32 = 0b001110;
    /// Slide down by one, scalar fill (`vslide1down`, OPMVX only).
    pub const VSLIDE1DOWN: u32 = 0b001111;
    /// Unsigned multiply, high half (`vmulhu`).
    pub const VMULHU: u32 = 0b100100;
    /// Multiply, low half (`vmul`).
    pub const VMUL: u32 = 0b100101;
    /// Signed-unsigned multiply, high half (`vmulhsu`).
    pub const VMULHSU: u32 = 0b100110;
    /// Signed multiply, high half (`vmulh`).
    pub const VMULH: u32 = 0b100111;
    /// Multiply-add, overwriting multiplicand (`vmadd`); vd is also a source.
    pub const VMADD: u32 = 0b101001;
    /// Negated multiply-subtract (`vnmsub`); vd is also a source.
    pub const VNMSUB: u32 = 0b101011;
    /// Multiply-accumulate (`vmacc`); vd is also a source.
    pub const VMACC: u32 = 0b101101;
    /// Negated multiply-accumulate (`vnmsac`); vd is also a source.
    pub const VNMSAC: u32 = 0b101111;
    /// Widening unsigned add (`vwaddu`).
    pub const VWADDU: u32 = 0b110000;
    /// Widening signed add (`vwadd`).
    pub const VWADD: u32 = 0b110001;
    /// Widening unsigned subtract (`vwsubu`).
    pub const VWSUBU: u32 = 0b110010;
    /// Widening signed subtract (`vwsub`).
    pub const VWSUB: u32 = 0b110011;
    /// Widening unsigned add, wide first operand (`vwaddu.w`).
    pub const VWADDU_W: u32 = 0b110100;
    /// Widening signed add, wide first operand (`vwadd.w`).
    pub const VWADD_W: u32 = 0b110101;
    /// Widening unsigned subtract, wide first operand (`vwsubu.w`).
    pub const VWSUBU_W: u32 = 0b110110;
    /// Widening signed subtract, wide first operand (`vwsub.w`).
    pub const VWSUB_W: u32 = 0b110111;
    /// Widening unsigned multiply (`vwmulu`).
    pub const VWMULU: u32 = 0b111000;
    /// Widening signed-unsigned multiply (`vwmulsu`).
    pub const VWMULSU: u32 = 0b111010;
    /// Widening signed multiply (`vwmul`).
    pub const VWMUL: u32 = 0b111011;
    /// Widening unsigned multiply-accumulate (`vwmaccu`); vd is also a source.
    pub const VWMACCU: u32 = 0b111100;
    /// Widening signed multiply-accumulate (`vwmacc`); vd is also a source.
    pub const VWMACC: u32 = 0b111101;
    /// Widening unsigned-signed multiply-accumulate (`vwmaccus`, OPMVX only).
    pub const VWMACCUS: u32 = 0b111110;
    /// Widening signed-unsigned multiply-accumulate (`vwmaccsu`).
    pub const VWMACCSU: u32 = 0b111111;
}

/// Function codes shared by OPFVV/OPFVF.
pub mod opf {
    /// Floating-point add (`vfadd`).
    pub const VFADD: u32 = 0b000000;
    /// Floating-point subtract (`vfsub`).
    pub const VFSUB: u32 = 0b000010;
    /// Floating-point minimum (`vfmin`).
    pub const VFMIN: u32 = 0b000100;
    /// Floating-point maximum (`vfmax`).
    pub const VFMAX: u32 = 0b000110;
    /// Sign injection (`vfsgnj`).
    pub const VFSGNJ: u32 = 0b001000;
    /// Sign injection, negated (`vfsgnjn`).
    pub const VFSGNJN: u32 = 0b001001;
    /// Sign injection, XOR (`vfsgnjx`).
    pub const VFSGNJX: u32 = 0b001010;
    /// Unary conversion group (`vfcvt`/`vfwcvt`/`vfncvt`); the vs1 field
    /// selects the conversion (see [`super::fcvt`]).
    pub const VFUNARY0: u32 = 0b010010;
    /// Merge under mask, or scalar move when unmasked (`vfmerge`/`vfmv.v.f`).
    pub const VFMERGE: u32 = 0b010111;
    /// Compare equal, mask result (`vmfeq`).
    pub const VMFEQ: u32 = 0b011000;
    /// Compare less-or-equal, mask result (`vmfle`).
    pub const VMFLE: u32 = 0b011001;
    /// Compare less-than, mask result (`vmflt`).
    pub const VMFLT: u32 = 0b011011;
    /// Compare not-equal, mask result (`vmfne`).
    pub const VMFNE: u32 = 0b011100;
    /// Compare greater-than, mask result (`vmfgt`, OPFVF only).
    pub const VMFGT: u32 = 0b011101;
    /// Compare greater-or-equal, mask result (`vmfge`, OPFVF only).
    pub const VMFGE: u32 = 0b011111;
    /// Floating-point divide (`vfdiv`).
    pub const VFDIV: u32 = 0b100000;
    /// Reverse divide, scalar over vector (`vfrdiv`, OPFVF only).
    pub const VFRDIV: u32 = 0b100001;
    /// Floating-point multiply (`vfmul`).
    pub const VFMUL: u32 = 0b100100;
    /// Reverse subtract, scalar minus vector (`vfrsub`, OPFVF only).
    pub const VFRSUB: u32 = 0b100111;
    /// Fused multiply-add, overwriting multiplicand (`vfmadd`); vd is a source.
    pub const VFMADD: u32 = 0b101000;
    /// Negated fused multiply-add (`vfnmadd`); vd is a source.
    pub const VFNMADD: u32 = 0b101001;
    /// Fused multiply-subtract (`vfmsub`); vd is a source.
    pub const VFMSUB: u32 = 0b101010;
    /// Negated fused multiply-subtract (`vfnmsub`); vd is a source.
    pub const VFNMSUB: u32 = 0b101011;
    /// Fused multiply-accumulate (`vfmacc`); vd is a source.
    pub const VFMACC: u32 = 0b101100;
    /// Negated fused multiply-accumulate (`vfnmacc`); vd is a source.
    pub const VFNMACC: u32 = 0b101101;
    /// Fused multiply-subtract-accumulate (`vfmsac`); vd is a source.
    pub const VFMSAC: u32 = 0b101110;
    /// Negated fused multiply-subtract-accumulate (`vfnmsac`); vd is a source.
    pub const VFNMSAC: u32 = 0b101111;
    /// Widening floating-point add (`vfwadd`).
    pub const VFWADD: u32 = 0b110000;
    /// Widening floating-point subtract (`vfwsub`).
    pub const VFWSUB: u32 = 0b110010;
    /// Widening add, wide first operand (`vfwadd.w`).
    pub const VFWADD_W: u32 = 0b110100;
    /// Widening subtract, wide first operand (`vfwsub.w`).
    pub const VFWSUB_W: u32 = 0b110110;
    /// Widening floating-point multiply (`vfwmul`).
    pub const VFWMUL: u32 = 0b111000;
    /// Widening fused multiply-accumulate (`vfwmacc`); vd is a source.
    pub const VFWMACC: u32 = 0b111100;
    /// Widening negated fused multiply-accumulate (`vfwnmacc`); vd is a source.
    pub const VFWNMACC: u32 = 0b111101;
    /// Widening fused multiply-subtract-accumulate (`vfwmsac`); vd is a source.
    pub const VFWMSAC: u32 = 0b111110;
    /// Widening negated fused multiply-subtract-accumulate (`vfwnmsac`).
    pub const VFWNMSAC: u32 = 0b111111;
}

/// vs1-field codes selecting the extension mode under `opm::VXUNARY0`.
pub mod ext {
    /// Zero-extend from one eighth of SEW (`vzext.vf8`).
    pub const ZEXT_VF8: u32 = 0b00010;
    /// Sign-extend from one eighth of SEW (`vsext.vf8`).
    pub const SEXT_VF8: u32 = 0b00011;
    /// Zero-extend from one quarter of SEW (`vzext.vf4`).
    pub const ZEXT_VF4: u32 = 0b00100;
    /// Sign-extend from one quarter of SEW (`vsext.vf4`).
    pub const SEXT_VF4: u32 = 0b00101;
    /// Zero-extend from half SEW (`vzext.vf2`).
    pub const ZEXT_VF2: u32 = 0b00110;
    /// Sign-extend from half SEW (`vsext.vf2`).
    pub const SEXT_VF2: u32 = 0b00111;
}

/// vs1-field codes selecting the conversion under `opf::VFUNARY0`.
pub mod fcvt {
    /// Single-width convert float to unsigned integer (`vfcvt.xu.f`).
    pub const F_TO_XU: u32 = 0b00000;
    /// Single-width convert float to signed integer (`vfcvt.x.f`).
    pub const F_TO_X: u32 = 0b00001;
    /// Single-width convert unsigned integer to float (`vfcvt.f.xu`).
    pub const XU_TO_F: u32 = 0b00010;
    /// Single-width convert signed integer to float (`vfcvt.f.x`).
    pub const X_TO_F: u32 = 0b00011;
    /// Widening convert float to double-width float (`vfwcvt.f.f`).
    pub const WIDEN_F_TO_F: u32 = 0b01100;
    /// Narrowing convert double-width float to float (`vfncvt.f.f`).
    pub const NARROW_F_TO_F: u32 = 0b10100;
}
