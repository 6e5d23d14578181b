//! Element width, group multiplier, and `vtype` CSR field types.
//!
//! This module defines the strongly typed pieces of the vector configuration
//! register: the selected element width (SEW), the register group multiplier
//! (LMUL, fractional or integer), and the combined `vtype` value with its
//! decode/encode and validity rules.

use serde::Deserialize;

use crate::common::constants::MAX_WIDTH_STEPS;

/// Element width in bits.
///
/// "Width steps" count doublings from 8 bits: E8 is step 0, E64 is step 3.
/// Widening/narrowing operations move exactly one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
pub enum Sew {
    /// 8-bit elements.
    #[default]
    E8,
    /// 16-bit elements.
    E16,
    /// 32-bit elements.
    E32,
    /// 64-bit elements.
    E64,
}

impl Sew {
    /// Decodes the 3-bit `vsew` field. Codes 4-7 are reserved.
    pub fn from_vsew(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::E8),
            1 => Some(Self::E16),
            2 => Some(Self::E32),
            3 => Some(Self::E64),
            _ => None,
        }
    }

    /// Element width in bits.
    #[inline]
    pub fn bits(self) -> u32 {
        8 << self.step()
    }

    /// Element width in bytes.
    #[inline]
    pub fn bytes(self) -> u64 {
        u64::from(self.bits()) / 8
    }

    /// Width step (0 for E8 up to 3 for E64).
    #[inline]
    pub fn step(self) -> i8 {
        match self {
            Self::E8 => 0,
            Self::E16 => 1,
            Self::E32 => 2,
            Self::E64 => 3,
        }
    }

    /// The width `delta` steps away, if representable. Widening destinations
    /// use +1, extension sources use negative deltas.
    pub fn offset(self, delta: i8) -> Option<Self> {
        Self::from_step(self.step() + delta)
    }

    fn from_step(step: i8) -> Option<Self> {
        match step {
            0 => Some(Self::E8),
            1 => Some(Self::E16),
            2 => Some(Self::E32),
            3 => Some(Self::E64),
            _ => None,
        }
    }
}

/// Register group multiplier.
///
/// Integer multipliers span 2/4/8 physical registers per logical register;
/// fractional multipliers use part of one register. Expressed in "steps"
/// like [`Sew`]: F8 is −3, M1 is 0, M8 is +3. Code `0b100` is reserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Lmul {
    /// One eighth of a register.
    F8,
    /// One quarter of a register.
    F4,
    /// Half of a register.
    F2,
    /// Exactly one register.
    #[default]
    M1,
    /// A group of two registers.
    M2,
    /// A group of four registers.
    M4,
    /// A group of eight registers.
    M8,
}

impl Lmul {
    /// Decodes the 3-bit `vlmul` field. Code `0b100` is reserved.
    pub fn from_vlmul(code: u32) -> Option<Self> {
        match code {
            0b000 => Some(Self::M1),
            0b001 => Some(Self::M2),
            0b010 => Some(Self::M4),
            0b011 => Some(Self::M8),
            0b101 => Some(Self::F8),
            0b110 => Some(Self::F4),
            0b111 => Some(Self::F2),
            _ => None,
        }
    }

    /// Encodes back to the 3-bit `vlmul` field.
    pub fn to_vlmul(self) -> u32 {
        match self {
            Self::M1 => 0b000,
            Self::M2 => 0b001,
            Self::M4 => 0b010,
            Self::M8 => 0b011,
            Self::F8 => 0b101,
            Self::F4 => 0b110,
            Self::F2 => 0b111,
        }
    }

    /// Multiplier step (−3 for F8 through +3 for M8).
    #[inline]
    pub fn steps(self) -> i8 {
        match self {
            Self::F8 => -3,
            Self::F4 => -2,
            Self::F2 => -1,
            Self::M1 => 0,
            Self::M2 => 1,
            Self::M4 => 2,
            Self::M8 => 3,
        }
    }

    /// Builds a multiplier from a step count, if representable.
    pub fn from_steps(steps: i8) -> Option<Self> {
        match steps {
            -3 => Some(Self::F8),
            -2 => Some(Self::F4),
            -1 => Some(Self::F2),
            0 => Some(Self::M1),
            1 => Some(Self::M2),
            2 => Some(Self::M4),
            3 => Some(Self::M8),
            _ => None,
        }
    }

    /// The next (doubled) multiplier, used for widening destinations.
    pub fn next(self) -> Option<Self> {
        Self::from_steps(self.steps() + 1)
    }

    /// Number of physical registers one logical register group spans
    /// (minimum 1 for fractional multipliers).
    pub fn group_regs(self) -> u8 {
        match self {
            Self::M2 => 2,
            Self::M4 => 4,
            Self::M8 => 8,
            _ => 1,
        }
    }

    /// Scales a per-register element capacity by this multiplier.
    ///
    /// Left shift for integer multipliers, right shift for fractional ones.
    pub fn scale(self, per_reg: u64) -> u64 {
        let s = self.steps();
        if s >= 0 {
            per_reg << s
        } else {
            per_reg >> (-s)
        }
    }
}

/// Decoded `vtype` CSR fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Vtype {
    /// Invalid-configuration flag; set forces `vl = 0` and makes every
    /// non-configuration instruction illegal until reconfigured.
    pub vill: bool,
    /// Mask-agnostic policy flag.
    pub vma: bool,
    /// Tail-agnostic policy flag.
    pub vta: bool,
    /// Selected element width.
    pub vsew: Sew,
    /// Selected group multiplier.
    pub vlmul: Lmul,
}

impl Vtype {
    /// The canonical invalid configuration (`vill` set, everything else zero).
    pub const INVALID: Self = Self {
        vill: true,
        vma: false,
        vta: false,
        vsew: Sew::E8,
        vlmul: Lmul::M1,
    };

    /// Decodes an encoded `vtype` value and validates it against the
    /// register geometry.
    ///
    /// Returns [`Self::INVALID`] when the multiplier code is reserved, the
    /// element width code is reserved, or the width/multiplier combination
    /// violates `vlmul ≥ vsew − max_width_steps` in width-step units (the
    /// `SEW ≤ ELEN · LMUL` rule, which guarantees `VLMAX ≥ 1`).
    pub fn decode(raw: u64) -> Self {
        let Some(vlmul) = Lmul::from_vlmul((raw & 0x7) as u32) else {
            return Self::INVALID;
        };
        let Some(vsew) = Sew::from_vsew(((raw >> 3) & 0x7) as u32) else {
            return Self::INVALID;
        };
        if vlmul.steps() < vsew.step() - MAX_WIDTH_STEPS {
            return Self::INVALID;
        }
        Self {
            vill: false,
            vta: (raw >> 6) & 1 != 0,
            vma: (raw >> 7) & 1 != 0,
            vsew,
            vlmul,
        }
    }

    /// Encodes back to the raw CSR value (`vill` occupies the top bit).
    pub fn encode(&self) -> u64 {
        if self.vill {
            return 1u64 << 63;
        }
        u64::from(self.vlmul.to_vlmul())
            | (u64::from(self.vsew.step() as u8) << 3)
            | (u64::from(self.vta) << 6)
            | (u64::from(self.vma) << 7)
    }

    /// Maximum vector length for this configuration and register width:
    /// `(VLENB / SEW_bytes)` scaled by the group multiplier.
    pub fn vlmax(&self, vlenb: u64) -> u64 {
        if self.vill {
            return 0;
        }
        self.vlmul.scale(vlenb / self.vsew.bytes())
    }
}
