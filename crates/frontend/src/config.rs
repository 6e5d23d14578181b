//! Configuration system for the vector front end.
//!
//! This module defines all configuration structures used to parameterize the
//! front end. It provides:
//! 1. **Defaults:** Baseline hardware constants (register geometry, bus shape,
//!    queue depths, floating-point width support).
//! 2. **Structures:** Hierarchical config for the decoder and address generator.
//!
//! Configuration is supplied via JSON or use `Config::default()`.

use serde::Deserialize;

use crate::common::constants;

/// Default configuration constants for the front end.
mod defaults {
    use crate::common::constants;

    /// Vector register width in bits.
    pub const VLEN: u32 = constants::VLEN;

    /// Maximum supported element width in bits.
    pub const ELEN: u32 = constants::ELEN;

    /// Native bus transfer width in bytes per beat.
    pub const BUS_WIDTH: u64 = constants::BUS_WIDTH;

    /// Page size in bytes; no burst may cross this boundary.
    pub const PAGE_SIZE: u64 = constants::PAGE_SIZE;

    /// Maximum beats per burst.
    pub const MAX_BURST_BEATS: u64 = constants::MAX_BURST_BEATS;

    /// Depth of the burst descriptor queue between the address generator
    /// and its downstream consumer.
    pub const DESCRIPTOR_QUEUE_DEPTH: usize = 4;

    /// Depth of the incoming memory-request FIFO in the address generator.
    pub const REQUEST_FIFO_DEPTH: usize = 2;

    /// Depth of the memory-unit channel mirroring emitted bursts.
    pub const MEM_FIFO_DEPTH: usize = 8;
}

/// Floating-point element widths the execution lanes support.
///
/// Restricts which element widths are legal for floating-point opcode classes;
/// integer classes are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FpWidthSupport {
    /// 16-bit (half-precision) elements supported.
    pub f16: bool,
    /// 32-bit (single-precision) elements supported.
    pub f32: bool,
    /// 64-bit (double-precision) elements supported.
    pub f64: bool,
}

impl Default for FpWidthSupport {
    fn default() -> Self {
        Self {
            f16: false,
            f32: true,
            f64: true,
        }
    }
}

impl FpWidthSupport {
    /// Returns true if the given element width (in bits) is a supported
    /// floating-point width.
    pub fn supports(&self, bits: u32) -> bool {
        match bits {
            16 => self.f16,
            32 => self.f32,
            64 => self.f64,
            _ => false,
        }
    }
}

/// Address generator parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AguConfig {
    /// Native bus transfer width in bytes per beat.
    pub bus_width: u64,
    /// Page size in bytes; a single burst never crosses this boundary.
    pub page_size: u64,
    /// Maximum number of beats in one burst.
    pub max_burst_beats: u64,
    /// Capacity of the burst descriptor queue.
    pub descriptor_queue_depth: usize,
    /// Capacity of the incoming request FIFO.
    pub request_fifo_depth: usize,
    /// Capacity of the memory-unit channel; emission stalls while it is
    /// full.
    pub mem_fifo_depth: usize,
}

impl Default for AguConfig {
    fn default() -> Self {
        Self {
            bus_width: defaults::BUS_WIDTH,
            page_size: defaults::PAGE_SIZE,
            max_burst_beats: defaults::MAX_BURST_BEATS,
            descriptor_queue_depth: defaults::DESCRIPTOR_QUEUE_DEPTH,
            request_fifo_depth: defaults::REQUEST_FIFO_DEPTH,
            mem_fifo_depth: defaults::MEM_FIFO_DEPTH,
        }
    }
}

/// Root configuration for the vector front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vector register width in bits (VLEN). Must be a power of two.
    pub vlen: u32,
    /// Maximum supported element width in bits (ELEN).
    pub elen: u32,
    /// Floating-point element width capability set.
    pub fp_widths: FpWidthSupport,
    /// Address generator parameters.
    pub agu: AguConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vlen: defaults::VLEN,
            elen: defaults::ELEN,
            fp_widths: FpWidthSupport::default(),
            agu: AguConfig::default(),
        }
    }
}

impl Config {
    /// Vector register width in bytes (VLENB).
    #[inline]
    pub fn vlenb(&self) -> u64 {
        u64::from(self.vlen) / 8
    }
}
