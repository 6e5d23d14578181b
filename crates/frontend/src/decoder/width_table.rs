//! Per-register element-width bookkeeping.
//!
//! Tracks the element width each logical vector register was last written
//! with, plus a validity bit. The decoder consults this table to decide
//! whether a register's stored layout must be re-encoded (reshuffled) before
//! it is written at a different width.

use crate::common::constants::VREG_COUNT;
use crate::isa::vtype::Sew;

/// One register's recorded width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Entry {
    sew: Sew,
    valid: bool,
}

/// Flat table of last-written element widths, one entry per logical vector
/// register.
#[derive(Clone, Debug, Default)]
pub struct WidthTable {
    entries: [Entry; VREG_COUNT],
}

impl WidthTable {
    /// Creates a table with every register unrecorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded width of `reg`, or `None` if the register has
    /// not been written yet.
    pub fn get(&self, reg: u8) -> Option<Sew> {
        let e = self.entries[reg as usize & (VREG_COUNT - 1)];
        e.valid.then_some(e.sew)
    }

    /// Records a write of `group` consecutive registers starting at `reg`
    /// with element width `sew`. Group size is the effective multiplier
    /// ceiling, minimum 1.
    pub fn record(&mut self, reg: u8, sew: Sew, group: u8) {
        let group = group.max(1);
        for i in 0..group {
            let idx = (reg + i) as usize & (VREG_COUNT - 1);
            self.entries[idx] = Entry { sew, valid: true };
        }
    }

    /// Returns true if writing `reg` at `sew` requires re-encoding its
    /// current content first: the register has a recorded width and that
    /// width differs from `sew`.
    pub fn mismatch(&self, reg: u8, sew: Sew) -> bool {
        self.get(reg).is_some_and(|old| old != sew)
    }
}
