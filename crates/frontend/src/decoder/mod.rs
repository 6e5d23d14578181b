//! Vector configuration and instruction decode.
//!
//! The decoder owns the persistent vector configuration state and turns one
//! incoming instruction per step into at most one backend request. It
//! performs:
//! 1. **Configuration:** The vset family updates `vtype`/`vl` and answers in
//!    the same step, entering a wait-for-idle state on a `vtype` change.
//! 2. **Dispatch:** Arithmetic/logical opcodes resolve through the dispatch
//!    table into operand widths, group multipliers, and legality checks.
//! 3. **Memory decode:** Loads/stores resolve their effective width and
//!    group multiplier and produce an address-generation request.
//! 4. **Reshuffle:** Destinations recorded at a different element width are
//!    re-encoded through a synthetic copy before being partially overwritten.

pub mod request;
pub mod table;
pub mod width_table;

use tracing::debug;

use crate::config::{Config, FpWidthSupport};
use crate::decoder::table::{OpSpec, OperandClass};
use crate::decoder::width_table::WidthTable;

pub use request::{
    AddressMode, BackendRequest, BackendSignals, Direction, Issue, MemRequest, MicroOp, Operand,
    Response, StepOutput,
};
use crate::isa::bits::VInstructionBits;
use crate::isa::vtype::{Lmul, Sew, Vtype};
use crate::isa::{funct3, mem, opcodes};

/// Decoder operating state.
#[derive(Clone, Debug, PartialEq, Eq)]
enum State {
    /// Accepting and decoding instructions.
    Normal,
    /// Draining the backend after a `vtype` change.
    WaitIdle,
    /// Holding a synthetic re-encoding request until the backend accepts it.
    Reshuffle {
        req: BackendRequest,
        reg: u8,
        sew: Sew,
        group: u8,
    },
}

/// What one decode attempt resolved to.
#[derive(Clone, Debug)]
enum Outcome {
    /// Unrecognized or illegal encoding; answer with an error.
    Illegal,
    /// Configuration instruction handled; answer with the new `vl`.
    Config { vl: u64 },
    /// Zero-length no-op; acknowledge without a backend request.
    Bypass { mem: bool },
    /// Destination must be re-encoded before this instruction can run.
    Reshuffle {
        req: BackendRequest,
        reg: u8,
        sew: Sew,
        group: u8,
    },
    /// A decoded request ready for the backend.
    Execute {
        req: BackendRequest,
        mem: Option<MemRequest>,
        record: Option<(u8, Sew, u8)>,
    },
    /// Cannot make progress this step; hold the instruction.
    Stall,
}

/// Vector configuration and decode unit.
///
/// One [`step`](Self::step) call advances the unit by one clock: completions
/// from the backend are surfaced first, then the state machine runs, then at
/// most one presented instruction is decoded.
#[derive(Debug)]
pub struct Decoder {
    vlenb: u64,
    fp_widths: FpWidthSupport,
    vl: u64,
    vstart: u64,
    vtype: Vtype,
    widths: WidthTable,
    state: State,
    /// Bitmap of in-flight instruction tags.
    running: u64,
    pending_load: Option<u8>,
    pending_store: Option<u8>,
    /// Zero-length memory acknowledgments postponed because the response
    /// channel was already claimed on their step. Each is delivered on the
    /// next step whose channel is free.
    deferred_acks: u8,
}

impl Decoder {
    /// Creates a decoder with an invalid initial configuration; the first
    /// vset instruction establishes a usable `vtype`.
    pub fn new(config: &Config) -> Self {
        Self {
            vlenb: config.vlenb(),
            fp_widths: config.fp_widths,
            vl: 0,
            vstart: 0,
            vtype: Vtype::INVALID,
            widths: WidthTable::new(),
            state: State::Normal,
            running: 0,
            pending_load: None,
            pending_store: None,
            deferred_acks: 0,
        }
    }

    /// Current vector length.
    pub fn vl(&self) -> u64 {
        self.vl
    }

    /// Current vector start index. Stored for CSR access only; decode does
    /// not consume it.
    pub fn vstart(&self) -> u64 {
        self.vstart
    }

    /// Sets the vector start index.
    pub fn set_vstart(&mut self, vstart: u64) {
        self.vstart = vstart;
    }

    /// Current `vtype` configuration.
    pub fn vtype(&self) -> Vtype {
        self.vtype
    }

    /// Clears an in-flight tag once the backend has drained the
    /// instruction. Memory tags clear themselves on completion pulses.
    pub fn retire(&mut self, tag: u8) {
        self.running &= !(1u64 << (tag & 63));
    }

    /// Advances the unit by one step.
    ///
    /// `issue` is the instruction the scalar core presents this step, if
    /// any; the core must keep presenting it until `accepted` is returned.
    pub fn step(&mut self, issue: Option<&Issue>, signals: &BackendSignals) -> StepOutput {
        let mut out = StepOutput::default();
        let mut resp = Response::default();
        let mut has_resp = false;

        let completion = signals.load_complete || signals.store_complete;
        if completion {
            if signals.load_complete {
                if let Some(tag) = self.pending_load.take() {
                    self.retire(tag);
                }
            }
            if signals.store_complete {
                if let Some(tag) = self.pending_store.take() {
                    self.retire(tag);
                }
            }
            resp.mem_complete = true;
            resp.error = signals.error;
            resp.fflags = signals.fflags;
            has_resp = true;
        } else if self.deferred_acks > 0 {
            self.deferred_acks -= 1;
            resp.mem_complete = true;
            has_resp = true;
        }

        match self.state.clone() {
            State::WaitIdle => {
                if signals.idle {
                    debug!("backend idle, resuming decode");
                    self.state = State::Normal;
                } else {
                    out.response = has_resp.then_some(resp);
                    return out;
                }
            }
            State::Reshuffle { req, reg, sew, group } => {
                out.request = Some(req);
                if signals.accept {
                    debug!(reg, "reshuffle accepted");
                    self.widths.record(reg, sew, group);
                    self.state = State::Normal;
                }
                out.response = has_resp.then_some(resp);
                return out;
            }
            State::Normal => {}
        }

        if let Some(issue) = issue {
            if self.running & (1u64 << (issue.tag & 63)) != 0 {
                // Duplicate tag; hold until the earlier instance retires.
                out.response = has_resp.then_some(resp);
                return out;
            }
            match self.decode(issue) {
                Outcome::Illegal => {
                    debug!(inst = format_args!("{:#010x}", issue.inst), "illegal instruction");
                    out.accepted = true;
                    resp.error = true;
                    has_resp = true;
                }
                Outcome::Config { vl } => {
                    out.accepted = true;
                    resp.value = vl;
                    has_resp = true;
                }
                Outcome::Bypass { mem } => {
                    out.accepted = true;
                    if mem {
                        if has_resp {
                            // The response channel is already claimed this
                            // step, by a genuine completion or an earlier
                            // deferred acknowledgment; deliver later.
                            self.deferred_acks += 1;
                        } else {
                            resp.mem_complete = true;
                            has_resp = true;
                        }
                    }
                }
                Outcome::Reshuffle { req, reg, sew, group } => {
                    debug!(reg, ?sew, "width mismatch, injecting reshuffle");
                    out.request = Some(req.clone());
                    if signals.accept {
                        self.widths.record(reg, sew, group);
                    } else {
                        self.state = State::Reshuffle { req, reg, sew, group };
                    }
                }
                Outcome::Execute { req, mem, record } => {
                    if signals.accept {
                        out.accepted = true;
                        self.running |= 1u64 << (issue.tag & 63);
                        if let Some((reg, sew, group)) = record {
                            self.widths.record(reg, sew, group);
                        }
                        if let Some(mem) = mem {
                            match mem.dir {
                                Direction::Load => self.pending_load = Some(issue.tag),
                                Direction::Store => self.pending_store = Some(issue.tag),
                            }
                            out.mem_request = Some(mem);
                        }
                    }
                    out.request = Some(req);
                }
                Outcome::Stall => {}
            }
        }

        out.response = has_resp.then_some(resp);
        out
    }

    fn decode(&mut self, issue: &Issue) -> Outcome {
        let inst = issue.inst;
        match inst.opcode() {
            opcodes::OP_V if inst.funct3() == funct3::OPCFG => self.decode_config(issue),
            opcodes::OP_V => self.decode_arith(issue),
            opcodes::OP_LOAD_V => self.decode_mem(issue, Direction::Load),
            opcodes::OP_STORE_V => self.decode_mem(issue, Direction::Store),
            _ => Outcome::Illegal,
        }
    }

    /// Handles the vset family: `vsetvli`, `vsetivli`, `vsetvl`.
    fn decode_config(&mut self, issue: &Issue) -> Outcome {
        let inst = issue.inst;
        let rd = inst.vd();
        let rs1_field = inst.rs1();

        // The three forms are distinguished by the top instruction bits.
        let (raw_vtype, avl, avl_is_imm) = if inst >> 31 == 0 {
            (u64::from(inst.zimm11()), issue.rs1, false)
        } else if inst >> 30 == 0b11 {
            (u64::from(inst.zimm10()), u64::from(rs1_field), true)
        } else if (inst >> 25) & 0x7F == 0b100_0000 {
            (issue.rs2, issue.rs1, false)
        } else {
            return Outcome::Illegal;
        };

        let new_vtype = Vtype::decode(raw_vtype);
        let new_vl = if new_vtype.vill {
            0
        } else {
            let vlmax = new_vtype.vlmax(self.vlenb);
            if avl_is_imm {
                avl.min(vlmax)
            } else if rs1_field == 0 && rd == 0 {
                self.vl
            } else if rs1_field == 0 {
                vlmax
            } else {
                avl.min(vlmax)
            }
        };

        if new_vtype != self.vtype {
            debug!(?new_vtype, new_vl, "vtype change, draining backend");
            self.state = State::WaitIdle;
        }
        self.vtype = new_vtype;
        self.vl = new_vl;
        Outcome::Config { vl: new_vl }
    }

    fn decode_arith(&self, issue: &Issue) -> Outcome {
        let inst = issue.inst;
        if self.vtype.vill {
            return Outcome::Illegal;
        }
        let Some(class) = OperandClass::from_funct3(inst.funct3()) else {
            return Outcome::Illegal;
        };
        let Some(spec) = table::lookup(class, inst.funct6(), inst.rs1()) else {
            return Outcome::Illegal;
        };

        let vsew = self.vtype.vsew;
        let vlmul = self.vtype.vlmul;
        let (Some(dest_sew), Some(vs2_sew)) = (
            vsew.offset(spec.resize.dest_delta()),
            vsew.offset(spec.resize.vs2_delta()),
        ) else {
            return Outcome::Illegal;
        };
        let (Some(dest_emul), Some(vs2_emul)) = (
            Lmul::from_steps(vlmul.steps() + spec.resize.dest_delta()),
            Lmul::from_steps(vlmul.steps() + spec.resize.vs2_delta()),
        ) else {
            return Outcome::Illegal;
        };

        if class.is_fp() && !self.fp_supported(&spec, vsew, dest_sew, vs2_sew) {
            return Outcome::Illegal;
        }

        // Mask results occupy a single register regardless of LMUL.
        let (rec_sew, rec_emul) = if spec.mask_result {
            (Sew::E8, Lmul::M1)
        } else {
            (dest_sew, dest_emul)
        };
        // Mask-logic sources are single mask registers as well.
        let (vs2_sew, vs2_emul, vs1_sew, vs1_emul) = if spec.mask_sources {
            (Sew::E8, Lmul::M1, Sew::E8, Lmul::M1)
        } else {
            (vs2_sew, vs2_emul, vsew, vlmul)
        };

        let vd = inst.vd();
        let vs2 = inst.vs2();
        if !aligned(vd, rec_emul)
            || !aligned(vs2, vs2_emul)
            || (class.vs1_is_vector() && !spec.unary && !aligned(inst.rs1(), vs1_emul))
        {
            return Outcome::Illegal;
        }

        if self.vl == 0 {
            return Outcome::Bypass { mem: false };
        }

        if let Some(outcome) = self.reshuffle_check(issue, vd, rec_sew, rec_emul, self.vl) {
            return outcome;
        }

        let scalar = match class {
            // Shift amounts and slide offsets are unsigned 5-bit immediates.
            OperandClass::Ivi if spec.zext_imm => u64::from(inst.rs1()),
            OperandClass::Ivi => inst.simm5() as u64,
            OperandClass::Ivx | OperandClass::Mvx | OperandClass::Fvf => issue.rs1,
            _ => 0,
        };
        let req = BackendRequest {
            op: spec.op,
            vd: Operand::active(vd, rec_sew),
            vs1: Operand {
                reg: inst.rs1(),
                used: class.vs1_is_vector() && !spec.unary,
                sew: vs1_sew,
            },
            vs2: Operand::active(vs2, vs2_sew),
            scalar,
            masked: !inst.vm(),
            emul: dest_emul,
            evl: self.vl,
            swap_operands: spec.swap_operands,
            vd_is_source: spec.vd_is_source,
            tag: issue.tag,
        };
        Outcome::Execute {
            req,
            mem: None,
            record: Some((vd, rec_sew, rec_emul.group_regs())),
        }
    }

    fn decode_mem(&self, issue: &Issue, dir: Direction) -> Outcome {
        let inst = issue.inst;
        if self.vtype.vill {
            return Outcome::Illegal;
        }
        // One outstanding operation per direction; the completion pulses do
        // not carry tags.
        let busy = match dir {
            Direction::Load => self.pending_load.is_some(),
            Direction::Store => self.pending_store.is_some(),
        };
        if busy {
            return Outcome::Stall;
        }

        let Some(field_eew) = width_from_field(inst.mem_width()) else {
            return Outcome::Illegal;
        };
        let mop = inst.mop();
        let umop = inst.umop();
        let whole = mop == mem::MOP_UNIT && umop == mem::UMOP_WHOLE_REG;
        let mask_access = mop == mem::MOP_UNIT && umop == mem::UMOP_MASK;
        if mop == mem::MOP_UNIT && !whole && !mask_access && umop != mem::UMOP_UNIT {
            return Outcome::Illegal;
        }

        let vd = inst.vd();
        let (eew, emul, evl) = if whole {
            let count = inst.nf() + 1;
            if !count.is_power_of_two() {
                return Outcome::Illegal;
            }
            let Some(emul) = Lmul::from_steps(count.trailing_zeros() as i8) else {
                return Outcome::Illegal;
            };
            let evl = u64::from(count) * self.vlenb / field_eew.bytes();
            (field_eew, emul, evl)
        } else if mask_access {
            (Sew::E8, Lmul::M1, self.vl.div_ceil(8))
        } else {
            let delta = field_eew.step() - self.vtype.vsew.step();
            let Some(emul) = Lmul::from_steps(self.vtype.vlmul.steps() + delta) else {
                return Outcome::Illegal;
            };
            (field_eew, emul, self.vl)
        };

        let indexed = mop == mem::MOP_INDEXED_UNORDERED || mop == mem::MOP_INDEXED_ORDERED;
        if !aligned(vd, emul) || (indexed && !aligned(inst.vs2(), emul)) {
            return Outcome::Illegal;
        }

        // Whole-register accesses execute even at vl == 0.
        if evl == 0 && !whole {
            return Outcome::Bypass { mem: true };
        }

        if dir == Direction::Load {
            if let Some(outcome) = self.reshuffle_check(issue, vd, eew, emul, evl) {
                return outcome;
            }
        }

        let mode = match mop {
            mem::MOP_UNIT => AddressMode::Unit,
            mem::MOP_STRIDED => AddressMode::Strided,
            _ => AddressMode::Indexed,
        };
        let stride = match mode {
            AddressMode::Unit => eew.bytes() as i64,
            AddressMode::Strided => issue.rs2 as i64,
            AddressMode::Indexed => 0,
        };
        let op = match dir {
            Direction::Load => MicroOp::Load,
            Direction::Store => MicroOp::Store,
        };
        let req = BackendRequest {
            op,
            vd: Operand::active(vd, eew),
            vs1: Operand::default(),
            vs2: Operand {
                reg: inst.vs2(),
                used: indexed,
                sew: eew,
            },
            scalar: issue.rs1,
            masked: !inst.vm(),
            emul,
            evl,
            swap_operands: false,
            vd_is_source: false,
            tag: issue.tag,
        };
        let mem_req = MemRequest {
            base: issue.rs1,
            elements: evl,
            stride,
            sew: eew,
            dir,
            mode,
            burst_eligible: mode == AddressMode::Unit,
            offsets: Vec::new(),
            tag: issue.tag,
        };
        let record = (dir == Direction::Load).then_some((vd, eew, emul.group_regs()));
        Outcome::Execute {
            req,
            mem: Some(mem_req),
            record,
        }
    }

    /// Detects a destination whose stored layout must be re-encoded before
    /// this instruction partially overwrites it, and builds the synthetic
    /// full-register copy that performs the re-encoding.
    fn reshuffle_check(
        &self,
        issue: &Issue,
        reg: u8,
        sew: Sew,
        emul: Lmul,
        evl: u64,
    ) -> Option<Outcome> {
        if !self.widths.mismatch(reg, sew) {
            return None;
        }
        let full = emul.scale(self.vlenb / sew.bytes());
        if evl == full {
            // The write covers the whole group; the old layout is gone.
            return None;
        }
        let req = BackendRequest {
            op: MicroOp::SlideDown,
            vd: Operand::active(reg, sew),
            vs1: Operand::default(),
            vs2: Operand::active(reg, sew),
            scalar: 0,
            masked: false,
            emul,
            evl: full,
            swap_operands: false,
            vd_is_source: false,
            tag: issue.tag,
        };
        Some(Outcome::Reshuffle {
            req,
            reg,
            sew,
            group: emul.group_regs(),
        })
    }

    fn fp_supported(&self, spec: &OpSpec, vsew: Sew, dest_sew: Sew, vs2_sew: Sew) -> bool {
        let widest = vsew.bits().max(dest_sew.bits()).max(vs2_sew.bits());
        self.fp_widths.supports(vsew.bits())
            && (spec.mask_result || self.fp_widths.supports(widest))
    }
}

/// Register-group alignment rule: integer group multipliers require the
/// register index to be a multiple of the group size.
fn aligned(reg: u8, emul: Lmul) -> bool {
    let group = emul.group_regs();
    group <= 1 || reg % group == 0
}

/// Maps the memory width field to an effective element width. Codes other
/// than {0, 5, 6, 7} are reserved.
fn width_from_field(field: u32) -> Option<Sew> {
    match field {
        mem::WIDTH_E8 => Some(Sew::E8),
        mem::WIDTH_E16 => Some(Sew::E16),
        mem::WIDTH_E32 => Some(Sew::E32),
        mem::WIDTH_E64 => Some(Sew::E64),
        _ => None,
    }
}
