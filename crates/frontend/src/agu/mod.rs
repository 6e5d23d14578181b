//! Burst address generation for vector memory operations.
//!
//! The address generator drains memory requests into bus burst descriptors.
//! It performs:
//! 1. **Request buffering:** Incoming requests queue in a small FIFO and are
//!    processed strictly in order.
//! 2. **Burst shaping:** Unit-stride requests become multi-beat bursts that
//!    never cross a page boundary or exceed the maximum beat count; strided
//!    and indexed requests become one single-beat burst per element.
//! 3. **Store degradation:** Stores whose address is misaligned with the bus
//!    width fall back to the widest power-of-two beat the address allows,
//!    until the address reaches full-width alignment.
//! 4. **Ordering:** A burst may only start while the in-flight descriptor
//!    queue holds no descriptor of the opposite direction.

pub mod queue;

use std::collections::VecDeque;

use tracing::debug;

use crate::common::error::VectorError;
use crate::config::{AguConfig, Config};
use crate::decoder::request::{AddressMode, Direction, MemRequest};

pub use queue::{BurstDescriptor, DescriptorQueue};

/// Acknowledgment for a request that finished or aborted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    /// Tag of the originating instruction.
    pub tag: u8,
    /// `Ok` when every element was covered; an error aborts the remainder
    /// of the request.
    pub result: Result<(), VectorError>,
}

/// Everything one tick produces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickOutput {
    /// Burst emitted on the bus address channel this tick.
    pub burst: Option<BurstDescriptor>,
    /// Acknowledgment for a drained request.
    pub completed: Option<Completion>,
}

/// The request currently being drained.
#[derive(Clone, Debug)]
struct Active {
    req: MemRequest,
    /// Next element address (unit/strided modes).
    addr: u64,
    /// Elements not yet covered by a burst.
    remaining: u64,
    /// Next offset index (indexed mode).
    index: usize,
}

/// Outer engine state.
#[derive(Clone, Debug)]
enum State {
    /// No request in progress.
    Idle,
    /// Request accepted, held while the core store-pending gate is up.
    Waiting(Active),
    /// Emitting bursts for the active request.
    Requesting(Active),
}

/// Burst address generation engine.
///
/// One [`tick`](Self::tick) call advances the engine by one clock and emits
/// at most one burst descriptor.
#[derive(Debug)]
pub struct AddressGenerator {
    cfg: AguConfig,
    fifo: VecDeque<MemRequest>,
    queue: DescriptorQueue,
    /// Channel to the data-transfer units, mirroring each emitted burst.
    mem_channel: VecDeque<BurstDescriptor>,
    state: State,
}

impl AddressGenerator {
    /// Creates an idle generator.
    pub fn new(config: &Config) -> Self {
        Self {
            cfg: config.agu,
            fifo: VecDeque::with_capacity(config.agu.request_fifo_depth),
            queue: DescriptorQueue::new(config.agu.descriptor_queue_depth),
            mem_channel: VecDeque::with_capacity(config.agu.mem_fifo_depth),
            state: State::Idle,
        }
    }

    /// Enqueues a request. Returns false when the FIFO is full; the caller
    /// must hold the request and retry.
    pub fn push(&mut self, req: MemRequest) -> bool {
        if self.fifo.len() >= self.cfg.request_fifo_depth {
            return false;
        }
        self.fifo.push_back(req);
        true
    }

    /// True when no request is buffered or in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle) && self.fifo.is_empty()
    }

    /// Number of descriptors awaiting the downstream consumer.
    pub fn in_flight(&self) -> usize {
        self.queue.len()
    }

    /// Downstream consumer drains one descriptor, returning its credit.
    pub fn retire_burst(&mut self) -> Option<BurstDescriptor> {
        self.queue.pop()
    }

    /// Pops one entry from the memory-unit channel.
    pub fn pop_mem_entry(&mut self) -> Option<BurstDescriptor> {
        self.mem_channel.pop_front()
    }

    /// Advances the engine by one tick.
    ///
    /// `bus_ready` is the address-channel ready signal; `store_pending` is
    /// the external core-store-pending gate.
    pub fn tick(&mut self, bus_ready: bool, store_pending: bool) -> TickOutput {
        let mut out = TickOutput::default();
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => self.accept(store_pending, &mut out),
            State::Waiting(active) => {
                if store_pending {
                    self.state = State::Waiting(active);
                } else {
                    self.state = State::Requesting(active);
                }
            }
            State::Requesting(active) => self.emit(active, bus_ready, &mut out),
        }
        out
    }

    /// Pops the next request and validates it before any burst is emitted.
    fn accept(&mut self, store_pending: bool, out: &mut TickOutput) {
        let Some(req) = self.fifo.pop_front() else {
            return;
        };
        debug!(tag = req.tag, ?req.dir, ?req.mode, base = format_args!("{:#x}", req.base), "request accepted");
        if let Err(err) = validate(&req) {
            debug!(tag = req.tag, %err, "request rejected");
            out.completed = Some(Completion {
                tag: req.tag,
                result: Err(err),
            });
            return;
        }
        if req.elements == 0 {
            out.completed = Some(Completion {
                tag: req.tag,
                result: Ok(()),
            });
            return;
        }
        let active = Active {
            addr: req.base,
            remaining: req.elements,
            index: 0,
            req,
        };
        self.state = if store_pending {
            State::Waiting(active)
        } else {
            State::Requesting(active)
        };
    }

    /// Emits at most one burst for the active request.
    fn emit(&mut self, mut active: Active, bus_ready: bool, out: &mut TickOutput) {
        let dir = active.req.dir;
        if !bus_ready
            || self.queue.is_full()
            || !self.queue.admits(dir)
            || self.mem_channel.len() >= self.cfg.mem_fifo_depth
        {
            self.state = State::Requesting(active);
            return;
        }
        let sewb = active.req.sew.bytes();
        let desc = match active.req.mode {
            AddressMode::Unit if active.req.burst_eligible => {
                let (desc, covered) = self.unit_burst(&active);
                let elems = active.remaining.min(covered / sewb);
                active.addr += elems * sewb;
                active.remaining -= elems;
                desc
            }
            // Unit-stride requests not marked burst eligible advance one
            // element per beat, like strided ones.
            AddressMode::Unit | AddressMode::Strided => {
                let desc = BurstDescriptor {
                    addr: active.addr,
                    len: 0,
                    size: sewb.trailing_zeros() as u8,
                    dir,
                };
                active.addr = active.addr.wrapping_add_signed(active.req.stride);
                active.remaining -= 1;
                desc
            }
            AddressMode::Indexed => {
                let offset = active.req.offsets[active.index];
                let addr = active.req.base.wrapping_add(offset);
                if addr % sewb != 0 {
                    debug!(tag = active.req.tag, addr = format_args!("{addr:#x}"), "misaligned element, aborting");
                    out.completed = Some(Completion {
                        tag: active.req.tag,
                        result: Err(VectorError::MisalignedAddress(addr)),
                    });
                    return;
                }
                active.index += 1;
                active.remaining -= 1;
                BurstDescriptor {
                    addr,
                    len: 0,
                    size: sewb.trailing_zeros() as u8,
                    dir,
                }
            }
        };
        // Credit was checked above; the push cannot fail.
        let _ = self.queue.push(desc);
        self.mem_channel.push_back(desc);
        out.burst = Some(desc);
        debug!(
            addr = format_args!("{:#x}", desc.addr),
            beats = desc.beats(),
            size = desc.size,
            "burst emitted"
        );
        if active.remaining == 0 {
            out.completed = Some(Completion {
                tag: active.req.tag,
                result: Ok(()),
            });
        } else {
            self.state = State::Requesting(active);
        }
    }

    /// Shapes the next unit-stride burst: degraded width for misaligned
    /// stores, round-down alignment, beat cap, and page clamp.
    fn unit_burst(&self, active: &Active) -> (BurstDescriptor, u64) {
        let bus = self.cfg.bus_width;
        let addr = active.addr;
        let width = if active.req.dir == Direction::Store && addr % bus != 0 {
            1u64 << u64::from(addr.trailing_zeros()).min(u64::from(bus.trailing_zeros()))
        } else {
            bus
        };
        let start = addr & !(width - 1);
        let bytes_left = active.remaining * active.req.sew.bytes();
        let mut end = round_up(addr + bytes_left, width);
        if width < bus {
            // Degraded bursts only run up to the next full-width boundary;
            // the remainder of the request resumes at the native width.
            end = end.min(round_up(addr + 1, bus));
        }
        end = end.min(start + self.cfg.max_burst_beats * width);
        let page_end = (start & !(self.cfg.page_size - 1)) + self.cfg.page_size;
        end = end.min(page_end);
        let beats = (end - start) / width;
        let desc = BurstDescriptor {
            addr: start,
            len: (beats - 1) as u8,
            size: width.trailing_zeros() as u8,
            dir: active.req.dir,
        };
        (desc, end - addr)
    }
}

/// Checks the alignment preconditions a request must satisfy before burst
/// generation starts.
fn validate(req: &MemRequest) -> Result<(), VectorError> {
    let sewb = req.sew.bytes();
    match req.mode {
        AddressMode::Unit | AddressMode::Strided => {
            if req.base % sewb != 0 {
                return Err(VectorError::MisalignedAddress(req.base));
            }
            if req.mode == AddressMode::Strided && req.stride.unsigned_abs() % sewb != 0 {
                return Err(VectorError::MisalignedAddress(req.base));
            }
        }
        AddressMode::Indexed => {
            if req.offsets.len() as u64 != req.elements {
                return Err(VectorError::MalformedRequest(req.tag));
            }
        }
    }
    Ok(())
}

#[inline]
fn round_up(value: u64, align: u64) -> u64 {
    (value + align - 1) & !(align - 1)
}
