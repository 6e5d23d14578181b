//! Bounded burst-descriptor queue.
//!
//! Emitted bursts sit here until the downstream ordering/execution unit
//! drains them. The queue provides:
//! 1. **Credit backpressure:** The generator must not emit when full.
//! 2. **Direction accounting:** Counts in-flight loads and stores so a new
//!    burst can only start once no opposite-direction descriptor remains.

use crate::decoder::request::Direction;

/// One bus address-channel transaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BurstDescriptor {
    /// Start address of the burst.
    pub addr: u64,
    /// Beat count minus one.
    pub len: u8,
    /// Log2 of the bytes transferred per beat.
    pub size: u8,
    /// Transfer direction.
    pub dir: Direction,
}

impl BurstDescriptor {
    /// Number of beats in the burst.
    #[inline]
    pub fn beats(&self) -> u64 {
        u64::from(self.len) + 1
    }

    /// Bytes transferred per beat.
    #[inline]
    pub fn beat_bytes(&self) -> u64 {
        1u64 << self.size
    }

    /// Total bytes covered by the burst.
    #[inline]
    pub fn bytes(&self) -> u64 {
        self.beats() * self.beat_bytes()
    }
}

/// FIFO of in-flight burst descriptors with per-direction occupancy counts.
#[derive(Debug)]
pub struct DescriptorQueue {
    entries: Vec<BurstDescriptor>,
    head: usize,
    tail: usize,
    count: usize,
    loads: usize,
    stores: usize,
}

impl DescriptorQueue {
    /// Creates a queue with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: vec![BurstDescriptor::default(); capacity],
            head: 0,
            tail: 0,
            count: 0,
            loads: 0,
            stores: 0,
        }
    }

    /// Returns the capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of occupied entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no descriptor is in flight.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if the queue is out of credit.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.entries.len()
    }

    /// Returns true if a burst in `dir` may start: the queue holds no
    /// descriptor of the opposite direction.
    pub fn admits(&self, dir: Direction) -> bool {
        match dir {
            Direction::Load => self.stores == 0,
            Direction::Store => self.loads == 0,
        }
    }

    /// Appends a descriptor. Returns false when out of credit.
    pub fn push(&mut self, desc: BurstDescriptor) -> bool {
        if self.is_full() {
            return false;
        }
        match desc.dir {
            Direction::Load => self.loads += 1,
            Direction::Store => self.stores += 1,
        }
        self.entries[self.tail] = desc;
        self.tail = (self.tail + 1) % self.entries.len();
        self.count += 1;
        true
    }

    /// Removes and returns the oldest descriptor.
    pub fn pop(&mut self) -> Option<BurstDescriptor> {
        if self.is_empty() {
            return None;
        }
        let desc = self.entries[self.head];
        self.head = (self.head + 1) % self.entries.len();
        self.count -= 1;
        match desc.dir {
            Direction::Load => self.loads -= 1,
            Direction::Store => self.stores -= 1,
        }
        Some(desc)
    }
}
