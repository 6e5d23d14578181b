//! Ordering and backpressure tests for the address generator.

use vcfront_core::agu::AddressGenerator;
use vcfront_core::decoder::{AddressMode, Direction, MemRequest};
use vcfront_core::isa::vtype::Sew;
use vcfront_core::Config;

use crate::common::harness::{agu, unit_req};

#[test]
fn stores_wait_for_in_flight_loads() {
    let mut engine = agu();
    assert!(engine.push(unit_req(0x1000, 16, Sew::E8, Direction::Load)));

    let _ = engine.tick(true, false); // accept
    let out = engine.tick(true, false);
    assert!(out.burst.is_some());
    assert!(out.completed.is_some());

    // The load descriptor is still in flight; a store may not start.
    assert!(engine.push(unit_req(0x2000, 16, Sew::E8, Direction::Store)));
    let _ = engine.tick(true, false); // accept
    let out = engine.tick(true, false);
    assert!(out.burst.is_none());
    let out = engine.tick(true, false);
    assert!(out.burst.is_none());

    // Retiring the load descriptor releases the store.
    assert!(engine.retire_burst().is_some());
    let out = engine.tick(true, false);
    assert_eq!(out.burst.map(|b| b.dir), Some(Direction::Store));
}

#[test]
fn loads_wait_for_in_flight_stores() {
    let mut engine = agu();
    assert!(engine.push(unit_req(0x2000, 16, Sew::E8, Direction::Store)));
    let _ = engine.tick(true, false);
    assert!(engine.tick(true, false).burst.is_some());

    assert!(engine.push(unit_req(0x1000, 16, Sew::E8, Direction::Load)));
    let _ = engine.tick(true, false);
    assert!(engine.tick(true, false).burst.is_none());

    assert!(engine.retire_burst().is_some());
    assert_eq!(
        engine.tick(true, false).burst.map(|b| b.dir),
        Some(Direction::Load)
    );
}

#[test]
fn core_store_pending_gates_acceptance() {
    let mut engine = agu();
    assert!(engine.push(unit_req(0x1000, 16, Sew::E8, Direction::Load)));

    // Accepted into the waiting state; no burst while the gate is up.
    let _ = engine.tick(true, true);
    assert!(engine.tick(true, true).burst.is_none());
    assert!(engine.tick(true, true).burst.is_none());

    // Gate drops: one transition tick, then the burst.
    assert!(engine.tick(true, false).burst.is_none());
    assert!(engine.tick(true, false).burst.is_some());
}

#[test]
fn full_descriptor_queue_stalls_emission() {
    let mut engine = agu();
    // Six single-beat bursts against a queue of four.
    assert!(engine.push(MemRequest {
        base: 0x1000,
        elements: 6,
        stride: 8,
        sew: Sew::E64,
        dir: Direction::Load,
        mode: AddressMode::Strided,
        burst_eligible: false,
        offsets: Vec::new(),
        tag: 1,
    }));

    let _ = engine.tick(true, false); // accept
    for _ in 0..4 {
        assert!(engine.tick(true, false).burst.is_some());
    }
    assert!(engine.tick(true, false).burst.is_none());
    assert_eq!(engine.in_flight(), 4);

    assert!(engine.retire_burst().is_some());
    assert!(engine.tick(true, false).burst.is_some());
    assert!(engine.retire_burst().is_some());
    let out = engine.tick(true, false);
    assert!(out.burst.is_some());
    assert!(out.completed.is_some());
}

#[test]
fn full_memory_channel_stalls_emission() {
    let mut cfg = Config::default();
    cfg.agu.mem_fifo_depth = 2;
    let mut engine = AddressGenerator::new(&cfg);
    assert!(engine.push(MemRequest {
        base: 0x1000,
        elements: 4,
        stride: 8,
        sew: Sew::E64,
        dir: Direction::Load,
        mode: AddressMode::Strided,
        burst_eligible: false,
        offsets: Vec::new(),
        tag: 4,
    }));

    let _ = engine.tick(true, false); // accept
    assert!(engine.tick(true, false).burst.is_some());
    assert!(engine.retire_burst().is_some());
    assert!(engine.tick(true, false).burst.is_some());
    assert!(engine.retire_burst().is_some());

    // Two entries sit unread in the memory channel; emission stalls.
    assert!(engine.tick(true, false).burst.is_none());
    assert!(engine.tick(true, false).burst.is_none());
    assert!(engine.pop_mem_entry().is_some());
    assert!(engine.tick(true, false).burst.is_some());
}

#[test]
fn bus_ready_gates_the_address_channel() {
    let mut engine = agu();
    assert!(engine.push(unit_req(0x1000, 16, Sew::E8, Direction::Load)));

    let _ = engine.tick(true, false);
    assert!(engine.tick(false, false).burst.is_none());
    assert!(engine.tick(false, false).burst.is_none());
    assert!(engine.tick(true, false).burst.is_some());
}

#[test]
fn request_fifo_is_bounded() {
    let mut engine = agu();
    assert!(engine.push(unit_req(0x1000, 4, Sew::E8, Direction::Load)));
    assert!(engine.push(unit_req(0x2000, 4, Sew::E8, Direction::Load)));
    // Default depth is two; the third push is refused.
    assert!(!engine.push(unit_req(0x3000, 4, Sew::E8, Direction::Load)));

    let _ = engine.tick(true, false);
    assert!(!engine.is_idle());
}
