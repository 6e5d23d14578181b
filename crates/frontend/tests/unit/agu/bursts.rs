//! Burst shaping tests for unit, strided, and indexed requests.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use vcfront_core::agu::{AddressGenerator, BurstDescriptor};
use vcfront_core::decoder::{AddressMode, Direction, MemRequest};
use vcfront_core::isa::vtype::Sew;
use vcfront_core::Config;

use crate::common::harness::{agu, drain, unit_req};

#[test]
fn aligned_unit_load_is_one_full_width_burst() {
    let mut engine = agu();
    assert!(engine.push(unit_req(0x1000, 64, Sew::E8, Direction::Load)));

    let (bursts, completions) = drain(&mut engine, 8);
    assert_eq!(
        bursts,
        vec![BurstDescriptor {
            addr: 0x1000,
            len: 3,
            size: 4,
            dir: Direction::Load,
        }]
    );
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].result, Ok(()));
}

#[test]
fn bursts_never_cross_a_page_boundary() {
    let mut engine = agu();
    assert!(engine.push(unit_req(0x1FC0, 128, Sew::E8, Direction::Load)));

    let (bursts, _) = drain(&mut engine, 8);
    // 128 bytes from 0x1FC0 split exactly at the 0x2000 page edge.
    assert_eq!(bursts.len(), 2);
    assert_eq!((bursts[0].addr, bursts[0].len), (0x1FC0, 3));
    assert_eq!((bursts[1].addr, bursts[1].len), (0x2000, 3));
}

#[test]
fn burst_length_is_capped_at_the_maximum_beat_count() {
    let mut engine = agu();
    assert!(engine.push(unit_req(0x0, 8192, Sew::E8, Direction::Load)));

    let (bursts, _) = drain(&mut engine, 8);
    assert_eq!(bursts.len(), 2);
    for b in &bursts {
        assert_eq!(b.len, 255);
        assert_eq!(b.beats(), 256);
    }
}

#[test]
fn beat_cap_applies_below_the_page_limit() {
    let mut cfg = Config::default();
    cfg.agu.max_burst_beats = 4;
    let mut engine = AddressGenerator::new(&cfg);
    assert!(engine.push(unit_req(0x1000, 256, Sew::E8, Direction::Load)));

    let (bursts, _) = drain(&mut engine, 16);
    // 256 bytes in 64-byte bursts.
    assert_eq!(bursts.len(), 4);
    for (i, b) in bursts.iter().enumerate() {
        assert_eq!(b.addr, 0x1000 + 64 * i as u64);
        assert_eq!(b.beats(), 4);
    }
}

#[test]
fn unit_requests_without_burst_eligibility_go_element_by_element() {
    let mut engine = agu();
    let mut req = unit_req(0x1000, 4, Sew::E32, Direction::Load);
    req.burst_eligible = false;
    assert!(engine.push(req));

    let (bursts, completions) = drain(&mut engine, 8);
    let addrs: Vec<u64> = bursts.iter().map(|b| b.addr).collect();
    assert_eq!(addrs, vec![0x1000, 0x1004, 0x1008, 0x100C]);
    for b in &bursts {
        assert_eq!(b.beats(), 1);
        assert_eq!(b.beat_bytes(), 4);
    }
    assert_eq!(completions[0].result, Ok(()));
}

#[test]
fn strided_requests_emit_one_beat_per_element() {
    let mut engine = agu();
    assert!(engine.push(MemRequest {
        base: 0x1000,
        elements: 4,
        stride: 64,
        sew: Sew::E32,
        dir: Direction::Load,
        mode: AddressMode::Strided,
        burst_eligible: false,
        offsets: Vec::new(),
        tag: 7,
    }));

    let (bursts, completions) = drain(&mut engine, 8);
    let addrs: Vec<u64> = bursts.iter().map(|b| b.addr).collect();
    assert_eq!(addrs, vec![0x1000, 0x1040, 0x1080, 0x10C0]);
    for b in &bursts {
        assert_eq!(b.beats(), 1);
        assert_eq!(b.beat_bytes(), 4);
    }
    assert_eq!(completions[0].tag, 7);
}

#[test]
fn indexed_requests_follow_the_offset_vector() {
    let mut engine = agu();
    assert!(engine.push(MemRequest {
        base: 0x2000,
        elements: 3,
        stride: 0,
        sew: Sew::E32,
        dir: Direction::Store,
        mode: AddressMode::Indexed,
        burst_eligible: false,
        offsets: vec![8, 0, 0x44],
        tag: 2,
    }));

    let (bursts, completions) = drain(&mut engine, 8);
    let addrs: Vec<u64> = bursts.iter().map(|b| b.addr).collect();
    assert_eq!(addrs, vec![0x2008, 0x2000, 0x2044]);
    assert_eq!(completions[0].result, Ok(()));
}

#[test]
fn memory_channel_mirrors_the_bus_channel() {
    let mut engine = agu();
    assert!(engine.push(unit_req(0x1FC0, 128, Sew::E8, Direction::Load)));

    let (bursts, _) = drain(&mut engine, 8);
    let mut mirrored = Vec::new();
    while let Some(entry) = engine.pop_mem_entry() {
        mirrored.push(entry);
    }
    assert_eq!(mirrored, bursts);
}

#[test]
fn empty_request_completes_without_a_burst() {
    let mut engine = agu();
    assert!(engine.push(unit_req(0x1000, 0, Sew::E32, Direction::Load)));

    let (bursts, completions) = drain(&mut engine, 4);
    assert!(bursts.is_empty());
    assert_eq!(completions[0].result, Ok(()));
}

proptest! {
    /// Unit-stride loads from any element-aligned base produce contiguous,
    /// page-bounded, beat-capped bursts that cover the payload exactly.
    #[test]
    fn unit_bursts_tile_the_payload(
        slot in 0u64..512,
        sew_idx in 0usize..4,
        elements in 1u64..300,
    ) {
        let sew = [Sew::E8, Sew::E16, Sew::E32, Sew::E64][sew_idx];
        let base = 0x1000 + slot * 8;
        let mut engine = agu();
        prop_assert!(engine.push(unit_req(base, elements, sew, Direction::Load)));

        let (bursts, completions) = drain(&mut engine, 600);
        prop_assert_eq!(completions.len(), 1);
        prop_assert_eq!(&completions[0].result, &Ok(()));

        let page = 4096u64;
        let mut expected_addr = bursts[0].addr;
        for b in &bursts {
            prop_assert!(b.beats() <= 256);
            prop_assert_eq!(b.addr, expected_addr);
            prop_assert_eq!(b.addr / page, (b.addr + b.bytes() - 1) / page);
            expected_addr += b.bytes();
        }
        // The tiled span contains the payload and nothing beyond one beat of
        // rounding on either edge.
        let total = elements * sew.bytes();
        prop_assert!(bursts[0].addr <= base);
        prop_assert!(base - bursts[0].addr < 16);
        prop_assert!(expected_addr >= base + total);
        prop_assert!(expected_addr - (base + total) < 16);
    }
}
