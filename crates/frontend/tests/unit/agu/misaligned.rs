//! Misalignment handling: degraded store bursts and aborted requests.

use pretty_assertions::assert_eq;
use vcfront_core::agu::BurstDescriptor;
use vcfront_core::common::error::VectorError;
use vcfront_core::decoder::{AddressMode, Direction, MemRequest};
use vcfront_core::isa::vtype::Sew;

use crate::common::harness::{agu, drain, unit_req};

#[test]
fn misaligned_store_degrades_to_byte_beats_until_aligned() {
    let mut engine = agu();
    assert!(engine.push(unit_req(0x1003, 64, Sew::E8, Direction::Store)));

    let (bursts, completions) = drain(&mut engine, 8);
    assert_eq!(
        bursts,
        vec![
            // 13 single-byte beats up to the next bus-width boundary.
            BurstDescriptor {
                addr: 0x1003,
                len: 12,
                size: 0,
                dir: Direction::Store,
            },
            // The remainder resumes at the native width.
            BurstDescriptor {
                addr: 0x1010,
                len: 3,
                size: 4,
                dir: Direction::Store,
            },
        ]
    );
    assert_eq!(completions[0].result, Ok(()));
}

#[test]
fn misaligned_loads_keep_the_native_width() {
    let mut engine = agu();
    assert!(engine.push(unit_req(0x1003, 64, Sew::E8, Direction::Load)));

    let (bursts, _) = drain(&mut engine, 8);
    // Reads round down to the bus boundary instead of degrading.
    assert_eq!(bursts.len(), 1);
    assert_eq!(bursts[0].addr, 0x1000);
    assert_eq!(bursts[0].size, 4);
}

#[test]
fn element_misaligned_base_is_rejected_at_acceptance() {
    let mut engine = agu();
    assert!(engine.push(unit_req(0x1002, 8, Sew::E32, Direction::Load)));

    let (bursts, completions) = drain(&mut engine, 4);
    assert!(bursts.is_empty());
    assert_eq!(
        completions[0].result,
        Err(VectorError::MisalignedAddress(0x1002))
    );
}

#[test]
fn element_misaligned_stride_is_rejected_at_acceptance() {
    let mut engine = agu();
    assert!(engine.push(MemRequest {
        base: 0x1000,
        elements: 4,
        stride: 6,
        sew: Sew::E32,
        dir: Direction::Load,
        mode: AddressMode::Strided,
        burst_eligible: false,
        offsets: Vec::new(),
        tag: 3,
    }));

    let (bursts, completions) = drain(&mut engine, 4);
    assert!(bursts.is_empty());
    assert_eq!(
        completions[0].result,
        Err(VectorError::MisalignedAddress(0x1000))
    );
}

#[test]
fn misaligned_indexed_element_aborts_mid_flight() {
    let mut engine = agu();
    assert!(engine.push(MemRequest {
        base: 0x1000,
        elements: 3,
        stride: 0,
        sew: Sew::E32,
        dir: Direction::Load,
        mode: AddressMode::Indexed,
        burst_eligible: false,
        offsets: vec![0, 6, 8],
        tag: 5,
    }));

    let (bursts, completions) = drain(&mut engine, 8);
    // The first element went out before the fault was reached.
    assert_eq!(bursts.len(), 1);
    assert_eq!(bursts[0].addr, 0x1000);
    assert_eq!(
        completions[0].result,
        Err(VectorError::MisalignedAddress(0x1006))
    );

    // The abort returns the engine to idle; later requests are unaffected.
    assert!(engine.push(unit_req(0x2000, 16, Sew::E8, Direction::Load)));
    let (bursts, completions) = drain(&mut engine, 8);
    assert_eq!(bursts.len(), 1);
    assert_eq!(completions[0].result, Ok(()));
}

#[test]
fn indexed_offset_count_must_match_the_element_count() {
    let mut engine = agu();
    assert!(engine.push(MemRequest {
        base: 0x1000,
        elements: 4,
        stride: 0,
        sew: Sew::E32,
        dir: Direction::Load,
        mode: AddressMode::Indexed,
        burst_eligible: false,
        offsets: vec![0, 4],
        tag: 9,
    }));

    let (bursts, completions) = drain(&mut engine, 4);
    assert!(bursts.is_empty());
    assert_eq!(completions[0].result, Err(VectorError::MalformedRequest(9)));
}
