//! Arithmetic/logical dispatch tests.
//!
//! Exercises the dispatch table through full decode: operand slots, scalar
//! sourcing, widening/narrowing width arithmetic, register-group alignment,
//! floating-point capability limits, and tag bookkeeping.

use pretty_assertions::assert_eq;
use rstest::rstest;
use vcfront_core::decoder::{BackendRequest, MicroOp, Operand};
use vcfront_core::isa::funct3;
use vcfront_core::isa::funct6::{opf, opi, opm};
use vcfront_core::isa::vtype::{Lmul, Sew};

use crate::common::builder::{opv, vadd_vv, vtype_bits};
use crate::common::harness::{accepting, busy, configure, decoder, issue, issue_rs1, step};

#[test]
fn vadd_vv_issues_a_complete_request() {
    let mut dec = decoder();
    configure(&mut dec, 4, vtype_bits(2, 0));

    let out = step(&mut dec, vadd_vv(1, 2, 3), 1);
    assert!(out.accepted);
    assert_eq!(
        out.request,
        Some(BackendRequest {
            op: MicroOp::Add,
            vd: Operand::active(1, Sew::E32),
            vs1: Operand::active(3, Sew::E32),
            vs2: Operand::active(2, Sew::E32),
            scalar: 0,
            masked: false,
            emul: Lmul::M1,
            evl: 4,
            swap_operands: false,
            vd_is_source: false,
            tag: 1,
        })
    );
}

#[test]
fn request_is_held_until_the_backend_accepts() {
    let mut dec = decoder();
    configure(&mut dec, 4, vtype_bits(2, 0));

    let out = dec.step(Some(&issue(vadd_vv(1, 2, 3), 1)), &busy());
    assert!(!out.accepted);
    assert!(out.request.is_some());

    let out = dec.step(Some(&issue(vadd_vv(1, 2, 3), 1)), &accepting());
    assert!(out.accepted);
}

#[test]
fn scalar_operand_travels_with_the_request() {
    let mut dec = decoder();
    configure(&mut dec, 4, vtype_bits(2, 0));

    let inst = opv(funct3::OPIVX, opi::VADD, 1, 7, 2, true);
    let out = dec.step(Some(&issue_rs1(inst, 0xAB, 1)), &accepting());
    let req = out.request.expect("request expected");
    assert_eq!(req.scalar, 0xAB);
    assert!(!req.vs1.used);
}

#[test]
fn immediate_operand_is_sign_extended() {
    let mut dec = decoder();
    configure(&mut dec, 4, vtype_bits(2, 0));

    // rs1 field 0b11111 is the immediate -1.
    let inst = opv(funct3::OPIVI, opi::VADD, 1, 0b11111, 2, true);
    let out = step(&mut dec, inst, 1);
    assert_eq!(out.request.map(|r| r.scalar), Some(u64::MAX));
}

#[test]
fn slide_and_shift_immediates_are_zero_extended() {
    let mut dec = decoder();
    configure(&mut dec, 2, vtype_bits(3, 0)); // e64

    // rs1 field 0b11111 is the offset 31, not -1.
    let inst = opv(funct3::OPIVI, opi::VSLIDEUP, 8, 0b11111, 4, true);
    let req = step(&mut dec, inst, 1).request.expect("request expected");
    assert_eq!(req.op, MicroOp::SlideUp);
    assert_eq!(req.scalar, 31);

    let inst = opv(funct3::OPIVI, opi::VSLL, 2, 0b11111, 4, true);
    let req = step(&mut dec, inst, 2).request.expect("request expected");
    assert_eq!(req.scalar, 31);
}

#[test]
fn mask_logic_sources_skip_group_alignment() {
    let mut dec = decoder();
    configure(&mut dec, 16, vtype_bits(0, 2)); // e8, m4

    // Sources are single mask registers; odd indices stay legal.
    let inst = opv(funct3::OPMVV, opm::VMAND, 1, 5, 3, true);
    let out = step(&mut dec, inst, 1);
    assert!(out.accepted);
    assert!(out.response.is_none());
    let req = out.request.expect("request expected");
    assert_eq!(req.op, MicroOp::Mand);
    assert_eq!(req.vs1, Operand::active(5, Sew::E8));
    assert_eq!(req.vs2, Operand::active(3, Sew::E8));
}

#[test]
fn macc_reads_the_destination() {
    let mut dec = decoder();
    configure(&mut dec, 4, vtype_bits(2, 0));

    let inst = opv(funct3::OPMVV, opm::VMACC, 1, 3, 2, true);
    let req = step(&mut dec, inst, 1).request.expect("request expected");
    assert_eq!(req.op, MicroOp::Macc);
    assert!(req.vd_is_source);
}

#[test]
fn widening_add_doubles_width_and_group() {
    let mut dec = decoder();
    configure(&mut dec, 8, vtype_bits(1, 1)); // e16, m2

    let inst = opv(funct3::OPMVV, opm::VWADD, 4, 2, 2, true);
    let req = step(&mut dec, inst, 1).request.expect("request expected");
    assert_eq!(req.vd, Operand::active(4, Sew::E32));
    assert_eq!(req.vs2.sew, Sew::E16);
    assert_eq!(req.emul, Lmul::M4);

    // vd=2 is not a multiple of the widened group of 4.
    let inst = opv(funct3::OPMVV, opm::VWADD, 2, 6, 6, true);
    let out = step(&mut dec, inst, 2);
    assert!(out.response.is_some_and(|r| r.error));
    assert!(out.request.is_none());
}

#[test]
fn widening_at_m8_is_illegal() {
    let mut dec = decoder();
    configure(&mut dec, 8, vtype_bits(1, 3)); // e16, m8: no wider group exists

    let inst = opv(funct3::OPMVV, opm::VWADD, 8, 0, 0, true);
    let out = step(&mut dec, inst, 1);
    assert!(out.response.is_some_and(|r| r.error));
}

#[rstest]
#[case(5, true)] // spec'd group-of-4 example: index 5 is misaligned
#[case(4, false)]
#[case(8, false)]
#[case(6, true)]
fn group_of_four_requires_aligned_registers(#[case] vd: u8, #[case] illegal: bool) {
    let mut dec = decoder();
    configure(&mut dec, 16, vtype_bits(0, 2)); // e8, m4

    let out = step(&mut dec, vadd_vv(vd, 0, 4), 1);
    assert!(out.accepted);
    assert_eq!(out.response.is_some_and(|r| r.error), illegal);
    assert_eq!(out.request.is_some(), !illegal);
}

#[test]
fn narrowing_shift_reads_wide_vs2() {
    let mut dec = decoder();
    configure(&mut dec, 4, vtype_bits(1, 0)); // e16, m1

    let inst = opv(funct3::OPIVV, opi::VNSRL, 1, 3, 2, true);
    let req = step(&mut dec, inst, 1).request.expect("request expected");
    assert_eq!(req.op, MicroOp::Srl);
    assert_eq!(req.vd.sew, Sew::E16);
    assert_eq!(req.vs2.sew, Sew::E32);
}

#[test]
fn zero_extension_narrows_the_source() {
    let mut dec = decoder();
    configure(&mut dec, 4, vtype_bits(2, 0)); // e32

    let inst = opv(funct3::OPMVV, opm::VXUNARY0, 1, 0b00110, 2, true);
    let req = step(&mut dec, inst, 1).request.expect("request expected");
    assert_eq!(req.op, MicroOp::Zext);
    assert_eq!(req.vs2.sew, Sew::E16);
    assert!(!req.vs1.used);
}

#[test]
fn extension_below_the_narrowest_width_is_illegal() {
    let mut dec = decoder();
    configure(&mut dec, 16, vtype_bits(0, 0)); // e8 has no narrower source

    let inst = opv(funct3::OPMVV, opm::VXUNARY0, 1, 0b00110, 2, true);
    let out = step(&mut dec, inst, 1);
    assert!(out.response.is_some_and(|r| r.error));
}

#[rstest]
#[case(vtype_bits(0, 0), true)] // no 8-bit floats
#[case(vtype_bits(1, 0), true)] // f16 disabled in the default capability set
#[case(vtype_bits(2, 0), false)]
#[case(vtype_bits(3, 0), false)]
fn fp_ops_respect_the_capability_set(#[case] vtype: u32, #[case] illegal: bool) {
    let mut dec = decoder();
    configure(&mut dec, 2, vtype);

    let inst = opv(funct3::OPFVV, opf::VFADD, 1, 3, 2, true);
    let out = step(&mut dec, inst, 1);
    assert_eq!(out.response.is_some_and(|r| r.error), illegal);
}

#[test]
fn fp_widening_beyond_the_capability_set_is_illegal() {
    let mut dec = decoder();
    // f32 supported, f64 not.
    let mut cfg = vcfront_core::Config::default();
    cfg.fp_widths.f64 = false;
    let mut dec2 = vcfront_core::Decoder::new(&cfg);
    configure(&mut dec2, 2, vtype_bits(2, 0));

    let inst = opv(funct3::OPFVV, opf::VFWADD, 2, 4, 4, true);
    let out = dec2.step(Some(&issue(inst, 1)), &accepting());
    assert!(out.response.is_some_and(|r| r.error));

    // The default capability set allows the same widening.
    configure(&mut dec, 2, vtype_bits(2, 0));
    let out = step(&mut dec, inst, 1);
    assert!(out.request.is_some());
}

#[test]
fn unknown_funct6_is_illegal() {
    let mut dec = decoder();
    configure(&mut dec, 4, vtype_bits(2, 0));

    let inst = opv(funct3::OPIVV, 0b000001, 1, 3, 2, true);
    let out = step(&mut dec, inst, 1);
    assert!(out.accepted);
    assert!(out.response.is_some_and(|r| r.error));
}

#[test]
fn in_flight_tags_block_duplicate_issue() {
    let mut dec = decoder();
    configure(&mut dec, 4, vtype_bits(2, 0));

    assert!(step(&mut dec, vadd_vv(1, 2, 3), 3).accepted);

    // Tag 3 is still running.
    let out = step(&mut dec, vadd_vv(4, 5, 6), 3);
    assert!(!out.accepted);
    assert!(out.request.is_none());

    dec.retire(3);
    assert!(step(&mut dec, vadd_vv(4, 5, 6), 3).accepted);
}

#[test]
fn reverse_subtract_swaps_operands() {
    let mut dec = decoder();
    configure(&mut dec, 4, vtype_bits(2, 0));

    let inst = opv(funct3::OPIVX, opi::VRSUB, 1, 7, 2, true);
    let req = step(&mut dec, inst, 1).request.expect("request expected");
    assert_eq!(req.op, MicroOp::Rsub);
    assert!(req.swap_operands);
}

#[test]
fn compare_results_occupy_a_single_register() {
    let mut dec = decoder();
    configure(&mut dec, 16, vtype_bits(0, 2)); // e8, m4

    // Mask destinations are exempt from the group alignment rule.
    let inst = opv(funct3::OPIVV, opi::VMSEQ, 1, 4, 8, true);
    let req = step(&mut dec, inst, 1).request.expect("request expected");
    assert_eq!(req.op, MicroOp::Mseq);
    assert_eq!(req.vd.reg, 1);
}
