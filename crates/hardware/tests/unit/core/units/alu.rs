//! # ALU Tests
//!
//! Wrapping 8-bit arithmetic, comparison, and lookup by name.

use ls8_core::common::Trap;
use ls8_core::core::arch::flags::Flags;
use ls8_core::core::units::alu::{Alu, AluOp, AluOutput};
use rstest::rstest;

#[rstest]
#[case(0, 0, 0)]
#[case(6, 7, 42)]
#[case(1, 255, 255)]
#[case(16, 16, 0)] // 256 wraps to 0
#[case(16, 17, 16)] // 272 mod 256
#[case(255, 255, 1)] // 65025 mod 256
fn test_mul_wraps_modulo_256(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(Alu::execute(AluOp::Mul, a, b), AluOutput::Value(expected));
}

#[rstest]
#[case(1, 2, 3)]
#[case(200, 100, 44)]
#[case(255, 1, 0)]
fn test_add_wraps_modulo_256(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(Alu::execute(AluOp::Add, a, b), AluOutput::Value(expected));
}

#[rstest]
#[case(5, 5, true, false, false)]
#[case(9, 5, false, true, false)]
#[case(5, 9, false, false, true)]
#[case(0, 255, false, false, true)]
fn test_cmp_flags(
    #[case] a: u8,
    #[case] b: u8,
    #[case] equal: bool,
    #[case] greater: bool,
    #[case] less: bool,
) {
    assert_eq!(
        Alu::execute(AluOp::Cmp, a, b),
        AluOutput::Flags(Flags { equal, greater, less })
    );
}

#[rstest]
#[case("ADD", AluOp::Add)]
#[case("MUL", AluOp::Mul)]
#[case("CMP", AluOp::Cmp)]
fn test_alu_op_from_name(#[case] name: &str, #[case] op: AluOp) {
    assert_eq!(name.parse::<AluOp>(), Ok(op));
    assert_eq!(op.to_string(), name);
}

#[rstest]
#[case("DIV")]
#[case("add")]
#[case("")]
fn test_unknown_alu_name_is_unsupported(#[case] name: &str) {
    assert_eq!(
        Alu::execute_named(name, 1, 2),
        Err(Trap::UnsupportedAluOp(name.to_owned()))
    );
}

#[test]
fn test_execute_named_matches_execute() {
    assert_eq!(Alu::execute_named("MUL", 3, 4), Ok(AluOutput::Value(12)));
}
