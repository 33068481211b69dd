//! # Decoder Tests
//!
//! Every defined opcode decodes, and its byte layout agrees with how the
//! engine advances the PC.

use ls8_core::core::units::alu::AluOp;
use ls8_core::isa::instruction::InstructionBits;
use ls8_core::isa::{Opcode, decode::decode, opcodes};
use rstest::rstest;

#[rstest]
#[case(opcodes::LDI, Opcode::Ldi, "LDI", 2)]
#[case(opcodes::PRN, Opcode::Prn, "PRN", 1)]
#[case(opcodes::MUL, Opcode::Mul, "MUL", 2)]
#[case(opcodes::CMP, Opcode::Cmp, "CMP", 2)]
#[case(opcodes::PUSH, Opcode::Push, "PUSH", 1)]
#[case(opcodes::POP, Opcode::Pop, "POP", 1)]
#[case(opcodes::ST, Opcode::St, "ST", 2)]
#[case(opcodes::JMP, Opcode::Jmp, "JMP", 1)]
#[case(opcodes::JEQ, Opcode::Jeq, "JEQ", 1)]
#[case(opcodes::JNE, Opcode::Jne, "JNE", 1)]
#[case(opcodes::HLT, Opcode::Hlt, "HLT", 0)]
fn test_decode_defined_opcodes(
    #[case] byte: u8,
    #[case] expected: Opcode,
    #[case] mnemonic: &str,
    #[case] operands: usize,
) {
    let op = decode(byte).unwrap();
    assert_eq!(op, expected);
    assert_eq!(op.byte(), byte);
    assert_eq!(op.mnemonic(), mnemonic);
    assert_eq!(op.operand_count(), operands);
    assert_eq!(op.width(), operands + 1);
}

#[test]
fn test_opcode_byte_values() {
    assert_eq!(opcodes::LDI, 0b1000_0010);
    assert_eq!(opcodes::PRN, 0b0100_0111);
    assert_eq!(opcodes::MUL, 0b1010_0010);
    assert_eq!(opcodes::CMP, 0b1010_0111);
    assert_eq!(opcodes::PUSH, 0b0100_0101);
    assert_eq!(opcodes::POP, 0b0100_0110);
    assert_eq!(opcodes::ST, 0b1000_0100);
    assert_eq!(opcodes::JMP, 0b0101_0100);
    assert_eq!(opcodes::JEQ, 0b0101_0101);
    assert_eq!(opcodes::JNE, 0b0101_0110);
    assert_eq!(opcodes::HLT, 0b0000_0001);
}

#[test]
fn test_sets_pc_bit_marks_jumps_only() {
    let jumps = [Opcode::Jmp, Opcode::Jeq, Opcode::Jne];
    for byte in 0..=u8::MAX {
        if let Some(op) = decode(byte) {
            assert_eq!(op.sets_pc(), jumps.contains(&op), "{}", op.mnemonic());
        }
    }
}

#[test]
fn test_alu_bit_routes_to_alu() {
    assert!(opcodes::MUL.is_alu());
    assert!(opcodes::CMP.is_alu());
    assert!(!opcodes::LDI.is_alu());
    assert_eq!(Opcode::Mul.alu_op(), Some(AluOp::Mul));
    assert_eq!(Opcode::Cmp.alu_op(), Some(AluOp::Cmp));
    assert_eq!(Opcode::Ldi.alu_op(), None);
    assert_eq!(Opcode::Jeq.alu_op(), None);
}

#[test]
fn test_instruction_id_field() {
    assert_eq!(opcodes::LDI.instruction_id(), 0b0010);
    assert_eq!(opcodes::MUL.instruction_id(), 0b0010);
    assert_eq!(opcodes::JNE.instruction_id(), 0b0110);
}

#[test]
fn test_exactly_eleven_bytes_decode() {
    let defined = (0..=u8::MAX).filter_map(decode).count();
    assert_eq!(defined, 11);
}

#[rstest]
#[case::zero(0x00)]
#[case::add(0b1010_0000)]
#[case::all_ones(0xFF)]
#[case::ldi_without_operand_bits(0b0000_0010)]
fn test_undefined_bytes_do_not_decode(#[case] byte: u8) {
    assert_eq!(decode(byte), None);
}
