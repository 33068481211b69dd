//! # Disassembler Tests

use ls8_core::isa::disasm::disassemble;
use ls8_core::soc::Memory;
use pretty_assertions::assert_eq;

use crate::common::builder::program::ProgramBuilder;

fn memory(image: &[u8]) -> Memory {
    let mut mem = Memory::new();
    mem.load_image(image).unwrap();
    mem
}

#[test]
fn test_disassemble_program() {
    let image = ProgramBuilder::new()
        .ldi(0, 8) // 0
        .prn(0) // 3
        .mul(0, 1) // 5
        .cmp(2, 3) // 8
        .push(7) // 11
        .pop(4) // 13
        .st(5, 6) // 15
        .jmp(1) // 18
        .jeq(2) // 20
        .jne(3) // 22
        .hlt() // 24
        .build();
    let mem = memory(&image);
    let lines: Vec<String> = [0, 3, 5, 8, 11, 13, 15, 18, 20, 22, 24]
        .into_iter()
        .map(|addr| disassemble(&mem, addr))
        .collect();
    assert_eq!(
        lines,
        vec![
            "LDI R0, 0x08",
            "PRN R0",
            "MUL R0, R1",
            "CMP R2, R3",
            "PUSH SP",
            "POP R4",
            "ST R5, R6",
            "JMP R1",
            "JEQ R2",
            "JNE R3",
            "HLT",
        ]
    );
}

#[test]
fn test_unknown_byte() {
    let mem = memory(&[0b1010_0000]);
    assert_eq!(disassemble(&mem, 0), ".byte 0xa0");
}

#[test]
fn test_bad_register_operand() {
    let mem = memory(&[0b0100_0111, 9]);
    assert_eq!(disassemble(&mem, 0), "PRN R?9");
}

#[test]
fn test_operands_past_end_of_memory() {
    let mut mem = Memory::new();
    mem.write(255, 0b1000_0010).unwrap();
    assert_eq!(disassemble(&mem, 255), "LDI ??");
    assert_eq!(disassemble(&mem, 256), "??");
}
