//! # End-to-End Runs
//!
//! Complete programs in image-text form, run through `Simulator`.

use std::io::Write;

use ls8_core::Simulator;
use ls8_core::common::{ExecError, SP_INIT, Trap};
use ls8_core::config::Config;
use ls8_core::isa::opcodes;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use crate::common::builder::program::ProgramBuilder;

const PRINT8: &str = "\
# print8.ls8: print the number 8
10000010 # LDI R0,8
00000000
00001000
01000111 # PRN R0
00000000
00000001 # HLT
";

/// Multiplies 8 by 9 and prints the product.
const MULT: &str = "\
10000010 # LDI R0,8
00000000
00001000
10000010 # LDI R1,9
00000001
00001001
10100010 # MUL R0,R1
00000000
00000001
01000111 # PRN R0
00000000
00000001 # HLT
";

fn run_source(sim: &mut Simulator, source: &str) -> String {
    sim.load_source(source).unwrap();
    let mut out: Vec<u8> = Vec::new();
    let _ = sim.run(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_print8_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(PRINT8.as_bytes()).unwrap();

    let mut sim = Simulator::default();
    sim.load_file(file.path()).unwrap();
    let mut out: Vec<u8> = Vec::new();
    let stats = sim.run(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "hex val: 8\tdec val: 8\tbin val: 1000\n"
    );
    assert_eq!(stats.instructions_dispatched, 3);
    assert_eq!(stats.prints, 1);
    assert!(sim.cpu.halted);
    assert_eq!(sim.cpu.pc, 5);
}

#[test]
fn test_mult() {
    let mut sim = Simulator::default();
    assert_eq!(
        run_source(&mut sim, MULT),
        "hex val: 48\tdec val: 72\tbin val: 1001000\n"
    );
}

#[test]
fn test_stack_program() {
    let source = ProgramBuilder::new()
        .ldi(0, 1)
        .ldi(1, 2)
        .push(0)
        .push(1)
        .ldi(0, 3)
        .pop(0)
        .prn(0)
        .pop(0)
        .prn(0)
        .hlt()
        .to_source();
    let mut sim = Simulator::default();
    let out = run_source(&mut sim, &source);
    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        vec![
            "hex val: 2\tdec val: 2\tbin val: 10",
            "hex val: 1\tdec val: 1\tbin val: 1",
        ]
    );
    assert_eq!(sim.cpu.regs.sp(), SP_INIT);
}

#[test]
fn test_doubling_loop() {
    // top: PRN R1; MUL R1,R2; CMP R1,R3; JNE top
    let source = ProgramBuilder::new()
        .ldi(1, 1) // 0
        .ldi(2, 2) // 3
        .ldi(3, 16) // 6
        .ldi(4, 12) // 9
        .prn(1) // 12
        .mul(1, 2) // 14
        .cmp(1, 3) // 17
        .jne(4) // 20
        .prn(1) // 22
        .hlt() // 24
        .to_source();
    let mut sim = Simulator::default();
    let out = run_source(&mut sim, &source);
    let decimals: Vec<&str> = out
        .lines()
        .filter_map(|line| line.split('\t').nth(1))
        .collect();
    assert_eq!(
        decimals,
        vec![
            "dec val: 1",
            "dec val: 2",
            "dec val: 4",
            "dec val: 8",
            "dec val: 16"
        ]
    );
}

#[test]
fn test_unknown_opcodes_are_skipped() {
    let source = ProgramBuilder::new()
        .raw(0b1010_0000)
        .raw(0xFF)
        .ldi(0, 1)
        .prn(0)
        .hlt()
        .to_source();
    let mut sim = Simulator::default();
    sim.load_source(&source).unwrap();
    let mut out: Vec<u8> = Vec::new();
    let stats = sim.run(&mut out).unwrap();
    assert_eq!(stats.unknown_opcodes, 2);
    assert_eq!(stats.instructions_dispatched, 3);
    assert_eq!(out.len(), "hex val: 1\tdec val: 1\tbin val: 1\n".len());
}

#[test]
fn test_running_off_the_end_of_memory_traps() {
    // No HLT: PC walks through zeroed memory until it leaves the address space.
    let mut sim = Simulator::default();
    sim.load_source("00000000\n").unwrap();
    let mut out: Vec<u8> = Vec::new();
    let err = sim.run(&mut out).unwrap_err();
    assert_eq!(err, ExecError::new(256, 0, Trap::AddressOutOfBounds(256)));
    assert_eq!(sim.cpu.stats.unknown_opcodes, 256);
}

#[test]
fn test_reset_restores_configured_state() {
    let config = Config::from_json(r#"{ "machine": { "initial_sp": 200 } }"#).unwrap();
    let mut sim = Simulator::new(config);
    let _ = run_source(&mut sim, MULT);
    assert!(sim.cpu.halted);

    sim.reset();
    assert!(!sim.cpu.halted);
    assert_eq!(sim.cpu.pc, 0);
    assert_eq!(sim.cpu.regs.sp(), 200);
    assert_eq!(sim.cpu.regs.read(0), Ok(0));
    assert_eq!(sim.cpu.ram_read(0), Ok(0));
    assert_eq!(sim.config().machine.initial_sp, 200);
}

#[test]
fn test_halted_machine_stays_halted() {
    let mut sim = Simulator::default();
    let _ = run_source(&mut sim, PRINT8);
    let mut out: Vec<u8> = Vec::new();
    let stats = sim.run(&mut out).unwrap();
    assert!(out.is_empty());
    assert_eq!(stats.instructions_dispatched, 3);
}

#[test]
fn test_trace_does_not_change_behavior() {
    let config = Config::from_json(r#"{ "general": { "trace_instructions": true } }"#).unwrap();
    let mut sim = Simulator::new(config);
    assert_eq!(
        run_source(&mut sim, PRINT8),
        "hex val: 8\tdec val: 8\tbin val: 1000\n"
    );
}

#[test]
fn test_trap_reports_instruction_context() {
    let source = ProgramBuilder::new().ldi(0, 0).raw(opcodes::PRN).raw(12).to_source();
    let mut sim = Simulator::default();
    sim.load_source(&source).unwrap();
    let err = sim.run(&mut Vec::<u8>::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "fatal trap at pc 0x03 (opcode 0b01000111): register index 12 out of range"
    );
}
