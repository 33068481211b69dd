//! Simulation statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Dispatch count:** Instructions executed, which bounds the loop for halting programs.
//! 2. **Instruction mix:** Counts by category (ALU, stack, jumps taken/not taken, prints).
//! 3. **Decode faults:** Unknown opcode bytes that were skipped.

use std::time::Instant;

use crate::isa::decode::Opcode;

/// Simulation statistics structure.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Recognized instructions executed, HLT included.
    pub instructions_dispatched: u64,
    /// Unknown opcode bytes skipped.
    pub unknown_opcodes: u64,
    /// ALU instructions (MUL, CMP) executed.
    pub alu_ops: u64,
    /// PUSH and POP instructions executed.
    pub stack_ops: u64,
    /// Memory stores (ST) executed.
    pub stores: u64,
    /// JMP/JEQ/JNE that transferred control.
    pub jumps_taken: u64,
    /// JEQ/JNE that fell through.
    pub jumps_not_taken: u64,
    /// PRN instructions executed.
    pub prints: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_dispatched: 0,
            unknown_opcodes: 0,
            alu_ops: 0,
            stack_ops: 0,
            stores: 0,
            jumps_taken: 0,
            jumps_not_taken: 0,
            prints: 0,
        }
    }
}

impl SimStats {
    /// Counts one executed instruction in its category.
    ///
    /// Jump outcomes are recorded separately by [`record_jump`](Self::record_jump).
    pub const fn record(&mut self, op: Opcode) {
        self.instructions_dispatched += 1;
        match op {
            Opcode::Mul | Opcode::Cmp => self.alu_ops += 1,
            Opcode::Push | Opcode::Pop => self.stack_ops += 1,
            Opcode::St => self.stores += 1,
            Opcode::Prn => self.prints += 1,
            Opcode::Ldi | Opcode::Jmp | Opcode::Jeq | Opcode::Jne | Opcode::Hlt => {}
        }
    }

    /// Counts a control transfer decision.
    pub const fn record_jump(&mut self, taken: bool) {
        if taken {
            self.jumps_taken += 1;
        } else {
            self.jumps_not_taken += 1;
        }
    }

    /// Counts a skipped unknown opcode.
    pub const fn record_unknown(&mut self) {
        self.unknown_opcodes += 1;
    }

    /// Wall-clock seconds since the stats were created.
    pub fn host_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Logs the summary at `debug` level.
    pub fn log_summary(&self) {
        tracing::debug!(
            host_seconds = self.host_seconds(),
            instructions = self.instructions_dispatched,
            unknown = self.unknown_opcodes,
            alu = self.alu_ops,
            stack = self.stack_ops,
            stores = self.stores,
            jumps_taken = self.jumps_taken,
            jumps_not_taken = self.jumps_not_taken,
            prints = self.prints,
            "run statistics"
        );
    }
}
