//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch:** Reads the opcode byte at PC into IR, then the operand bytes it declares.
//! 2. **Decode:** Maps IR to an [`Opcode`]; unknown bytes are reported and skipped.
//! 3. **Execute:** Applies the instruction to registers, flags, memory, PC, or the output sink.
//! 4. **Observability:** Optional per-instruction trace logging and run statistics.

use std::io::Write;

use super::Cpu;
use crate::common::error::{ExecError, Trap};
use crate::core::units::alu::{Alu, AluOp, AluOutput};
use crate::isa::decode::Opcode;
use crate::isa::disasm;
use crate::isa::instruction::Instruction;
use crate::stats::SimStats;

/// What a single `step` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A recognized instruction ran and the machine is still running.
    Executed(Opcode),
    /// HLT ran (or had already run); the machine is stopped.
    Halted,
    /// The byte at PC was not an opcode; PC moved past it.
    Unknown(u8),
}

impl Cpu {
    /// Runs until HLT.
    ///
    /// PRN output is written to `out`. Unknown opcodes are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns the first fatal [`ExecError`]; the machine is left as it was
    /// when the trap fired.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<SimStats, ExecError> {
        while self.step(out)? != StepOutcome::Halted {}
        tracing::debug!(pc = self.pc, "halted");
        self.stats.log_summary();
        Ok(self.stats.clone())
    }

    /// Fetches, decodes, and executes one instruction.
    ///
    /// # Errors
    ///
    /// Returns an [`ExecError`] carrying the PC and opcode byte of the
    /// instruction that trapped. If the PC itself is out of range, the
    /// opcode reported is the last one fetched.
    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<StepOutcome, ExecError> {
        if self.halted {
            return Ok(StepOutcome::Halted);
        }

        let pc = self.pc;
        let ir = self
            .ram_read(pc)
            .map_err(|trap| ExecError::new(pc, self.ir, trap))?;
        self.ir = ir;

        if self.trace {
            self.trace_instruction();
        }

        let Some(opcode) = Opcode::decode(ir) else {
            tracing::warn!(pc, opcode = ir, "unknown instruction");
            self.stats.record_unknown();
            self.pc = pc + 1;
            return Ok(StepOutcome::Unknown(ir));
        };

        let outcome = self
            .fetch_operands(opcode)
            .and_then(|inst| self.execute(inst, out))
            .map_err(|trap| ExecError::new(pc, ir, trap))?;
        self.stats.record(opcode);
        Ok(outcome)
    }

    /// Reads the operand bytes `opcode` declares from the bytes after PC.
    fn fetch_operands(&self, opcode: Opcode) -> Result<Instruction, Trap> {
        let count = opcode.operand_count();
        let a = if count >= 1 { self.ram_read(self.pc + 1)? } else { 0 };
        let b = if count >= 2 { self.ram_read(self.pc + 2)? } else { 0 };
        Ok(Instruction { opcode, a, b })
    }

    /// Executes a decoded instruction and updates the PC.
    fn execute<W: Write>(&mut self, inst: Instruction, out: &mut W) -> Result<StepOutcome, Trap> {
        let target = match inst.opcode {
            Opcode::Ldi => {
                self.regs.write(inst.reg_a(), inst.b)?;
                None
            }
            Opcode::Prn => {
                let val = self.regs.read(inst.reg_a())?;
                writeln!(out, "hex val: {val:x}\tdec val: {val}\tbin val: {val:b}")
                    .map_err(|e| Trap::Output(e.to_string()))?;
                None
            }
            Opcode::Mul | Opcode::Cmp => {
                let op = inst
                    .opcode
                    .alu_op()
                    .ok_or_else(|| Trap::UnsupportedAluOp(inst.opcode.mnemonic().to_owned()))?;
                self.alu(op, inst.reg_a(), inst.reg_b())?;
                None
            }
            Opcode::Push => {
                let val = self.regs.read(inst.reg_a())?;
                self.push(val)?;
                None
            }
            Opcode::Pop => {
                // Validate the destination before touching the stack pointer.
                let _ = self.regs.read(inst.reg_a())?;
                let val = self.pop()?;
                self.regs.write(inst.reg_a(), val)?;
                None
            }
            Opcode::St => {
                let addr = self.regs.read(inst.reg_a())?;
                let val = self.regs.read(inst.reg_b())?;
                self.ram_write(addr as usize, val)?;
                None
            }
            Opcode::Jmp => self.branch(true, inst)?,
            Opcode::Jeq => self.branch(self.flags.equal()?, inst)?,
            Opcode::Jne => self.branch(!self.flags.equal()?, inst)?,
            Opcode::Hlt => {
                self.halted = true;
                return Ok(StepOutcome::Halted);
            }
        };

        self.pc = target.map_or(self.pc + inst.width(), |addr| addr as usize);
        Ok(StepOutcome::Executed(inst.opcode))
    }

    /// Resolves a jump: the target register is read only when taken.
    /// The jump is counted only once the target register has been read.
    fn branch(&mut self, taken: bool, inst: Instruction) -> Result<Option<u8>, Trap> {
        let target = if taken {
            Some(self.regs.read(inst.reg_a())?)
        } else {
            None
        };
        self.stats.record_jump(taken);
        Ok(target)
    }

    /// Runs an ALU operation on registers `a` and `b`.
    ///
    /// Arithmetic results are written back to `a`; CMP only updates flags.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::InvalidRegister`] if either index is not a register.
    pub fn alu(&mut self, op: AluOp, a: usize, b: usize) -> Result<(), Trap> {
        let lhs = self.regs.read(a)?;
        let rhs = self.regs.read(b)?;
        match Alu::execute(op, lhs, rhs) {
            AluOutput::Value(val) => self.regs.write(a, val),
            AluOutput::Flags(flags) => {
                self.flags.set(flags);
                Ok(())
            }
        }
    }

    /// Runs an ALU operation given by mnemonic (`"ADD"`, `"MUL"`, `"CMP"`).
    ///
    /// # Errors
    ///
    /// Returns [`Trap::UnsupportedAluOp`] for any other name, before any
    /// register is read.
    pub fn alu_named(&mut self, name: &str, a: usize, b: usize) -> Result<(), Trap> {
        let op: AluOp = name.parse()?;
        self.alu(op, a, b)
    }

    /// Renders the trace line for the instruction at PC.
    ///
    /// Format: `TRACE: PC | IR OP1 OP2 | R0 R1 R2 R3 R4 R5 R6 R7`, all two-digit hex.
    pub fn trace_line(&self) -> String {
        let byte = |addr: usize| self.ram_read(addr).unwrap_or(0);
        let regs = self
            .regs
            .snapshot()
            .iter()
            .map(|r| format!(" {r:02X}"))
            .collect::<String>();
        format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |{regs}",
            self.pc,
            byte(self.pc),
            byte(self.pc + 1),
            byte(self.pc + 2)
        )
    }

    fn trace_instruction(&self) {
        tracing::trace!(
            target: "ls8::trace",
            "{}  {}",
            self.trace_line(),
            disasm::disassemble(&self.ram, self.pc)
        );
    }
}
