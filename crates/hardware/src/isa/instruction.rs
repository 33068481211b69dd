//! Instruction encoding utilities.
//!
//! Provides field extraction for LS8 opcode bytes and the structure the
//! execution engine works on after fetching operands.

use crate::isa::decode::Opcode;

/// Bit shift for the operand-count field (bits 6-7).
pub const OPERAND_COUNT_SHIFT: u8 = 6;
/// Bit mask for the ALU flag (bit 5).
pub const ALU_MASK: u8 = 0b0010_0000;
/// Bit mask for the sets-PC flag (bit 4).
pub const SETS_PC_MASK: u8 = 0b0001_0000;
/// Bit mask for the instruction identifier (bits 0-3).
pub const ID_MASK: u8 = 0b0000_1111;

/// Field extraction for an opcode byte.
pub trait InstructionBits {
    /// Number of operand bytes following the opcode (bits 6-7).
    fn operand_count(&self) -> usize;

    /// Whether bit 5 marks this as an ALU operation.
    fn is_alu(&self) -> bool;

    /// Whether bit 4 marks this as setting the PC itself.
    fn sets_pc(&self) -> bool;

    /// Instruction identifier (bits 0-3).
    fn instruction_id(&self) -> u8;
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> usize {
        (self >> OPERAND_COUNT_SHIFT) as usize
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        self & ALU_MASK != 0
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_MASK != 0
    }

    #[inline(always)]
    fn instruction_id(&self) -> u8 {
        self & ID_MASK
    }
}

/// A decoded instruction with its operand bytes.
///
/// Operands the opcode does not take are zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Decoded operation.
    pub opcode: Opcode,
    /// First operand byte (`Memory[PC+1]`).
    pub a: u8,
    /// Second operand byte (`Memory[PC+2]`).
    pub b: u8,
}

impl Instruction {
    /// Total width in bytes, opcode included.
    pub fn width(&self) -> usize {
        self.opcode.width()
    }

    /// First operand as a register index.
    pub const fn reg_a(&self) -> usize {
        self.a as usize
    }

    /// Second operand as a register index.
    pub const fn reg_b(&self) -> usize {
        self.b as usize
    }
}
