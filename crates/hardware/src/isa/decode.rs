//! LS8 Instruction Decoder.
//!
//! Maps an opcode byte to the fixed set of operations the machine executes.
//! Bytes outside that set decode to `None`; the engine treats them as
//! unknown instructions rather than errors.

use crate::core::units::alu::AluOp;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes;

/// Every operation the machine dispatches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// `register[reg] <- value`.
    Ldi = opcodes::LDI,
    /// Print `register[reg]`.
    Prn = opcodes::PRN,
    /// `register[a] <- register[a] * register[b]`.
    Mul = opcodes::MUL,
    /// Set flags from `register[a]` vs `register[b]`.
    Cmp = opcodes::CMP,
    /// `Memory[SP] <- register[reg]; SP -= 1`.
    Push = opcodes::PUSH,
    /// `SP += 1; register[reg] <- Memory[SP]`.
    Pop = opcodes::POP,
    /// `Memory[register[a]] <- register[b]`.
    St = opcodes::ST,
    /// `PC <- register[reg]`.
    Jmp = opcodes::JMP,
    /// Jump if the Equal flag is set.
    Jeq = opcodes::JEQ,
    /// Jump if the Equal flag is clear.
    Jne = opcodes::JNE,
    /// Stop the machine.
    Hlt = opcodes::HLT,
}

impl Opcode {
    /// Decodes an opcode byte.
    pub const fn decode(byte: u8) -> Option<Self> {
        match byte {
            opcodes::LDI => Some(Self::Ldi),
            opcodes::PRN => Some(Self::Prn),
            opcodes::MUL => Some(Self::Mul),
            opcodes::CMP => Some(Self::Cmp),
            opcodes::PUSH => Some(Self::Push),
            opcodes::POP => Some(Self::Pop),
            opcodes::ST => Some(Self::St),
            opcodes::JMP => Some(Self::Jmp),
            opcodes::JEQ => Some(Self::Jeq),
            opcodes::JNE => Some(Self::Jne),
            opcodes::HLT => Some(Self::Hlt),
            _ => None,
        }
    }

    /// The opcode byte.
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Upper-case mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Mul => "MUL",
            Self::Cmp => "CMP",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::St => "ST",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
            Self::Hlt => "HLT",
        }
    }

    /// Operand bytes following the opcode.
    pub fn operand_count(self) -> usize {
        self.byte().operand_count()
    }

    /// Bytes consumed when the PC advances sequentially past this instruction.
    pub fn width(self) -> usize {
        self.operand_count() + 1
    }

    /// Whether the instruction writes the PC itself.
    pub fn sets_pc(self) -> bool {
        self.byte().sets_pc()
    }

    /// The ALU operation this opcode routes to, if it is an ALU instruction.
    pub fn alu_op(self) -> Option<AluOp> {
        if !self.byte().is_alu() {
            return None;
        }
        match self {
            Self::Mul => Some(AluOp::Mul),
            Self::Cmp => Some(AluOp::Cmp),
            _ => None,
        }
    }
}

/// Decodes an opcode byte; `None` for bytes the machine does not implement.
pub const fn decode(byte: u8) -> Option<Opcode> {
    Opcode::decode(byte)
}
