//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the ALU used by the execution engine. It operates
//! purely on two register values and never touches memory or the PC.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Mul (both wrap modulo 256)
//! - [`compare`]:    Cmp (produces condition flags, never a register value)

/// Wrapping 8-bit arithmetic.
pub mod arithmetic;

/// Comparison producing condition flags.
pub mod compare;

use std::fmt;
use std::str::FromStr;

use crate::common::error::Trap;
use crate::core::arch::flags::Flags;

/// Operations the ALU implements.
///
/// `Add` has no opcode in the LS8 dispatch table; it is reachable only through
/// [`Alu::execute`] and [`Alu::execute_named`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `a + b`, wrapping.
    Add,
    /// `a * b`, wrapping.
    Mul,
    /// Compare `a` with `b`.
    Cmp,
}

impl AluOp {
    /// Upper-case mnemonic.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Cmp => "CMP",
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AluOp {
    type Err = Trap;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD" => Ok(Self::Add),
            "MUL" => Ok(Self::Mul),
            "CMP" => Ok(Self::Cmp),
            other => Err(Trap::UnsupportedAluOp(other.to_owned())),
        }
    }
}

/// What an ALU operation produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOutput {
    /// New value for the destination register.
    Value(u8),
    /// New condition flags; registers are untouched.
    Flags(Flags),
}

/// Arithmetic Logic Unit.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation on two register values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluOp, AluOutput};
    ///
    /// assert_eq!(Alu::execute(AluOp::Mul, 6, 7), AluOutput::Value(42));
    /// // 8-bit registers wrap
    /// assert_eq!(Alu::execute(AluOp::Mul, 16, 17), AluOutput::Value(16));
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> AluOutput {
        match op {
            AluOp::Add | AluOp::Mul => AluOutput::Value(arithmetic::execute(op, a, b)),
            AluOp::Cmp => AluOutput::Flags(compare::execute(a, b)),
        }
    }

    /// Executes an ALU operation given by mnemonic.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::UnsupportedAluOp`] for any name other than `ADD`, `MUL`
    /// or `CMP`.
    pub fn execute_named(name: &str, a: u8, b: u8) -> Result<AluOutput, Trap> {
        let op: AluOp = name.parse()?;
        Ok(Self::execute(op, a, b))
    }
}
