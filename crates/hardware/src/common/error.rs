//! Trap and error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Trap Representation:** The fatal conditions raised while executing instructions.
//! 2. **Execution Errors:** A trap tagged with the program counter and opcode that raised it.
//! 3. **Load Errors:** Failures reading or parsing a program image, raised before execution.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal execution conditions.
///
/// A trap aborts the run. Unknown opcodes are not traps; the engine reports
/// and skips them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// Memory access outside `[0, 256)`.
    ///
    /// The associated value is the offending address.
    #[error("memory address {0:#x} out of bounds")]
    AddressOutOfBounds(usize),

    /// Register operand outside `[0, 8)`.
    ///
    /// The associated value is the offending register index.
    #[error("register index {0} out of range")]
    InvalidRegister(usize),

    /// PUSH with the stack pointer already at address 0.
    #[error("stack overflow: push with sp at {sp:#04x}")]
    StackOverflow {
        /// Stack pointer at the time of the push.
        sp: u8,
    },

    /// POP with the stack pointer already at the top of memory.
    #[error("stack underflow: pop with sp at {sp:#04x}")]
    StackUnderflow {
        /// Stack pointer at the time of the pop.
        sp: u8,
    },

    /// ALU asked to perform an operation it does not implement.
    #[error("unsupported ALU operation `{0}`")]
    UnsupportedAluOp(String),

    /// Conditional jump executed before any CMP set the flags.
    #[error("condition flags read before any compare")]
    FlagsUnset,

    /// The PRN output sink failed.
    #[error("output failed: {0}")]
    Output(String),
}

/// A trap together with the machine context it fired in.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("fatal trap at pc {pc:#04x} (opcode {opcode:#010b}): {trap}")]
pub struct ExecError {
    /// Address of the instruction that trapped.
    pub pc: usize,
    /// Instruction byte at `pc`.
    pub opcode: u8,
    /// The underlying trap.
    #[source]
    pub trap: Trap,
}

impl ExecError {
    /// Tags `trap` with the instruction context it was raised in.
    pub const fn new(pc: usize, opcode: u8, trap: Trap) -> Self {
        Self { pc, opcode, trap }
    }
}

/// Program image loading failures.
///
/// All of these are raised before the machine state is touched.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program `{}`: {source}", path.display())]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line is not an 8-digit binary literal.
    #[error("line {line}: `{text}` is not an 8-bit binary literal")]
    Parse {
        /// 1-based line number in the source text.
        line: usize,
        /// The offending text with any comment stripped.
        text: String,
    },

    /// The image has more bytes than memory can hold.
    #[error("program does not fit in {capacity} bytes of memory")]
    ProgramTooLarge {
        /// Memory capacity in bytes.
        capacity: usize,
    },
}

/// Any failure surfaced to the simulator's caller.
#[derive(Debug, Error)]
pub enum SimError {
    /// Loading the program failed; nothing was executed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Execution hit a fatal trap.
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// The configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}
