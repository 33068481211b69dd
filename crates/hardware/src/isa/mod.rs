//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS8 opcode bytes, the field layout of an opcode byte, the
//! decoder that maps a byte to an [`Opcode`](decode::Opcode), and a
//! disassembler for traces and diagnostics.
//!
//! # Opcode byte layout
//!
//! ```text
//! AABCDDDD
//! AA    number of operand bytes that follow (0-2)
//! B     1 if the instruction is an ALU operation
//! C     1 if the instruction sets the PC itself
//! DDDD  instruction identifier
//! ```

/// Opcode decoding.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Opcode byte fields and the decoded instruction structure.
pub mod instruction;

/// Opcode byte values.
pub mod opcodes;

pub use decode::Opcode;
pub use instruction::Instruction;
