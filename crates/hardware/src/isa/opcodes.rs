//! LS8 Opcodes.
//!
//! Byte values of every instruction the machine dispatches.

/// Load immediate: `LDI reg, value`.
pub const LDI: u8 = 0b1000_0010;

/// Print register: `PRN reg`.
pub const PRN: u8 = 0b0100_0111;

/// Multiply: `MUL regA, regB`.
pub const MUL: u8 = 0b1010_0010;

/// Compare: `CMP regA, regB`.
pub const CMP: u8 = 0b1010_0111;

/// Push register onto the stack: `PUSH reg`.
pub const PUSH: u8 = 0b0100_0101;

/// Pop stack into register: `POP reg`.
pub const POP: u8 = 0b0100_0110;

/// Store indirect: `ST regA, regB`.
pub const ST: u8 = 0b1000_0100;

/// Unconditional jump to address in register: `JMP reg`.
pub const JMP: u8 = 0b0101_0100;

/// Jump if equal: `JEQ reg`.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if not equal: `JNE reg`.
pub const JNE: u8 = 0b0101_0110;

/// Halt.
pub const HLT: u8 = 0b0000_0001;
