//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** RAM capacity.
//! 2. **Register Constants:** Register count and the stack pointer slot.
//! 3. **Image Constants:** The textual program image format.

/// Size of machine memory in bytes.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Register index reserved as the stack pointer.
pub const SP_REG: usize = 7;

/// Initial stack pointer value (address of the first push).
pub const SP_INIT: u8 = 0xF4;

/// Initial program counter.
pub const START_PC: u8 = 0;

/// Number of binary digits in one program image line.
pub const INSTRUCTION_LINE_WIDTH: usize = 8;

/// Character that starts a comment in a program image line.
pub const COMMENT_CHAR: char = '#';
