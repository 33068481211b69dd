//! Core processor implementation.
//!
//! This module contains the LS8 machine state and the components that act on it:
//! architectural registers and flags, the ALU, and the fetch-decode-execute loop.

/// Architecture-specific components (register slots, condition flags).
pub mod arch;

/// CPU state and execution orchestration.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
