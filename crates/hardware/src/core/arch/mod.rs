//! LS8 architectural state.
//!
//! This module contains the implementation of the architectural elements the
//! instruction set reads and writes directly:
//! 1. **GPRs:** The eight 8-bit general-purpose registers.
//! 2. **Flags:** The Equal/Greater/Less condition flags produced by CMP.

/// Condition flags set by CMP and consumed by conditional jumps.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;
