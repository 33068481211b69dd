//! Register File.
//!
//! This module provides the `RegisterFile` struct, the single register store used by
//! the execution engine. It provides:
//! 1. **Storage:** The eight general-purpose registers.
//! 2. **Stack Pointer View:** Typed access to register 7, which holds the stack pointer.
//! 3. **Observability:** A formatted dump of register state for diagnostics.

use std::fmt::Write as _;

use crate::common::constants::{NUM_REGISTERS, SP_REG};
use crate::common::error::Trap;
use crate::core::arch::gpr::Gpr;

/// Register file containing the general-purpose registers.
///
/// The stack pointer is not a separate store: it is register 7, so `sp()` and
/// `read(7)` always agree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self { gpr: Gpr::new() }
    }

    /// Reads a value from a general-purpose register.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::InvalidRegister`] if `idx` is not in `0..8`.
    pub fn read(&self, idx: usize) -> Result<u8, Trap> {
        self.gpr.read(idx)
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::InvalidRegister`] if `idx` is not in `0..8`.
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), Trap> {
        self.gpr.write(idx, val)
    }

    /// Current stack pointer.
    pub fn sp(&self) -> u8 {
        self.gpr.slots()[SP_REG]
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, sp: u8) {
        self.gpr.slots_mut()[SP_REG] = sp;
    }

    /// Snapshot of all registers, indexed by register number.
    pub fn snapshot(&self) -> [u8; NUM_REGISTERS] {
        *self.gpr.slots()
    }

    /// Formats all registers as `R0=0x00 ... R7=0xF4`.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (i, val) in self.gpr.slots().iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "R{i}={val:#04x}");
        }
        out
    }
}
