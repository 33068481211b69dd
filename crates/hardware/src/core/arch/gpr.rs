//! LS8 General-Purpose Register File.
//!
//! This module implements the raw register slots of the LS8 architecture.
//! It performs the following:
//! 1. **Storage:** Maintains 8 registers (`R0`-`R7`) of 8 bits each.
//! 2. **Bounds Enforcement:** Rejects register indices outside `0..8`.

use crate::common::constants::NUM_REGISTERS;
use crate::common::error::Trap;

/// General-Purpose Register file.
///
/// `R7` doubles as the stack pointer, but that convention is applied by
/// [`RegisterFile`](crate::common::RegisterFile).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::InvalidRegister`] if `idx` is not a register number.
    pub fn read(&self, idx: usize) -> Result<u8, Trap> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(Trap::InvalidRegister(idx))
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::InvalidRegister`] if `idx` is not a register number.
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), Trap> {
        let slot = self.regs.get_mut(idx).ok_or(Trap::InvalidRegister(idx))?;
        *slot = val;
        Ok(())
    }

    pub(crate) const fn slots(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }

    pub(crate) const fn slots_mut(&mut self) -> &mut [u8; NUM_REGISTERS] {
        &mut self.regs
    }
}
