//! Memory Access Helpers.
//!
//! This module provides the interface between the CPU and RAM. Every read and
//! write the engine performs goes through `ram_read`/`ram_write`, which makes
//! them the single place where address bounds are enforced. Code outside the
//! engine (a debugger, tests) should use the same pair.

use super::Cpu;
use crate::common::error::Trap;

impl Cpu {
    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AddressOutOfBounds`] if `addr >= 256`.
    #[inline]
    pub fn ram_read(&self, addr: usize) -> Result<u8, Trap> {
        self.ram.read(addr)
    }

    /// Writes `val` to `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AddressOutOfBounds`] if `addr >= 256`.
    #[inline]
    pub fn ram_write(&mut self, addr: usize, val: u8) -> Result<(), Trap> {
        self.ram.write(addr, val)
    }
}
