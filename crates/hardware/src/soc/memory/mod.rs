//! System Memory (RAM).
//!
//! This module implements the LS8 main memory. It provides:
//! 1. **Storage:** 256 zero-initialized byte cells.
//! 2. **Access:** Byte reads and writes that trap on out-of-range addresses
//!    instead of wrapping.
//! 3. **Image Loading:** Bulk placement of a parsed program at address 0.

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::{LoadError, Trap};

/// Main memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("nonzero", &self.cells.iter().filter(|b| **b != 0).count())
            .finish()
    }
}

impl Memory {
    /// Creates a zero-filled memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads a byte.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AddressOutOfBounds`] if `addr >= 256`.
    pub fn read(&self, addr: usize) -> Result<u8, Trap> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(Trap::AddressOutOfBounds(addr))
    }

    /// Writes a byte.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AddressOutOfBounds`] if `addr >= 256`.
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), Trap> {
        let cell = self
            .cells
            .get_mut(addr)
            .ok_or(Trap::AddressOutOfBounds(addr))?;
        *cell = val;
        Ok(())
    }

    /// Copies a program image to address 0.
    ///
    /// Memory is left untouched if the image does not fit.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] if `image` is longer than memory.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), LoadError> {
        let dst = self
            .cells
            .get_mut(..image.len())
            .ok_or(LoadError::ProgramTooLarge {
                capacity: MEMORY_SIZE,
            })?;
        dst.copy_from_slice(image);
        Ok(())
    }

    /// Read-only view of all cells.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}
