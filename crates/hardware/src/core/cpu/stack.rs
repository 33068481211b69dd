//! Stack operations.
//!
//! The stack lives in RAM and grows downward. R7 holds the address the next
//! push will write: PUSH stores then decrements, POP increments then loads.
//! The stack pointer never wraps; leaving `[0, 256)` is a trap and leaves the
//! machine state unchanged.

use super::Cpu;
use crate::common::error::Trap;

impl Cpu {
    /// Pushes `val` onto the stack.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::StackOverflow`] if the stack pointer is already 0.
    pub fn push(&mut self, val: u8) -> Result<(), Trap> {
        let sp = self.regs.sp();
        let next = sp.checked_sub(1).ok_or(Trap::StackOverflow { sp })?;
        self.ram_write(sp as usize, val)?;
        self.regs.set_sp(next);
        Ok(())
    }

    /// Pops the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::StackUnderflow`] if the stack pointer is already at the
    /// top of memory.
    pub fn pop(&mut self) -> Result<u8, Trap> {
        let sp = self.regs.sp();
        let next = sp.checked_add(1).ok_or(Trap::StackUnderflow { sp })?;
        let val = self.ram_read(next as usize)?;
        self.regs.set_sp(next);
        Ok(val)
    }
}
