//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! machine state. It coordinates the following:
//! 1. **State Management:** Registers, condition flags, program counter, and halt state.
//! 2. **Memory:** The 256-byte RAM, reachable only through the accessors in [`memory`].
//! 3. **Stack:** PUSH/POP over RAM using R7 as the stack pointer.
//! 4. **Execution:** The fetch-decode-execute loop in [`execution`].

/// Instruction execution and the run loop.
pub mod execution;

/// Bounds-checked memory accessors.
pub mod memory;

/// Stack push/pop.
pub mod stack;

use crate::common::RegisterFile;
use crate::common::error::LoadError;
use crate::config::Config;
use crate::core::arch::flags::FlagState;
use crate::soc::Memory;
use crate::stats::SimStats;

pub use execution::StepOutcome;

/// Main CPU structure containing all machine state.
///
/// There is no global state: every instruction mutates the `Cpu` it is
/// executed on and nothing else (PRN output goes to a caller-supplied sink).
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers; R7 is the stack pointer.
    pub regs: RegisterFile,
    /// Program Counter.
    pub pc: usize,
    /// Instruction register: the last opcode byte fetched.
    pub ir: u8,
    /// Condition flags from the last CMP.
    pub flags: FlagState,
    /// Set once HLT executes.
    pub halted: bool,
    /// Enable per-instruction trace logging.
    pub trace: bool,
    /// Run statistics.
    pub stats: SimStats,
    ram: Memory,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Cpu {
    /// Creates a CPU in its reset state: memory and registers zeroed, R7 set
    /// to the configured stack pointer, PC at the configured start address.
    pub fn new(config: &Config) -> Self {
        let mut regs = RegisterFile::new();
        regs.set_sp(config.machine.initial_sp);

        Self {
            regs,
            pc: config.machine.start_pc as usize,
            ir: 0,
            flags: FlagState::new(),
            halted: false,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
            ram: Memory::new(),
        }
    }

    /// Copies a parsed program image into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] if the image exceeds memory; in
    /// that case memory is unchanged.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.ram.load_image(image)
    }

    /// Read-only view of memory.
    pub const fn ram(&self) -> &Memory {
        &self.ram
    }

    /// Formats PC, IR, SP and all registers for diagnostics.
    pub fn dump_state(&self) -> String {
        format!(
            "PC={:#04x} IR={:#010b} SP={:#04x} {}",
            self.pc,
            self.ir,
            self.regs.sp(),
            self.regs.dump()
        )
    }
}
