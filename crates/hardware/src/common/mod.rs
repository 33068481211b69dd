//! Common utilities and types used throughout the LS8 simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Architecture limits for memory, registers, and the program image format.
//! 2. **Error Handling:** Traps, execution errors, and load errors.
//! 3. **Register Management:** A register file with a stack pointer view.

/// Architecture and image-format constants.
pub mod constants;

/// Error types and trap definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, NUM_REGISTERS, SP_INIT, SP_REG};
pub use error::{ExecError, LoadError, SimError, Trap};
pub use reg::RegisterFile;
