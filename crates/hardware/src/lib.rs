//! LS8 instruction-set simulator library.
//!
//! This crate implements the 8-register, 256-byte LS8 toy CPU with the following:
//! 1. **Core:** Register file, condition flags, ALU, and the fetch-decode-execute loop.
//! 2. **Memory:** A flat, bounds-checked 256-byte RAM.
//! 3. **ISA:** Opcode definitions, decoding, and disassembly.
//! 4. **Simulation:** Program image loader, configuration, and run statistics.

/// Common types and constants (architecture limits, errors, register file).
pub mod common;
/// Simulator configuration (defaults and JSON deserialization).
pub mod config;
/// CPU core (arch state, ALU, execution loop).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader and top-level simulator.
pub mod sim;
/// Machine memory.
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Machine state; holds registers, flags, memory, PC, and stats.
pub use crate::core::Cpu;
/// Load-then-run facade over a `Cpu`.
pub use crate::sim::simulator::Simulator;
