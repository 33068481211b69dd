//! Machine memory.
//!
//! The LS8 has no bus or devices; its only addressable store is a flat
//! 256-byte RAM.

/// Flat, bounds-checked RAM.
pub mod memory;

pub use memory::Memory;
