//! Simulation utilities and program loading.
//!
//! Provides the program image loader and the `Simulator`, which loads an
//! image into a fresh machine and runs it to completion.

pub mod loader;
pub mod simulator;
