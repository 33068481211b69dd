//! Simulator: owns the CPU and the configuration it was built from.
//!
//! Loading always completes (or fails) before the machine is touched, so a
//! caller that sees a [`LoadError`] never sees a partially loaded `Cpu`.

use std::io::Write;
use std::path::Path;

use crate::common::error::{ExecError, LoadError};
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::loader;
use crate::stats::SimStats;

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    /// Machine state.
    pub cpu: Cpu,
    config: Config,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Simulator {
    /// Creates a simulator with a freshly reset CPU.
    pub fn new(config: Config) -> Self {
        let cpu = Cpu::new(&config);
        Self { cpu, config }
    }

    /// The configuration the CPU was reset with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Loads a program image file into memory.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the file is missing, malformed, or too
    /// large; memory is unchanged in every case.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let image = loader::load_program(path)?;
        self.cpu.load_image(&image)
    }

    /// Loads program image text into memory.
    ///
    /// # Errors
    ///
    /// Same conditions as [`load_file`](Self::load_file), minus I/O.
    pub fn load_source(&mut self, source: &str) -> Result<(), LoadError> {
        let image = loader::parse_program(source)?;
        self.cpu.load_image(&image)
    }

    /// Runs the loaded program until HLT, writing PRN output to `out`.
    ///
    /// # Errors
    ///
    /// Returns the fatal [`ExecError`] that stopped the run.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<SimStats, ExecError> {
        self.cpu.run(out)
    }

    /// Discards all machine state and resets the CPU from the stored config.
    pub fn reset(&mut self) {
        self.cpu = Cpu::new(&self.config);
    }
}
