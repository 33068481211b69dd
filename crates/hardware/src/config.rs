//! Configuration system for the LS8 simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** The architectural reset values (stack pointer, program counter).
//! 2. **Structures:** Hierarchical config for general options and machine reset state.
//!
//! Configuration is supplied as JSON (the CLI reads the file named by `LS8_CONFIG`)
//! or use `Config::default()`.

use serde::Deserialize;

use crate::common::constants::{SP_INIT, START_PC};
use crate::common::error::SimError;

/// Root configuration structure.
///
/// Every field has a default, so `{}` is a valid configuration.
///
/// # Examples
///
/// ```
/// use ls8_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "machine": { "initial_sp": 200 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.machine.initial_sp, 200);
/// assert_eq!(config.machine.start_pc, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Machine reset state
    #[serde(default)]
    pub machine: MachineConfig,
}

impl Config {
    /// Parses a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the text is not valid configuration JSON.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        serde_json::from_str(json).map_err(|e| SimError::Config(e.to_string()))
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace`-level log line (PC, instruction bytes, registers, mnemonic)
    /// before every instruction.
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Machine state applied when a `Cpu` is created.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MachineConfig {
    /// Initial stack pointer (R7).
    #[serde(default = "MachineConfig::default_initial_sp")]
    pub initial_sp: u8,

    /// Initial program counter.
    #[serde(default = "MachineConfig::default_start_pc")]
    pub start_pc: u8,
}

impl MachineConfig {
    /// Returns the default initial stack pointer.
    const fn default_initial_sp() -> u8 {
        SP_INIT
    }

    /// Returns the default starting program counter.
    const fn default_start_pc() -> u8 {
        START_PC
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            initial_sp: Self::default_initial_sp(),
            start_pc: Self::default_start_pc(),
        }
    }
}
