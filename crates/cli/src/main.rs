//! LS8 simulator CLI.
//!
//! Runs a single program image:
//! 1. **Load:** Parse the image file; any load error is reported and nothing executes.
//! 2. **Run:** Execute until HLT, printing PRN output to stdout.
//! 3. **Report:** Fatal traps are printed to stderr with a register dump.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).
//! A JSON configuration file may be named by the `LS8_CONFIG` environment variable.

use std::io::{self, Write};
use std::path::PathBuf;
use std::{env, fs, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ls8_core::Simulator;
use ls8_core::common::{ExecError, SimError, Trap};
use ls8_core::config::Config;

/// Environment variable naming an optional JSON configuration file.
const CONFIG_ENV: &str = "LS8_CONFIG";

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS8 instruction-set simulator",
    long_about = "Load a program of 8-bit binary literals (one per line, `#` comments allowed) and run it until HLT.\n\nExamples:\n  ls8 programs/print8.ls8\n  RUST_LOG=ls8::trace=trace LS8_CONFIG=trace.json ls8 programs/mult.ls8"
)]
struct Cli {
    /// Program image to run.
    program: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut sim = Simulator::default();
    if let Err(e) = run(&cli, &mut sim) {
        match e {
            SimError::Exec(_) => {
                eprintln!("\n[!] {e}");
                eprintln!("    {}", sim.cpu.dump_state());
            }
            SimError::Load(_) | SimError::Config(_) => eprintln!("error: {e}"),
        }
        process::exit(1);
    }
}

/// Configures `sim`, loads the program, and runs it to HLT.
///
/// `sim` is left in place on failure so the caller can dump the machine state.
fn run(cli: &Cli, sim: &mut Simulator) -> Result<(), SimError> {
    let config = load_config()?;
    tracing::debug!(program = %cli.program.display(), ?config, "starting");
    *sim = Simulator::new(config);
    sim.load_file(&cli.program)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = sim.run(&mut out)?;
    out.flush().map_err(|e| {
        ExecError::new(sim.cpu.pc, sim.cpu.ir, Trap::Output(e.to_string()))
    })?;
    Ok(())
}

/// Reads the configuration named by `LS8_CONFIG`, or the defaults.
fn load_config() -> Result<Config, SimError> {
    match env::var_os(CONFIG_ENV) {
        Some(path) => {
            let json = fs::read_to_string(&path).map_err(|e| {
                SimError::Config(format!("{}: {e}", PathBuf::from(&path).display()))
            })?;
            Config::from_json(&json)
        }
        None => Ok(Config::default()),
    }
}
