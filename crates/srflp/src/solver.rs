//! Solver entry points that hide the configuration wiring.

use std::path::Path;

use srflp_config::{ConfigError, SolverConfig};
use srflp_core::{InputFormatError, Instance, Layout};
use srflp_solver::{SolveResult, Solver, SolverError};
use thiserror::Error;
use tokio::sync::mpsc;

/// Configuration file picked up from the working directory.
pub const CONFIG_FILE: &str = "solver.toml";

/// Any failure between reading an instance and reporting its layout.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputFormatError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Solves `instance` with the configuration from [`CONFIG_FILE`], falling
/// back to defaults when the file does not exist.
pub fn run_solver(instance: &Instance) -> Result<SolveResult, Error> {
    init_console();
    let config = SolverConfig::load(CONFIG_FILE).unwrap_or_default();
    Ok(Solver::new().with_config(config).solve(instance)?)
}

/// Like [`run_solver`], streaming every improvement through `sender`.
pub fn run_solver_with_channel(
    instance: &Instance,
    sender: mpsc::UnboundedSender<Layout>,
) -> Result<SolveResult, Error> {
    init_console();
    let config = SolverConfig::load(CONFIG_FILE).unwrap_or_default();
    Ok(Solver::new()
        .with_config(config)
        .solve_with_channel(instance, sender)?)
}

/// Loads an instance file and solves it with `config`.
///
/// The file is fully parsed and validated before any search starts.
pub fn solve_file(path: impl AsRef<Path>, config: SolverConfig) -> Result<SolveResult, Error> {
    let instance = srflp_core::load_instance(path)?;
    Ok(Solver::new().with_config(config).solve(&instance)?)
}

#[cfg(feature = "console")]
fn init_console() {
    srflp_console::init();
}

#[cfg(not(feature = "console"))]
fn init_console() {}
