//! Argument handling and result reporting.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use srflp::{ConfigError, Layout, SolverConfig, ThreadCount};

/// Exact branch-and-bound solver for the single row facility layout problem.
#[derive(Debug, Parser)]
#[command(name = "srflp", version, about)]
pub struct Cli {
    /// Instance file: n, then n widths, then the n x n weight matrix
    #[arg(default_value = "input.txt")]
    pub input: PathBuf,

    /// Number of worker threads (default: available cores)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Solver configuration file; ignored if it does not exist
    #[arg(short, long, default_value = srflp::CONFIG_FILE)]
    pub config: PathBuf,

    /// Enumerate every ordering instead of pruning against the incumbent
    #[arg(long)]
    pub no_pruning: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// Failures reported by the command line.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Solve(#[from] srflp::Error),

    #[error("configuration {path}: {source}")]
    Config { path: PathBuf, source: ConfigError },

    #[error("--threads must be at least 1")]
    ZeroThreads,
}

/// Final output of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub layout: Layout,
    pub elapsed: Duration,
    pub json: bool,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.json {
            let value = serde_json::json!({
                "cost": self.layout.cost,
                "order": self.layout.order,
                "elapsed_ms": self.elapsed.as_millis() as u64,
            });
            write!(f, "{}", value)
        } else {
            writeln!(f, "Best permutation: {}", self.layout)?;
            write!(f, "Elapsed time: {} ms", self.elapsed.as_millis())
        }
    }
}

/// Builds the configuration from the config file and command-line overrides.
pub fn resolve_config(cli: &Cli) -> Result<SolverConfig, CliError> {
    let mut config = match SolverConfig::load(&cli.config) {
        Ok(config) => config,
        Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            SolverConfig::default()
        }
        Err(source) => {
            return Err(CliError::Config {
                path: cli.config.clone(),
                source,
            })
        }
    };

    match cli.threads {
        Some(0) => return Err(CliError::ZeroThreads),
        Some(n) => config.thread_count = ThreadCount::Specific(n),
        None => {}
    }
    if cli.no_pruning {
        config.enable_pruning = false;
    }
    Ok(config)
}

/// Loads, solves and times one instance.
pub fn run(cli: &Cli) -> Result<Report, CliError> {
    let started = Instant::now();
    let config = resolve_config(cli)?;
    let result = srflp::solve_file(&cli.input, config)?;

    Ok(Report {
        layout: result.layout,
        elapsed: started.elapsed(),
        json: cli.json,
    })
}
