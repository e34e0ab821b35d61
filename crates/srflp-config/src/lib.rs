//! Configuration system for the SRFLP solver.
//!
//! Load solver configuration from TOML or YAML files to control the worker
//! pool and pruning without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use srflp_config::{SolverConfig, ThreadCount};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     enable_pruning = true
//!     log_progress = true
//!
//!     [thread_count]
//!     specific = 4
//! "#).unwrap();
//!
//! assert_eq!(config.thread_count, ThreadCount::Specific(4));
//! assert!(config.log_progress);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use srflp_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SolverConfig {
    /// Number of worker threads exploring root facilities.
    pub thread_count: ThreadCount,

    /// Whether to discard prefixes whose cost already reaches the incumbent.
    ///
    /// Disabling pruning enumerates every ordering. Only useful for
    /// cross-checking results on small instances.
    pub enable_pruning: bool,

    /// Whether per-root progress is logged at info level instead of debug.
    pub log_progress: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            thread_count: ThreadCount::Auto,
            enable_pruning: true,
            log_progress: false,
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()
    }

    /// Sets the worker thread count.
    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Enables or disables bound pruning.
    pub fn with_pruning(mut self, enable: bool) -> Self {
        self.enable_pruning = enable;
        self
    }

    /// Enables info-level per-root progress logging.
    pub fn with_log_progress(mut self, enable: bool) -> Self {
        self.log_progress = enable;
        self
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.thread_count == ThreadCount::Specific(0) {
            return Err(ConfigError::Invalid(
                "thread_count.specific must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Thread count configuration for the worker pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// Available CPU cores, capped at the number of root tasks.
    #[default]
    Auto,
    /// Use all available CPU cores.
    Unlimited,
    /// Use a specific number of threads, capped at the number of root tasks.
    Specific(usize),
}

impl ThreadCount {
    /// Resolves the thread count to an actual number.
    ///
    /// The result is always at least 1, even when `task_count` is 0.
    pub fn resolve(&self, task_count: usize) -> usize {
        let cpus = || {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(1)
        };
        let threads = match self {
            ThreadCount::Auto => cpus().min(task_count),
            ThreadCount::Unlimited => cpus(),
            ThreadCount::Specific(n) => (*n).min(task_count),
        };
        threads.max(1)
    }
}

impl fmt::Display for ThreadCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreadCount::Auto => write!(f, "Auto"),
            ThreadCount::Unlimited => write!(f, "Unlimited"),
            ThreadCount::Specific(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests;
