//! Error types for the solver.

use thiserror::Error;

/// Errors raised while setting up or finishing a solve.
///
/// The search itself has no recoverable failures.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The worker pool could not be created
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// All workers finished without installing a complete ordering
    #[error("search finished without a complete ordering")]
    NoSolution,
}

/// Result type alias for solver operations
pub type Result<T> = std::result::Result<T, SolverError>;
