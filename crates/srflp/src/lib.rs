//! SRFLP - Exact Single Row Facility Layout solver
//!
//! Load an instance, call [`run_solver`], read the optimal layout.
//!
//! # Example
//!
//! ```rust
//! use srflp::prelude::*;
//!
//! let instance = parse_instance("3\n1 1 1\n0 1 2\n1 0 1\n2 1 0\n").unwrap();
//! let result = Solver::new().solve(&instance).unwrap();
//!
//! assert_eq!(result.layout.cost, 13.0);
//! ```

// Model and objective
pub use srflp_core::{
    cost, load_instance, parse_instance, Evaluation, InputFormatError, Instance, InstanceError,
    Layout,
};

// Configuration
pub use srflp_config::{ConfigError, SolverConfig, ThreadCount};

// Solver
pub use srflp_solver::{
    ExplorationStats, ImprovementListener, IncumbentStore, SolveResult, Solver, SolverError,
};

mod solver;
pub use solver::{run_solver, run_solver_with_channel, solve_file, Error, CONFIG_FILE};

pub mod prelude {
    pub use super::{load_instance, parse_instance, run_solver, solve_file};
    pub use super::{Instance, Layout, SolveResult, Solver, SolverConfig, ThreadCount};
}
