//! SRFLP Solver Engine
//!
//! Exact branch-and-bound for the Single Row Facility Layout Problem:
//! - [`IncumbentStore`]: the shared best layout and its lock-free bound
//! - [`Explorer`]: depth-first search below one root facility
//! - [`Solver`]: one exploration per root on a fixed worker pool
//! - [`ExplorationStats`]: node, prune and improvement counters
//!
//! # Example
//!
//! ```
//! use srflp_core::Instance;
//! use srflp_solver::Solver;
//!
//! let instance = Instance::from_upper_triangle(
//!     vec![1.0, 1.0, 1.0],
//!     &[vec![1.0, 2.0], vec![1.0], vec![]],
//! )
//! .unwrap();
//!
//! let result = Solver::new().solve(&instance).unwrap();
//! assert_eq!(result.layout.cost, 13.0);
//! ```

pub mod error;
pub mod explorer;
pub mod incumbent;
pub mod solver;
pub mod stats;

pub use error::{Result, SolverError};
pub use explorer::Explorer;
pub use incumbent::{ImprovementListener, IncumbentStore};
pub use solver::{SolveResult, Solver};
pub use stats::ExplorationStats;

pub use srflp_config::{SolverConfig, ThreadCount};
