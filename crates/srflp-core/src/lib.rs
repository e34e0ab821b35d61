//! SRFLP Core - Core types for the Single Row Facility Layout Problem
//!
//! This crate provides the fundamental building blocks shared by the solver:
//! - [`Instance`]: facility widths and the symmetric interaction weights
//! - [`Layout`]: a complete ordering together with its cost
//! - [`cost`]: the weighted center-distance objective with early exit
//! - [`loader`]: the plain-text instance format
//!
//! # Example
//!
//! ```
//! use srflp_core::{cost, Instance};
//!
//! let instance = Instance::new(
//!     vec![1.0, 1.0, 1.0],
//!     vec![
//!         vec![0.0, 1.0, 2.0],
//!         vec![1.0, 0.0, 1.0],
//!         vec![2.0, 1.0, 0.0],
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(cost::cost(&instance, &[0, 2, 1]), 13.0);
//! ```

pub mod cost;
pub mod error;
pub mod instance;
pub mod layout;
pub mod loader;

pub use cost::Evaluation;
pub use error::{InputFormatError, InstanceError};
pub use instance::Instance;
pub use layout::Layout;
pub use loader::{load_instance, parse_instance};
