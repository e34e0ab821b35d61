//! Shared test fixtures for SRFLP crates.
//!
//! This crate provides instances and a brute-force oracle for testing.
//!
//! - [`fixtures`] - Hand-written and seeded random instances
//! - [`oracle`] - Exhaustive enumeration of all orderings
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! srflp-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use srflp_test::{brute_force, random_instance};
//!
//! let instance = random_instance(6, 42);
//! let best = brute_force(&instance);
//! ```

pub mod fixtures;
pub mod oracle;

pub use fixtures::{random_instance, three_facility_instance, uniform_instance};
pub use oracle::{brute_force, next_permutation, permutations};
