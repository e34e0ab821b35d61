//! Error types for SRFLP

use thiserror::Error;

/// Failures raised while reading the plain-text instance format.
///
/// Line numbers are 1-based and refer to physical lines of the input.
#[derive(Debug, Error)]
pub enum InputFormatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is empty")]
    Empty,

    #[error("input ended early: expected {expected}")]
    MissingLine { expected: String },

    #[error("line {line}: `{token}` is not an integer")]
    InvalidInteger { line: usize, token: String },

    #[error("line {line}: expected {expected} values, found {found}")]
    WrongTokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: value {value} must not be negative")]
    NegativeValue { line: usize, value: i64 },

    #[error("line {line}: dimension must be positive")]
    ZeroDimension { line: usize },

    #[error("line {line}: unexpected data after the weight matrix")]
    TrailingData { line: usize },

    #[error("invalid instance: {0}")]
    Instance(#[from] InstanceError),
}

/// Invariant violations when building an [`Instance`](crate::Instance).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstanceError {
    #[error("instance must contain at least one facility")]
    Empty,

    #[error("expected {expected} {what}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("width of facility {facility} is {value}; widths must be finite and non-negative")]
    InvalidWidth { facility: usize, value: f64 },

    #[error("weight ({row}, {col}) is {value}; weights must be finite and non-negative")]
    InvalidWeight { row: usize, col: usize, value: f64 },

    #[error("weight matrix is not symmetric at ({row}, {col})")]
    Asymmetric { row: usize, col: usize },

    #[error("diagonal weight of facility {facility} must be zero")]
    NonZeroDiagonal { facility: usize },
}

