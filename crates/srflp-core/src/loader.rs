//! Plain-text instance format.
//!
//! ```text
//! 3            <- dimension n
//! 1 1 1        <- n widths
//! 0 1 2        <- row 0 of the weight matrix
//! 1 0 1        <- row 1
//! 2 1 0        <- row 2
//! ```
//!
//! Only the strict upper triangle of the matrix is read; it is mirrored into
//! the lower triangle. Every row must still carry `n` integer tokens. Blank
//! lines are skipped.

use std::path::Path;

use crate::error::InputFormatError;
use crate::instance::Instance;

/// Reads and parses an instance file.
///
/// # Errors
///
/// Returns [`InputFormatError::Io`] if the file cannot be read, or any other
/// [`InputFormatError`] variant if the contents are malformed.
pub fn load_instance(path: impl AsRef<Path>) -> Result<Instance, InputFormatError> {
    let contents = std::fs::read_to_string(path)?;
    parse_instance(&contents)
}

/// Parses an instance from its text representation.
pub fn parse_instance(input: &str) -> Result<Instance, InputFormatError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(index, text)| (index + 1, text))
        .filter(|(_, text)| !text.trim().is_empty());

    let (line, text) = lines.next().ok_or(InputFormatError::Empty)?;
    let dimension_tokens = parse_integers(line, text)?;
    if dimension_tokens.len() != 1 {
        return Err(InputFormatError::WrongTokenCount {
            line,
            expected: 1,
            found: dimension_tokens.len(),
        });
    }
    let n = match dimension_tokens[0] {
        value if value < 0 => return Err(InputFormatError::NegativeValue { line, value }),
        0 => return Err(InputFormatError::ZeroDimension { line }),
        value => value as usize,
    };

    let (line, text) = lines.next().ok_or_else(|| InputFormatError::MissingLine {
        expected: format!("{} facility widths", n),
    })?;
    let widths = parse_row(line, text, n)?
        .into_iter()
        .map(|width| non_negative(line, width))
        .collect::<Result<Vec<_>, _>>()?;

    let mut upper = Vec::with_capacity(n);
    for row in 0..n {
        let (line, text) = lines.next().ok_or_else(|| InputFormatError::MissingLine {
            expected: format!("row {} of the {}x{} weight matrix", row, n, n),
        })?;
        let values = parse_row(line, text, n)?;
        let entries = values[row + 1..]
            .iter()
            .map(|&value| non_negative(line, value))
            .collect::<Result<Vec<_>, _>>()?;
        upper.push(entries);
    }

    if let Some((line, _)) = lines.next() {
        return Err(InputFormatError::TrailingData { line });
    }

    Ok(Instance::from_upper_triangle(widths, &upper)?)
}

fn parse_row(line: usize, text: &str, expected: usize) -> Result<Vec<i64>, InputFormatError> {
    let values = parse_integers(line, text)?;
    if values.len() != expected {
        return Err(InputFormatError::WrongTokenCount {
            line,
            expected,
            found: values.len(),
        });
    }
    Ok(values)
}

fn parse_integers(line: usize, text: &str) -> Result<Vec<i64>, InputFormatError> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| InputFormatError::InvalidInteger {
                    line,
                    token: token.to_string(),
                })
        })
        .collect()
}

fn non_negative(line: usize, value: i64) -> Result<f64, InputFormatError> {
    if value < 0 {
        return Err(InputFormatError::NegativeValue { line, value });
    }
    Ok(value as f64)
}
