//! Problem instance: facility widths and pairwise interaction weights.

use crate::error::InstanceError;

/// An immutable SRFLP instance.
///
/// Weights are stored row-major in a flat `n * n` buffer. The matrix is
/// symmetric with a zero diagonal, which [`Instance::new`] enforces.
///
/// Instances are never mutated after construction and can be shared between
/// worker threads by reference.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    widths: Vec<f64>,
    weights: Vec<f64>,
}

impl Instance {
    /// Creates a validated instance from widths and a square weight matrix.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError`] if the instance is empty, the matrix is not
    /// `n x n`, any value is negative or non-finite, the matrix is asymmetric
    /// or the diagonal is non-zero.
    pub fn new(widths: Vec<f64>, weights: Vec<Vec<f64>>) -> Result<Self, InstanceError> {
        let n = widths.len();
        if n == 0 {
            return Err(InstanceError::Empty);
        }
        if weights.len() != n {
            return Err(InstanceError::DimensionMismatch {
                what: "weight rows",
                expected: n,
                found: weights.len(),
            });
        }

        for (facility, &value) in widths.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(InstanceError::InvalidWidth { facility, value });
            }
        }

        let mut flat = Vec::with_capacity(n * n);
        for row in &weights {
            if row.len() != n {
                return Err(InstanceError::DimensionMismatch {
                    what: "weight columns",
                    expected: n,
                    found: row.len(),
                });
            }
            flat.extend_from_slice(row);
        }

        for row in 0..n {
            if flat[row * n + row] != 0.0 {
                return Err(InstanceError::NonZeroDiagonal { facility: row });
            }
            for col in (row + 1)..n {
                let value = flat[row * n + col];
                if !value.is_finite() || value < 0.0 {
                    return Err(InstanceError::InvalidWeight { row, col, value });
                }
                if value != flat[col * n + row] {
                    return Err(InstanceError::Asymmetric { row, col });
                }
            }
        }

        Ok(Self {
            widths,
            weights: flat,
        })
    }

    /// Creates an instance from widths and the strict upper triangle.
    ///
    /// `upper[i]` holds the weights `(i, j)` for `j > i`, so it has
    /// `n - 1 - i` entries. The lower triangle is mirrored from it.
    pub fn from_upper_triangle(
        widths: Vec<f64>,
        upper: &[Vec<f64>],
    ) -> Result<Self, InstanceError> {
        let n = widths.len();
        if upper.len() != n {
            return Err(InstanceError::DimensionMismatch {
                what: "weight rows",
                expected: n,
                found: upper.len(),
            });
        }

        let mut weights = vec![vec![0.0; n]; n];
        for (i, row) in upper.iter().enumerate() {
            let expected = n - 1 - i;
            if row.len() != expected {
                return Err(InstanceError::DimensionMismatch {
                    what: "upper triangle entries",
                    expected,
                    found: row.len(),
                });
            }
            for (offset, &value) in row.iter().enumerate() {
                let j = i + 1 + offset;
                weights[i][j] = value;
                weights[j][i] = value;
            }
        }

        Self::new(widths, weights)
    }

    /// Returns the number of facilities.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.widths.len()
    }

    /// Returns the width of a facility.
    #[inline]
    pub fn width(&self, facility: usize) -> f64 {
        self.widths[facility]
    }

    /// Returns all facility widths.
    #[inline]
    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    /// Returns the interaction weight between two facilities.
    #[inline]
    pub fn weight(&self, a: usize, b: usize) -> f64 {
        let n = self.dimension();
        assert!(a < n && b < n, "facility index out of range: ({a}, {b}) for n = {n}");
        self.weights[a * n + b]
    }

    /// Returns one row of the weight matrix.
    pub fn weight_row(&self, facility: usize) -> &[f64] {
        let n = self.dimension();
        &self.weights[facility * n..(facility + 1) * n]
    }
}
