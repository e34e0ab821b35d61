//! Complete row layouts.

use std::fmt;

/// A complete ordering of facilities together with its cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Weighted center-distance cost of `order`.
    pub cost: f64,
    /// Facility indices from the left end of the row.
    pub order: Vec<usize>,
}

impl Layout {
    pub fn new(cost: f64, order: Vec<usize>) -> Self {
        Self { cost, order }
    }

    /// Returns the same layout read from the right end of the row.
    pub fn reversed(&self) -> Self {
        let mut order = self.order.clone();
        order.reverse();
        Self {
            cost: self.cost,
            order,
        }
    }

    /// Returns true if `order` holds each facility `0..n` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &facility in &self.order {
            if facility >= n || seen[facility] {
                return false;
            }
            seen[facility] = true;
        }
        true
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, facility) in self.order.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", facility)?;
        }
        write!(f, "] with result: {}", self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_report_format() {
        let layout = Layout::new(13.0, vec![0, 2, 1]);
        assert_eq!(layout.to_string(), "[0 2 1] with result: 13");
    }

    #[test]
    fn test_reversed() {
        let layout = Layout::new(4.5, vec![3, 0, 1, 2]);
        assert_eq!(layout.reversed().order, vec![2, 1, 0, 3]);
        assert_eq!(layout.reversed().cost, 4.5);
    }

    #[test]
    fn test_is_permutation_of() {
        assert!(Layout::new(0.0, vec![2, 0, 1]).is_permutation_of(3));
        assert!(!Layout::new(0.0, vec![2, 0, 0]).is_permutation_of(3));
        assert!(!Layout::new(0.0, vec![2, 0]).is_permutation_of(3));
        assert!(!Layout::new(0.0, vec![3, 0, 1]).is_permutation_of(3));
    }
}
