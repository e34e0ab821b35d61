//! Exploration statistics.
//!
//! Each worker counts into its own [`ExplorationStats`]; the orchestrator
//! merges them after all workers have joined.

use std::ops::Add;

/// Counters for one or more root explorations.
///
/// # Example
///
/// ```
/// use srflp_solver::ExplorationStats;
///
/// let mut a = ExplorationStats::default();
/// a.record_node();
/// a.record_prune();
///
/// let mut b = ExplorationStats::default();
/// b.record_node();
/// b.record_leaf();
///
/// let total = a.merge(b);
/// assert_eq!(total.nodes, 2);
/// assert_eq!(total.pruned, 1);
/// assert_eq!(total.leaves, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExplorationStats {
    /// Root prefixes explored, one per first facility.
    pub roots: u64,
    /// Prefixes visited, including roots and complete orderings.
    pub nodes: u64,
    /// Extensions discarded because their cost reached the incumbent.
    pub pruned: u64,
    /// Complete orderings reached.
    pub leaves: u64,
    /// Complete orderings installed as the new incumbent.
    pub improvements: u64,
}

impl ExplorationStats {
    #[inline]
    pub fn record_root(&mut self) {
        self.roots += 1;
    }

    #[inline]
    pub fn record_node(&mut self) {
        self.nodes += 1;
    }

    #[inline]
    pub fn record_prune(&mut self) {
        self.pruned += 1;
    }

    #[inline]
    pub fn record_leaf(&mut self) {
        self.leaves += 1;
    }

    #[inline]
    pub fn record_improvement(&mut self) {
        self.improvements += 1;
    }

    /// Sums two sets of counters.
    pub fn merge(self, other: Self) -> Self {
        Self {
            roots: self.roots + other.roots,
            nodes: self.nodes + other.nodes,
            pruned: self.pruned + other.pruned,
            leaves: self.leaves + other.leaves,
            improvements: self.improvements + other.improvements,
        }
    }

    /// Fraction of generated extensions that were pruned.
    ///
    /// Roots are not extensions of anything and are left out.
    pub fn prune_rate(&self) -> f64 {
        let generated = self.nodes.saturating_sub(self.roots) + self.pruned;
        if generated == 0 {
            0.0
        } else {
            self.pruned as f64 / generated as f64
        }
    }
}

impl Add for ExplorationStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.merge(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_rate() {
        // One root with two surviving extensions and one pruned.
        let stats = ExplorationStats {
            roots: 1,
            nodes: 3,
            pruned: 1,
            leaves: 1,
            improvements: 1,
        };
        assert!((stats.prune_rate() - 1.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(ExplorationStats::default().prune_rate(), 0.0);
    }

    #[test]
    fn test_add_matches_merge() {
        let a = ExplorationStats {
            roots: 1,
            nodes: 5,
            pruned: 2,
            leaves: 1,
            improvements: 1,
        };
        let b = ExplorationStats {
            roots: 2,
            nodes: 7,
            pruned: 0,
            leaves: 3,
            improvements: 2,
        };
        assert_eq!(a + b, a.merge(b));
        assert_eq!((a + b).improvements, 3);
        assert_eq!((a + b).roots, 3);
    }
}
