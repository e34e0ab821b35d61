//! Depth-first branch-and-bound over orderings with a fixed first facility.

use srflp_core::cost::{self, Evaluation};
use srflp_core::Instance;
use tracing::debug;

use crate::incumbent::IncumbentStore;
use crate::stats::ExplorationStats;

/// Explores every ordering that starts with one root facility.
///
/// The explorer owns its prefix buffer. Candidates are appended and removed
/// at the end only, so after every recursive call the buffer is back in the
/// parent's state. Several explorers may share one [`IncumbentStore`]; they
/// share nothing else.
#[derive(Debug)]
pub struct Explorer<'a> {
    instance: &'a Instance,
    incumbent: &'a IncumbentStore,
    pruning: bool,
    prefix: Vec<usize>,
    stats: ExplorationStats,
}

impl<'a> Explorer<'a> {
    /// Creates an explorer over `instance` reporting to `incumbent`.
    ///
    /// With `pruning` disabled every ordering is enumerated; the final
    /// strict-improvement check at complete orderings is kept.
    pub fn new(instance: &'a Instance, incumbent: &'a IncumbentStore, pruning: bool) -> Self {
        Self {
            instance,
            incumbent,
            pruning,
            prefix: Vec::with_capacity(instance.dimension()),
            stats: ExplorationStats::default(),
        }
    }

    /// Searches all orderings starting with `root` and returns the counters.
    ///
    /// # Panics
    ///
    /// Panics if `root` is not a facility of the instance.
    pub fn explore(mut self, root: usize) -> ExplorationStats {
        let n = self.instance.dimension();
        assert!(root < n, "root facility {root} out of range for n = {n}");

        self.prefix.clear();
        self.prefix.push(root);
        self.stats.record_root();
        // A single facility has no pairs.
        self.descend(0.0);
        self.stats
    }

    // `value` is the cost of the current prefix, already below the bound it
    // was evaluated against.
    fn descend(&mut self, value: f64) {
        self.stats.record_node();
        let n = self.instance.dimension();

        if self.prefix.len() == n {
            self.complete(value);
            return;
        }

        for candidate in 0..n {
            if self.prefix.contains(&candidate) {
                continue;
            }

            self.prefix.push(candidate);
            match cost::evaluate(self.instance, &self.prefix, self.pruning_bound()) {
                Evaluation::Dominated => self.stats.record_prune(),
                Evaluation::Cost(extended) => self.descend(extended),
            }
            self.prefix.pop();
        }
    }

    fn complete(&mut self, value: f64) {
        self.stats.record_leaf();
        if self.incumbent.update(value, &self.prefix) {
            self.stats.record_improvement();
            debug!(event = "improvement", cost = value, root = self.prefix[0] as u64);
        }
    }

    #[inline]
    fn pruning_bound(&self) -> f64 {
        if self.pruning {
            self.incumbent.current_bound()
        } else {
            f64::INFINITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srflp_test::{brute_force, random_instance, three_facility_instance};

    #[test]
    fn test_single_root_finds_best_with_that_root() {
        let instance = three_facility_instance();
        let store = IncumbentStore::new();

        let stats = Explorer::new(&instance, &store, true).explore(0);

        let best = store.into_best().unwrap();
        assert_eq!(best.cost, 13.0);
        assert_eq!(best.order, vec![0, 2, 1]);
        assert_eq!(stats.improvements, 2);
    }

    #[test]
    fn test_root_is_always_first() {
        let instance = random_instance(6, 3);
        for root in 0..6 {
            let store = IncumbentStore::new();
            Explorer::new(&instance, &store, true).explore(root);
            assert_eq!(store.into_best().unwrap().order[0], root);
        }
    }

    #[test]
    fn test_all_roots_sequentially_match_brute_force() {
        let instance = random_instance(7, 11);
        let store = IncumbentStore::new();
        let mut stats = ExplorationStats::default();
        for root in 0..7 {
            stats = stats + Explorer::new(&instance, &store, true).explore(root);
        }

        assert_eq!(store.into_best().unwrap(), brute_force(&instance));
        assert!(stats.pruned > 0);
    }

    #[test]
    fn test_without_pruning_every_ordering_is_a_leaf() {
        let instance = random_instance(5, 2);
        let store = IncumbentStore::new();
        let stats = Explorer::new(&instance, &store, false).explore(4);

        assert_eq!(stats.pruned, 0);
        assert_eq!(stats.roots, 1);
        assert_eq!(stats.leaves, 24);
        // 1 root + 4 + 12 + 24 + 24 prefixes.
        assert_eq!(stats.nodes, 65);
    }

    #[test]
    fn test_leaf_cost_is_installed_unchanged() {
        let instance = random_instance(6, 5);
        let store = IncumbentStore::new();
        Explorer::new(&instance, &store, true).explore(2);

        let best = store.into_best().unwrap();
        assert_eq!(best.cost.to_bits(), cost::cost(&instance, &best.order).to_bits());
    }

    #[test]
    fn test_ties_with_incumbent_are_not_installed() {
        let instance = three_facility_instance();
        let store = IncumbentStore::new();
        store.update(13.0, &[1, 2, 0]);

        // Without pruning every leaf reaches the store; ties are rejected.
        let stats = Explorer::new(&instance, &store, false).explore(0);

        assert_eq!(stats.leaves, 2);
        assert_eq!(stats.improvements, 0);
        assert_eq!(store.into_best().unwrap().order, vec![1, 2, 0]);
    }

    #[test]
    fn test_dominated_root_explores_nothing_below() {
        let instance = three_facility_instance();
        let store = IncumbentStore::new();
        store.update(13.0, &[0, 2, 1]);

        let stats = Explorer::new(&instance, &store, true).explore(1);

        assert_eq!(stats.improvements, 0);
        assert_eq!(store.into_best().unwrap().order, vec![0, 2, 1]);
    }

    #[test]
    fn test_single_facility() {
        let instance = random_instance(1, 0);
        let store = IncumbentStore::new();
        let stats = Explorer::new(&instance, &store, true).explore(0);

        assert_eq!(stats.leaves, 1);
        assert_eq!(store.into_best().unwrap().order, vec![0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_invalid_root_panics() {
        let instance = three_facility_instance();
        let store = IncumbentStore::new();
        Explorer::new(&instance, &store, true).explore(3);
    }
}
