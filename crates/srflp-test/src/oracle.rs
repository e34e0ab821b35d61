//! Brute-force reference solver.
//!
//! Enumerates all `n!` orderings in lexicographic order and keeps the first
//! one with the lowest cost. Only usable for small `n`.

use srflp_core::{cost, Instance, Layout};

/// Rearranges `order` into the next lexicographic permutation.
///
/// Returns `false` (leaving `order` untouched) when `order` is already the
/// last permutation.
pub fn next_permutation(order: &mut [usize]) -> bool {
    if order.len() < 2 {
        return false;
    }
    let Some(pivot) = (0..order.len() - 1).rev().find(|&i| order[i] < order[i + 1]) else {
        return false;
    };
    let successor = (pivot + 1..order.len())
        .rev()
        .find(|&j| order[j] > order[pivot])
        .expect("a larger element exists right of the pivot");
    order.swap(pivot, successor);
    order[pivot + 1..].reverse();
    true
}

/// All orderings of `0..n` in lexicographic order.
pub fn permutations(n: usize) -> Vec<Vec<usize>> {
    let mut order: Vec<usize> = (0..n).collect();
    let mut all = vec![order.clone()];
    while next_permutation(&mut order) {
        all.push(order.clone());
    }
    all
}

/// The lexicographically first optimal layout.
pub fn brute_force(instance: &Instance) -> Layout {
    let mut order: Vec<usize> = (0..instance.dimension()).collect();
    let mut best = Layout::new(cost::cost(instance, &order), order.clone());
    while next_permutation(&mut order) {
        let value = cost::cost(instance, &order);
        if value < best.cost {
            best = Layout::new(value, order.clone());
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::three_facility_instance;

    #[test]
    fn test_permutations_are_lexicographic() {
        assert_eq!(
            permutations(3),
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
        assert_eq!(permutations(5).len(), 120);
        assert_eq!(permutations(1), vec![vec![0]]);
    }

    #[test]
    fn test_brute_force_three_facilities() {
        let best = brute_force(&three_facility_instance());
        assert_eq!(best.cost, 13.0);
        assert_eq!(best.order, vec![0, 2, 1]);
    }
}
