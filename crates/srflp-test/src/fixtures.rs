//! Instance fixtures.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use srflp_core::Instance;

/// Three unit-width facilities with `w(0,1) = 1`, `w(0,2) = 2`, `w(1,2) = 1`.
///
/// The best cost is 13, reached by every ordering that places facilities
/// 0 and 2 next to each other.
pub fn three_facility_instance() -> Instance {
    Instance::from_upper_triangle(vec![1.0, 1.0, 1.0], &[vec![1.0, 2.0], vec![1.0], vec![]])
        .expect("fixture is a valid instance")
}

/// `n` facilities sharing one width and one pairwise weight.
pub fn uniform_instance(n: usize, width: f64, weight: f64) -> Instance {
    let weights = (0..n)
        .map(|i| (0..n).map(|j| if i == j { 0.0 } else { weight }).collect())
        .collect();
    Instance::new(vec![width; n], weights).expect("fixture is a valid instance")
}

/// A seeded random instance with integral widths in `1..=10` and weights in
/// `0..=10`.
///
/// The same `(n, seed)` pair always yields the same instance.
pub fn random_instance(n: usize, seed: u64) -> Instance {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let widths = (0..n).map(|_| rng.random_range(1..=10u32) as f64).collect();
    let upper: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            (i + 1..n)
                .map(|_| rng.random_range(0..=10u32) as f64)
                .collect()
        })
        .collect();
    Instance::from_upper_triangle(widths, &upper).expect("fixture is a valid instance")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_instance_is_deterministic() {
        assert_eq!(random_instance(6, 7), random_instance(6, 7));
        assert_ne!(random_instance(6, 7), random_instance(6, 8));
    }

    #[test]
    fn test_random_instance_ranges() {
        let instance = random_instance(8, 1);
        for i in 0..8 {
            assert!((1.0..=10.0).contains(&instance.width(i)));
            for j in 0..8 {
                assert!((0.0..=10.0).contains(&instance.weight(i, j)));
            }
        }
    }

    #[test]
    fn test_uniform_instance() {
        let instance = uniform_instance(4, 2.0, 3.0);
        assert_eq!(instance.weight(1, 3), 3.0);
        assert_eq!(instance.weight(2, 2), 0.0);
        assert_eq!(instance.width(0), 2.0);
    }
}
