//! Weighted center-distance objective.
//!
//! The distance between the facilities at positions `i < j` of an ordering
//! is
//!
//! ```text
//! (width[p[i]] + width[p[j]]) / 2 + sum(width[p[k]] for k in i..=j)
//! ```
//!
//! Both end widths therefore appear in the inclusive span *and* in the
//! half-width term. The conventional SRFLP distance only counts the facilities
//! strictly between the two, plus the two half widths. The inclusive form is
//! kept as is so costs match existing reference runs; do not substitute the
//! conventional distance here.
//!
//! Every term is non-negative, so the cost of a prefix never decreases when
//! the prefix is extended. A prefix cost is therefore a lower bound on the cost
//! of every complete ordering that starts with it, which is what the solver
//! prunes on.

use crate::instance::Instance;

/// Outcome of evaluating an ordering against a bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    /// The full cost, strictly below the bound.
    Cost(f64),
    /// The running total reached the bound before all pairs were summed.
    Dominated,
}

impl Evaluation {
    /// Returns the cost, or `None` if the evaluation was cut short.
    #[inline]
    pub fn cost(self) -> Option<f64> {
        match self {
            Evaluation::Cost(cost) => Some(cost),
            Evaluation::Dominated => None,
        }
    }

    #[inline]
    pub fn is_dominated(self) -> bool {
        matches!(self, Evaluation::Dominated)
    }
}

/// Center distance between positions `i` and `j` of `prefix`, as written.
///
/// # Panics
///
/// Panics if `i > j` or either position is out of range.
pub fn center_distance(instance: &Instance, prefix: &[usize], i: usize, j: usize) -> f64 {
    assert!(i <= j, "positions must be ordered: {i} > {j}");
    let mut distance = (instance.width(prefix[i]) + instance.width(prefix[j])) / 2.0;
    for &facility in &prefix[i..=j] {
        distance += instance.width(facility);
    }
    distance
}

/// Full cost of a partial or complete ordering.
pub fn cost(instance: &Instance, prefix: &[usize]) -> f64 {
    match evaluate(instance, prefix, f64::INFINITY) {
        Evaluation::Cost(cost) => cost,
        // A finite running total never reaches an infinite bound.
        Evaluation::Dominated => f64::INFINITY,
    }
}

/// Cost of `prefix`, abandoned as soon as the running total reaches `bound`.
///
/// Returns [`Evaluation::Dominated`] when the total reaches or exceeds
/// `bound`, so a result of `Cost(c)` always satisfies `c < bound`.
pub fn evaluate(instance: &Instance, prefix: &[usize], bound: f64) -> Evaluation {
    let mut sum = 0.0;
    for (i, &a) in prefix.iter().enumerate() {
        let row = instance.weight_row(a);
        for (j, &b) in prefix.iter().enumerate().skip(i + 1) {
            // Summed in formula order; a running span rounds differently for
            // fractional widths.
            sum += row[b] * center_distance(instance, prefix, i, j);
            if sum >= bound {
                return Evaluation::Dominated;
            }
        }
    }
    if sum >= bound {
        return Evaluation::Dominated;
    }
    Evaluation::Cost(sum)
}
