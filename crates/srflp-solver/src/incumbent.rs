//! Shared incumbent (best layout holder).
//!
//! A concurrent container for the best complete layout found so far. The
//! layout itself lives behind a `Mutex` and is the source of truth. A copy of
//! its cost is mirrored into an `AtomicU64` (as `f64` bits) so workers can read
//! the pruning bound without taking the lock.
//!
//! The atomic is read and written with `Ordering::Relaxed`. A worker may see a
//! bound that is larger than the current best; pruning against a larger bound
//! only explores more, it never discards the optimum. Installation always
//! re-checks the candidate against the locked layout.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use srflp_core::Layout;

/// Callback invoked for every installed improvement, inside the critical
/// section and in installation order.
pub type ImprovementListener = Arc<dyn Fn(&Layout) + Send + Sync>;

/// Concurrent holder of the best complete layout.
///
/// # Example
///
/// ```
/// use srflp_solver::IncumbentStore;
///
/// let store = IncumbentStore::new();
/// assert_eq!(store.current_bound(), f64::INFINITY);
///
/// assert!(store.update(14.0, &[0, 1, 2]));
/// assert!(!store.update(14.0, &[2, 1, 0]));
/// assert!(store.update(13.0, &[0, 2, 1]));
///
/// let best = store.snapshot().unwrap();
/// assert_eq!(best.cost, 13.0);
/// assert_eq!(best.order, vec![0, 2, 1]);
/// ```
pub struct IncumbentStore {
    bound: AtomicU64,
    best: Mutex<Option<Layout>>,
    listener: Option<ImprovementListener>,
}

impl Default for IncumbentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IncumbentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncumbentStore")
            .field("bound", &self.current_bound())
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl IncumbentStore {
    /// Creates an empty store with an infinite bound.
    pub fn new() -> Self {
        Self {
            bound: AtomicU64::new(f64::INFINITY.to_bits()),
            best: Mutex::new(None),
            listener: None,
        }
    }

    /// Creates an empty store that reports every improvement to `listener`.
    pub fn with_listener(listener: ImprovementListener) -> Self {
        Self {
            listener: Some(listener),
            ..Self::new()
        }
    }

    /// Returns the current pruning bound.
    ///
    /// Lock-free and possibly stale: the returned value is never below the
    /// cost of the installed layout.
    #[inline]
    pub fn current_bound(&self) -> f64 {
        f64::from_bits(self.bound.load(Ordering::Relaxed))
    }

    /// Installs `order` if `cost` is strictly below the current best.
    ///
    /// Cost and ordering are replaced together under the lock. Returns `true`
    /// if the candidate was installed.
    pub fn update(&self, cost: f64, order: &[usize]) -> bool {
        if cost >= self.current_bound() {
            return false;
        }

        let mut guard = self.best.lock().unwrap_or_else(PoisonError::into_inner);
        // The bound read above may be stale; compare against the locked value.
        if guard.as_ref().is_some_and(|best| cost >= best.cost) {
            return false;
        }

        let layout = Layout::new(cost, order.to_vec());
        if let Some(listener) = &self.listener {
            listener(&layout);
        }
        *guard = Some(layout);
        self.bound.store(cost.to_bits(), Ordering::Relaxed);
        true
    }

    /// Returns a copy of the best layout, if any.
    pub fn snapshot(&self) -> Option<Layout> {
        self.best
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Consumes the store and returns the best layout, if any.
    pub fn into_best(self) -> Option<Layout> {
        self.best
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_new_store_is_empty() {
        let store = IncumbentStore::new();
        assert_eq!(store.current_bound(), f64::INFINITY);
        assert!(store.snapshot().is_none());
        assert!(store.into_best().is_none());
    }

    #[test]
    fn test_update_requires_strict_improvement() {
        let store = IncumbentStore::new();
        assert!(store.update(10.0, &[0, 1]));
        assert!(!store.update(10.0, &[1, 0]));
        assert!(!store.update(11.0, &[1, 0]));
        assert_eq!(store.current_bound(), 10.0);
        assert_eq!(store.snapshot().unwrap().order, vec![0, 1]);

        assert!(store.update(9.5, &[1, 0]));
        assert_eq!(store.current_bound(), 9.5);
        assert_eq!(store.into_best().unwrap(), Layout::new(9.5, vec![1, 0]));
    }

    #[test]
    fn test_zero_cost_is_installed() {
        let store = IncumbentStore::new();
        assert!(store.update(0.0, &[0]));
        assert!(!store.update(0.0, &[0]));
        assert_eq!(store.current_bound(), 0.0);
    }

    #[test]
    fn test_listener_sees_each_improvement() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let store = IncumbentStore::with_listener(Arc::new(move |layout: &Layout| {
            sink.lock().unwrap().push(layout.cost);
        }));

        store.update(5.0, &[0, 1, 2]);
        store.update(6.0, &[0, 2, 1]);
        store.update(3.0, &[1, 0, 2]);

        assert_eq!(*seen.lock().unwrap(), vec![5.0, 3.0]);
    }

    #[test]
    fn test_concurrent_updates_keep_minimum() {
        let store = IncumbentStore::new();
        let installed = AtomicUsize::new(0);

        std::thread::scope(|s| {
            for worker in 0..8usize {
                let store = &store;
                let installed = &installed;
                s.spawn(move || {
                    for step in 0..500usize {
                        let cost = ((worker * 7919 + step * 104_729) % 10_000) as f64;
                        if store.update(cost, &[worker, step]) {
                            installed.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                });
            }
        });

        let best = store.into_best().unwrap();
        assert_eq!(best.cost, 0.0);
        // The ordering always belongs to the installed cost.
        let [worker, step] = [best.order[0], best.order[1]];
        assert_eq!(((worker * 7919 + step * 104_729) % 10_000) as f64, best.cost);
        assert!(installed.load(Ordering::Relaxed) >= 1);
    }
}
