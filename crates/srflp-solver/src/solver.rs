//! Search orchestration.
//!
//! The search space is partitioned by the facility in the first position.
//! Every root facility becomes one unit of work; units run on a dedicated
//! worker pool and coordinate only through the shared [`IncumbentStore`].
//!
//! Logging levels:
//! - **INFO**: Solve start/end
//! - **DEBUG**: Per-root summaries and incumbent improvements

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use srflp_config::{SolverConfig, ThreadCount};
use srflp_core::{Instance, Layout};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::error::SolverError;
use crate::explorer::Explorer;
use crate::incumbent::{ImprovementListener, IncumbentStore};
use crate::stats::ExplorationStats;

/// Outcome of a completed solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    /// Best layout over all roots.
    pub layout: Layout,
    /// Counters merged over all roots.
    pub stats: ExplorationStats,
    /// Workers actually used.
    pub thread_count: usize,
    /// Wall-clock time of the search.
    pub duration: Duration,
}

/// Parallel branch-and-bound solver.
///
/// # Example
///
/// ```
/// use srflp_core::Instance;
/// use srflp_solver::{Solver, ThreadCount};
///
/// let instance = Instance::from_upper_triangle(
///     vec![2.0, 1.0, 3.0, 1.0],
///     &[vec![4.0, 0.0, 1.0], vec![2.0, 3.0], vec![5.0], vec![]],
/// )
/// .unwrap();
///
/// let result = Solver::new()
///     .with_thread_count(ThreadCount::Specific(2))
///     .solve(&instance)
///     .unwrap();
///
/// assert_eq!(result.layout.order.len(), 4);
/// ```
#[derive(Clone, Default)]
pub struct Solver {
    config: SolverConfig,
    listener: Option<ImprovementListener>,
}

impl fmt::Debug for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solver")
            .field("config", &self.config)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl Solver {
    /// Creates a solver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the worker count.
    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.config.thread_count = thread_count;
        self
    }

    /// Enables or disables bound pruning.
    pub fn with_pruning(mut self, enable: bool) -> Self {
        self.config.enable_pruning = enable;
        self
    }

    /// Registers a callback invoked for every incumbent improvement.
    ///
    /// Callbacks run inside the incumbent's critical section, so they see
    /// improvements in installation order and must be short.
    pub fn with_improvement_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Layout) + Send + Sync + 'static,
    {
        self.listener = Some(Arc::new(callback));
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Finds an optimal layout.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::ThreadPool`] if the worker pool cannot be
    /// built.
    pub fn solve(&self, instance: &Instance) -> Result<SolveResult, SolverError> {
        let n = instance.dimension();
        let thread_count = self.config.thread_count.resolve(n);
        let started = Instant::now();

        info!(
            event = "solve_start",
            facility_count = n as u64,
            thread_count = thread_count as u64,
            pruning = self.config.enable_pruning,
        );

        let incumbent = match &self.listener {
            Some(listener) => IncumbentStore::with_listener(Arc::clone(listener)),
            None => IncumbentStore::new(),
        };

        let stats = if thread_count == 1 {
            // Ascending roots on the calling thread.
            (0..n)
                .map(|root| self.explore_root(instance, &incumbent, root))
                .fold(ExplorationStats::default(), ExplorationStats::merge)
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(thread_count)
                .thread_name(|index| format!("srflp-worker-{}", index))
                .build()?;
            pool.install(|| {
                (0..n)
                    .into_par_iter()
                    .map(|root| self.explore_root(instance, &incumbent, root))
                    .reduce(ExplorationStats::default, ExplorationStats::merge)
            })
        };

        let layout = incumbent.into_best().ok_or(SolverError::NoSolution)?;
        let duration = started.elapsed();

        info!(
            event = "solve_end",
            cost = layout.cost,
            nodes = stats.nodes,
            pruned = stats.pruned,
            leaves = stats.leaves,
            prune_rate = stats.prune_rate(),
            duration_ms = duration.as_millis() as u64,
        );

        Ok(SolveResult {
            layout,
            stats,
            thread_count,
            duration,
        })
    }

    /// Finds an optimal layout, sending every improvement through `sender`.
    ///
    /// Improvements arrive in installation order, so their costs are strictly
    /// decreasing and the last one equals the returned layout. A closed
    /// receiver does not stop the search.
    pub fn solve_with_channel(
        &self,
        instance: &Instance,
        sender: mpsc::UnboundedSender<Layout>,
    ) -> Result<SolveResult, SolverError> {
        let previous = self.listener.clone();
        let listener: ImprovementListener = Arc::new(move |layout: &Layout| {
            if let Some(previous) = &previous {
                previous(layout);
            }
            let _ = sender.send(layout.clone());
        });

        Solver {
            config: self.config.clone(),
            listener: Some(listener),
        }
        .solve(instance)
    }

    fn explore_root(
        &self,
        instance: &Instance,
        incumbent: &IncumbentStore,
        root: usize,
    ) -> ExplorationStats {
        let started = Instant::now();
        let stats = Explorer::new(instance, incumbent, self.config.enable_pruning).explore(root);
        let duration_ms = started.elapsed().as_millis() as u64;

        if self.config.log_progress {
            info!(
                event = "root_end",
                root = root as u64,
                nodes = stats.nodes,
                pruned = stats.pruned,
                duration_ms,
                bound = incumbent.current_bound(),
            );
        } else {
            debug!(
                event = "root_end",
                root = root as u64,
                nodes = stats.nodes,
                pruned = stats.pruned,
                duration_ms,
                bound = incumbent.current_bound(),
            );
        }

        stats
    }
}
