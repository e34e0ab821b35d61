//! Colorful console output for solver events.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Solve start/end
//! - **DEBUG**: Per-root summaries and incumbent improvements

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

const DEFAULT_FILTER: &str = "srflp_solver=info";

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect. The filter
/// is taken from `RUST_LOG` when set, e.g. `RUST_LOG=srflp_solver=debug`
/// to see per-root summaries.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

/// A tracing layer that formats solver events with colors.
///
/// Output goes to stderr so that stdout carries only the final report.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("srflp") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    facility_count: Option<u64>,
    thread_count: Option<u64>,
    pruning: Option<bool>,
    root: Option<u64>,
    nodes: Option<u64>,
    pruned: Option<u64>,
    leaves: Option<u64>,
    duration_ms: Option<u64>,
    cost: Option<f64>,
    bound: Option<f64>,
    prune_rate: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "event" {
            self.event = Some(format!("{:?}", value).trim_matches('"').to_string());
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "facility_count" => self.facility_count = Some(value),
            "thread_count" => self.thread_count = Some(value),
            "root" => self.root = Some(value),
            "nodes" => self.nodes = Some(value),
            "pruned" => self.pruned = Some(value),
            "leaves" => self.leaves = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "cost" => self.cost = Some(value),
            "bound" => self.bound = Some(value),
            "prune_rate" => self.prune_rate = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "pruning" {
            self.pruning = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "event" {
            self.event = Some(value.to_string());
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "root_end" => format_root_end(v),
        "improvement" => format_improvement(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let facilities = v.facility_count.unwrap_or(0);
    let threads = v.thread_count.unwrap_or(0);

    let mut output = format!(
        "{} {} Solving │ {} facilities │ {} threads │ scale {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        facilities.to_formatted_string(&Locale::en).bright_yellow(),
        threads.to_formatted_string(&Locale::en).bright_yellow(),
        calculate_problem_scale(facilities as usize).bright_magenta()
    );

    if v.pruning == Some(false) {
        output.push_str(&format!(" │ {}", "pruning off".yellow()));
    }

    output
}

fn format_solve_end(v: &EventVisitor) -> String {
    let nodes = v.nodes.unwrap_or(0);
    let pruned = v.pruned.unwrap_or(0);
    let leaves = v.leaves.unwrap_or(0);

    format!(
        "{} {} Solving complete │ {} │ {} nodes │ {} pruned ({:.1}%) │ {} leaves │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_cost(v.cost),
        nodes.to_formatted_string(&Locale::en).white(),
        pruned.to_formatted_string(&Locale::en).white(),
        v.prune_rate.unwrap_or(0.0) * 100.0,
        leaves.to_formatted_string(&Locale::en).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_root_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Root {:>4} │ {:>12} nodes │ {:>12} pruned │ {} │ bound {}",
        format_elapsed(),
        "◀".bright_blue(),
        v.root.unwrap_or(0).white().bold(),
        v.nodes.unwrap_or(0).to_formatted_string(&Locale::en),
        v.pruned.unwrap_or(0).to_formatted_string(&Locale::en),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_cost(v.bound),
    )
}

fn format_improvement(v: &EventVisitor) -> String {
    format!(
        "{} {} New best {} │ root {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        format_cost(v.cost),
        v.root.unwrap_or(0),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_cost(cost: Option<f64>) -> String {
    match cost {
        Some(c) if c.is_finite() => c.to_string().bright_green().to_string(),
        Some(_) => "∞".white().to_string(),
        None => "N/A".white().to_string(),
    }
}

// n! orderings, written as mantissa x 10^exponent.
fn calculate_problem_scale(facility_count: usize) -> String {
    if facility_count == 0 {
        return "0".to_string();
    }

    let log_scale: f64 = (1..=facility_count).map(|k| (k as f64).log10()).sum();
    let exponent = log_scale.floor() as i32;
    let mantissa = 10f64.powf(log_scale - exponent as f64);

    format!("{:.3} x 10^{}", mantissa, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_problem_scale_is_factorial() {
        assert_eq!(calculate_problem_scale(0), "0");
        assert_eq!(calculate_problem_scale(1), "1.000 x 10^0");
        assert_eq!(calculate_problem_scale(5), "1.200 x 10^2");
        assert_eq!(calculate_problem_scale(10), "3.629 x 10^6");
    }

    #[test]
    fn test_solve_end_shows_prune_rate() {
        let visitor = EventVisitor {
            event: Some("solve_end".to_string()),
            pruned: Some(3),
            prune_rate: Some(0.25),
            ..Default::default()
        };
        assert!(format_event(&visitor).contains("(25.0%)"));
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("something_else".to_string()),
            ..Default::default()
        };
        assert!(format_event(&visitor).is_empty());
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
