use crate::algorithm::executor::{SearchOutcome, SearchStats};
use crate::io::configuration::{PROGRESS_REFRESH_STEPS, SPINNER_TICK_MS};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Terminal spinner reporting search steps, backtracks and depth
///
/// Clones share the same bar, so a caller can keep a handle after passing one
/// to the solver.
#[derive(Clone)]
pub struct SearchProgress {
    bar: ProgressBar,
    slot_count: usize,
}

impl SearchProgress {
    /// Create a visible spinner for a puzzle with `slot_count` slots
    pub fn new(slot_count: usize) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self { bar, slot_count }
    }

    /// Create a spinner that never draws
    pub fn hidden(slot_count: usize) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            slot_count,
        }
    }

    /// Refresh the message every few steps
    pub fn record(&self, stats: &SearchStats, depth: usize) {
        if stats.steps % PROGRESS_REFRESH_STEPS == 1 {
            self.bar.set_message(self.describe(stats, depth));
        }
    }

    /// Current spinner message
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Stop the spinner and leave a summary line
    pub fn finish(&self, outcome: &SearchOutcome, stats: &SearchStats) {
        let verdict = match outcome {
            SearchOutcome::Solved(_) => "solved",
            SearchOutcome::Unsatisfiable => "no solution",
            SearchOutcome::BudgetExhausted => "budget exhausted",
        };
        self.bar.finish_with_message(format!(
            "{verdict}: {} steps, {} backtracks",
            stats.steps, stats.backtracks
        ));
    }

    fn describe(&self, stats: &SearchStats, depth: usize) -> String {
        let width = self.slot_count.to_string().len();
        format!(
            "depth {depth:>width$}/{} | {} steps | {} backtracks",
            self.slot_count, stats.steps, stats.backtracks
        )
    }
}
