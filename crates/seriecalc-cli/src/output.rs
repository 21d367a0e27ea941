//! CLI output formatting and the JSON report.

use std::io;
use std::time::Duration;

use serde::Serialize;

use seriecalc_core::SeriesParams;
use seriecalc_orchestration::interfaces::EvaluationOutcome;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// One strategy entry in the JSON report.
#[derive(Debug, Serialize)]
pub struct StrategyReport {
    /// Strategy name.
    pub strategy: String,
    /// Evaluated partial sum.
    pub total: f64,
    /// Number of terms included.
    pub terms: u64,
    /// Absolute deviation from the analytical reference.
    pub residual: f64,
    /// Whether the deviation is below epsilon.
    pub converged: bool,
    /// Evaluation duration in milliseconds.
    pub duration_ms: f64,
}

/// Machine-readable evaluation report.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Series argument.
    pub x: f64,
    /// Convergence threshold.
    pub epsilon: f64,
    /// Worker count used per strategy.
    pub workers: usize,
    /// Closed-form reference value.
    pub analytical: f64,
    /// Per-strategy results; errored strategies are omitted.
    pub strategies: Vec<StrategyReport>,
}

impl Report {
    /// Build a report from evaluation outcomes and the reference value.
    #[must_use]
    pub fn new(
        params: &SeriesParams,
        workers: usize,
        reference: f64,
        outcomes: &[EvaluationOutcome],
    ) -> Self {
        let strategies = outcomes
            .iter()
            .filter_map(|outcome| {
                let evaluation = outcome.outcome.as_ref().ok()?;
                let residual = (evaluation.total - reference).abs();
                Some(StrategyReport {
                    strategy: outcome.strategy.clone(),
                    total: evaluation.total,
                    terms: evaluation.terms,
                    residual,
                    converged: residual < params.eps,
                    duration_ms: outcome.duration.as_secs_f64() * 1000.0,
                })
            })
            .collect();

        Self {
            x: params.x,
            epsilon: params.eps,
            workers,
            analytical: reference,
            strategies,
        }
    }
}

/// Write the report to a file as pretty-printed JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_json_report(path: &str, report: &Report) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, report).map_err(io::Error::other)
}
