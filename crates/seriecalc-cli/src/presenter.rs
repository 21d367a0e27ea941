//! CLI result presenter.

use std::time::Duration;

use seriecalc_core::{Evaluation, SeriesParams};
use seriecalc_orchestration::interfaces::{EvaluationOutcome, ResultPresenter};

use crate::output::format_duration;

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        strategy: &str,
        params: &SeriesParams,
        evaluation: &Evaluation,
        reference: f64,
        duration: Duration,
        details: bool,
    ) {
        if self.quiet {
            println!("{:.10}", evaluation.total);
            return;
        }

        if details {
            println!("S = Σ 1/((2n-1)·x^(2n-1)),  n = 1 .. ∞");
        }

        println!("Strategy: {strategy}");
        println!("x = {}, epsilon = {:e}", params.x, params.eps);
        println!("S = {:.10}  ({} terms)", evaluation.total, evaluation.terms);
        println!("y = {reference:.10}  (0.5·ln((x+1)/(x-1)))");

        let residual = (evaluation.total - reference).abs();
        println!("|S - y| = {residual:.2e}");
        if residual < params.eps {
            println!("Precision achieved: |S - y| < ε");
        } else {
            println!("Precision NOT achieved: |S - y| >= ε");
        }

        if self.verbose {
            println!("Duration: {}", format_duration(duration));
        }
        println!();
    }

    fn present_comparison(&self, outcomes: &[EvaluationOutcome]) {
        if self.quiet {
            return;
        }

        println!("Comparison Results:");
        println!("{:-<60}", "");
        for outcome in outcomes {
            let status = if outcome.outcome.is_err() { "ERROR" } else { "OK" };
            println!(
                "  {:<20} {:>10} [{}]",
                outcome.strategy,
                format_duration(outcome.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
