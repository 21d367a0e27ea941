//! Orchestration interfaces.

use std::time::Duration;

use seriecalc_core::{Evaluation, SeriesError, SeriesParams};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present one strategy's evaluation next to the analytical reference.
    fn present_result(
        &self,
        strategy: &str,
        params: &SeriesParams,
        evaluation: &Evaluation,
        reference: f64,
        duration: Duration,
        details: bool,
    );

    /// Present a comparison across strategies.
    fn present_comparison(&self, outcomes: &[EvaluationOutcome]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single strategy run.
#[derive(Debug)]
pub struct EvaluationOutcome {
    /// Strategy name.
    pub strategy: String,
    /// The evaluated sum or a structured error.
    pub outcome: Result<Evaluation, SeriesError>,
    /// Evaluation duration.
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_carries_strategy_name() {
        let outcome = EvaluationOutcome {
            strategy: "Strided".into(),
            outcome: Ok(Evaluation {
                total: 0.5,
                terms: 6,
            }),
            duration: Duration::from_millis(1),
        };
        assert_eq!(outcome.strategy, "Strided");
        assert!(outcome.outcome.is_ok());
    }
}
