//! Core orchestration: parallel strategy execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use seriecalc_core::{
    CancellationToken, SeriesError, SeriesEvaluator, SeriesParams, STABILITY_TOLERANCE,
};

use crate::interfaces::EvaluationOutcome;

/// Execute an evaluation with each of the given strategies.
///
/// A single strategy runs inline; multiple strategies fan out across a
/// rayon pool, each running its own fork-join internally.
pub fn execute_evaluations(
    evaluators: &[Arc<dyn SeriesEvaluator>],
    params: &SeriesParams,
    workers: usize,
    cancel: &CancellationToken,
) -> Vec<EvaluationOutcome> {
    if evaluators.len() == 1 {
        let evaluator = &evaluators[0];
        let start = Instant::now();
        let outcome = evaluator.evaluate(params, workers, cancel);
        return vec![EvaluationOutcome {
            strategy: evaluator.name().to_string(),
            outcome,
            duration: start.elapsed(),
        }];
    }

    use rayon::iter::{IntoParallelIterator, ParallelIterator};

    evaluators
        .iter()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|evaluator| {
            let start = Instant::now();
            let outcome = evaluator.evaluate(params, workers, cancel);
            let duration = start.elapsed();
            tracing::debug!(
                strategy = evaluator.name(),
                ok = outcome.is_ok(),
                ?duration,
                "strategy finished"
            );
            EvaluationOutcome {
                strategy: evaluator.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Cross-check successful strategy totals against each other.
///
/// All strategies sum the same set of terms, so totals must agree within
/// the floating-point reordering tolerance.
pub fn analyze_comparison_results(outcomes: &[EvaluationOutcome]) -> Result<(), SeriesError> {
    let mut totals = outcomes
        .iter()
        .filter_map(|o| o.outcome.as_ref().ok().map(|e| e.total));

    let Some(reference) = totals.next() else {
        return Err(SeriesError::Evaluation("no valid results".into()));
    };
    for total in totals {
        if (total - reference).abs() > STABILITY_TOLERANCE {
            return Err(SeriesError::Mismatch);
        }
    }

    Ok(())
}
