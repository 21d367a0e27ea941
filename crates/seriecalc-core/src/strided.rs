//! Strided (interleaved residue class) summation strategy.
//!
//! Worker i of w owns indices {i+1, i+1+w, i+1+2w, …} and walks them in
//! increasing order until the first term of its class falls below the
//! convergence threshold. Because term magnitudes strictly decrease for
//! x > 1, every index whose term is >= epsilon is covered by exactly one
//! worker, and the aggregate is accurate to O(epsilon · w).

use std::thread;

use crate::cancel::CancellationToken;
use crate::evaluator::{CoreEvaluator, Evaluation, PartialResult, SeriesError};
use crate::params::SeriesParams;
use crate::term::series_term;

/// Strided summation strategy.
///
/// With a single worker this degenerates to plain sequential summation
/// of the full sequence.
pub struct StridedEvaluator;

impl StridedEvaluator {
    /// Create a new strided evaluator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for StridedEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreEvaluator for StridedEvaluator {
    fn evaluate_core(
        &self,
        params: &SeriesParams,
        workers: usize,
        cancel: &CancellationToken,
    ) -> Result<Evaluation, SeriesError> {
        let stride = workers as u64;

        // One scoped thread per residue class, one output slot each,
        // single join barrier. No shared mutable state.
        let partials: Vec<PartialResult> = thread::scope(|scope| {
            let handles: Vec<_> = (0..stride)
                .map(|i| scope.spawn(move || walk_residue_class(params, i + 1, stride, cancel)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .map_err(|_| SeriesError::Evaluation("worker thread panicked".into()))?
                })
                .collect::<Result<Vec<_>, SeriesError>>()
        })?;

        let total = partials.iter().map(|p| p.sum).sum();
        let terms = partials.iter().map(|p| p.terms).sum();
        Ok(Evaluation { total, terms })
    }

    fn name(&self) -> &str {
        "Strided"
    }
}

/// Walk one residue class {first, first+stride, …}, accumulating terms
/// until the first one below the threshold.
fn walk_residue_class(
    params: &SeriesParams,
    first: u64,
    stride: u64,
    cancel: &CancellationToken,
) -> Result<PartialResult, SeriesError> {
    let mut sum = 0.0;
    let mut terms = 0u64;
    let mut n = first;

    loop {
        cancel.check_cancelled()?;
        let term = series_term(n, params.x);
        if term.abs() < params.eps {
            break;
        }
        sum += term;
        terms += 1;
        n += stride;
    }

    tracing::trace!(first, stride, terms, "residue class converged");
    Ok(PartialResult { sum, terms })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::analytical;

    fn evaluate(x: f64, eps: f64, workers: usize) -> Evaluation {
        let cancel = CancellationToken::new();
        StridedEvaluator::new()
            .evaluate_core(&SeriesParams::new(x, eps), workers, &cancel)
            .unwrap()
    }

    #[test]
    fn converges_to_analytical() {
        let exact = analytical(3.0).unwrap();
        for workers in [1, 2, 4, 8] {
            for eps in [1e-2, 1e-7] {
                let eval = evaluate(3.0, eps, workers);
                assert!(
                    (eval.total - exact).abs() < eps,
                    "workers={workers} eps={eps}: |{} - {exact}| >= {eps}",
                    eval.total
                );
                assert!(eval.terms > 0);
            }
        }
    }

    #[test]
    fn single_worker_is_sequential_sum() {
        // w=1 walks the full sequence {1,2,3,…}; must agree with the
        // multi-worker result up to floating-point reordering.
        let one = evaluate(3.0, 1e-7, 1);
        let four = evaluate(3.0, 1e-7, 4);
        assert!((one.total - four.total).abs() / one.total < 1e-7);
    }

    #[test]
    fn stability_across_worker_counts() {
        let two = evaluate(3.0, 1e-7, 2);
        let four = evaluate(3.0, 1e-7, 4);
        assert!((two.total - four.total).abs() < 1e-9);
    }

    #[test]
    fn term_count_bounded() {
        let eval = evaluate(3.0, 1e-7, 4);
        assert!(eval.terms > 0);
        assert!(eval.terms < 10_000);
    }

    #[test]
    fn loose_epsilon_stops_early() {
        let exact = analytical(3.0).unwrap();
        let eval = evaluate(3.0, 1e-2, 4);
        assert!(eval.terms < 10, "expected < 10 terms, got {}", eval.terms);
        assert!((eval.total - exact).abs() < 1e-2);
    }

    #[test]
    fn cancelled_mid_run_reports_cancelled() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = StridedEvaluator::new().evaluate_core(
            &SeriesParams::default(),
            4,
            &cancel,
        );
        assert!(matches!(result, Err(SeriesError::Cancelled)));
    }

    #[test]
    fn works_near_domain_boundary() {
        // Convergence slows as x approaches 1; the excluded tail is
        // bounded by eps·r/(1-r) with r = 1/x². At x = 1.1 that is
        // under 5·eps.
        let x = 1.1;
        let eval = evaluate(x, 1e-4, 4);
        let exact = analytical(x).unwrap();
        assert!((eval.total - exact).abs() < 1e-3);
    }
}
