//! Chunked (worker pool) summation strategy.
//!
//! A coordinator submits contiguous fixed-width index chunks over a
//! bounded channel to a pool of workers. Each worker checks every term
//! of its chunk against the threshold and accumulates only those at or
//! above it, raising a shared convergence flag on the first sub-threshold
//! term. The coordinator keeps submitting chunks until the flag is
//! raised, so the convergence point is always covered regardless of
//! where the static chunk boundaries fall.
//!
//! The flag uses relaxed ordering and only stops chunk submission; the
//! per-term check makes both strategies sum exactly the set of terms
//! with magnitude >= epsilon, so chunked and strided results agree up
//! to floating-point reordering.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crossbeam_channel::{bounded, unbounded};

use crate::cancel::CancellationToken;
use crate::constants::DEFAULT_CHUNK_LEN;
use crate::evaluator::{CoreEvaluator, Evaluation, PartialResult, SeriesError};
use crate::params::SeriesParams;
use crate::term::series_term;

/// Chunked worker pool strategy.
pub struct ChunkedEvaluator {
    chunk_len: u64,
}

impl ChunkedEvaluator {
    /// Create a new chunked evaluator with the default chunk width.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chunk_len: DEFAULT_CHUNK_LEN,
        }
    }

    /// Create a chunked evaluator with a custom chunk width (minimum 1).
    #[must_use]
    pub fn with_chunk_len(chunk_len: u64) -> Self {
        Self {
            chunk_len: chunk_len.max(1),
        }
    }
}

impl Default for ChunkedEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreEvaluator for ChunkedEvaluator {
    fn evaluate_core(
        &self,
        params: &SeriesParams,
        workers: usize,
        cancel: &CancellationToken,
    ) -> Result<Evaluation, SeriesError> {
        let converged = AtomicBool::new(false);
        let (job_tx, job_rx) = bounded::<(u64, u64)>(workers * 2);
        let (result_tx, result_rx) = unbounded::<Result<PartialResult, SeriesError>>();

        thread::scope(|scope| {
            for _ in 0..workers {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                let converged = &converged;
                scope.spawn(move || {
                    for (start, end) in job_rx {
                        let outcome = sum_chunk(params, start, end, converged, cancel);
                        if result_tx.send(outcome).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(result_tx);

            // Coordinator: submit chunks in order until a worker reports
            // a sub-threshold term. Chunks past the cutoff contribute
            // nothing because of the per-term check.
            let mut start = 1u64;
            while !converged.load(Ordering::Relaxed) && !cancel.is_cancelled() {
                if job_tx.send((start, start + self.chunk_len)).is_err() {
                    break;
                }
                start += self.chunk_len;
            }
            drop(job_tx);
        });

        let mut total = 0.0;
        let mut terms = 0u64;
        for outcome in result_rx.try_iter() {
            let partial = outcome?;
            total += partial.sum;
            terms += partial.terms;
        }
        // Cancellation may land after the last chunk was drained; a
        // cancelled evaluation must never report a partial total.
        cancel.check_cancelled()?;

        tracing::debug!(workers, terms, "chunked evaluation complete");
        Ok(Evaluation { total, terms })
    }

    fn name(&self) -> &str {
        "Chunked"
    }
}

/// Sum the terms of one chunk [start, end), skipping sub-threshold terms
/// and raising the convergence flag on the first one seen.
fn sum_chunk(
    params: &SeriesParams,
    start: u64,
    end: u64,
    converged: &AtomicBool,
    cancel: &CancellationToken,
) -> Result<PartialResult, SeriesError> {
    cancel.check_cancelled()?;

    let mut sum = 0.0;
    let mut terms = 0u64;
    for n in start..end {
        let term = series_term(n, params.x);
        if term.abs() < params.eps {
            converged.store(true, Ordering::Relaxed);
            break;
        }
        sum += term;
        terms += 1;
    }
    Ok(PartialResult { sum, terms })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::analytical;
    use crate::strided::StridedEvaluator;

    fn evaluate(x: f64, eps: f64, workers: usize) -> Evaluation {
        let cancel = CancellationToken::new();
        ChunkedEvaluator::new()
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
    fn agrees_with_strided() {
        let cancel = CancellationToken::new();
        let params = SeriesParams::new(3.0, 1e-7);
        let strided = StridedEvaluator::new()
            .evaluate_core(&params, 4, &cancel)
            .unwrap();
        let chunked = evaluate(3.0, 1e-7, 4);
        // Same term set, different addition order.
        assert!((strided.total - chunked.total).abs() < 1e-9);
        assert_eq!(strided.terms, chunked.terms);
    }

    #[test]
    fn narrow_chunks_cover_the_cutoff() {
        // Chunk width 1 forces many submission rounds past static
        // boundaries; coverage of the convergence point must not depend
        // on the chunk width.
        let cancel = CancellationToken::new();
        let params = SeriesParams::new(3.0, 1e-7);
        let eval = ChunkedEvaluator::with_chunk_len(1)
            .evaluate_core(&params, 4, &cancel)
            .unwrap();
        let exact = analytical(3.0).unwrap();
        assert!((eval.total - exact).abs() < 1e-7);
    }

    #[test]
    fn chunk_len_clamped_to_one() {
        let cancel = CancellationToken::new();
        let eval = ChunkedEvaluator::with_chunk_len(0)
            .evaluate_core(&SeriesParams::new(3.0, 1e-2), 2, &cancel)
            .unwrap();
        assert!(eval.terms > 0);
    }

    #[test]
    fn cancelled_before_start_reports_cancelled() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result =
            ChunkedEvaluator::new().evaluate_core(&SeriesParams::default(), 4, &cancel);
        assert!(matches!(result, Err(SeriesError::Cancelled)));
    }

    #[test]
    fn term_count_bounded() {
        let eval = evaluate(3.0, 1e-7, 4);
        assert!(eval.terms > 0);
        assert!(eval.terms < 10_000);
    }
}
