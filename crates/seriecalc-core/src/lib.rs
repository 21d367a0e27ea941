//! # seriecalc-core
//!
//! Core library for the SerieCalc concurrent series summation tool.
//! Implements the term formula, the analytical reference, and the
//! strided and chunked evaluation strategies.

pub mod analytical;
pub mod cancel;
pub mod chunked;
pub mod constants;
pub mod evaluator;
pub mod params;
pub mod registry;
pub mod strided;
pub mod term;

// Re-exports
pub use analytical::analytical;
pub use cancel::CancellationToken;
pub use chunked::ChunkedEvaluator;
pub use constants::{exit_codes, DEFAULT_EPSILON, DEFAULT_WORKERS, DEFAULT_X, STABILITY_TOLERANCE};
pub use evaluator::{
    CheckedEvaluator, CoreEvaluator, Evaluation, PartialResult, SeriesError, SeriesEvaluator,
};
pub use params::SeriesParams;
pub use registry::{DefaultFactory, EvaluatorFactory};
pub use strided::StridedEvaluator;
pub use term::series_term;

use std::sync::Arc;

/// Sum the series for `x` to precision `eps` using `workers` strided workers.
///
/// This is a convenience function for simple use cases. For strategy
/// selection and cancellation, use the `SeriesEvaluator` trait directly.
///
/// # Example
/// ```
/// let eval = seriecalc_core::evaluate(3.0, 1e-7, 4).unwrap();
/// let exact = seriecalc_core::analytical(3.0).unwrap();
/// assert!((eval.total - exact).abs() < 1e-7);
/// ```
pub fn evaluate(x: f64, eps: f64, workers: usize) -> Result<Evaluation, SeriesError> {
    let evaluator = CheckedEvaluator::new(Arc::new(StridedEvaluator::new()));
    let cancel = CancellationToken::new();
    let params = SeriesParams::new(x, eps);
    SeriesEvaluator::evaluate(&evaluator, &params, workers, &cancel)
}
