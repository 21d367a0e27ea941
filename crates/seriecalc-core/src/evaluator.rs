//! Evaluator traits and the `CheckedEvaluator` decorator.
//!
//! `SeriesEvaluator` is the public trait consumed by orchestration.
//! `CoreEvaluator` is the internal trait implemented by strategies.
//! `CheckedEvaluator` is a decorator that adds fail-fast parameter
//! validation and a pre-start cancellation check.

use std::sync::Arc;

use serde::Serialize;

use crate::cancel::CancellationToken;
use crate::params::SeriesParams;

/// Error type for series evaluations.
#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    /// The series does not converge for this argument.
    #[error("series diverges for x = {0}: x must be finite and > 1")]
    Domain(f64),

    /// A parameter violates the caller contract.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Evaluation was cancelled.
    #[error("evaluation cancelled")]
    Cancelled,

    /// Results from different strategies don't match.
    #[error("result mismatch between strategies")]
    Mismatch,

    /// A worker failed; the whole evaluation is aborted.
    #[error("evaluation error: {0}")]
    Evaluation(String),
}

/// Output of a single worker: its accumulated sum and term count.
///
/// Each worker writes exactly one of these into its own slot before the
/// join; the aggregator consumes them immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialResult {
    /// Accumulated partial sum.
    pub sum: f64,
    /// Number of terms included.
    pub terms: u64,
}

/// Aggregated result of an evaluation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Evaluation {
    /// Total sum over all workers.
    pub total: f64,
    /// Total number of terms included.
    pub terms: u64,
}

/// Public trait for series evaluators, consumed by orchestration.
pub trait SeriesEvaluator: Send + Sync {
    /// Evaluate the partial sum with the given parameters and worker count.
    fn evaluate(
        &self,
        params: &SeriesParams,
        workers: usize,
        cancel: &CancellationToken,
    ) -> Result<Evaluation, SeriesError>;

    /// Get the name of this evaluator.
    fn name(&self) -> &str;
}

/// Internal trait for strategy implementations.
/// Wrapped by `CheckedEvaluator` which adds validation.
pub trait CoreEvaluator: Send + Sync {
    /// Perform the summation; inputs are already validated.
    fn evaluate_core(
        &self,
        params: &SeriesParams,
        workers: usize,
        cancel: &CancellationToken,
    ) -> Result<Evaluation, SeriesError>;

    /// Get the name of this strategy.
    fn name(&self) -> &str;
}

/// Decorator that wraps a `CoreEvaluator` with contract checks.
pub struct CheckedEvaluator {
    inner: Arc<dyn CoreEvaluator>,
}

impl CheckedEvaluator {
    /// Create a new `CheckedEvaluator` wrapping the given strategy.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreEvaluator>) -> Self {
        Self { inner }
    }
}

impl SeriesEvaluator for CheckedEvaluator {
    fn evaluate(
        &self,
        params: &SeriesParams,
        workers: usize,
        cancel: &CancellationToken,
    ) -> Result<Evaluation, SeriesError> {
        params.validate()?;
        if workers < 1 {
            return Err(SeriesError::InvalidParameter(
                "worker count must be at least 1".into(),
            ));
        }

        // Check cancellation before starting
        cancel.check_cancelled()?;

        self.inner.evaluate_core(params, workers, cancel)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
