//! Evaluation parameters and validation.

use crate::constants::{DEFAULT_EPSILON, DEFAULT_X};
use crate::evaluator::SeriesError;

/// Parameters for a series evaluation.
#[derive(Debug, Clone, Copy)]
pub struct SeriesParams {
    /// Series argument; must satisfy x > 1 for convergence.
    pub x: f64,
    /// Convergence threshold; a worker stops at the first term whose
    /// magnitude falls below this value. Must be positive.
    pub eps: f64,
}

impl Default for SeriesParams {
    fn default() -> Self {
        Self {
            x: DEFAULT_X,
            eps: DEFAULT_EPSILON,
        }
    }
}

impl SeriesParams {
    /// Create parameters from raw values. Call `validate` before use.
    #[must_use]
    pub fn new(x: f64, eps: f64) -> Self {
        Self { x, eps }
    }

    /// Fail-fast validation of the caller contract.
    ///
    /// x <= 1 breaks the monotonic-decrease invariant the stop rule
    /// relies on; eps <= 0 would make every worker walk forever.
    pub fn validate(&self) -> Result<(), SeriesError> {
        if !self.x.is_finite() || self.x <= 1.0 {
            return Err(SeriesError::Domain(self.x));
        }
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(SeriesError::InvalidParameter(format!(
                "epsilon must be positive and finite, got {}",
                self.eps
            )));
        }
        Ok(())
    }
}
