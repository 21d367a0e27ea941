//! Closed-form reference value for the series sum.

use crate::evaluator::SeriesError;

/// Compute the closed-form limit of the series, 0.5·ln((x+1)/(x-1)).
///
/// This is the correctness oracle the evaluated sum converges to; it is
/// not part of the summation itself. Fails with `SeriesError::Domain`
/// for x <= 1 (the logarithm argument is non-positive or undefined)
/// and for non-finite x.
pub fn analytical(x: f64) -> Result<f64, SeriesError> {
    if !x.is_finite() || x <= 1.0 {
        return Err(SeriesError::Domain(x));
    }
    Ok(0.5 * ((x + 1.0) / (x - 1.0)).ln())
}
