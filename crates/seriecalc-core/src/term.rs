//! The series term formula.

/// Compute the n-th term of the series, 1/((2n-1)·x^(2n-1)), for n >= 1.
///
/// When x^(2n-1) overflows the representable range the denominator is
/// non-finite and the true term value is vanishingly small; it is mapped
/// to exactly 0.0, which trivially satisfies any stop condition.
///
/// # Example
/// ```
/// let t1 = seriecalc_core::series_term(1, 3.0);
/// assert!((t1 - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn series_term(n: u64, x: f64) -> f64 {
    let odd = (2 * n - 1) as f64;
    let denominator = odd * x.powf(odd);
    if denominator.is_finite() {
        1.0 / denominator
    } else {
        0.0
    }
}
