//! Constants for series evaluation defaults and tolerances.

/// Default series argument. The series converges for any x > 1.
pub const DEFAULT_X: f64 = 3.0;

/// Default convergence threshold: a worker stops at the first term
/// whose magnitude falls below this value.
pub const DEFAULT_EPSILON: f64 = 1e-7;

/// Default number of concurrent workers.
pub const DEFAULT_WORKERS: usize = 4;

/// Default chunk width for the chunked strategy.
pub const DEFAULT_CHUNK_LEN: u64 = 64;

/// Absolute tolerance for cross-strategy result comparison.
///
/// Both strategies sum exactly the set of terms with magnitude >= epsilon,
/// so any disagreement beyond floating-point reordering is a bug.
pub const STABILITY_TOLERANCE: f64 = 1e-9;

/// Exit codes for the CLI binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Strategy results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Computation cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
