//! Error handling and exit codes.

use seriecalc_core::exit_codes;
use seriecalc_core::SeriesError;

/// Map an evaluation error to the process exit code.
#[must_use]
pub fn handle_error(err: &SeriesError) -> i32 {
    match err {
        SeriesError::Evaluation(_) => exit_codes::ERROR_GENERIC,
        SeriesError::Domain(_) | SeriesError::InvalidParameter(_) => exit_codes::ERROR_CONFIG,
        SeriesError::Cancelled => exit_codes::ERROR_CANCELED,
        SeriesError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}
