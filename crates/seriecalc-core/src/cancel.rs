//! Cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::evaluator::SeriesError;

/// Cooperative cancellation token shared between workers.
///
/// Workers check the token at loop checkpoints and abort with
/// `SeriesError::Cancelled`; nothing is ever interrupted mid-term.
///
/// # Example
/// ```
/// use seriecalc_core::cancel::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Check for cancellation, returning an error if cancelled.
    pub fn check_cancelled(&self) -> Result<(), SeriesError> {
        if self.is_cancelled() {
            Err(SeriesError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
