//! Evaluator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::chunked::ChunkedEvaluator;
use crate::evaluator::{CheckedEvaluator, SeriesError, SeriesEvaluator};
use crate::strided::StridedEvaluator;

/// Factory trait for creating evaluators.
pub trait EvaluatorFactory: Send + Sync {
    /// Get or create an evaluator by strategy name.
    fn get(&self, name: &str) -> Result<Arc<dyn SeriesEvaluator>, SeriesError>;

    /// List all available strategy names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn SeriesEvaluator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_evaluator(name: &str) -> Result<Arc<dyn SeriesEvaluator>, SeriesError> {
        match name {
            "strided" => {
                let core = Arc::new(StridedEvaluator::new());
                Ok(Arc::new(CheckedEvaluator::new(core)))
            }
            "chunked" => {
                let core = Arc::new(ChunkedEvaluator::new());
                Ok(Arc::new(CheckedEvaluator::new(core)))
            }
            _ => Err(SeriesError::InvalidParameter(format!(
                "unknown strategy: {name}"
            ))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn SeriesEvaluator>, SeriesError> {
        // Check cache first
        if let Some(evaluator) = self.cache.read().get(name) {
            return Ok(Arc::clone(evaluator));
        }

        // Create and cache
        let evaluator = Self::create_evaluator(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&evaluator));
        Ok(evaluator)
    }

    fn available(&self) -> Vec<&str> {
        vec!["strided", "chunked"]
    }
}
