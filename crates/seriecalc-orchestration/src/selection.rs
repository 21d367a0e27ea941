//! Strategy selection logic.

use std::sync::Arc;

use seriecalc_core::{EvaluatorFactory, SeriesError, SeriesEvaluator};

/// Get evaluators to run based on strategy selection.
pub fn get_evaluators_to_run(
    strategy: &str,
    factory: &dyn EvaluatorFactory,
) -> Result<Vec<Arc<dyn SeriesEvaluator>>, SeriesError> {
    match strategy {
        "all" => {
            let names = factory.available();
            let mut evaluators = Vec::new();
            for name in names {
                evaluators.push(factory.get(name)?);
            }
            Ok(evaluators)
        }
        name => {
            let evaluator = factory.get(name)?;
            Ok(vec![evaluator])
        }
    }
}
