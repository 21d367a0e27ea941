//! # seriecalc-orchestration
//!
//! Parallel strategy execution, strategy selection, and result analysis.

pub mod interfaces;
pub mod orchestrator;
pub mod selection;

pub use interfaces::{EvaluationOutcome, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_evaluations};
pub use selection::get_evaluators_to_run;
