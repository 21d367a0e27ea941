//! Application entry point and dispatch.

use anyhow::Result;

use seriecalc_cli::output::{write_json_report, Report};
use seriecalc_cli::presenter::CLIResultPresenter;
use seriecalc_core::{analytical, CancellationToken, DefaultFactory};
use seriecalc_orchestration::interfaces::ResultPresenter;
use seriecalc_orchestration::orchestrator::{analyze_comparison_results, execute_evaluations};
use seriecalc_orchestration::selection::get_evaluators_to_run;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        seriecalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let params = config.params();
    params.validate()?;

    // Reject the contract violations eagerly, before any thread spawns.
    let reference = analytical(params.x)?;

    let factory = DefaultFactory::new();
    let evaluators = get_evaluators_to_run(&config.strategy, &factory)?;
    let cancel = CancellationToken::new();

    // Set up Ctrl+C handler
    let cancel_clone = cancel.clone();
    ctrlc_handler(cancel_clone);

    let outcomes = execute_evaluations(&evaluators, &params, config.workers, &cancel);

    // Cross-check strategies against each other
    if outcomes.len() > 1 {
        analyze_comparison_results(&outcomes)?;
    }

    // Present results. Quiet mode emits a single bare total, so only
    // the first successful strategy is shown there; the strategies have
    // already been cross-checked against each other above.
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    let mut shown = false;
    for outcome in &outcomes {
        match &outcome.outcome {
            Ok(evaluation) => {
                if config.quiet && shown {
                    continue;
                }
                shown = true;
                presenter.present_result(
                    &outcome.strategy,
                    &params,
                    evaluation,
                    reference,
                    outcome.duration,
                    config.details,
                );
            }
            Err(error) => {
                presenter.present_error(&format!("{}: {error}", outcome.strategy));
            }
        }
    }

    // Present comparison if multiple
    if outcomes.len() > 1 {
        presenter.present_comparison(&outcomes);
    }

    // Write the JSON report if requested
    if let Some(ref path) = config.output {
        let report = Report::new(&params, config.workers, reference, &outcomes);
        write_json_report(path, &report)?;
    }

    // A single failed strategy aborts the whole run.
    if let Some(error) = outcomes.into_iter().find_map(|o| o.outcome.err()) {
        return Err(error.into());
    }

    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .expect("Error setting Ctrl+C handler");
}
