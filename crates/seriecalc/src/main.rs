//! SerieCalc — concurrent series summation with an analytical cross-check.

use seriecalc_core::exit_codes;
use seriecalc_core::SeriesError;
use seriecalc_lib::{app, config, errors};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(error) = app::run(&config) {
        eprintln!("Error: {error:#}");
        let code = error
            .downcast_ref::<SeriesError>()
            .map_or(exit_codes::ERROR_GENERIC, errors::handle_error);
        std::process::exit(code);
    }
}
