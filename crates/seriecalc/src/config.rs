//! Application configuration from CLI flags and environment.

use clap::Parser;

use seriecalc_core::{SeriesParams, DEFAULT_EPSILON, DEFAULT_WORKERS, DEFAULT_X};

/// SerieCalc — concurrent series summation with an analytical cross-check.
#[derive(Parser, Debug)]
#[command(name = "seriecalc", version, about)]
pub struct AppConfig {
    /// Series argument; the sum converges for x > 1.
    #[arg(short, long, default_value_t = DEFAULT_X, env = "SERIECALC_X")]
    pub x: f64,

    /// Convergence threshold: stop at the first term below this magnitude.
    #[arg(short, long, default_value_t = DEFAULT_EPSILON, env = "SERIECALC_EPSILON")]
    pub epsilon: f64,

    /// Number of concurrent workers per strategy.
    #[arg(short, long, default_value_t = DEFAULT_WORKERS, env = "SERIECALC_WORKERS")]
    pub workers: usize,

    /// Strategy to use: strided, chunked, or all.
    #[arg(long, default_value = "all")]
    pub strategy: String,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show the series formula alongside the result.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the sum).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write a JSON report to this path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Series parameters from the parsed flags.
    #[must_use]
    pub fn params(&self) -> SeriesParams {
        SeriesParams::new(self.x, self.epsilon)
    }
}
