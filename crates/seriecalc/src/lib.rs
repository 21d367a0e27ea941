//! SerieCalc library — application logic for the series summation CLI.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
