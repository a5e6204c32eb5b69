//! Shared plumbing for the `nobel-build` and `nobel-conformance` binaries:
//! logging setup, config resolution, and report printing.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::Path;

use anyhow::{Context, Result};
use nobel_conformance::ConformanceReport;
use nobel_ingest::Config;

/// Maps a `--log-level` value to a tracing level. Unknown names fall back to
/// `info`.
#[must_use]
pub fn log_level(name: &str) -> tracing::Level {
    match name.to_ascii_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

/// Installs the global `fmt` subscriber. Logs go to stderr so stdout carries
/// only the printed summary.
pub fn init_logging(name: &str) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(name))
        .with_writer(std::io::stderr)
        .init();
}

/// Loads `path` if given, otherwise returns the default config.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_toml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Prints every result and a summary line. Returns the failure count.
pub fn print_report(report: &ConformanceReport) -> usize {
    println!("Nobel Laureate Graph Conformance Report");
    println!("=======================================");
    println!();

    for result in &report.results {
        println!("{result}");
    }

    let failed = report.failure_count();
    let warned = report.warning_count();
    let passed = report.results.len() - failed - warned;

    println!();
    println!("Summary: {passed} passed, {warned} warnings, {failed} failed");
    failed
}
