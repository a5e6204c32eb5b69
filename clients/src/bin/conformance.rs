//! `nobel-conformance`: rebuilds the laureate graph in memory and validates it
//! against an already written artifact.
//!
//! **Usage:**
//! ```text
//! nobel-conformance [--config <file>] [--input <path>] [--artifact <path>]
//!                   [--format turtle|ntriples|jsonld] [--log-level <level>]
//! ```
//!
//! Exits non-zero if any check fails. Warnings are printed but do not fail.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use nobel_clients::{init_logging, load_config, print_report};
use nobel_conformance::{run_all, Artifact};
use nobel_ingest::pipeline;
use nobel_ontology::OutputFormat;

/// Validate a built Nobel laureate graph.
#[derive(Parser)]
#[command(
    name = "nobel-conformance",
    about = "Validate the Nobel laureate graph and its serialized artifact"
)]
struct Args {
    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Laureate table (default: the config's input).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Artifact to check (default: the config's output).
    #[arg(long)]
    artifact: Option<PathBuf>,

    /// Format of the artifact (default: the config's format).
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Logging level.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut config = load_config(args.config.as_deref())?;
    if let Some(input) = args.input {
        config.input = input;
    }

    let (graph, _) = pipeline::load(&config)
        .with_context(|| format!("Failed to rebuild graph from {}", config.input.display()))?;

    let artifact = Artifact {
        path: args.artifact.unwrap_or(config.output),
        format: args.format.unwrap_or(config.format),
    };
    let report = run_all(&graph, &artifact)?;

    let failed = print_report(&report);
    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
