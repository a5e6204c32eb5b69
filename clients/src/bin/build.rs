//! `nobel-build`: maps the laureate table onto the ontology and writes the
//! schema plus laureate facts as one graph.
//!
//! **Usage:**
//! ```text
//! nobel-build [--config <file>] [--input <path>] [--output <path>]
//!             [--format turtle|ntriples|jsonld] [--strict] [--validate]
//!             [--log-level <level>]
//! ```
//!
//! Flags override the config file. Exits non-zero if the build fails, or if
//! `--validate` finds a failing check.

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
use nobel_ingest::{pipeline, MappingPolicy};
use nobel_ontology::{Ontology, OutputFormat};

/// Build the Nobel laureate graph.
#[derive(Parser)]
#[command(name = "nobel-build", about = "Convert the Nobel laureate table to RDF")]
struct Args {
    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Laureate table (default: Nobel_Prize.csv).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output file (default: Nobel_Prize.ttl).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Output format: turtle, ntriples, or jsonld.
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Abort on the first row that cannot be mapped.
    #[arg(long)]
    strict: bool,

    /// Validate the graph and the written file afterwards.
    #[arg(long)]
    validate: bool,

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
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    if args.strict {
        config.on_unmapped = MappingPolicy::Fail;
    }

    let ontology = Ontology::nobel();
    println!(
        "Nobel laureate ontology: {} classes, {} properties, {} restrictions, {} categories",
        ontology.class_count(),
        ontology.property_count(),
        ontology.restriction_count(),
        ontology.individual_count()
    );

    let (graph, summary) = pipeline::run(&config)
        .with_context(|| format!("Failed to build {}", config.output.display()))?;

    println!(
        "  Rows: {} read, {} mapped, {} skipped",
        summary.rows_read, summary.rows_mapped, summary.rows_skipped
    );
    println!(
        "  Written: {} ({}, {} triples)",
        config.output.display(),
        config.format,
        summary.triples
    );

    if args.validate {
        let artifact = Artifact {
            path: config.output.clone(),
            format: config.format,
        };
        let report = run_all(&graph, &artifact)?;
        println!();
        let failed = print_report(&report);
        if failed > 0 {
            eprintln!("Validation FAILED: {failed} check(s) did not pass.");
            process::exit(1);
        }
    }

    println!("Build complete.");
    Ok(())
}
