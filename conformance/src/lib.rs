//! Validation pass for built laureate graphs.
//!
//! Runs after emission and never changes the graph. Checks fall into three
//! groups:
//!
//! | Validator | Checks |
//! |-----------|--------|
//! | `ontology/inventory` | class, property, restriction, and category counts; pairwise category distinctness |
//! | `data/cardinality` | Person restrictions against the mapped laureates (warnings) |
//! | `rdf` | the written artifact re-parses to the graph's triple count |
//!
//! # Entry Point
//!
//! ```no_run
//! use nobel_conformance::{run_all, Artifact};
//! use nobel_ingest::{pipeline, Config};
//!
//! let config = Config::default();
//! let (graph, _) = pipeline::run(&config)?;
//! let artifact = Artifact { path: config.output.clone(), format: config.format };
//! let report = run_all(&graph, &artifact)?;
//! assert!(report.all_passed());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use std::path::PathBuf;

use nobel_ontology::{Graph, Ontology, OutputFormat};

pub use report::{ConformanceReport, Severity, TestResult};

/// A written output file and the format it was written in.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Output file path.
    pub path: PathBuf,
    /// Serialization of the file.
    pub format: OutputFormat,
}

/// Runs all validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Ontology inventory and category distinctness
/// 2. Person cardinalities over the mapped laureates
/// 3. Artifact re-parse
///
/// # Errors
///
/// Returns an error only if the artifact exists but cannot be read.
pub fn run_all(graph: &Graph, artifact: &Artifact) -> anyhow::Result<ConformanceReport> {
    let ontology = Ontology::nobel();
    let mut report = ConformanceReport::new();

    // 1. Inventory (static ontology plus emitted schema)
    report.extend(validators::ontology::inventory::validate(ontology, graph));

    // 2. Cardinalities
    report.extend(validators::data::cardinality::validate(ontology, graph));

    // 3. Artifact
    report.extend(validators::rdf::validate(
        graph,
        &artifact.path,
        artifact.format,
    )?);

    tracing::info!(
        checks = report.results.len(),
        warnings = report.warning_count(),
        failures = report.failure_count(),
        "conformance complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nobel_ingest::{pipeline, Config, MappingPolicy};

    const TABLE: &str = "\
Full_Name,Category,Birth_Country,Gender,Birth_City,Birth_City_dbr,Organization_Name,\
Organization_Name_dbr,Full_Name_dbr,Year,Laureate_Id,Prize_Share,Motivation,Birth_Date,\
Firstname,Lastname,Birth_Country_Code
Marie Curie,physics,Poland,Female,Warsaw,Warsaw,,,Marie_Curie,1903,6,4,\"for radiation\",\
1867-11-07,Marie,Curie,PL
Marie Curie,chemistry,Poland,Female,Warsaw,Warsaw,,,Marie_Curie,1911,6,1,\"for radium\",\
1867-11-07,Marie,Curie,PL
";

    #[test]
    fn built_graph_has_no_failures() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("laureates.csv");
        std::fs::write(&input, TABLE).expect("input written");
        let config = Config {
            input,
            output: dir.path().join("Nobel_Prize.ttl"),
            format: OutputFormat::Turtle,
            on_unmapped: MappingPolicy::Fail,
        };
        let (graph, _) = pipeline::run(&config).expect("pipeline runs");

        let artifact = Artifact {
            path: config.output.clone(),
            format: config.format,
        };
        let report = run_all(&graph, &artifact).expect("artifact readable");
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "failures: {failures:#?}");
        // Laureates never carry hasPrizeName; two shares are within bounds.
        assert_eq!(report.warning_count(), 1);
    }
}
