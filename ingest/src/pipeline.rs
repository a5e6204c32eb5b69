//! The build pipeline: schema, then one mapped row at a time, then output.

use std::io;
use std::path::Path;

use nobel_ontology::{emit, serializer, Graph, Ontology};
use tracing::{info, warn};

use crate::config::{Config, MappingPolicy};
use crate::error::PipelineError;
use crate::mapper::RowMapper;
use crate::record::LaureateRecord;

/// Counts from one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Data rows read from the table.
    pub rows_read: usize,
    /// Rows that produced triples.
    pub rows_mapped: usize,
    /// Rows dropped under [`MappingPolicy::Skip`].
    pub rows_skipped: usize,
    /// Distinct triples in the final graph, schema included.
    pub triples: usize,
}

/// Builds the complete graph from a CSV stream.
///
/// The schema is emitted first. Each data row is then mapped in file order.
/// `source` only labels errors.
///
/// # Errors
///
/// Returns [`PipelineError::Input`] if a row cannot be read or lacks a
/// required column, and [`PipelineError::Mapping`] for an unmappable row when
/// `policy` is [`MappingPolicy::Fail`].
pub fn build_graph<R: io::Read>(
    reader: R,
    policy: MappingPolicy,
    source: &Path,
) -> Result<(Graph, Summary), PipelineError> {
    build_from_csv(csv::Reader::from_reader(reader), policy, source)
}

fn build_from_csv<R: io::Read>(
    mut reader: csv::Reader<R>,
    policy: MappingPolicy,
    source: &Path,
) -> Result<(Graph, Summary), PipelineError> {
    let ontology = Ontology::nobel();
    let mut graph = Graph::new();
    emit::schema(ontology, &mut graph);
    info!(triples = graph.len(), "emitted schema");

    let mapper = RowMapper::new(ontology);
    let mut summary = Summary::default();

    for (index, result) in reader.deserialize::<LaureateRecord>().enumerate() {
        let row = index + 1;
        let record = result.map_err(|source_err| PipelineError::Input {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        summary.rows_read += 1;

        match mapper.map_into(&record, &mut graph) {
            Ok(_) => summary.rows_mapped += 1,
            Err(err) => match policy {
                MappingPolicy::Skip => {
                    warn!(row, name = %record.full_name, error = %err, "skipping row");
                    summary.rows_skipped += 1;
                }
                MappingPolicy::Fail => {
                    return Err(PipelineError::Mapping {
                        row,
                        name: record.full_name,
                        source: err,
                    });
                }
            },
        }
    }

    summary.triples = graph.len();
    info!(
        rows = summary.rows_read,
        mapped = summary.rows_mapped,
        skipped = summary.rows_skipped,
        triples = summary.triples,
        "mapped laureates"
    );
    Ok((graph, summary))
}

/// Reads the graph from `config.input` without writing anything.
///
/// # Errors
///
/// Same as [`build_graph`], plus [`PipelineError::Input`] if the input file
/// cannot be opened.
pub fn load(config: &Config) -> Result<(Graph, Summary), PipelineError> {
    let reader = csv::Reader::from_path(&config.input).map_err(|source| PipelineError::Input {
        path: config.input.clone(),
        source,
    })?;
    build_from_csv(reader, config.on_unmapped, &config.input)
}

/// Runs the whole pipeline: read `config.input`, build the graph, and write
/// it to `config.output` in `config.format`.
///
/// # Errors
///
/// Same as [`load`], plus [`PipelineError::Output`] if the output cannot be
/// written.
pub fn run(config: &Config) -> Result<(Graph, Summary), PipelineError> {
    let (graph, summary) = load(config)?;
    serializer::write_graph(&graph, config.format, &config.output)?;
    info!(
        path = %config.output.display(),
        format = %config.format,
        triples = summary.triples,
        "wrote graph"
    );
    Ok((graph, summary))
}
