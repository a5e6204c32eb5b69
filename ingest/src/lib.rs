//! Laureate table ingestion for the Nobel laureate ontology.
//!
//! Reads a comma-separated laureate table, maps every row onto the terms of
//! [`nobel_ontology::Ontology::nobel`], and writes the schema plus the
//! laureate facts as one graph.
//!
//! ```no_run
//! use nobel_ingest::{pipeline, Config};
//!
//! let config = Config::default();
//! let (_graph, summary) = pipeline::run(&config)?;
//! println!("{} triples", summary.triples);
//! # Ok::<(), nobel_ingest::PipelineError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod error;
pub mod mapper;
pub mod pipeline;
pub mod record;

pub use config::{Config, MappingPolicy};
pub use error::{ConfigError, MapError, PipelineError};
pub use mapper::RowMapper;
pub use pipeline::Summary;
pub use record::LaureateRecord;
