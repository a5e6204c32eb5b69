//! Error types for mapping, configuration, and the pipeline.

use std::path::PathBuf;

use nobel_ontology::serializer::WriteError;
use nobel_ontology::NameError;
use thiserror::Error;

/// A record that could not be resolved into triples.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The category text matched none of the six prize categories.
    #[error("unknown prize category `{value}`")]
    UnknownCategory {
        /// The unmatched text.
        value: String,
    },
    /// The laureate's name could not be turned into a resource.
    #[error("invalid laureate name")]
    InvalidName(#[from] NameError),
}

/// A configuration file that could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {}", path.display())]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`crate::Config`].
    #[error("failed to parse config file {}", path.display())]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: toml::de::Error,
    },
}

/// A fatal pipeline failure.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input table could not be opened, or a row could not be read.
    #[error("failed to read input {}", path.display())]
    Input {
        /// Input path.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: csv::Error,
    },
    /// A row could not be mapped and the policy is to fail.
    #[error("row {row} ({name:?}) could not be mapped")]
    Mapping {
        /// 1-based data row number (the header is row 0).
        row: usize,
        /// The row's `Full_Name`.
        name: String,
        /// Underlying cause.
        #[source]
        source: MapError,
    },
    /// The output could not be written.
    #[error(transparent)]
    Output(#[from] WriteError),
}
