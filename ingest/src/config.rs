//! Pipeline configuration, loaded from an optional TOML file.
//!
//! Every key is optional:
//!
//! ```toml
//! input = "Nobel_Prize.csv"
//! output = "Nobel_Prize.ttl"
//! format = "turtle"        # turtle | ntriples | jsonld
//! on_unmapped = "skip"     # skip | fail
//! ```

use std::path::{Path, PathBuf};

use nobel_ontology::OutputFormat;
use serde::Deserialize;

use crate::error::ConfigError;

/// What to do with a row whose category or name cannot be resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingPolicy {
    /// Log a warning, drop the whole row, and continue.
    #[default]
    Skip,
    /// Abort the run with [`crate::PipelineError::Mapping`].
    Fail,
}

/// Input, output, and mapping settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Laureate table to read.
    pub input: PathBuf,
    /// File the serialized graph is written to.
    pub output: PathBuf,
    /// Serialization of the output file.
    pub format: OutputFormat,
    /// Handling of unmappable rows.
    pub on_unmapped: MappingPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("Nobel_Prize.csv"),
            output: PathBuf::from("Nobel_Prize.ttl"),
            format: OutputFormat::Turtle,
            on_unmapped: MappingPolicy::Skip,
        }
    }
}

impl Config {
    /// Reads and parses a TOML config file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid config.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config: Config = toml::from_str("").expect("empty config parses");
        assert_eq!(config, Config::default());
        assert_eq!(config.input, PathBuf::from("Nobel_Prize.csv"));
        assert_eq!(config.output, PathBuf::from("Nobel_Prize.ttl"));
        assert_eq!(config.format, OutputFormat::Turtle);
        assert_eq!(config.on_unmapped, MappingPolicy::Skip);
    }

    #[test]
    fn keys_override_defaults() {
        let config: Config = toml::from_str(
            "input = \"laureates.csv\"\nformat = \"jsonld\"\non_unmapped = \"fail\"\n",
        )
        .expect("config parses");
        assert_eq!(config.input, PathBuf::from("laureates.csv"));
        assert_eq!(config.output, PathBuf::from("Nobel_Prize.ttl"));
        assert_eq!(config.format, OutputFormat::JsonLd);
        assert_eq!(config.on_unmapped, MappingPolicy::Fail);
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(toml::from_str::<Config>("on_unmapped = \"ignore\"").is_err());
    }

    #[test]
    fn rejects_unknown_key() {
        assert!(toml::from_str::<Config>("inptu = \"x.csv\"").is_err());
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = Config::from_toml_file(Path::new("/nonexistent/nobel.toml"))
            .expect_err("missing file");
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
