//! Serializers for the triple store.
//!
//! Three serialization formats are supported:
//! - **Turtle** ([`turtle`]): the default, abbreviated with the graph's prefix bindings
//! - **N-Triples** ([`ntriples`]): one triple per line, for bulk loading and diffs
//! - **JSON-LD** ([`jsonld`]): a flattened `@graph` with a prefix `@context`

pub mod jsonld;
pub mod ntriples;
pub mod turtle;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::Graph;

/// Output syntax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Turtle 1.1.
    #[default]
    Turtle,
    /// N-Triples.
    NTriples,
    /// JSON-LD 1.1.
    JsonLd,
}

impl OutputFormat {
    /// Conventional file extension, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Turtle => "ttl",
            OutputFormat::NTriples => "nt",
            OutputFormat::JsonLd => "jsonld",
        }
    }

    /// Renders `graph` in this format.
    ///
    /// # Errors
    ///
    /// Returns an error only if JSON-LD pretty-printing fails.
    pub fn render(self, graph: &Graph) -> Result<String, serde_json::Error> {
        match self {
            OutputFormat::Turtle => Ok(turtle::to_turtle(graph)),
            OutputFormat::NTriples => Ok(ntriples::to_ntriples(graph)),
            OutputFormat::JsonLd => serde_json::to_string_pretty(&jsonld::to_json_ld(graph)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Turtle => "turtle",
            OutputFormat::NTriples => "ntriples",
            OutputFormat::JsonLd => "jsonld",
        })
    }
}

/// An output format name that is not `turtle`, `ntriples`, or `jsonld`.
#[derive(Debug, Error)]
#[error("unknown output format `{0}` (expected turtle, ntriples, or jsonld)")]
pub struct UnknownFormat(String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(OutputFormat::Turtle),
            "ntriples" | "nt" => Ok(OutputFormat::NTriples),
            "jsonld" | "json-ld" => Ok(OutputFormat::JsonLd),
            _ => Err(UnknownFormat(s.to_owned())),
        }
    }
}

/// Errors raised while writing a serialized graph.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The destination could not be created or written.
    #[error("failed to write {}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },
    /// JSON-LD rendering failed.
    #[error("failed to render JSON-LD")]
    Json(#[from] serde_json::Error),
}

/// Renders `graph` in `format` and writes it to `path`, replacing any
/// existing file. The file handle is released before this returns, on
/// success and on failure.
///
/// # Errors
///
/// Returns [`WriteError::Io`] if the destination is not writable.
pub fn write_graph(graph: &Graph, format: OutputFormat, path: &Path) -> Result<(), WriteError> {
    let rendered = format.render(graph)?;
    std::fs::write(path, rendered).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Escapes a literal's lexical form for a double-quoted Turtle or
/// N-Triples string.
pub(crate) fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Returns true if `local` can follow `prefix:` without escaping.
///
/// This is a conservative subset of Turtle's `PN_LOCAL`: ASCII letters,
/// digits, `_` and `-`, not starting with `-`. The empty string is allowed.
pub(crate) fn is_simple_local(local: &str) -> bool {
    !local.starts_with('-')
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Abbreviates `iri` with the best matching binding, if any.
///
/// The longest matching namespace wins; between bindings of the same
/// namespace the default (empty) prefix wins. With `allow_default` unset the
/// default prefix is skipped, for syntaxes that cannot express it.
pub(crate) fn compact<'g>(
    graph: &'g Graph,
    iri: &str,
    allow_default: bool,
) -> Option<(&'g str, String)> {
    graph
        .prefixes()
        .filter(|(prefix, _)| allow_default || !prefix.is_empty())
        .filter_map(|(prefix, ns)| {
            let local = iri.strip_prefix(ns)?;
            is_simple_local(local).then_some((prefix, ns.len(), local))
        })
        .max_by_key(|(prefix, ns_len, _)| (*ns_len, prefix.is_empty()))
        .map(|(prefix, _, local)| (prefix, local.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::iris::NS_RESOURCE;

    #[test]
    fn parses_format_names() {
        assert_eq!("turtle".parse::<OutputFormat>().ok(), Some(OutputFormat::Turtle));
        assert_eq!("NT".parse::<OutputFormat>().ok(), Some(OutputFormat::NTriples));
        assert_eq!("json-ld".parse::<OutputFormat>().ok(), Some(OutputFormat::JsonLd));
        assert!("rdfxml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn escapes_quotes_and_newlines() {
        assert_eq!(escape_literal("a \"b\"\nc\\"), "a \\\"b\\\"\\nc\\\\");
    }

    #[test]
    fn compact_prefers_default_prefix() {
        let mut graph = Graph::new();
        graph.bind("mySemantics", NS_RESOURCE);
        graph.bind("", NS_RESOURCE);
        let iri = format!("{NS_RESOURCE}Marie_Curie");
        assert_eq!(compact(&graph, &iri, true), Some(("", "Marie_Curie".to_owned())));
        assert_eq!(
            compact(&graph, &iri, false),
            Some(("mySemantics", "Marie_Curie".to_owned()))
        );
    }

    #[test]
    fn compact_rejects_unsafe_locals() {
        let mut graph = Graph::new();
        graph.bind("dbr", "http://dbpedia.org/resource/");
        assert_eq!(
            compact(&graph, "http://dbpedia.org/resource/Prussia (Poland)", true),
            None
        );
        assert_eq!(
            compact(&graph, "http://dbpedia.org/resource/Ludwig_von_Mises.Institute", true),
            None
        );
    }

    #[test]
    fn unwritable_destination_is_an_io_error() {
        let graph = Graph::new();
        let path = Path::new("/nonexistent-directory/for/output.ttl");
        let err = write_graph(&graph, OutputFormat::Turtle, path).unwrap_err();
        assert!(matches!(err, WriteError::Io { .. }));
    }
}
