//! RDF artifact validator.
//!
//! Re-parses the written output file and checks that it states exactly the
//! triples of the in-memory graph:
//! - Turtle and N-Triples are parsed with `sophia_turtle`
//! - JSON-LD is parsed with `serde_json`; every `@type` entry and every
//!   property array entry counts as one triple, and every `@id` and `@type`
//!   must be a compact IRI or a percent-encoded absolute IRI

use std::path::Path;

use anyhow::{Context, Result};
use nobel_ontology::{Graph, OutputFormat};
use serde_json::Value;
use sophia_api::source::TripleSource;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "rdf";

/// Validates the artifact at `path`, serialized as `format`, against `graph`.
///
/// # Errors
///
/// Returns an error if the artifact cannot be read. Parse errors are reported
/// as failures.
pub fn validate(graph: &Graph, path: &Path, format: OutputFormat) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if !path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{} not found", path.display()),
        ));
        return Ok(report);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let parsed = match format {
        OutputFormat::Turtle => count_turtle(&content),
        OutputFormat::NTriples => count_ntriples(&content),
        OutputFormat::JsonLd => count_json_ld(&content),
    };

    match parsed {
        Ok(count) if count == graph.len() => report.push(TestResult::pass(
            VALIDATOR,
            format!(
                "{} parses as {format} with {count} triples",
                path.display()
            ),
        )),
        Ok(count) => report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "{} parses as {format} with {count} triples, expected {}",
                path.display(),
                graph.len()
            ),
        )),
        Err(error) => report.push(
            TestResult::fail(
                VALIDATOR,
                format!("{} is not valid {format}", path.display()),
            )
            .with_details(vec![error]),
        ),
    }

    Ok(report)
}

fn count_turtle(content: &str) -> Result<usize, String> {
    let mut count = 0usize;
    sophia_turtle::parser::turtle::parse_str(content)
        .for_each_triple(|_| count += 1)
        .map_err(|e| e.to_string())?;
    Ok(count)
}

fn count_ntriples(content: &str) -> Result<usize, String> {
    let mut count = 0usize;
    sophia_turtle::parser::nt::parse_str(content)
        .for_each_triple(|_| count += 1)
        .map_err(|e| e.to_string())?;
    Ok(count)
}

fn count_json_ld(content: &str) -> Result<usize, String> {
    let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    if !value["@context"].is_object() {
        return Err("missing @context object".to_owned());
    }
    let Some(nodes) = value["@graph"].as_array() else {
        return Err("missing @graph array".to_owned());
    };

    let mut count = 0usize;
    for (i, node) in nodes.iter().enumerate() {
        let Some(node) = node.as_object() else {
            return Err(format!("@graph entry {i} is not an object"));
        };
        let Some(id) = node.get("@id") else {
            return Err(format!("@graph entry {i} has no @id"));
        };
        check_reference(i, id)?;
        for (key, values) in node.iter().filter(|(key, _)| key.as_str() != "@id") {
            let Some(values) = values.as_array() else {
                return Err(format!("@graph entry {i}: `{key}` is not an array"));
            };
            for value in values {
                if key == "@type" {
                    check_reference(i, value)?;
                } else if let Some(object) = value.as_object() {
                    for key in ["@id", "@type"] {
                        if let Some(reference) = object.get(key) {
                            check_reference(i, reference)?;
                        }
                    }
                }
            }
            count += values.len();
        }
    }
    Ok(count)
}

/// An IRI or blank node reference must be a string free of characters that
/// IRIs cannot carry unescaped.
fn check_reference(i: usize, reference: &Value) -> Result<(), String> {
    let Some(text) = reference.as_str() else {
        return Err(format!("@graph entry {i}: reference {reference} is not a string"));
    };
    if text.chars().any(|c| c <= ' ' || "<>\"{}|^`\\".contains(c)) {
        return Err(format!("@graph entry {i}: `{text}` is not a valid IRI"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nobel_ontology::serializer::write_graph;
    use nobel_ingest::{LaureateRecord, RowMapper};
    use nobel_ontology::{emit, Iri, Ontology};

    fn schema() -> Graph {
        let mut graph = Graph::new();
        emit::schema(Ontology::nobel(), &mut graph);
        graph
    }

    #[test]
    fn every_written_format_round_trips() {
        let graph = schema();
        let dir = tempfile::tempdir().expect("temp dir");
        for format in [OutputFormat::Turtle, OutputFormat::NTriples, OutputFormat::JsonLd] {
            let path = dir.path().join(format!("schema.{}", format.extension()));
            write_graph(&graph, format, &path).expect("written");
            let report = validate(&graph, &path, format).expect("readable");
            assert!(report.all_passed(), "{format}: {:?}", report.results);
        }
    }

    #[test]
    fn laureate_facts_round_trip_in_every_format() {
        let mut graph = schema();
        let record = LaureateRecord {
            full_name: "Max Born".into(),
            category: "physics".into(),
            birth_country: "Prussia (Poland)".into(),
            gender: "Male".into(),
            birth_city: "Breslau".into(),
            birth_city_dbr: "Breslau".into(),
            full_name_dbr: "Max_Born".into(),
            year: "1954".into(),
            laureate_id: "52".into(),
            prize_share: "2".into(),
            ..LaureateRecord::default()
        };
        RowMapper::new(Ontology::nobel())
            .map_into(&record, &mut graph)
            .expect("row maps");

        let dir = tempfile::tempdir().expect("temp dir");
        for format in [OutputFormat::Turtle, OutputFormat::NTriples, OutputFormat::JsonLd] {
            let path = dir.path().join(format!("laureates.{}", format.extension()));
            write_graph(&graph, format, &path).expect("written");
            let report = validate(&graph, &path, format).expect("readable");
            assert!(report.all_passed(), "{format}: {:?}", report.results);
        }
    }

    #[test]
    fn raw_space_in_json_ld_id_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("broken.jsonld");
        let doc = serde_json::json!({
            "@context": { "dbr": "http://dbpedia.org/resource/" },
            "@graph": [{
                "@id": "dbr:Max_Born",
                "http://www.mysemantics.com/ontology/birthCountry": [
                    { "@id": "http://dbpedia.org/resource/Prussia (Poland)" }
                ]
            }]
        });
        std::fs::write(&path, doc.to_string()).expect("written");

        let mut graph = Graph::new();
        graph.add(
            Iri::new("http://dbpedia.org/resource/Max_Born"),
            Iri::new("http://www.mysemantics.com/ontology/birthCountry"),
            Iri::new("http://dbpedia.org/resource/Prussia (Poland)"),
        );
        let report = validate(&graph, &path, OutputFormat::JsonLd).expect("readable");
        let failure = &report.results[0];
        assert!(failure.is_failure());
        assert!(failure.details[0].contains("Prussia (Poland)"));
    }

    #[test]
    fn count_mismatch_fails() {
        let graph = schema();
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("schema.nt");
        write_graph(&graph, OutputFormat::NTriples, &path).expect("written");

        let report = validate(&Graph::new(), &path, OutputFormat::NTriples).expect("readable");
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn malformed_turtle_fails_with_parser_message() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("broken.ttl");
        std::fs::write(&path, "@prefix : <http://example.org/> .\n:a :b").expect("written");

        let report = validate(&schema(), &path, OutputFormat::Turtle).expect("readable");
        let failure = &report.results[0];
        assert!(failure.is_failure());
        assert_eq!(failure.details.len(), 1);
    }

    #[test]
    fn missing_artifact_fails() {
        let report = validate(&schema(), Path::new("/nonexistent/out.ttl"), OutputFormat::Turtle)
            .expect("missing file is a report entry");
        assert_eq!(report.failure_count(), 1);
    }
}
