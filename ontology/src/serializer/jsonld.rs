//! JSON-LD 1.1 serializer.
//!
//! Produces a single flattened document: an `@context` holding every named
//! prefix binding and an `@graph` array with one node object per subject.
//! Every property value is an array, so each triple maps to exactly one
//! array entry (`rdf:type` triples with IRI objects become `@type` entries).

use serde_json::{json, Map, Value};

use crate::graph::Graph;
use crate::model::iris::RDF_TYPE;
use crate::serializer::compact;
use crate::term::{encode_iri, Object, Subject};

/// Serializes `graph` to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
///
/// # Errors
///
/// This function is infallible; it always returns a valid JSON-LD `Value`.
#[must_use]
pub fn to_json_ld(graph: &Graph) -> Value {
    json!({
        "@context": build_context(graph),
        "@graph": build_graph(graph)
    })
}

fn build_context(graph: &Graph) -> Value {
    let mut ctx = Map::new();
    // JSON-LD has no default prefix for node identifiers.
    for (prefix, ns) in graph.prefixes().filter(|(p, _)| !p.is_empty()) {
        ctx.insert(prefix.to_owned(), json!(ns));
    }
    Value::Object(ctx)
}

fn build_graph(graph: &Graph) -> Value {
    let mut nodes: Vec<(&Subject, Map<String, Value>)> = Vec::new();

    for triple in graph {
        if nodes.last().map_or(true, |(s, _)| *s != &triple.subject) {
            let mut node = Map::new();
            node.insert("@id".to_owned(), json!(subject_id(graph, &triple.subject)));
            nodes.push((&triple.subject, node));
        }
        let Some((_, node)) = nodes.last_mut() else {
            continue;
        };

        let (key, value) = match &triple.object {
            Object::Iri(iri) if triple.predicate.as_str() == RDF_TYPE => {
                ("@type".to_owned(), json!(shorten(graph, iri.as_str())))
            }
            object => (
                shorten(graph, triple.predicate.as_str()),
                object_to_json(graph, object),
            ),
        };
        push_value(node, key, value);
    }

    Value::Array(nodes.into_iter().map(|(_, node)| Value::Object(node)).collect())
}

fn push_value(node: &mut Map<String, Value>, key: String, value: Value) {
    match node.get_mut(&key) {
        Some(Value::Array(values)) => values.push(value),
        _ => {
            node.insert(key, Value::Array(vec![value]));
        }
    }
}

fn subject_id(graph: &Graph, subject: &Subject) -> String {
    match subject {
        Subject::Iri(iri) => shorten(graph, iri.as_str()),
        Subject::Blank(node) => blank_id(node.label()),
    }
}

fn blank_id(label: &str) -> String {
    format!("_:{}", encode_iri(label))
}

fn object_to_json(graph: &Graph, object: &Object) -> Value {
    match object {
        Object::Iri(iri) => json!({ "@id": shorten(graph, iri.as_str()) }),
        Object::Blank(node) => json!({ "@id": blank_id(node.label()) }),
        Object::Literal(lit) => {
            if let Some(datatype) = lit.datatype() {
                json!({ "@value": lit.lexical(), "@type": shorten(graph, datatype.as_str()) })
            } else if let Some(tag) = lit.language() {
                json!({ "@value": lit.lexical(), "@language": tag })
            } else {
                json!({ "@value": lit.lexical() })
            }
        }
    }
}

/// Shortens a full IRI to a compact IRI using the graph's named prefixes.
/// IRIs that cannot be shortened are percent-encoded like in Turtle.
fn shorten(graph: &Graph, iri: &str) -> String {
    match compact(graph, iri, false) {
        Some((prefix, local)) => format!("{prefix}:{local}"),
        None => encode_iri(iri).into_owned(),
    }
}
