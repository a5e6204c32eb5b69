//! Turtle 1.1 serializer.
//!
//! Produces one `@prefix` line per binding, then one block per subject with
//! predicate lists (`;`) and object lists (`,`). IRIs are abbreviated with the
//! graph's bindings where the local part is safe, and written as `<...>`
//! otherwise.

use crate::graph::Graph;
use crate::model::iris::RDF_TYPE;
use crate::serializer::{compact, escape_literal};
use crate::term::{Iri, Literal, Object, Subject};

/// Serializes `graph` to a Turtle string.
///
/// # Errors
///
/// This function is infallible; it always returns a valid Turtle string.
#[must_use]
pub fn to_turtle(graph: &Graph) -> String {
    let mut out = String::with_capacity(64 * graph.len() + 512);

    // Prefix declarations
    for (prefix, ns) in graph.prefixes() {
        out.push_str(&format!("@prefix {}: <{}> .\n", prefix, crate::term::encode_iri(ns)));
    }
    out.push('\n');

    let mut current: Option<(&Subject, &Iri)> = None;
    for triple in graph {
        match current {
            Some((subject, predicate)) if *subject == triple.subject => {
                if *predicate == triple.predicate {
                    out.push_str(", ");
                } else {
                    out.push_str(" ;\n    ");
                    out.push_str(&predicate_to_turtle(graph, &triple.predicate));
                    out.push(' ');
                }
            }
            Some(_) => {
                out.push_str(" .\n\n");
                start_block(graph, &mut out, &triple.subject, &triple.predicate);
            }
            None => start_block(graph, &mut out, &triple.subject, &triple.predicate),
        }
        out.push_str(&object_to_turtle(graph, &triple.object));
        current = Some((&triple.subject, &triple.predicate));
    }
    if current.is_some() {
        out.push_str(" .\n");
    }

    out
}

fn start_block(graph: &Graph, out: &mut String, subject: &Subject, predicate: &Iri) {
    out.push_str(&subject_to_turtle(graph, subject));
    out.push(' ');
    out.push_str(&predicate_to_turtle(graph, predicate));
    out.push(' ');
}

fn subject_to_turtle(graph: &Graph, subject: &Subject) -> String {
    match subject {
        Subject::Iri(iri) => iri_to_turtle(graph, iri.as_str()),
        Subject::Blank(node) => format!("_:{}", node.label()),
    }
}

fn predicate_to_turtle(graph: &Graph, predicate: &Iri) -> String {
    if predicate.as_str() == RDF_TYPE {
        "a".to_owned()
    } else {
        iri_to_turtle(graph, predicate.as_str())
    }
}

fn object_to_turtle(graph: &Graph, object: &Object) -> String {
    match object {
        Object::Iri(iri) => iri_to_turtle(graph, iri.as_str()),
        Object::Blank(node) => format!("_:{}", node.label()),
        Object::Literal(lit) => literal_to_turtle(graph, lit),
    }
}

fn literal_to_turtle(graph: &Graph, lit: &Literal) -> String {
    let quoted = format!("\"{}\"", escape_literal(lit.lexical()));
    if let Some(datatype) = lit.datatype() {
        format!("{}^^{}", quoted, iri_to_turtle(graph, datatype.as_str()))
    } else if let Some(tag) = lit.language() {
        format!("{}@{}", quoted, tag)
    } else {
        quoted
    }
}

fn iri_to_turtle(graph: &Graph, iri: &str) -> String {
    match compact(graph, iri, true) {
        Some((prefix, local)) => format!("{}:{}", prefix, local),
        None => format!("<{}>", crate::term::encode_iri(iri)),
    }
}
