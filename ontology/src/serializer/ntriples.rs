//! N-Triples serializer.
//!
//! Produces a valid N-Triples document (one triple per line, absolute IRIs).
//! N-Triples is suitable for streaming, bulk loading, and diff-friendly storage.

use crate::graph::Graph;
use crate::serializer::escape_literal;
use crate::term::{encode_iri, Object, Subject};

/// Serializes `graph` to an N-Triples string.
///
/// # Errors
///
/// This function is infallible; it always returns a valid N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(160 * graph.len());

    for t in graph {
        match &t.subject {
            Subject::Iri(s) => push_iri(&mut out, s.as_str()),
            Subject::Blank(b) => {
                out.push_str("_:");
                out.push_str(b.label());
            }
        }
        out.push(' ');
        push_iri(&mut out, t.predicate.as_str());
        out.push(' ');
        match &t.object {
            Object::Iri(o) => push_iri(&mut out, o.as_str()),
            Object::Blank(b) => {
                out.push_str("_:");
                out.push_str(b.label());
            }
            Object::Literal(lit) => {
                out.push('"');
                out.push_str(&escape_literal(lit.lexical()));
                out.push('"');
                if let Some(datatype) = lit.datatype() {
                    out.push_str("^^");
                    push_iri(&mut out, datatype.as_str());
                } else if let Some(tag) = lit.language() {
                    out.push('@');
                    out.push_str(tag);
                }
            }
        }
        out.push_str(" .\n");
    }

    out
}

fn push_iri(out: &mut String, iri: &str) {
    out.push('<');
    out.push_str(&encode_iri(iri));
    out.push('>');
}
