//! RDF terms and triples.
//!
//! IRIs, blank nodes, and literals are distinct types. [`Subject`] admits
//! only IRIs and blank nodes; [`Object`] additionally admits literals.

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

use crate::model::iris::NS_RESOURCE;

/// An absolute IRI, stored verbatim.
///
/// No escaping is applied at construction; serializers percent-encode the
/// characters that may not appear inside an IRI reference.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iri(String);

impl Iri {
    /// Wraps a full IRI.
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// Concatenates a namespace IRI and a local name.
    #[must_use]
    pub fn in_namespace(namespace: &str, local: &str) -> Self {
        let mut iri = String::with_capacity(namespace.len() + local.len());
        iri.push_str(namespace);
        iri.push_str(local);
        Self(iri)
    }

    /// Returns the IRI text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A blank node, identified by a label that is only meaningful within the
/// graph (and serialization) that allocated it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlankNode(String);

impl BlankNode {
    /// Wraps a blank node label (without the `_:` prefix).
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.0
    }
}

/// Whether a literal is plain, typed, or language-tagged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Annotation {
    Plain,
    Typed(Iri),
    Lang(String),
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    lexical: String,
    annotation: Annotation,
}

impl Literal {
    /// A literal with neither datatype nor language tag.
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            annotation: Annotation::Plain,
        }
    }

    /// A literal typed with the given datatype IRI.
    pub fn typed(lexical: impl Into<String>, datatype: &str) -> Self {
        Self {
            lexical: lexical.into(),
            annotation: Annotation::Typed(Iri::new(datatype)),
        }
    }

    /// A language-tagged literal.
    pub fn lang(lexical: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            annotation: Annotation::Lang(tag.into()),
        }
    }

    /// Returns the lexical form.
    #[must_use]
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// Returns the datatype IRI, if the literal is typed.
    #[must_use]
    pub fn datatype(&self) -> Option<&Iri> {
        match &self.annotation {
            Annotation::Typed(dt) => Some(dt),
            _ => None,
        }
    }

    /// Returns the language tag, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        match &self.annotation {
            Annotation::Lang(tag) => Some(tag),
            _ => None,
        }
    }
}

/// The subject position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subject {
    /// A named resource.
    Iri(Iri),
    /// An anonymous resource.
    Blank(BlankNode),
}

/// The object position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Object {
    /// A named resource.
    Iri(Iri),
    /// An anonymous resource.
    Blank(BlankNode),
    /// A data value.
    Literal(Literal),
}

impl Object {
    /// Returns the IRI if this object is a named resource.
    #[must_use]
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Object::Iri(iri) => Some(iri),
            _ => None,
        }
    }
}

impl From<Iri> for Subject {
    fn from(iri: Iri) -> Self {
        Subject::Iri(iri)
    }
}

impl From<BlankNode> for Subject {
    fn from(node: BlankNode) -> Self {
        Subject::Blank(node)
    }
}

impl From<Iri> for Object {
    fn from(iri: Iri) -> Self {
        Object::Iri(iri)
    }
}

impl From<BlankNode> for Object {
    fn from(node: BlankNode) -> Self {
        Object::Blank(node)
    }
}

impl From<Literal> for Object {
    fn from(lit: Literal) -> Self {
        Object::Literal(lit)
    }
}

impl From<Subject> for Object {
    fn from(subject: Subject) -> Self {
        match subject {
            Subject::Iri(iri) => Object::Iri(iri),
            Subject::Blank(node) => Object::Blank(node),
        }
    }
}

/// A single statement. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    /// Subject.
    pub subject: Subject,
    /// Predicate.
    pub predicate: Iri,
    /// Object.
    pub object: Object,
}

impl Triple {
    /// Builds a triple from anything convertible into its positions.
    pub fn new(subject: impl Into<Subject>, predicate: Iri, object: impl Into<Object>) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }
}

/// Errors raised when minting an instance resource from a name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The name was empty, which would collapse onto the namespace IRI itself.
    #[error("resource name is empty")]
    Empty,
}

/// Mints a resource in the instance namespace from a human-readable name.
///
/// Spaces become underscores (`"Marie Curie"` → `Marie_Curie`) and any other
/// character that may not appear in an IRI is percent-encoded.
///
/// # Errors
///
/// Returns [`NameError::Empty`] if `name` is empty.
pub fn resource_from_name(name: &str) -> Result<Iri, NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    let local = name.replace(' ', "_");
    Ok(Iri::in_namespace(NS_RESOURCE, &encode_iri(&local)))
}

/// Percent-encodes every character that Turtle and N-Triples forbid inside
/// `<...>`: controls, space, and `<>"{}|^` plus backtick and backslash.
#[must_use]
pub fn encode_iri(iri: &str) -> Cow<'_, str> {
    if !iri.chars().any(is_iri_forbidden) {
        return Cow::Borrowed(iri);
    }
    let mut out = String::with_capacity(iri.len() + 8);
    let mut buf = [0u8; 4];
    for c in iri.chars() {
        if is_iri_forbidden(c) {
            for byte in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{byte:02X}"));
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

fn is_iri_forbidden(c: char) -> bool {
    c <= '\u{20}' || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_from_name_replaces_spaces() {
        let iri = resource_from_name("Marie Curie").unwrap();
        assert_eq!(
            iri.as_str(),
            "http://www.mysemantics.com/resource/Marie_Curie"
        );
    }

    #[test]
    fn resource_from_name_rejects_empty() {
        assert_eq!(resource_from_name(""), Err(NameError::Empty));
    }

    #[test]
    fn resource_from_name_escapes_forbidden_characters() {
        let iri = resource_from_name("Jean \"Jack\" <X>").unwrap();
        assert_eq!(
            iri.as_str(),
            "http://www.mysemantics.com/resource/Jean_%22Jack%22_%3CX%3E"
        );
    }

    #[test]
    fn encode_iri_borrows_clean_input() {
        assert!(matches!(
            encode_iri("http://dbpedia.org/resource/Poland"),
            Cow::Borrowed(_)
        ));
        assert_eq!(
            encode_iri("http://dbpedia.org/resource/Prussia (Poland)"),
            "http://dbpedia.org/resource/Prussia%20(Poland)"
        );
    }

    #[test]
    fn literal_annotations_are_exclusive() {
        let typed = Literal::typed("1903", crate::model::iris::XSD_GYEAR);
        assert_eq!(typed.datatype().map(Iri::as_str), Some(crate::model::iris::XSD_GYEAR));
        assert_eq!(typed.language(), None);

        let tagged = Literal::lang("Person", "en");
        assert_eq!(tagged.language(), Some("en"));
        assert!(tagged.datatype().is_none());
    }

    #[test]
    fn blank_and_iri_subjects_differ() {
        let blank: Subject = BlankNode::new("r0").into();
        let named: Subject = Iri::new("r0").into();
        assert_ne!(blank, named);
    }
}
