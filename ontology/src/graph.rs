//! In-memory triple store.
//!
//! A [`Graph`] is an unordered set of triples plus a list of prefix
//! bindings. Bindings only affect how serializers abbreviate IRIs; they never
//! change which triples exist. Iteration order is the `Ord` order of
//! [`Triple`], which groups triples by subject and keeps output stable.

use std::collections::BTreeSet;

use crate::term::{BlankNode, Iri, Object, Subject, Triple};

/// A set of triples with prefix bindings.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: BTreeSet<Triple>,
    prefixes: Vec<(String, String)>,
    next_blank: usize,
}

impl Graph {
    /// Creates an empty graph with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple. Returns `false` if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Adds a triple built from its three positions.
    pub fn add(
        &mut self,
        subject: impl Into<Subject>,
        predicate: Iri,
        object: impl Into<Object>,
    ) -> bool {
        self.insert(Triple::new(subject, predicate, object))
    }

    /// Returns true if the graph holds `triple`.
    #[must_use]
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates over all triples in subject order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Iterates over the triples matching every given position.
    pub fn matching<'a>(
        &'a self,
        subject: Option<&'a Subject>,
        predicate: Option<&'a str>,
        object: Option<&'a Object>,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples.iter().filter(move |t| {
            subject.map_or(true, |s| &t.subject == s)
                && predicate.map_or(true, |p| t.predicate.as_str() == p)
                && object.map_or(true, |o| &t.object == o)
        })
    }

    /// Iterates over the objects of `subject` through `predicate`.
    pub fn objects<'a>(
        &'a self,
        subject: &'a Subject,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Object> + 'a {
        self.matching(Some(subject), Some(predicate), None)
            .map(|t| &t.object)
    }

    /// Iterates over the distinct subjects that have `rdf:type class`.
    pub fn instances_of<'a>(&'a self, class: &str) -> impl Iterator<Item = &'a Subject> + 'a {
        let class = Object::Iri(Iri::new(class));
        let subjects: BTreeSet<&Subject> = self
            .triples
            .iter()
            .filter(|t| t.predicate.as_str() == crate::model::iris::RDF_TYPE && t.object == class)
            .map(|t| &t.subject)
            .collect();
        subjects.into_iter()
    }

    /// Binds `prefix` to `namespace`. The empty prefix is the default
    /// prefix. Rebinding a prefix replaces its namespace.
    pub fn bind(&mut self, prefix: &str, namespace: &str) {
        match self.prefixes.iter_mut().find(|(p, _)| p == prefix) {
            Some(binding) => binding.1 = namespace.to_owned(),
            None => self.prefixes.push((prefix.to_owned(), namespace.to_owned())),
        }
    }

    /// Iterates over the bindings in the order they were first made.
    pub fn prefixes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, ns)| (p.as_str(), ns.as_str()))
    }

    /// Allocates a blank node label unique within this graph.
    pub fn fresh_blank(&mut self) -> BlankNode {
        let node = BlankNode::new(format!("r{}", self.next_blank));
        self.next_blank += 1;
        node
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::collections::btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::iris::{NS_RESOURCE, RDF_TYPE};
    use crate::term::Literal;

    fn person() -> Iri {
        Iri::in_namespace(NS_RESOURCE, "Marie_Curie")
    }

    #[test]
    fn duplicate_triples_collapse() {
        let mut graph = Graph::new();
        assert!(graph.add(person(), Iri::new(RDF_TYPE), Iri::new("urn:x:Person")));
        assert!(!graph.add(person(), Iri::new(RDF_TYPE), Iri::new("urn:x:Person")));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn bindings_do_not_add_triples() {
        let mut graph = Graph::new();
        graph.bind("", NS_RESOURCE);
        graph.bind("mySemantics", NS_RESOURCE);
        assert!(graph.is_empty());
        assert_eq!(graph.prefixes().count(), 2);
    }

    #[test]
    fn rebinding_replaces_namespace() {
        let mut graph = Graph::new();
        graph.bind("ex", "urn:a:");
        graph.bind("ex", "urn:b:");
        assert_eq!(graph.prefixes().collect::<Vec<_>>(), vec![("ex", "urn:b:")]);
    }

    #[test]
    fn fresh_blanks_are_distinct() {
        let mut graph = Graph::new();
        let a = graph.fresh_blank();
        let b = graph.fresh_blank();
        assert_ne!(a, b);
    }

    #[test]
    fn objects_filters_by_subject_and_predicate() {
        let mut graph = Graph::new();
        let subject = Subject::Iri(person());
        graph.add(person(), Iri::new("urn:x:name"), Literal::plain("Marie"));
        graph.add(person(), Iri::new("urn:x:name"), Literal::plain("Maria"));
        graph.add(person(), Iri::new("urn:x:other"), Literal::plain("ignored"));
        assert_eq!(graph.objects(&subject, "urn:x:name").count(), 2);
    }

    #[test]
    fn instances_of_deduplicates_subjects() {
        let mut graph = Graph::new();
        graph.add(person(), Iri::new(RDF_TYPE), Iri::new("urn:x:Person"));
        graph.add(person(), Iri::new("urn:x:name"), Literal::plain("Marie"));
        assert_eq!(graph.instances_of("urn:x:Person").count(), 1);
        assert_eq!(graph.instances_of("urn:x:Prize").count(), 0);
    }
}
