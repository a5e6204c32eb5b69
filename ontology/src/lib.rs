//! Nobel laureate ontology encoded as typed Rust data.
//!
//! The `nobel-ontology` crate provides the complete laureate ontology
//! (2 classes, 11 properties, 6 cardinality restrictions, and 6 prize
//! category individuals) as static Rust data, an in-memory triple store,
//! and serializers that produce Turtle, N-Triples, and JSON-LD output.
//!
//! # Entry Point
//!
//! ```
//! let ontology = nobel_ontology::Ontology::nobel();
//! assert_eq!(ontology.individual_count(), 6);
//! ```
//!
//! # Building and Serializing
//!
//! ```
//! use nobel_ontology::{emit, serializer::turtle, Graph, Ontology};
//!
//! let mut graph = Graph::new();
//! emit::schema(Ontology::nobel(), &mut graph);
//! let turtle = turtle::to_turtle(&graph);
//! assert!(turtle.contains("owl:differentFrom"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod emit;
pub mod graph;
pub mod model;
pub mod namespaces;
pub mod serializer;
pub mod term;

pub use graph::Graph;
pub use model::{
    Cardinality, Class, ClassKind, Declaration, Individual, Namespace, NamespaceModule, Ontology,
    Property, PropertyKind, Restriction,
};
pub use serializer::OutputFormat;
pub use term::{resource_from_name, BlankNode, Iri, Literal, NameError, Object, Subject, Triple};

impl Ontology {
    /// Returns the complete Nobel laureate ontology.
    ///
    /// Assembly order is the declaration order of the namespaces:
    /// `schema → dbo → myOnto → mySemantics → dbr`. The prize category
    /// individuals live in `mySemantics`, which is also the default prefix.
    #[must_use]
    pub fn nobel() -> &'static Ontology {
        static ONTOLOGY: std::sync::OnceLock<Ontology> = std::sync::OnceLock::new();
        ONTOLOGY.get_or_init(|| Ontology {
            iri: model::iris::NS_ONTO,
            comment: "An ontology for Semantic Web course final project",
            default_namespace: model::iris::NS_RESOURCE,
            namespaces: vec![
                namespaces::sdo::module(),
                namespaces::dbo::module(),
                namespaces::onto::module(),
                namespaces::resource::module(),
                namespaces::dbr::module(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_count() {
        assert_eq!(Ontology::nobel().class_count(), 2);
    }

    #[test]
    fn property_count() {
        // 4 object properties + 7 datatype properties.
        assert_eq!(Ontology::nobel().property_count(), 11);
    }

    #[test]
    fn restriction_count() {
        assert_eq!(Ontology::nobel().restriction_count(), 6);
    }

    #[test]
    fn individual_count() {
        assert_eq!(Ontology::nobel().individual_count(), 6);
    }

    #[test]
    fn five_bound_namespaces_plus_default() {
        let ontology = Ontology::nobel();
        assert_eq!(ontology.namespaces.len(), 5);
        let bindings: Vec<_> = ontology.bindings().collect();
        assert!(bindings.contains(&("", model::iris::NS_RESOURCE)));
        assert!(bindings.contains(&("mySemantics", model::iris::NS_RESOURCE)));
    }

    #[test]
    fn category_lookup_is_exact() {
        let ontology = Ontology::nobel();
        for key in ["chemistry", "economics", "medicine", "literature", "peace", "physics"] {
            let found = ontology.find_category(key).map(|c| c.key);
            assert_eq!(found, Some(key));
        }
        assert!(ontology.find_category("Physics").is_none());
        assert!(ontology.find_category("physics ").is_none());
    }

    #[test]
    fn all_property_iris_unique() {
        let mut iris = std::collections::HashSet::new();
        for module in &Ontology::nobel().namespaces {
            for prop in &module.properties {
                assert!(iris.insert(prop.id), "Duplicate property IRI: {}", prop.id);
            }
        }
    }

    #[test]
    fn restrictions_target_declared_properties() {
        let ontology = Ontology::nobel();
        for module in &ontology.namespaces {
            for class in &module.classes {
                for restriction in class.restrictions {
                    assert!(
                        ontology.find_property(restriction.on_property).is_some(),
                        "Restriction on unknown property {}",
                        restriction.on_property
                    );
                }
            }
        }
    }
}
