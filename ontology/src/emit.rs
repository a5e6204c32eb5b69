//! Turns the typed [`Ontology`] into triples.
//!
//! [`schema`] is the only entry point. It binds every namespace prefix and
//! adds the ontology header, the external declarations, the classes with
//! their restrictions, the properties, and the prize category individuals.
//! Given the same graph state it always produces the same triples.

use crate::graph::Graph;
use crate::model::iris::*;
use crate::model::{Cardinality, Class, ClassKind, Individual, Ontology, Property, PropertyKind};
use crate::term::{Iri, Literal, Subject};

/// Binds the ontology's prefixes on `graph` and adds every schema triple.
pub fn schema(ontology: &Ontology, graph: &mut Graph) {
    for (prefix, namespace) in ontology.bindings() {
        graph.bind(prefix, namespace);
    }

    // Ontology header
    let header = Iri::new(ontology.iri);
    graph.add(header.clone(), iri(RDF_TYPE), iri(OWL_ONTOLOGY));
    graph.add(header, iri(RDFS_COMMENT), Literal::plain(ontology.comment));

    for module in &ontology.namespaces {
        for decl in &module.declarations {
            graph.add(iri(decl.id), iri(RDF_TYPE), iri(decl.type_));
        }
        for class in &module.classes {
            class_triples(class, graph);
        }
        for prop in &module.properties {
            property_triples(prop, graph);
        }
    }

    let categories: Vec<&Individual> = ontology.categories().collect();
    for (position, ind) in categories.iter().enumerate() {
        individual_triples(ind, &categories[..position], graph);
    }
}

fn class_triples(class: &Class, graph: &mut Graph) {
    let id = iri(class.id);
    let type_iri = match class.kind {
        ClassKind::Owl => OWL_CLASS,
        ClassKind::Rdfs => RDFS_CLASS,
    };
    graph.add(id.clone(), iri(RDF_TYPE), iri(type_iri));
    for parent in class.subclass_of {
        graph.add(id.clone(), iri(RDFS_SUBCLASS_OF), iri(parent));
    }

    for restriction in class.restrictions {
        let node = graph.fresh_blank();
        graph.add(id.clone(), iri(RDFS_SUBCLASS_OF), node.clone());
        let node = Subject::Blank(node);
        graph.add(node.clone(), iri(RDF_TYPE), iri(OWL_RESTRICTION));
        graph.add(node.clone(), iri(OWL_ON_PROPERTY), iri(restriction.on_property));
        match restriction.cardinality {
            Cardinality::Exactly(n) if restriction.on_class.is_some() => {
                graph.add(node.clone(), iri(OWL_QUALIFIED_CARDINALITY), count(n));
            }
            Cardinality::Exactly(n) => {
                graph.add(node.clone(), iri(OWL_CARDINALITY), count(n));
            }
            Cardinality::AtLeast(n) => {
                graph.add(node.clone(), iri(OWL_MIN_CARDINALITY), count(n));
            }
            Cardinality::AtMost(n) => {
                graph.add(node.clone(), iri(OWL_MAX_CARDINALITY), count(n));
            }
            Cardinality::Between(min, max) => {
                graph.add(node.clone(), iri(OWL_MIN_CARDINALITY), count(min));
                graph.add(node.clone(), iri(OWL_MAX_CARDINALITY), count(max));
            }
        }
        if let Some(on_class) = restriction.on_class {
            graph.add(node, iri(OWL_ON_CLASS), iri(on_class));
        }
    }

    graph.add(id.clone(), iri(RDFS_LABEL), Literal::lang(class.label, "en"));
    graph.add(id, iri(RDFS_COMMENT), Literal::lang(class.comment, "en"));
}

fn property_triples(prop: &Property, graph: &mut Graph) {
    let id = iri(prop.id);
    let type_iri = match prop.kind {
        PropertyKind::Datatype => OWL_DATATYPE_PROPERTY,
        PropertyKind::Object => OWL_OBJECT_PROPERTY,
    };
    graph.add(id.clone(), iri(RDF_TYPE), iri(type_iri));
    if prop.functional {
        graph.add(id.clone(), iri(RDF_TYPE), iri(OWL_FUNCTIONAL_PROPERTY));
    }
    if prop.inverse_functional {
        graph.add(id.clone(), iri(RDF_TYPE), iri(OWL_INVERSE_FUNCTIONAL_PROPERTY));
    }
    if let Some(parent) = prop.subproperty_of {
        graph.add(id.clone(), iri(RDFS_SUBPROPERTY_OF), iri(parent));
    }
    graph.add(id.clone(), iri(RDFS_DOMAIN), iri(prop.domain));
    graph.add(id.clone(), iri(RDFS_RANGE), iri(prop.range));
    graph.add(id.clone(), iri(RDFS_LABEL), Literal::lang(prop.label, "en"));
    graph.add(id, iri(RDFS_COMMENT), Literal::lang(prop.comment, "en"));
}

fn individual_triples(ind: &Individual, earlier: &[&Individual], graph: &mut Graph) {
    let id = iri(ind.id);
    graph.add(id.clone(), iri(RDF_TYPE), iri(ind.type_));
    graph.add(id.clone(), iri(OWL_SAME_AS), iri(ind.same_as));
    graph.add(
        id.clone(),
        iri(HAS_PRIZE_NAME),
        Literal::typed(ind.prize_name, XSD_STRING),
    );
    for other in earlier {
        graph.add(id.clone(), iri(OWL_DIFFERENT_FROM), iri(other.id));
    }
}

fn iri(s: &str) -> Iri {
    Iri::new(s)
}

fn count(n: u32) -> Literal {
    Literal::typed(n.to_string(), XSD_NON_NEGATIVE_INTEGER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{Object, Triple};

    fn built() -> Graph {
        let mut graph = Graph::new();
        schema(Ontology::nobel(), &mut graph);
        graph
    }

    #[test]
    fn schema_is_deterministic() {
        let a: Vec<_> = built().iter().cloned().collect();
        let b: Vec<_> = built().iter().cloned().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn fifteen_different_from_pairs() {
        let graph = built();
        let pairs: Vec<_> = graph
            .matching(None, Some(OWL_DIFFERENT_FROM), None)
            .collect();
        assert_eq!(pairs.len(), 15);
    }

    #[test]
    fn different_from_covers_every_unordered_pair_once() {
        let graph = built();
        let ids: Vec<&str> = Ontology::nobel().categories().map(|c| c.id).collect();
        assert_eq!(ids.len(), 6);
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                let forward = Triple::new(iri(a), iri(OWL_DIFFERENT_FROM), iri(b));
                let backward = Triple::new(iri(b), iri(OWL_DIFFERENT_FROM), iri(a));
                assert!(
                    graph.contains(&forward) ^ graph.contains(&backward),
                    "pair {a} / {b} must be asserted exactly once"
                );
            }
        }
    }

    #[test]
    fn person_has_six_restrictions() {
        let graph = built();
        let person = Subject::Iri(iri(PERSON));
        let blanks = graph
            .objects(&person, RDFS_SUBCLASS_OF)
            .filter(|o| matches!(o, Object::Blank(_)))
            .count();
        assert_eq!(blanks, 6);
    }

    #[test]
    fn prize_share_restriction_has_both_bounds() {
        let graph = built();
        let on_prize_share = Object::Iri(iri(PRIZE_SHARE));
        let node = graph
            .matching(None, Some(OWL_ON_PROPERTY), Some(&on_prize_share))
            .map(|t| t.subject.clone())
            .next()
            .expect("prizeShare restriction");
        let min: Vec<_> = graph.objects(&node, OWL_MIN_CARDINALITY).collect();
        let max: Vec<_> = graph.objects(&node, OWL_MAX_CARDINALITY).collect();
        assert_eq!(min, vec![&Object::Literal(count(1))]);
        assert_eq!(max, vec![&Object::Literal(count(3))]);
    }

    #[test]
    fn birth_country_restriction_is_qualified() {
        let graph = built();
        let on_birth_country = Object::Iri(iri(BIRTH_COUNTRY));
        let node = graph
            .matching(None, Some(OWL_ON_PROPERTY), Some(&on_birth_country))
            .map(|t| t.subject.clone())
            .next()
            .expect("birthCountry restriction");
        assert_eq!(graph.objects(&node, OWL_QUALIFIED_CARDINALITY).count(), 1);
        assert_eq!(graph.objects(&node, OWL_CARDINALITY).count(), 0);
        let on_class: Vec<_> = graph.objects(&node, OWL_ON_CLASS).collect();
        assert_eq!(on_class, vec![&Object::Iri(iri(DBO_COUNTRY))]);
    }

    #[test]
    fn nobel_prize_is_an_rdfs_class() {
        let graph = built();
        assert!(graph.contains(&Triple::new(
            iri(NOBEL_PRIZE),
            iri(RDF_TYPE),
            iri(RDFS_CLASS)
        )));
        assert!(!graph.contains(&Triple::new(
            iri(NOBEL_PRIZE),
            iri(RDF_TYPE),
            iri(OWL_CLASS)
        )));
    }

    #[test]
    fn default_prefix_is_bound() {
        let graph = built();
        assert!(graph.prefixes().any(|(p, ns)| p.is_empty() && ns == NS_RESOURCE));
    }
}
