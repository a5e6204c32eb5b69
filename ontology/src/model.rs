//! Core ontology model types.
//!
//! These types represent the Nobel laureate vocabulary as typed Rust data.
//! All instances are built as owned `Vec`s of `'static` borrows and turned
//! into triples by [`emit::schema`](crate::emit::schema). The top-level entry
//! point is [`Ontology::nobel()`](crate::Ontology::nobel).

/// A namespace bound to a prefix in every serialization.
#[derive(Debug, Clone)]
pub struct Namespace {
    /// The prefix used in serializations (e.g., `"myOnto"`). The empty string
    /// is the default prefix.
    pub prefix: &'static str,
    /// The full IRI of the namespace (e.g., `"http://www.mysemantics.com/ontology/"`).
    pub iri: &'static str,
}

/// Whether a class is declared as `owl:Class` or `rdfs:Class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    /// `owl:Class`.
    Owl,
    /// `rdfs:Class`.
    Rdfs,
}

/// The number of values a restricted property may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// `owl:cardinality n`, or `owl:qualifiedCardinality n` when the
    /// restriction names a class.
    Exactly(u32),
    /// `owl:minCardinality n`.
    AtLeast(u32),
    /// `owl:maxCardinality n`.
    AtMost(u32),
    /// `owl:minCardinality min` and `owl:maxCardinality max` on one node.
    Between(u32, u32),
}

impl Cardinality {
    /// Returns true if `count` values satisfy this cardinality.
    #[must_use]
    pub fn admits(self, count: usize) -> bool {
        let count = u64::try_from(count).unwrap_or(u64::MAX);
        match self {
            Cardinality::Exactly(n) => count == u64::from(n),
            Cardinality::AtLeast(n) => count >= u64::from(n),
            Cardinality::AtMost(n) => count <= u64::from(n),
            Cardinality::Between(min, max) => (u64::from(min)..=u64::from(max)).contains(&count),
        }
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cardinality::Exactly(n) => write!(f, "exactly {n}"),
            Cardinality::AtLeast(n) => write!(f, "at least {n}"),
            Cardinality::AtMost(n) => write!(f, "at most {n}"),
            Cardinality::Between(min, max) => write!(f, "between {min} and {max}"),
        }
    }
}

/// An anonymous `owl:Restriction` attached to a class through `rdfs:subClassOf`.
#[derive(Debug, Clone)]
pub struct Restriction {
    /// Full IRI of the restricted property (`owl:onProperty`).
    pub on_property: &'static str,
    /// Allowed number of values.
    pub cardinality: Cardinality,
    /// Full IRI of the qualifying class (`owl:onClass`), if any.
    pub on_class: Option<&'static str>,
}

/// A class definition.
#[derive(Debug, Clone)]
pub struct Class {
    /// Full IRI (e.g., `"http://www.mysemantics.com/ontology/Person"`).
    pub id: &'static str,
    /// `owl:Class` or `rdfs:Class`.
    pub kind: ClassKind,
    /// Human-readable label (English).
    pub label: &'static str,
    /// Description (English).
    pub comment: &'static str,
    /// Full IRIs of parent classes (`rdfs:subClassOf`).
    pub subclass_of: &'static [&'static str],
    /// Cardinality restrictions, each emitted as a blank-node superclass.
    pub restrictions: &'static [Restriction],
}

/// Whether a property is a datatype or an object property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `owl:DatatypeProperty`: relates a resource to an XSD literal.
    Datatype,
    /// `owl:ObjectProperty`: relates two resources.
    Object,
}

/// A property definition.
#[derive(Debug, Clone)]
pub struct Property {
    /// Full IRI.
    pub id: &'static str,
    /// Human-readable label (English).
    pub label: &'static str,
    /// Description (English).
    pub comment: &'static str,
    /// Datatype or object property.
    pub kind: PropertyKind,
    /// Whether this is also an `owl:FunctionalProperty`.
    pub functional: bool,
    /// Whether this is also an `owl:InverseFunctionalProperty`.
    pub inverse_functional: bool,
    /// Full IRI of the parent property (`rdfs:subPropertyOf`), if any.
    pub subproperty_of: Option<&'static str>,
    /// Full IRI of the domain class.
    pub domain: &'static str,
    /// Full IRI of the range class or XSD datatype.
    pub range: &'static str,
}

/// A term from an external vocabulary, declared locally with a single `rdf:type`.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Full IRI of the external term.
    pub id: &'static str,
    /// Full IRI of its declared type (e.g., `owl:Class`).
    pub type_: &'static str,
}

/// A named individual standing for one Nobel Prize category.
#[derive(Debug, Clone)]
pub struct Individual {
    /// The category text used in the input data (e.g., `"chemistry"`).
    pub key: &'static str,
    /// Full IRI.
    pub id: &'static str,
    /// Full IRI of the class this individual is an instance of.
    pub type_: &'static str,
    /// Full IRI of the equivalent external resource (`owl:sameAs`).
    pub same_as: &'static str,
    /// Value of `myOnto:hasPrizeName`.
    pub prize_name: &'static str,
}

/// A namespace module: namespace metadata plus the terms it defines.
#[derive(Debug, Clone)]
pub struct NamespaceModule {
    /// Namespace metadata.
    pub namespace: Namespace,
    /// External terms declared in this namespace.
    pub declarations: Vec<Declaration>,
    /// Classes defined in this namespace.
    pub classes: Vec<Class>,
    /// Properties defined in this namespace.
    pub properties: Vec<Property>,
    /// Named individuals declared in this namespace, in declaration order.
    pub individuals: Vec<Individual>,
}

/// The complete Nobel laureate ontology.
#[derive(Debug)]
pub struct Ontology {
    /// IRI of the ontology itself.
    pub iri: &'static str,
    /// `rdfs:comment` of the ontology header.
    pub comment: &'static str,
    /// Namespace IRI bound to the default (empty) prefix.
    pub default_namespace: &'static str,
    /// Namespace modules in declaration order.
    pub namespaces: Vec<NamespaceModule>,
}

impl Ontology {
    /// Looks up a class by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_class(&self, iri: &str) -> Option<&Class> {
        self.namespaces
            .iter()
            .flat_map(|m| m.classes.iter())
            .find(|c| c.id == iri)
    }

    /// Looks up a property by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_property(&self, iri: &str) -> Option<&Property> {
        self.namespaces
            .iter()
            .flat_map(|m| m.properties.iter())
            .find(|p| p.id == iri)
    }

    /// Looks up a prize category individual by its exact, case-sensitive key.
    #[must_use]
    pub fn find_category(&self, key: &str) -> Option<&Individual> {
        self.categories().find(|i| i.key == key)
    }

    /// Iterates over the prize category individuals in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = &Individual> {
        self.namespaces.iter().flat_map(|m| m.individuals.iter())
    }

    /// Iterates over every namespace binding: the standard `rdf`, `rdfs`,
    /// `owl`, and `xsd` prefixes, then each module, then the default prefix.
    pub fn bindings(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        iris::STANDARD_PREFIXES
            .iter()
            .copied()
            .chain(self.namespaces.iter().map(|m| (m.namespace.prefix, m.namespace.iri)))
            .chain(std::iter::once(("", self.default_namespace)))
    }

    /// Returns the total number of classes across all namespaces.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.namespaces.iter().map(|m| m.classes.len()).sum()
    }

    /// Returns the total number of properties across all namespaces.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.namespaces.iter().map(|m| m.properties.len()).sum()
    }

    /// Returns the total number of restrictions across all classes.
    #[must_use]
    pub fn restriction_count(&self) -> usize {
        self.namespaces
            .iter()
            .flat_map(|m| m.classes.iter())
            .map(|c| c.restrictions.len())
            .sum()
    }

    /// Returns the total number of named individuals across all namespaces.
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.namespaces.iter().map(|m| m.individuals.len()).sum()
    }
}

/// Standard IRI constants used across all namespace modules.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// Standard prefixes bound ahead of the ontology's own namespaces.
    pub const STANDARD_PREFIXES: &[(&str, &str)] =
        &[("owl", OWL), ("rdf", RDF), ("rdfs", RDFS), ("xsd", XSD)];

    // Namespace IRIs
    /// Ontology terms namespace.
    pub const NS_ONTO: &str = "http://www.mysemantics.com/ontology/";
    /// Instance data namespace.
    pub const NS_RESOURCE: &str = "http://www.mysemantics.com/resource/";
    /// schema.org vocabulary.
    pub const NS_SDO: &str = "https://schema.org/";
    /// DBpedia resources.
    pub const NS_DBR: &str = "http://dbpedia.org/resource/";
    /// DBpedia ontology.
    pub const NS_DBO: &str = "http://dbpedia.org/ontology/";

    // RDF / RDFS / OWL terms
    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdfs:Class`.
    pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:comment`.
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    /// `rdfs:subClassOf`.
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:subPropertyOf`.
    pub const RDFS_SUBPROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
    /// `rdfs:domain`.
    pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    /// `rdfs:range`.
    pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    /// `owl:Ontology`.
    pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:ObjectProperty`.
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:DatatypeProperty`.
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    /// `owl:FunctionalProperty`.
    pub const OWL_FUNCTIONAL_PROPERTY: &str = "http://www.w3.org/2002/07/owl#FunctionalProperty";
    /// `owl:InverseFunctionalProperty`.
    pub const OWL_INVERSE_FUNCTIONAL_PROPERTY: &str =
        "http://www.w3.org/2002/07/owl#InverseFunctionalProperty";
    /// `owl:Restriction`.
    pub const OWL_RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
    /// `owl:onProperty`.
    pub const OWL_ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
    /// `owl:onClass`.
    pub const OWL_ON_CLASS: &str = "http://www.w3.org/2002/07/owl#onClass";
    /// `owl:cardinality`.
    pub const OWL_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#cardinality";
    /// `owl:qualifiedCardinality`.
    pub const OWL_QUALIFIED_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#qualifiedCardinality";
    /// `owl:minCardinality`.
    pub const OWL_MIN_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#minCardinality";
    /// `owl:maxCardinality`.
    pub const OWL_MAX_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#maxCardinality";
    /// `owl:sameAs`.
    pub const OWL_SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";
    /// `owl:differentFrom`.
    pub const OWL_DIFFERENT_FROM: &str = "http://www.w3.org/2002/07/owl#differentFrom";

    // XSD datatypes
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:nonNegativeInteger`.
    pub const XSD_NON_NEGATIVE_INTEGER: &str =
        "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    /// `xsd:gYear`.
    pub const XSD_GYEAR: &str = "http://www.w3.org/2001/XMLSchema#gYear";
    /// `xsd:date`.
    pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    // Ontology terms
    /// `myOnto:Person`.
    pub const PERSON: &str = "http://www.mysemantics.com/ontology/Person";
    /// `myOnto:NobelPrize`.
    pub const NOBEL_PRIZE: &str = "http://www.mysemantics.com/ontology/NobelPrize";
    /// `myOnto:prizeCategory`.
    pub const PRIZE_CATEGORY: &str = "http://www.mysemantics.com/ontology/prizeCategory";
    /// `myOnto:birthCountry`.
    pub const BIRTH_COUNTRY: &str = "http://www.mysemantics.com/ontology/birthCountry";
    /// `myOnto:organizationName`.
    pub const ORGANIZATION_NAME: &str = "http://www.mysemantics.com/ontology/organizationName";
    /// `myOnto:gender`.
    pub const GENDER: &str = "http://www.mysemantics.com/ontology/gender";
    /// `myOnto:prizeYear`.
    pub const PRIZE_YEAR: &str = "http://www.mysemantics.com/ontology/prizeYear";
    /// `myOnto:laureateID`.
    pub const LAUREATE_ID: &str = "http://www.mysemantics.com/ontology/laureateID";
    /// `myOnto:prizeShare`.
    pub const PRIZE_SHARE: &str = "http://www.mysemantics.com/ontology/prizeShare";
    /// `myOnto:motivation`.
    pub const MOTIVATION: &str = "http://www.mysemantics.com/ontology/motivation";
    /// `myOnto:birthDate`.
    pub const BIRTH_DATE: &str = "http://www.mysemantics.com/ontology/birthDate";
    /// `myOnto:birthCountryCode`.
    pub const BIRTH_COUNTRY_CODE: &str = "http://www.mysemantics.com/ontology/birthCountryCode";
    /// `myOnto:hasPrizeName`.
    pub const HAS_PRIZE_NAME: &str = "http://www.mysemantics.com/ontology/hasPrizeName";

    // External vocabulary terms
    /// `schema:Person`.
    pub const SDO_PERSON: &str = "https://schema.org/Person";
    /// `schema:Organization`.
    pub const SDO_ORGANIZATION: &str = "https://schema.org/Organization";
    /// `schema:GenderType`.
    pub const SDO_GENDER_TYPE: &str = "https://schema.org/GenderType";
    /// `schema:Male`.
    pub const SDO_MALE: &str = "https://schema.org/Male";
    /// `schema:Female`.
    pub const SDO_FEMALE: &str = "https://schema.org/Female";
    /// `schema:birthPlace`.
    pub const SDO_BIRTH_PLACE: &str = "https://schema.org/birthPlace";
    /// `schema:givenName`.
    pub const SDO_GIVEN_NAME: &str = "https://schema.org/givenName";
    /// `schema:familyName`.
    pub const SDO_FAMILY_NAME: &str = "https://schema.org/familyName";
    /// `schema:gender`.
    pub const SDO_GENDER: &str = "https://schema.org/gender";
    /// `schema:birthDate`.
    pub const SDO_BIRTH_DATE: &str = "https://schema.org/birthDate";
    /// `schema:name`.
    pub const SDO_NAME: &str = "https://schema.org/name";
    /// `dbo:NobelPrize`.
    pub const DBO_NOBEL_PRIZE: &str = "http://dbpedia.org/ontology/NobelPrize";
    /// `dbo:Country`.
    pub const DBO_COUNTRY: &str = "http://dbpedia.org/ontology/Country";
}
