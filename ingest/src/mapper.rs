//! Row mapping: one [`LaureateRecord`] to the triples describing one laureate.
//!
//! Resolution rules are exact and case-sensitive:
//! - the category must equal one of the six category keys;
//! - three birth-country spellings are rewritten to their DBpedia names and
//!   every other value is appended to the `dbr:` namespace verbatim;
//! - `"Male"` is `schema:Male` and every other gender value is `schema:Female`;
//! - `Birth_City` and `Organization_Name` gate the `birthPlace` and
//!   `organizationName` triples, whose objects come from the matching
//!   `_dbr` columns.

use nobel_ontology::model::iris::*;
use nobel_ontology::{resource_from_name, Graph, Individual, Iri, Literal, Ontology, Triple};
use tracing::debug;

use crate::error::MapError;
use crate::record::LaureateRecord;

/// Birth-country spellings that differ from their DBpedia local names.
const COUNTRY_OVERRIDES: &[(&str, &str)] = &[
    ("United Kingdom", "United_Kingdom"),
    ("USA", "United_States"),
    ("USSR", "Soviet_Union"),
];

/// Maps records onto the ontology's terms and prize category individuals.
#[derive(Debug, Clone, Copy)]
pub struct RowMapper<'a> {
    ontology: &'a Ontology,
}

impl<'a> RowMapper<'a> {
    /// Creates a mapper that resolves categories against `ontology`.
    #[must_use]
    pub fn new(ontology: &'a Ontology) -> Self {
        Self { ontology }
    }

    /// Resolves `record` into its triples without touching any graph.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::UnknownCategory`] if the category text matches no
    /// prize category, and [`MapError::InvalidName`] if `Full_Name` is empty.
    pub fn map(&self, record: &LaureateRecord) -> Result<Vec<Triple>, MapError> {
        let subject = resource_from_name(&record.full_name)?;
        let category = self.category(&record.category)?;

        let mut triples = vec![
            Triple::new(subject.clone(), iri(RDF_TYPE), iri(PERSON)),
            Triple::new(
                subject.clone(),
                iri(OWL_SAME_AS),
                Iri::in_namespace(NS_DBR, &record.full_name_dbr),
            ),
            Triple::new(
                subject.clone(),
                iri(PRIZE_YEAR),
                Literal::typed(record.year.as_str(), XSD_GYEAR),
            ),
            Triple::new(
                subject.clone(),
                iri(LAUREATE_ID),
                Literal::typed(record.laureate_id.as_str(), XSD_INTEGER),
            ),
            Triple::new(subject.clone(), iri(PRIZE_CATEGORY), iri(category.id)),
            Triple::new(subject.clone(), iri(GENDER), gender(&record.gender)),
            Triple::new(
                subject.clone(),
                iri(PRIZE_SHARE),
                Literal::typed(record.prize_share.as_str(), XSD_INTEGER),
            ),
            Triple::new(
                subject.clone(),
                iri(MOTIVATION),
                Literal::typed(record.motivation.as_str(), XSD_STRING),
            ),
            Triple::new(
                subject.clone(),
                iri(BIRTH_DATE),
                Literal::typed(record.birth_date.as_str(), XSD_DATE),
            ),
            Triple::new(
                subject.clone(),
                iri(BIRTH_COUNTRY),
                birth_country(&record.birth_country),
            ),
            Triple::new(
                subject.clone(),
                iri(SDO_GIVEN_NAME),
                Literal::typed(record.firstname.as_str(), XSD_STRING),
            ),
            Triple::new(
                subject.clone(),
                iri(SDO_FAMILY_NAME),
                Literal::typed(record.lastname.as_str(), XSD_STRING),
            ),
            Triple::new(
                subject.clone(),
                iri(BIRTH_COUNTRY_CODE),
                Literal::typed(record.birth_country_code.as_str(), XSD_STRING),
            ),
        ];

        // Presence is tested on the plain column, the object comes from `_dbr`.
        if !record.birth_city.is_empty() {
            triples.push(Triple::new(
                subject.clone(),
                iri(SDO_BIRTH_PLACE),
                Iri::in_namespace(NS_DBR, &record.birth_city_dbr),
            ));
        }
        if !record.organization_name.is_empty() {
            triples.push(Triple::new(
                subject,
                iri(ORGANIZATION_NAME),
                Iri::in_namespace(NS_DBR, &record.organization_name_dbr),
            ));
        }

        Ok(triples)
    }

    /// Maps `record` and adds its triples to `graph`. Nothing is added when
    /// mapping fails. Returns the number of triples that were new to the graph.
    ///
    /// # Errors
    ///
    /// Same as [`RowMapper::map`].
    pub fn map_into(&self, record: &LaureateRecord, graph: &mut Graph) -> Result<usize, MapError> {
        let triples = self.map(record)?;
        let emitted = triples.len();
        let added = triples.into_iter().map(|t| graph.insert(t)).filter(|&new| new).count();
        debug!(name = %record.full_name, emitted, added, "mapped laureate");
        Ok(added)
    }

    fn category(&self, text: &str) -> Result<&'a Individual, MapError> {
        self.ontology
            .find_category(text)
            .ok_or_else(|| MapError::UnknownCategory {
                value: text.to_owned(),
            })
    }
}

/// Resolves a birth-country value to its `dbr:` resource.
#[must_use]
pub fn birth_country(text: &str) -> Iri {
    let local = COUNTRY_OVERRIDES
        .iter()
        .find(|(spelling, _)| *spelling == text)
        .map_or(text, |(_, local)| *local);
    Iri::in_namespace(NS_DBR, local)
}

/// Resolves a gender value to `schema:Male` or `schema:Female`.
#[must_use]
pub fn gender(text: &str) -> Iri {
    if text == "Male" {
        iri(SDO_MALE)
    } else {
        iri(SDO_FEMALE)
    }
}

fn iri(s: &str) -> Iri {
    Iri::new(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nobel_ontology::{Object, Subject};

    fn marie_curie() -> LaureateRecord {
        LaureateRecord {
            full_name: "Marie Curie".into(),
            category: "physics".into(),
            birth_country: "Poland".into(),
            gender: "Female".into(),
            birth_city: "Warsaw".into(),
            birth_city_dbr: "Warsaw".into(),
            organization_name: String::new(),
            organization_name_dbr: String::new(),
            full_name_dbr: "Marie_Curie".into(),
            year: "1903".into(),
            laureate_id: "6".into(),
            prize_share: "4".into(),
            motivation: "in recognition...".into(),
            birth_date: "1867-11-07".into(),
            firstname: "Marie".into(),
            lastname: "Curie".into(),
            birth_country_code: "PL".into(),
        }
    }

    fn objects_of(triples: &[Triple], predicate: &str) -> Vec<Object> {
        triples
            .iter()
            .filter(|t| t.predicate.as_str() == predicate)
            .map(|t| t.object.clone())
            .collect()
    }

    fn mapper() -> RowMapper<'static> {
        RowMapper::new(Ontology::nobel())
    }

    #[test]
    fn each_category_selects_its_own_individual() {
        let ontology = Ontology::nobel();
        for category in ontology.categories() {
            let record = LaureateRecord {
                category: category.key.into(),
                ..marie_curie()
            };
            let triples = mapper().map(&record).expect("category resolves");
            assert_eq!(
                objects_of(&triples, PRIZE_CATEGORY),
                vec![Object::Iri(Iri::new(category.id))]
            );
        }
    }

    #[test]
    fn unknown_category_is_an_error() {
        let record = LaureateRecord {
            category: "Physics".into(),
            ..marie_curie()
        };
        assert_eq!(
            mapper().map(&record),
            Err(MapError::UnknownCategory {
                value: "Physics".into()
            })
        );
    }

    #[test]
    fn country_overrides() {
        assert_eq!(birth_country("USA").as_str(), "http://dbpedia.org/resource/United_States");
        assert_eq!(
            birth_country("United Kingdom").as_str(),
            "http://dbpedia.org/resource/United_Kingdom"
        );
        assert_eq!(birth_country("USSR").as_str(), "http://dbpedia.org/resource/Soviet_Union");
        assert_eq!(birth_country("Poland").as_str(), "http://dbpedia.org/resource/Poland");
        assert_eq!(birth_country("usa").as_str(), "http://dbpedia.org/resource/usa");
    }

    #[test]
    fn other_countries_are_appended_verbatim() {
        assert_eq!(
            birth_country("Prussia (Poland)").as_str(),
            "http://dbpedia.org/resource/Prussia (Poland)"
        );
    }

    #[test]
    fn gender_is_binary() {
        assert_eq!(gender("Male").as_str(), SDO_MALE);
        assert_eq!(gender("Female").as_str(), SDO_FEMALE);
        assert_eq!(gender("").as_str(), SDO_FEMALE);
        assert_eq!(gender("male").as_str(), SDO_FEMALE);
        assert_eq!(gender("org").as_str(), SDO_FEMALE);
    }

    #[test]
    fn empty_birth_city_suppresses_birth_place() {
        let record = LaureateRecord {
            birth_city: String::new(),
            birth_city_dbr: "Warsaw".into(),
            ..marie_curie()
        };
        let triples = mapper().map(&record).expect("maps");
        assert!(objects_of(&triples, SDO_BIRTH_PLACE).is_empty());
    }

    #[test]
    fn birth_place_uses_the_dbr_column() {
        let record = LaureateRecord {
            birth_city: "Warszawa".into(),
            birth_city_dbr: "Warsaw".into(),
            ..marie_curie()
        };
        let triples = mapper().map(&record).expect("maps");
        assert_eq!(
            objects_of(&triples, SDO_BIRTH_PLACE),
            vec![Object::Iri(Iri::in_namespace(NS_DBR, "Warsaw"))]
        );
    }

    #[test]
    fn organization_is_presence_gated() {
        let without = mapper().map(&marie_curie()).expect("maps");
        assert!(objects_of(&without, ORGANIZATION_NAME).is_empty());

        let record = LaureateRecord {
            organization_name: "Sorbonne University".into(),
            organization_name_dbr: "University_of_Paris".into(),
            ..marie_curie()
        };
        let with = mapper().map(&record).expect("maps");
        assert_eq!(
            objects_of(&with, ORGANIZATION_NAME),
            vec![Object::Iri(Iri::in_namespace(NS_DBR, "University_of_Paris"))]
        );
    }

    #[test]
    fn marie_curie_row() {
        let triples = mapper().map(&marie_curie()).expect("maps");
        // 13 unconditional triples plus birthPlace.
        assert_eq!(triples.len(), 14);
        let subject = Subject::Iri(Iri::new("http://www.mysemantics.com/resource/Marie_Curie"));
        assert!(triples.iter().all(|t| t.subject == subject));
        assert_eq!(
            objects_of(&triples, PRIZE_YEAR),
            vec![Object::Literal(Literal::typed("1903", XSD_GYEAR))]
        );
        assert_eq!(
            objects_of(&triples, PRIZE_SHARE),
            vec![Object::Literal(Literal::typed("4", XSD_INTEGER))]
        );
        assert_eq!(
            objects_of(&triples, OWL_SAME_AS),
            vec![Object::Iri(Iri::in_namespace(NS_DBR, "Marie_Curie"))]
        );
    }

    #[test]
    fn empty_motivation_is_still_emitted() {
        let record = LaureateRecord {
            motivation: String::new(),
            ..marie_curie()
        };
        let triples = mapper().map(&record).expect("maps");
        assert_eq!(
            objects_of(&triples, MOTIVATION),
            vec![Object::Literal(Literal::typed("", XSD_STRING))]
        );
    }

    #[test]
    fn failed_rows_leave_the_graph_untouched() {
        let mut graph = Graph::new();
        let record = LaureateRecord {
            category: "astronomy".into(),
            ..marie_curie()
        };
        assert!(mapper().map_into(&record, &mut graph).is_err());
        assert!(graph.is_empty());
    }

    #[test]
    fn repeated_rows_accumulate_on_one_subject() {
        let mut graph = Graph::new();
        let first = mapper().map_into(&marie_curie(), &mut graph).expect("maps");
        let second_prize = LaureateRecord {
            category: "chemistry".into(),
            year: "1911".into(),
            prize_share: "1".into(),
            ..marie_curie()
        };
        let second = mapper().map_into(&second_prize, &mut graph).expect("maps");
        assert_eq!(first, 14);
        // New: category, year, share. Everything else collapses.
        assert_eq!(second, 3);
        assert_eq!(graph.instances_of(PERSON).count(), 1);
    }
}
