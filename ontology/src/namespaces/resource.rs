//! `mySemantics:` namespace: instance data.
//!
//! Holds the six Nobel Prize category individuals. Laureates are minted in
//! this namespace at mapping time via [`crate::term::resource_from_name`].
//! Individuals are listed in declaration order; each one is asserted
//! `owl:differentFrom` every individual listed before it.

use crate::model::iris::{NOBEL_PRIZE, NS_RESOURCE};
use crate::model::{Individual, Namespace, NamespaceModule};

/// Returns the `mySemantics:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "mySemantics",
            iri: NS_RESOURCE,
        },
        declarations: vec![],
        classes: vec![],
        properties: vec![],
        individuals: individuals(),
    }
}

fn individuals() -> Vec<Individual> {
    vec![
        Individual {
            key: "chemistry",
            id: "http://www.mysemantics.com/resource/Nobel_Prize_in_Chemistry",
            type_: NOBEL_PRIZE,
            same_as: "http://dbpedia.org/resource/Nobel_Prize_in_Chemistry",
            prize_name: "Nobel Prize in Chemistry",
        },
        Individual {
            key: "economics",
            id: "http://www.mysemantics.com/resource/Nobel_Memorial_Prize_in_Economic_Sciences",
            type_: NOBEL_PRIZE,
            same_as: "http://dbpedia.org/resource/Nobel_Memorial_Prize_in_Economic_Sciences",
            prize_name: "Nobel Memorial Prize in Economic Sciences",
        },
        Individual {
            key: "medicine",
            id: "http://www.mysemantics.com/resource/Nobel_Prize_in_Physiology_or_Medicine",
            type_: NOBEL_PRIZE,
            same_as: "http://dbpedia.org/resource/Nobel_Prize_in_Physiology_or_Medicine",
            prize_name: "Nobel Prize in Physiology or Medicine",
        },
        Individual {
            key: "literature",
            id: "http://www.mysemantics.com/resource/Nobel_Prize_in_Literature",
            type_: NOBEL_PRIZE,
            same_as: "http://dbpedia.org/resource/Nobel_Prize_in_Literature",
            prize_name: "Nobel Prize in Literature",
        },
        Individual {
            key: "peace",
            id: "http://www.mysemantics.com/resource/Nobel_Peace_Prize",
            type_: NOBEL_PRIZE,
            same_as: "http://dbpedia.org/resource/Nobel_Peace_Prize",
            prize_name: "Nobel Peace Prize",
        },
        Individual {
            key: "physics",
            id: "http://www.mysemantics.com/resource/Nobel_Prize_in_Physics",
            type_: NOBEL_PRIZE,
            same_as: "http://dbpedia.org/resource/Nobel_Prize_in_Physics",
            prize_name: "Nobel Prize in Physics",
        },
    ]
}
