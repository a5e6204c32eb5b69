//! `schema:` namespace: the schema.org terms the ontology builds on.
//!
//! Nothing is defined here; the terms are only declared so that reasoners
//! know whether each one is a class, an object property, or a datatype
//! property.

use crate::model::iris::*;
use crate::model::{Declaration, Namespace, NamespaceModule};

/// Returns the `schema:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "schema",
            iri: NS_SDO,
        },
        declarations: vec![
            Declaration { id: SDO_PERSON, type_: OWL_CLASS },
            Declaration { id: SDO_ORGANIZATION, type_: OWL_CLASS },
            Declaration { id: SDO_GENDER_TYPE, type_: OWL_CLASS },
            Declaration { id: SDO_BIRTH_PLACE, type_: OWL_OBJECT_PROPERTY },
            Declaration { id: SDO_GIVEN_NAME, type_: OWL_DATATYPE_PROPERTY },
            Declaration { id: SDO_FAMILY_NAME, type_: OWL_DATATYPE_PROPERTY },
            Declaration { id: SDO_GENDER, type_: OWL_DATATYPE_PROPERTY },
            Declaration { id: SDO_BIRTH_DATE, type_: OWL_DATATYPE_PROPERTY },
            Declaration { id: SDO_NAME, type_: OWL_DATATYPE_PROPERTY },
        ],
        classes: vec![],
        properties: vec![],
        individuals: vec![],
    }
}
