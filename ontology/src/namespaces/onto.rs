//! `myOnto:` namespace: the laureate ontology proper.
//!
//! Defines the two classes (`Person`, `NobelPrize`) and the eleven
//! properties used to describe a laureate. `Person` carries six cardinality
//! restrictions; the `hasPrizeName` restriction sits on `Person` even though
//! the property's domain is `NobelPrize`.

use crate::model::iris::*;
use crate::model::{
    Cardinality, Class, ClassKind, Namespace, NamespaceModule, Property, PropertyKind,
    Restriction,
};

/// Returns the `myOnto:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "myOnto",
            iri: NS_ONTO,
        },
        declarations: vec![],
        classes: classes(),
        properties: properties(),
        individuals: vec![],
    }
}

const PERSON_RESTRICTIONS: &[Restriction] = &[
    Restriction {
        on_property: BIRTH_COUNTRY,
        cardinality: Cardinality::Exactly(1),
        on_class: Some(DBO_COUNTRY),
    },
    Restriction {
        on_property: LAUREATE_ID,
        cardinality: Cardinality::Exactly(1),
        on_class: None,
    },
    Restriction {
        on_property: PRIZE_SHARE,
        cardinality: Cardinality::Between(1, 3),
        on_class: None,
    },
    Restriction {
        on_property: BIRTH_DATE,
        cardinality: Cardinality::Exactly(1),
        on_class: None,
    },
    Restriction {
        on_property: ORGANIZATION_NAME,
        cardinality: Cardinality::AtMost(1),
        on_class: None,
    },
    Restriction {
        on_property: HAS_PRIZE_NAME,
        cardinality: Cardinality::AtLeast(1),
        on_class: None,
    },
];

fn classes() -> Vec<Class> {
    vec![
        Class {
            id: PERSON,
            kind: ClassKind::Owl,
            label: "Person",
            comment: "A class defining a Person.",
            subclass_of: &[SDO_PERSON],
            restrictions: PERSON_RESTRICTIONS,
        },
        Class {
            id: NOBEL_PRIZE,
            kind: ClassKind::Rdfs,
            label: "Nobel Prize",
            comment: "A class defining a Nobel Prize.",
            subclass_of: &[DBO_NOBEL_PRIZE],
            restrictions: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        // Object properties
        Property {
            id: PRIZE_CATEGORY,
            label: "Nobel Prize Category",
            comment: "The Nobel Prize category of a person.",
            kind: PropertyKind::Object,
            functional: true,
            inverse_functional: false,
            subproperty_of: None,
            domain: PERSON,
            range: NOBEL_PRIZE,
        },
        Property {
            id: BIRTH_COUNTRY,
            label: "Birth Country",
            comment: "The country where a person was born.",
            kind: PropertyKind::Object,
            functional: true,
            inverse_functional: false,
            subproperty_of: None,
            domain: PERSON,
            range: DBO_COUNTRY,
        },
        Property {
            id: ORGANIZATION_NAME,
            label: "Organization Name",
            comment: "The organization which a person belongs to.",
            kind: PropertyKind::Object,
            functional: false,
            inverse_functional: false,
            subproperty_of: None,
            domain: PERSON,
            range: SDO_ORGANIZATION,
        },
        Property {
            id: GENDER,
            label: "Gender",
            comment: "The gender of a person",
            kind: PropertyKind::Object,
            functional: true,
            inverse_functional: false,
            subproperty_of: Some(SDO_GENDER),
            domain: PERSON,
            range: SDO_GENDER_TYPE,
        },
        // Datatype properties
        Property {
            id: PRIZE_YEAR,
            label: "Prize Year",
            comment: "The year a person won a Nobel Prize.",
            kind: PropertyKind::Datatype,
            functional: false,
            inverse_functional: false,
            subproperty_of: None,
            domain: PERSON,
            range: XSD_GYEAR,
        },
        Property {
            id: LAUREATE_ID,
            label: "Laureate ID",
            comment: "The unique identifier assigned to each Nobel laureate.",
            kind: PropertyKind::Datatype,
            functional: false,
            inverse_functional: true,
            subproperty_of: None,
            domain: PERSON,
            range: XSD_INTEGER,
        },
        Property {
            id: PRIZE_SHARE,
            label: "Prize Share",
            comment: "The allocation of the Nobel Prize award money among the recipients \
                      of a particular Nobel Prize category.",
            kind: PropertyKind::Datatype,
            functional: false,
            inverse_functional: false,
            subproperty_of: None,
            domain: PERSON,
            range: XSD_INTEGER,
        },
        Property {
            id: MOTIVATION,
            label: "Motivation",
            comment: "The official statement or explanation for awarding a Nobel Prize \
                      to a particular individual or group.",
            kind: PropertyKind::Datatype,
            functional: false,
            inverse_functional: false,
            subproperty_of: None,
            domain: PERSON,
            range: XSD_STRING,
        },
        Property {
            id: BIRTH_DATE,
            label: "Date",
            comment: "The date of birth of a person",
            kind: PropertyKind::Datatype,
            functional: true,
            inverse_functional: false,
            subproperty_of: Some(SDO_BIRTH_DATE),
            domain: PERSON,
            range: XSD_DATE,
        },
        Property {
            id: BIRTH_COUNTRY_CODE,
            label: "Birth Country Code",
            comment: "The code of a person's birth country",
            kind: PropertyKind::Datatype,
            functional: true,
            inverse_functional: false,
            subproperty_of: None,
            domain: PERSON,
            range: XSD_STRING,
        },
        Property {
            id: HAS_PRIZE_NAME,
            label: "Prize Name",
            comment: "The name of a Nobel prize category",
            kind: PropertyKind::Datatype,
            functional: false,
            inverse_functional: true,
            subproperty_of: Some(SDO_NAME),
            domain: NOBEL_PRIZE,
            range: XSD_STRING,
        },
    ]
}
