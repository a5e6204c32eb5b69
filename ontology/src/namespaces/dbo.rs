//! `dbo:` namespace: DBpedia ontology classes.

use crate::model::iris::*;
use crate::model::{Declaration, Namespace, NamespaceModule};

/// Returns the `dbo:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "dbo",
            iri: NS_DBO,
        },
        declarations: vec![
            Declaration { id: DBO_NOBEL_PRIZE, type_: OWL_CLASS },
            Declaration { id: DBO_COUNTRY, type_: OWL_CLASS },
        ],
        classes: vec![],
        properties: vec![],
        individuals: vec![],
    }
}
