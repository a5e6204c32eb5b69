//! `dbr:` namespace: DBpedia resources.
//!
//! Countries, cities, organizations, people, and prizes are referenced by
//! their DBpedia local names. None are declared; the module only contributes
//! the prefix binding.

use crate::model::iris::NS_DBR;
use crate::model::{Namespace, NamespaceModule};

/// Returns the `dbr:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "dbr",
            iri: NS_DBR,
        },
        declarations: vec![],
        classes: vec![],
        properties: vec![],
        individuals: vec![],
    }
}
