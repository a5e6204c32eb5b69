//! Validators for the static ontology and the schema it emits.

pub mod inventory;
