//! Namespace modules of the Nobel laureate ontology.
//!
//! Each sub-module encodes one namespace as Rust static data. Modules are
//! listed in declaration order; see [`crate::Ontology::nobel`] for the
//! assembly sequence.

pub mod dbo;
pub mod dbr;
pub mod onto;
pub mod resource;
pub mod sdo;
