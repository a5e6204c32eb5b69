//! Validators, one module per concern.
//!
//! Each validator returns a [`crate::ConformanceReport`] that the runner
//! merges in a fixed order.

pub mod data;
pub mod ontology;
pub mod rdf;
