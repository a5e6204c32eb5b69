//! Validators for the laureate facts mapped from the input table.

pub mod cardinality;
