//! Unit tests for the grouping engine

pub mod errors;
