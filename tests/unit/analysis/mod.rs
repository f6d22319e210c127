//! Unit tests for record consumers

pub mod csv_export;
pub mod store;
