//! Analyses run over grouped records.
//!
//! - `cover` - fraction of a reference covered by submatches
//! - `ortho` - reciprocal best hits between two searches

pub mod cover;
pub mod ortho;
