//! Unit test infrastructure for blastgroup
//!
//! Tests are organized by module:
//! - `group/` - Grouping engine boundaries, regrouping and error handling
//! - `tokenize/` - Reports read end to end through the engine
//! - `analysis/` - Record store, CSV export, coverage and reciprocal best hits
//! - `cli/` - Command-line argument parsing

pub mod analysis;
pub mod cli;
pub mod group;
pub mod helpers;
