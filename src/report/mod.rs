//! Record export.
//!
//! - `csv_rows` - one CSV row per submatch
//! - `evalue` - full-precision expect formatting

pub mod csv_rows;
pub mod evalue;

pub use csv_rows::{CsvReport, NameTables};
pub use evalue::format_expect;
