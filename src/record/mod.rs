//! Record model: query → hit group → submatch.
//!
//! Records are assembled through builders inside the grouping engine and
//! handed out frozen; nothing here mutates after `freeze()`.

pub mod hit_group;
pub mod query;
pub mod submatch;

pub use hit_group::{HitGroup, HitGroupBuilder};
pub use query::{QueryRecord, QueryRecordBuilder};
pub use submatch::{expect_to_exponent, Submatch, SubmatchFields};
