//! Grouping of flat BLAST alignment streams into per-query records.
//!
//! A tokenizer ([`tokenize`]) turns a report into `(query, subject,
//! submatch)` tuples; the [`group::GroupingEngine`] folds consecutive tuples
//! into [`record::QueryRecord`]s; consumers export, store or analyse them.

pub mod error;
pub mod record;
pub mod utils;

pub mod group;
pub mod tokenize;

pub mod post;
pub mod report;
pub mod sequence;
pub mod store;

pub mod blastinput;
pub mod commands;
pub mod logging;

pub use error::{BlastGroupError, Result};
pub use group::{flatten_records, group_all, GroupingConfig, GroupingEngine};
pub use record::{HitGroup, QueryRecord, Submatch, SubmatchFields};
pub use tokenize::AlignmentTuple;
