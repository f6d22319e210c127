//! Sequence-file helpers used by the reporting and analysis commands.

pub mod names;

pub use names::{canonical_id, sequence_lengths, NameTable};
