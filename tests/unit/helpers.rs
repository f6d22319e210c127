//! Test utilities and helpers for unit tests
//!
//! - Submatch / tuple factories
//! - Record shape extraction for structural comparisons
//! - Temporary fixture files

use blastgroup::record::{Submatch, SubmatchFields};
use blastgroup::{AlignmentTuple, GroupingEngine, QueryRecord, Result};
use std::io::Write;
use tempfile::NamedTempFile;

/// Submatch whose score doubles as a label in assertions
pub fn make_submatch(score: f64) -> Submatch {
    Submatch::new(SubmatchFields {
        expect_exponent: 10.0,
        query_start: 1,
        query_end: 50,
        subject_start: 101,
        subject_end: 150,
        identity_percent: 98.0,
        score,
        ..Default::default()
    })
}

pub fn make_tuple(query: &str, subject: &str, score: f64) -> AlignmentTuple {
    AlignmentTuple::new(query, subject, make_submatch(score))
}

/// Run the engine with default options over an infallible stream
pub fn group(tuples: Vec<AlignmentTuple>) -> Vec<QueryRecord> {
    GroupingEngine::from_tuples(tuples)
        .collect::<Result<Vec<_>>>()
        .unwrap()
}

/// Record structure: query id → [(subject id, [score])]
pub type Shape = Vec<(String, Vec<(String, Vec<f64>)>)>;

pub fn shape(records: &[QueryRecord]) -> Shape {
    records
        .iter()
        .map(|record| {
            (
                record.query_id().to_string(),
                record
                    .iter()
                    .map(|g| (g.subject_id().to_string(), g.iter().map(Submatch::score).collect()))
                    .collect(),
            )
        })
        .collect()
}

/// Expected query entry for [`shape`] comparisons
pub fn qr(query: &str, groups: Vec<(String, Vec<f64>)>) -> (String, Vec<(String, Vec<f64>)>) {
    (query.to_string(), groups)
}

/// Expected hit group entry for [`shape`] comparisons
pub fn hg(subject: &str, scores: &[f64]) -> (String, Vec<f64>) {
    (subject.to_string(), scores.to_vec())
}

/// Write `contents` to a temporary file with the given suffix
pub fn write_temp(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Standard 12-column tabular line
pub fn tabular_line(query: &str, subject: &str, sstart: i64, send: i64, evalue: &str, bits: f64) -> String {
    format!(
        "{}\t{}\t99.0\t{}\t0\t0\t1\t{}\t{}\t{}\t{}\t{}\n",
        query,
        subject,
        (send - sstart).abs() + 1,
        (send - sstart).abs() + 1,
        sstart,
        send,
        evalue,
        bits
    )
}
