//! Reciprocal best hits between two BLAST searches (A against B, B against A).

use crate::error::Result;
use crate::record::QueryRecord;
use crate::sequence::{canonical_id, NameTable};
use crate::tokenize::{open_report, ReportFormat};
use crate::group::GroupingEngine;
use rustc_hash::FxHashMap;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Heartbeat interval while collecting best hits
pub const PROGRESS_INTERVAL: usize = 25_000;

/// Best-scoring subjects per query.
///
/// Query and subject ids are stored in canonical form, and ties are merged
/// across every record of the same query.
#[derive(Debug, Clone, Default)]
pub struct BestHits {
    best: FxHashMap<String, (f64, Vec<String>)>,
}

impl BestHits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, query_id: &str, subject_id: &str, score: f64) {
        let subject = canonical_id(subject_id);
        let entry = self
            .best
            .entry(canonical_id(query_id).to_string())
            .or_insert_with(|| (score, Vec::new()));
        if score > entry.0 {
            *entry = (score, Vec::new());
        }
        if score == entry.0 && !entry.1.iter().any(|s| s == subject) {
            entry.1.push(subject.to_string());
        }
    }

    pub fn add_record(&mut self, record: &QueryRecord) {
        for (subject, submatch) in record.submatches() {
            self.add(record.query_id(), subject, submatch.score());
        }
    }

    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<QueryRecord>>,
    {
        let mut hits = BestHits::new();
        for (n, record) in records.into_iter().enumerate() {
            let record = record?;
            if n % PROGRESS_INTERVAL == 0 {
                debug!(n, query = %record.label(), "collecting best hits");
            }
            hits.add_record(&record);
        }
        Ok(hits)
    }

    /// Best subjects of `query_id` (canonicalised), empty when unknown
    pub fn best_for(&self, query_id: &str) -> &[String] {
        self.best
            .get(canonical_id(query_id))
            .map(|(_, subjects)| subjects.as_slice())
            .unwrap_or(&[])
    }

    pub fn best_score(&self, query_id: &str) -> Option<f64> {
        self.best.get(canonical_id(query_id)).map(|(score, _)| *score)
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    fn queries(&self) -> impl Iterator<Item = &str> {
        self.best.keys().map(String::as_str)
    }
}

/// Read one report and collect its best hits
pub fn best_hits_from_report(
    path: &Path,
    format: ReportFormat,
    gzip: bool,
    columns: Option<&str>,
) -> Result<BestHits> {
    info!(path = %path.display(), "parsing BLAST output");
    let tuples = open_report(path, format, gzip, columns)?;
    BestHits::from_records(GroupingEngine::new(tuples))
}

/// Collect best hits of both directions in parallel
pub fn best_hits_both(
    a_vs_b: &Path,
    b_vs_a: &Path,
    format: ReportFormat,
    gzip: bool,
    columns: Option<&str>,
) -> Result<(BestHits, BestHits)> {
    let (ab, ba) = rayon::join(
        || best_hits_from_report(a_vs_b, format, gzip, columns),
        || best_hits_from_report(b_vs_a, format, gzip, columns),
    );
    Ok((ab?, ba?))
}

/// `(a, b)` pairs where each is a best hit of the other, sorted
pub fn reciprocal_best_hits(ab: &BestHits, ba: &BestHits) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = ab
        .queries()
        .flat_map(move |a| {
            ab.best_for(a)
                .iter()
                .filter(move |b| ba.best_for(b).iter().any(|back| back == a))
                .map(move |b| (a.to_string(), b.clone()))
        })
        .collect();
    pairs.sort();
    pairs
}

/// Write `(a, a_descr, b, b_descr)` rows; returns the number written.
pub fn write_pairs<W: Write>(
    out: W,
    pairs: &[(String, String)],
    query_names: &NameTable,
    against_names: &NameTable,
) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    for (a, b) in pairs {
        writer.write_record([
            a.as_str(),
            query_names.description(a),
            b.as_str(),
            against_names.description(b),
        ])?;
    }
    writer.flush()?;
    Ok(pairs.len())
}
