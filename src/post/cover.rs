//! Reference coverage by BLAST submatches.
//!
//! Counts the reference bases touched by at least one submatch scoring
//! `min_score` or more, considering only queries whose own sequence is long
//! enough.

use crate::error::Result;
use crate::record::QueryRecord;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{trace, warn};

/// Minimum submatch score counted toward coverage
pub const DEFAULT_MIN_SCORE: f64 = 200.0;

/// Ids of the sequences at least `min_len` long
pub fn long_enough(lengths: &[(String, usize)], min_len: usize) -> FxHashSet<String> {
    lengths
        .iter()
        .filter(|(_, len)| *len >= min_len)
        .map(|(id, _)| id.clone())
        .collect()
}

/// Totals reported by [`Coverage::summary`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageSummary {
    pub total_bases: usize,
    pub covered_bases: usize,
}

impl CoverageSummary {
    /// Covered fraction; 0.0 for an empty reference
    pub fn fraction(&self) -> f64 {
        if self.total_bases == 0 {
            0.0
        } else {
            self.covered_bases as f64 / self.total_bases as f64
        }
    }
}

/// Per-base coverage masks over every reference sequence
#[derive(Debug)]
pub struct Coverage {
    masks: FxHashMap<String, Vec<bool>>,
    queries: FxHashSet<String>,
    min_score: f64,
    clipped: usize,
}

impl Coverage {
    pub fn new(reference: &[(String, usize)], queries: FxHashSet<String>, min_score: f64) -> Self {
        let masks = reference
            .iter()
            .map(|(id, len)| (id.clone(), vec![false; *len]))
            .collect();
        Coverage {
            masks,
            queries,
            min_score,
            clipped: 0,
        }
    }

    /// Mark the subject bases covered by one record's qualifying submatches.
    pub fn add_record(&mut self, record: &QueryRecord) {
        if !self.queries.contains(record.query_id()) {
            return;
        }
        for (subject, submatch) in record.submatches() {
            if submatch.score() < self.min_score {
                continue;
            }
            let mask = match self.masks.get_mut(subject) {
                Some(mask) if !mask.is_empty() => mask,
                _ => {
                    trace!(subject, "subject not in reference");
                    continue;
                }
            };

            let (lo, hi) = submatch.subject_span();
            let len = mask.len() as i64;
            let start = (lo - 1).max(0);
            let end = hi.min(len);
            if lo < 1 || hi > len {
                warn!(
                    subject,
                    start = lo,
                    end = hi,
                    length = len,
                    "submatch extends past reference; clipping"
                );
                self.clipped += 1;
            }
            if start < end {
                for base in &mut mask[start as usize..end as usize] {
                    *base = true;
                }
            }
        }
    }

    /// Submatches that had to be clipped to the reference length
    pub fn clipped(&self) -> usize {
        self.clipped
    }

    pub fn summary(&self) -> CoverageSummary {
        let mut summary = CoverageSummary {
            total_bases: 0,
            covered_bases: 0,
        };
        for mask in self.masks.values() {
            summary.total_bases += mask.len();
            summary.covered_bases += mask.iter().filter(|&&b| b).count();
        }
        summary
    }
}

/// Feed a whole record stream into `coverage`; returns records read.
pub fn accumulate<I>(coverage: &mut Coverage, records: I) -> Result<usize>
where
    I: IntoIterator<Item = Result<QueryRecord>>,
{
    let mut n = 0;
    for record in records {
        coverage.add_record(&record?);
        n += 1;
    }
    Ok(n)
}
