//! One aligned region between a query and a subject (one HSP).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw alignment fields as supplied by a tokenizer.
///
/// `expect_exponent` is the negated base-10 logarithm of the expect value;
/// [`Submatch::new`] turns it back into a probability.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmatchFields {
    pub expect_exponent: f64,
    pub frame_query: Option<i32>,
    pub frame_subject: Option<i32>,
    pub query_start: i64,
    pub query_end: i64,
    pub subject_start: i64,
    pub subject_end: i64,
    pub query_sequence: String,
    pub subject_sequence: String,
    pub identity_percent: f64,
    pub score: f64,
}

/// Convert a reported expect value into the exponent form tokenizers hand
/// to [`Submatch::new`].
///
/// An expect of zero (or anything non-positive) maps to `+inf`, which
/// converts back to an expect of exactly 0.0.
pub fn expect_to_exponent(expect: f64) -> f64 {
    if expect <= 0.0 {
        f64::INFINITY
    } else {
        -expect.log10()
    }
}

/// A single alignment block between a query and a subject.
///
/// Coordinates are 1-based and inclusive, exactly as reported. On the
/// reverse strand `start > end`; use [`Submatch::query_span`] and
/// [`Submatch::subject_span`] when an ordered interval is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submatch {
    expect: f64,
    frame_query: Option<i32>,
    frame_subject: Option<i32>,
    query_start: i64,
    query_end: i64,
    subject_start: i64,
    subject_end: i64,
    query_sequence: String,
    subject_sequence: String,
    identity_percent: f64,
    score: f64,
}

impl Submatch {
    /// Build a submatch; the expect probability is `10^(-expect_exponent)`.
    pub fn new(fields: SubmatchFields) -> Self {
        Submatch {
            expect: 10f64.powf(-fields.expect_exponent),
            frame_query: fields.frame_query,
            frame_subject: fields.frame_subject,
            query_start: fields.query_start,
            query_end: fields.query_end,
            subject_start: fields.subject_start,
            subject_end: fields.subject_end,
            query_sequence: fields.query_sequence,
            subject_sequence: fields.subject_sequence,
            identity_percent: fields.identity_percent,
            score: fields.score,
        }
    }

    /// Expect value (probability of a chance match)
    pub fn expect(&self) -> f64 {
        self.expect
    }

    pub fn frame_query(&self) -> Option<i32> {
        self.frame_query
    }

    pub fn frame_subject(&self) -> Option<i32> {
        self.frame_subject
    }

    pub fn query_start(&self) -> i64 {
        self.query_start
    }

    pub fn query_end(&self) -> i64 {
        self.query_end
    }

    pub fn subject_start(&self) -> i64 {
        self.subject_start
    }

    pub fn subject_end(&self) -> i64 {
        self.subject_end
    }

    /// Aligned (gapped) query sequence
    pub fn query_sequence(&self) -> &str {
        &self.query_sequence
    }

    /// Aligned (gapped) subject sequence
    pub fn subject_sequence(&self) -> &str {
        &self.subject_sequence
    }

    pub fn identity_percent(&self) -> f64 {
        self.identity_percent
    }

    /// Score as reported (bit score for NCBI reports)
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Query interval as `(min, max)`, independent of orientation
    pub fn query_span(&self) -> (i64, i64) {
        ordered(self.query_start, self.query_end)
    }

    /// Subject interval as `(min, max)`, independent of orientation
    pub fn subject_span(&self) -> (i64, i64) {
        ordered(self.subject_start, self.subject_end)
    }

    /// True when the subject coordinates run backwards (minus strand)
    pub fn is_reverse_subject(&self) -> bool {
        self.subject_start > self.subject_end
    }
}

#[inline]
fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl fmt::Display for Submatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Submatch(expect={:e}, query {}-{}, subject {}-{})",
            self.expect, self.query_start, self.query_end, self.subject_start, self.subject_end
        )
    }
}
