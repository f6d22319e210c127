//! Grouping options and their validation.

use crate::error::{BlastGroupError, Result};
use crate::record::Submatch;

/// Options for [`GroupingEngine`](super::GroupingEngine).
///
/// The default groups every submatch and never produces empty records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupingConfig {
    /// Skip query records that end up with no hit groups
    pub ignore_empty_records: bool,
    /// Yield query records that end up with no hit groups
    pub emit_empty_records: bool,
    /// Drop submatches scoring below this value
    pub min_score: Option<f64>,
    /// Drop submatches with an expect above this value
    pub max_expect: Option<f64>,
}

impl GroupingConfig {
    /// Skip empty records
    pub fn ignoring_empty() -> Self {
        Self {
            ignore_empty_records: true,
            ..Default::default()
        }
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    pub fn with_max_expect(mut self, max_expect: f64) -> Self {
        self.max_expect = Some(max_expect);
        self
    }

    /// True when any submatch filter is set
    pub fn has_filters(&self) -> bool {
        self.min_score.is_some() || self.max_expect.is_some()
    }

    /// Reject contradictory or meaningless option combinations.
    ///
    /// Filters can empty a record, so a filtered configuration must say
    /// whether empty records are skipped or emitted.
    pub fn validate(&self) -> Result<()> {
        if self.ignore_empty_records && self.emit_empty_records {
            return Err(BlastGroupError::Configuration(
                "ignore_empty_records and emit_empty_records are mutually exclusive".to_string(),
            ));
        }
        if let Some(score) = self.min_score {
            if score.is_nan() {
                return Err(BlastGroupError::Configuration(
                    "min_score must be a number".to_string(),
                ));
            }
        }
        if let Some(expect) = self.max_expect {
            if expect.is_nan() || expect < 0.0 {
                return Err(BlastGroupError::Configuration(format!(
                    "max_expect must be a non-negative number, got {}",
                    expect
                )));
            }
        }
        if self.has_filters() && !self.ignore_empty_records && !self.emit_empty_records {
            return Err(BlastGroupError::Configuration(
                "submatch filters need an empty-record policy (ignore or emit)".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether `submatch` survives the configured filters
    pub(crate) fn accepts(&self, submatch: &Submatch) -> bool {
        if let Some(min) = self.min_score {
            if submatch.score() < min {
                return false;
            }
        }
        if let Some(max) = self.max_expect {
            if submatch.expect() > max {
                return false;
            }
        }
        true
    }
}
