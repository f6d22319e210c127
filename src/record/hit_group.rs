//! All submatches between one query and one subject.

use super::submatch::Submatch;
use crate::utils::shorten_default;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Submatches between one query and one subject, in encounter order.
///
/// Built with [`HitGroupBuilder`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitGroup {
    subject_id: String,
    submatches: Vec<Submatch>,
}

impl HitGroup {
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn submatches(&self) -> &[Submatch] {
        &self.submatches
    }

    /// Number of submatches
    pub fn len(&self) -> usize {
        self.submatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submatches.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Submatch> {
        self.submatches.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Submatch> {
        self.submatches.iter()
    }

    /// Short label such as `HitGroup(sp|P69905|HBA_HUMAN, 2 matches)`
    pub fn label(&self) -> String {
        format!(
            "HitGroup({}, {} matches)",
            shorten_default(&self.subject_id),
            self.len()
        )
    }
}

impl Index<usize> for HitGroup {
    type Output = Submatch;

    fn index(&self, i: usize) -> &Submatch {
        &self.submatches[i]
    }
}

impl<'a> IntoIterator for &'a HitGroup {
    type Item = &'a Submatch;
    type IntoIter = std::slice::Iter<'a, Submatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.submatches.iter()
    }
}

impl fmt::Display for HitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Accumulates submatches for one subject until the group is frozen.
#[derive(Debug)]
pub struct HitGroupBuilder {
    subject_id: String,
    submatches: Vec<Submatch>,
}

impl HitGroupBuilder {
    pub fn new(subject_id: impl Into<String>) -> Self {
        HitGroupBuilder {
            subject_id: subject_id.into(),
            submatches: Vec::new(),
        }
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn push(&mut self, submatch: Submatch) {
        self.submatches.push(submatch);
    }

    pub fn is_empty(&self) -> bool {
        self.submatches.is_empty()
    }

    /// Freeze into a [`HitGroup`]; `None` when nothing was pushed, so an
    /// empty group can never be produced.
    pub fn freeze(self) -> Option<HitGroup> {
        if self.submatches.is_empty() {
            return None;
        }
        Some(HitGroup {
            subject_id: self.subject_id,
            submatches: self.submatches,
        })
    }
}
