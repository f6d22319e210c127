//! All hit groups for one contiguous run of a query id.

use super::hit_group::HitGroup;
use super::submatch::Submatch;
use crate::utils::shorten_default;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// One query and its hit groups, in first-encounter order.
///
/// Emitted frozen by the grouping engine. A record is non-empty unless the
/// engine was configured to emit empty records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    query_id: String,
    hit_groups: Vec<HitGroup>,
}

impl QueryRecord {
    pub fn query_id(&self) -> &str {
        &self.query_id
    }

    pub fn hit_groups(&self) -> &[HitGroup] {
        &self.hit_groups
    }

    /// Number of hit groups
    pub fn len(&self) -> usize {
        self.hit_groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hit_groups.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&HitGroup> {
        self.hit_groups.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HitGroup> {
        self.hit_groups.iter()
    }

    /// Every submatch with the subject id of its group, in record order
    pub fn submatches(&self) -> impl Iterator<Item = (&str, &Submatch)> + '_ {
        self.hit_groups
            .iter()
            .flat_map(|g| g.iter().map(move |m| (g.subject_id(), m)))
    }

    /// Total number of submatches across all groups
    pub fn submatch_count(&self) -> usize {
        self.hit_groups.iter().map(HitGroup::len).sum()
    }

    /// Short label such as `QueryRecord(contig_12 (3 hits))`
    pub fn label(&self) -> String {
        format!(
            "QueryRecord({} ({} hits))",
            shorten_default(&self.query_id),
            self.len()
        )
    }
}

impl Index<usize> for QueryRecord {
    type Output = HitGroup;

    fn index(&self, i: usize) -> &HitGroup {
        &self.hit_groups[i]
    }
}

impl<'a> IntoIterator for &'a QueryRecord {
    type Item = &'a HitGroup;
    type IntoIter = std::slice::Iter<'a, HitGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.hit_groups.iter()
    }
}

impl fmt::Display for QueryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Accumulates hit groups for one query until the record is frozen.
#[derive(Debug)]
pub struct QueryRecordBuilder {
    query_id: String,
    hit_groups: Vec<HitGroup>,
}

impl QueryRecordBuilder {
    pub fn new(query_id: impl Into<String>) -> Self {
        QueryRecordBuilder {
            query_id: query_id.into(),
            hit_groups: Vec::new(),
        }
    }

    pub fn query_id(&self) -> &str {
        &self.query_id
    }

    pub fn push(&mut self, group: HitGroup) {
        self.hit_groups.push(group);
    }

    pub fn is_empty(&self) -> bool {
        self.hit_groups.is_empty()
    }

    pub fn freeze(self) -> QueryRecord {
        QueryRecord {
            query_id: self.query_id,
            hit_groups: self.hit_groups,
        }
    }
}
