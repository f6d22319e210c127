//! Grouping engine: flat alignment tuples → query records.
//!
//! The tokenizer never marks where a hit or a query ends, so boundaries are
//! found by comparing each tuple's ids with the previous tuple's:
//!
//! 1. subject or query changed → the pending submatches become a
//!    [`HitGroup`] of the current query.
//! 2. query changed → the pending hit groups become a [`QueryRecord`],
//!    which is handed to the consumer.
//! 3. the submatch joins the pending submatches.
//!
//! Grouping is by contiguity only. A query id that reappears after a
//! different query produces a second, separate record; nothing is merged
//! across the gap. Flattening the output in emitted order and grouping it
//! again reproduces the same records, but sorting the flattened tuples
//! first can change the grouping.
//!
//! The engine is a pull-based iterator with one suspension point per
//! record. Dropping it mid-stream discards whatever was buffered for the
//! query in progress; partial records are never emitted.

pub mod config;

pub use config::GroupingConfig;

use crate::error::{BlastGroupError, Result};
use crate::record::{HitGroupBuilder, QueryRecord, QueryRecordBuilder};
use crate::tokenize::AlignmentTuple;
use tracing::{debug, trace};

/// Streaming grouper over a tuple source.
///
/// Single use: once the source is exhausted, or after the first error, the
/// iterator only returns `None`.
pub struct GroupingEngine<I> {
    source: I,
    config: GroupingConfig,
    /// Query currently being accumulated (`current_query_id` + pending hit groups)
    query: Option<QueryRecordBuilder>,
    /// Subject currently being accumulated (`current_subject_id` + pending submatches)
    subject: Option<HitGroupBuilder>,
    done: bool,
    emitted: usize,
}

impl<I> GroupingEngine<I>
where
    I: Iterator<Item = Result<AlignmentTuple>>,
{
    /// Engine with the default configuration
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self::build(source.into_iter(), GroupingConfig::default())
    }

    /// Engine with explicit options; the options are validated before any
    /// tuple is pulled from `source`.
    pub fn with_config<S>(source: S, config: GroupingConfig) -> Result<Self>
    where
        S: IntoIterator<IntoIter = I>,
    {
        config.validate()?;
        Ok(Self::build(source.into_iter(), config))
    }

    fn build(source: I, config: GroupingConfig) -> Self {
        GroupingEngine {
            source,
            config,
            query: None,
            subject: None,
            done: false,
            emitted: 0,
        }
    }

    pub fn config(&self) -> &GroupingConfig {
        &self.config
    }

    /// Records yielded so far (skipped empty records are not counted)
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Run steps 1-3 for one tuple; returns the record closed by a query change.
    fn absorb(&mut self, tuple: AlignmentTuple) -> Option<QueryRecord> {
        let AlignmentTuple {
            query_id,
            subject_id,
            submatch,
            ..
        } = tuple;

        let query_changed = self.query.as_ref().map(|q| q.query_id()) != Some(query_id.as_str());
        let subject_changed =
            self.subject.as_ref().map(|s| s.subject_id()) != Some(subject_id.as_str());

        if subject_changed || query_changed {
            self.flush_subject();
            self.subject = Some(HitGroupBuilder::new(subject_id));
        }

        let mut closed = None;
        if query_changed {
            closed = self.query.take().map(QueryRecordBuilder::freeze);
            self.query = Some(QueryRecordBuilder::new(query_id));
        }

        if self.config.accepts(&submatch) {
            if let Some(subject) = self.subject.as_mut() {
                subject.push(submatch);
            }
        } else {
            trace!(score = submatch.score(), expect = submatch.expect(), "submatch filtered");
        }

        closed
    }

    /// Move pending submatches into the current query as a hit group.
    ///
    /// Empty builders are dropped, so every emitted hit group has at least
    /// one submatch on both the mid-stream and end-of-stream paths.
    fn flush_subject(&mut self) {
        let group = match self.subject.take().and_then(HitGroupBuilder::freeze) {
            Some(group) => group,
            None => return,
        };
        if let Some(query) = self.query.as_mut() {
            query.push(group);
        }
    }

    /// End of stream: close the last hit group and the last record.
    fn finish(&mut self) -> Option<QueryRecord> {
        self.flush_subject();
        self.query.take().map(QueryRecordBuilder::freeze)
    }

    /// Apply the empty-record policy; `None` means skip.
    fn admit(&mut self, record: QueryRecord) -> Option<QueryRecord> {
        if record.is_empty() && !self.config.emit_empty_records {
            debug!(query = %record.label(), "skipping empty record");
            return None;
        }
        self.emitted += 1;
        Some(record)
    }

    fn fail(&mut self, err: BlastGroupError) -> Option<Result<QueryRecord>> {
        self.done = true;
        self.query = None;
        self.subject = None;
        Some(Err(err))
    }
}

impl<I> Iterator for GroupingEngine<I>
where
    I: Iterator<Item = Result<AlignmentTuple>>,
{
    type Item = Result<QueryRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            match self.source.next() {
                Some(Ok(tuple)) => {
                    if let Err(err) = validate(&tuple) {
                        return self.fail(err);
                    }
                    if let Some(record) = self.absorb(tuple) {
                        if let Some(record) = self.admit(record) {
                            return Some(Ok(record));
                        }
                    }
                }
                Some(Err(err)) => return self.fail(err),
                None => {
                    self.done = true;
                    let record = self.finish()?;
                    return self.admit(record).map(Ok);
                }
            }
        }
    }
}

impl<I> GroupingEngine<std::iter::Map<I, fn(AlignmentTuple) -> Result<AlignmentTuple>>>
where
    I: Iterator<Item = AlignmentTuple>,
{
    /// Engine over an infallible tuple source
    pub fn from_tuples<S>(tuples: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        let wrap: fn(AlignmentTuple) -> Result<AlignmentTuple> = Ok;
        Self::build(tuples.into_iter().map(wrap), GroupingConfig::default())
    }
}

/// A tuple must carry both ids before its submatch can be placed.
fn validate(tuple: &AlignmentTuple) -> Result<()> {
    if tuple.subject_id.is_empty() {
        return Err(BlastGroupError::MalformedStream {
            line: tuple.line,
            reason: "submatch arrived before any subject id was established".to_string(),
        });
    }
    if tuple.query_id.is_empty() {
        return Err(BlastGroupError::MalformedStream {
            line: tuple.line,
            reason: "submatch arrived before any query id was established".to_string(),
        });
    }
    Ok(())
}

/// Flatten records back into tuples, preserving emitted order.
pub fn flatten_records<'a, R>(records: R) -> impl Iterator<Item = AlignmentTuple> + 'a
where
    R: IntoIterator<Item = &'a QueryRecord>,
    R::IntoIter: 'a,
{
    records.into_iter().flat_map(|record| {
        record.submatches().map(move |(subject_id, submatch)| AlignmentTuple {
            query_id: record.query_id().to_string(),
            subject_id: subject_id.to_string(),
            submatch: submatch.clone(),
            line: None,
        })
    })
}

/// Group a whole tuple stream and collect the records.
pub fn group_all<S>(source: S, config: GroupingConfig) -> Result<Vec<QueryRecord>>
where
    S: IntoIterator<Item = Result<AlignmentTuple>>,
{
    GroupingEngine::with_config(source, config)?.collect()
}
