//! CSV export of query records, one row per submatch.

use super::evalue::format_expect;
use crate::error::Result;
use crate::record::QueryRecord;
use crate::sequence::NameTable;
use std::io::Write;

/// Query and subject description tables for the six-column layout
#[derive(Debug, Clone, Default)]
pub struct NameTables {
    pub query: NameTable,
    pub subject: NameTable,
}

/// Row sink over a [`csv::Writer`].
///
/// Without name tables each row is `query, subject, score, expect`; with
/// them it is `query, query_descr, subject, subject_descr, score, expect`.
/// No header row is written.
pub struct CsvReport<W: Write> {
    writer: csv::Writer<W>,
    names: Option<NameTables>,
    rows: usize,
}

impl<W: Write> CsvReport<W> {
    pub fn new(out: W) -> Self {
        CsvReport {
            writer: csv::WriterBuilder::new().has_headers(false).from_writer(out),
            names: None,
            rows: 0,
        }
    }

    pub fn with_names(out: W, names: NameTables) -> Self {
        CsvReport {
            names: Some(names),
            ..Self::new(out)
        }
    }

    /// Rows written so far
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Write every submatch of `record`; returns the number of rows added.
    pub fn write_query(&mut self, record: &QueryRecord) -> Result<usize> {
        let query = record.query_id();
        let mut written = 0;
        for (subject, submatch) in record.submatches() {
            let score = submatch.score().to_string();
            let expect = format_expect(submatch.expect());
            match &self.names {
                Some(names) => self.writer.write_record([
                    query,
                    names.query.description(query),
                    subject,
                    names.subject.description(subject),
                    score.as_str(),
                    expect.as_str(),
                ])?,
                None => self
                    .writer
                    .write_record([query, subject, score.as_str(), expect.as_str()])?,
            }
            written += 1;
        }
        self.rows += written;
        Ok(written)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()).into())
    }
}
