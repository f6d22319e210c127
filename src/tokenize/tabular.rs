//! BLAST tabular output (outfmt 6 and 7).
//!
//! Column order follows an NCBI-style field spec such as
//! `"6 qseqid sseqid pident length mismatch gapopen qstart qend sstart send evalue bitscore"`.
//! `std` expands to those twelve columns.

use crate::error::{BlastGroupError, Result};
use crate::record::{expect_to_exponent, Submatch, SubmatchFields};
use super::{parse_expect, AlignmentTuple};
use std::io::{BufRead, Lines};

/// Standard outfmt 6 columns
pub const STANDARD_COLUMNS: &[&str] = &[
    "qseqid", "sseqid", "pident", "length", "mismatch", "gapopen", "qstart", "qend", "sstart",
    "send", "evalue", "bitscore",
];

/// A tabular column the tokenizer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    QueryId,
    SubjectId,
    Identity,
    QueryStart,
    QueryEnd,
    SubjectStart,
    SubjectEnd,
    Expect,
    BitScore,
    RawScore,
    QueryFrame,
    SubjectFrame,
    Frames,
    QuerySeq,
    SubjectSeq,
    /// Present in the file but not used
    Ignored,
}

impl Column {
    pub fn from_name(name: &str) -> Column {
        match name {
            "qseqid" | "qaccver" | "qacc" => Column::QueryId,
            "sseqid" | "saccver" | "sacc" => Column::SubjectId,
            "pident" => Column::Identity,
            "qstart" => Column::QueryStart,
            "qend" => Column::QueryEnd,
            "sstart" => Column::SubjectStart,
            "send" => Column::SubjectEnd,
            "evalue" => Column::Expect,
            "bitscore" => Column::BitScore,
            "score" => Column::RawScore,
            "qframe" => Column::QueryFrame,
            "sframe" => Column::SubjectFrame,
            "frames" => Column::Frames,
            "qseq" => Column::QuerySeq,
            "sseq" => Column::SubjectSeq,
            _ => Column::Ignored,
        }
    }
}

/// Column order of a tabular report
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    columns: Vec<Column>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        ColumnLayout {
            columns: STANDARD_COLUMNS.iter().map(|c| Column::from_name(c)).collect(),
        }
    }
}

impl ColumnLayout {
    /// Parse a field spec; a leading `6`/`7` format number is optional.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut words = spec.split_whitespace().peekable();
        if let Some(&first) = words.peek() {
            if first == "6" || first == "7" {
                words.next();
            }
        }

        let mut columns = Vec::new();
        for word in words {
            if word == "std" {
                columns.extend(STANDARD_COLUMNS.iter().map(|c| Column::from_name(c)));
            } else {
                columns.push(Column::from_name(word));
            }
        }
        if columns.is_empty() {
            return Ok(ColumnLayout::default());
        }

        let layout = ColumnLayout { columns };
        layout.check()?;
        Ok(layout)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn has(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    fn check(&self) -> Result<()> {
        let required = [
            (Column::QueryId, "qseqid"),
            (Column::SubjectId, "sseqid"),
            (Column::QueryStart, "qstart"),
            (Column::QueryEnd, "qend"),
            (Column::SubjectStart, "sstart"),
            (Column::SubjectEnd, "send"),
            (Column::Expect, "evalue"),
        ];
        for (column, name) in required {
            if !self.has(column) {
                return Err(BlastGroupError::Configuration(format!(
                    "tabular layout is missing the {} column",
                    name
                )));
            }
        }
        if !self.has(Column::BitScore) && !self.has(Column::RawScore) {
            return Err(BlastGroupError::Configuration(
                "tabular layout needs a bitscore or score column".to_string(),
            ));
        }
        Ok(())
    }
}

/// Streaming tokenizer over tabular lines
pub struct TabularTokenizer<R> {
    lines: Lines<R>,
    layout: ColumnLayout,
    line_no: usize,
}

impl<R: BufRead> TabularTokenizer<R> {
    /// Tokenizer for the 12 standard columns
    pub fn new(reader: R) -> Self {
        Self::with_layout(reader, ColumnLayout::default())
    }

    pub fn with_layout(reader: R, layout: ColumnLayout) -> Self {
        TabularTokenizer {
            lines: reader.lines(),
            layout,
            line_no: 0,
        }
    }

    fn parse_line(&self, line: &str) -> Result<AlignmentTuple> {
        let n = self.line_no;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < self.layout.columns.len() {
            return Err(BlastGroupError::parse(
                n,
                format!(
                    "expected {} tab-separated fields, found {}",
                    self.layout.columns.len(),
                    fields.len()
                ),
            ));
        }

        let mut query_id = String::new();
        let mut subject_id = String::new();
        let mut fields_out = SubmatchFields::default();
        let mut bit_score = None;
        let mut raw_score = None;

        for (column, raw) in self.layout.columns.iter().zip(fields.iter()) {
            let raw = raw.trim();
            match column {
                Column::QueryId => query_id = raw.to_string(),
                Column::SubjectId => subject_id = raw.to_string(),
                Column::Identity => fields_out.identity_percent = number(raw, "pident", n)?,
                Column::QueryStart => fields_out.query_start = number(raw, "qstart", n)?,
                Column::QueryEnd => fields_out.query_end = number(raw, "qend", n)?,
                Column::SubjectStart => fields_out.subject_start = number(raw, "sstart", n)?,
                Column::SubjectEnd => fields_out.subject_end = number(raw, "send", n)?,
                Column::Expect => {
                    let expect = parse_expect(raw).ok_or_else(|| {
                        BlastGroupError::parse(n, format!("invalid evalue '{}'", raw))
                    })?;
                    fields_out.expect_exponent = expect_to_exponent(expect);
                }
                Column::BitScore => bit_score = Some(number::<f64>(raw, "bitscore", n)?),
                Column::RawScore => raw_score = Some(number::<f64>(raw, "score", n)?),
                Column::QueryFrame => fields_out.frame_query = Some(number(raw, "qframe", n)?),
                Column::SubjectFrame => fields_out.frame_subject = Some(number(raw, "sframe", n)?),
                Column::Frames => {
                    let (q, s) = raw.split_once('/').ok_or_else(|| {
                        BlastGroupError::parse(n, format!("invalid frames '{}'", raw))
                    })?;
                    fields_out.frame_query = Some(number(q, "frames", n)?);
                    fields_out.frame_subject = Some(number(s, "frames", n)?);
                }
                Column::QuerySeq => fields_out.query_sequence = raw.to_string(),
                Column::SubjectSeq => fields_out.subject_sequence = raw.to_string(),
                Column::Ignored => {}
            }
        }
        fields_out.score = bit_score.or(raw_score).unwrap_or_default();

        Ok(AlignmentTuple::new(query_id, subject_id, Submatch::new(fields_out)).at_line(n))
    }
}

fn number<T: std::str::FromStr>(raw: &str, field: &str, line: usize) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| BlastGroupError::parse(line, format!("invalid {} '{}'", field, raw)))
}

impl<R: BufRead> Iterator for TabularTokenizer<R> {
    type Item = Result<AlignmentTuple>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            return Some(self.parse_line(line));
        }
    }
}
