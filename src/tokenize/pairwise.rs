//! BLAST pairwise text output (outfmt 0).
//!
//! Recognised lines:
//!
//! ```text
//! Query= q1 description
//! >subject_id description
//!  Score = 185 bits (200),  Expect = 1e-50
//!  Identities = 95/100 (95%), Gaps = 0/100 (0%)
//!  Frame = +1/-2
//! Query  1    MVLSPADKTN  10
//! Sbjct  5    MVLSPADKTN  14
//! ```
//!
//! Everything else (banners, database summaries, `Length=` lines, match
//! lines between rows) is skipped. Each `Score =` line opens a submatch that
//! closes at the next `Score =`, subject, query or footer line.

use super::{parse_expect, AlignmentTuple};
use crate::error::{BlastGroupError, Result};
use crate::record::{expect_to_exponent, Submatch, SubmatchFields};
use std::io::{BufRead, Lines};

/// Submatch being assembled from a `Score =` block
#[derive(Debug, Default)]
struct PendingHsp {
    line: usize,
    fields: SubmatchFields,
    query_rows: usize,
    subject_rows: usize,
}

impl PendingHsp {
    fn add_row(&mut self, row: AlignmentRow, is_query: bool) {
        let f = &mut self.fields;
        if is_query {
            if self.query_rows == 0 {
                f.query_start = row.start;
            }
            f.query_end = row.end;
            f.query_sequence.push_str(row.residues);
            self.query_rows += 1;
        } else {
            if self.subject_rows == 0 {
                f.subject_start = row.start;
            }
            f.subject_end = row.end;
            f.subject_sequence.push_str(row.residues);
            self.subject_rows += 1;
        }
    }
}

struct AlignmentRow<'a> {
    start: i64,
    residues: &'a str,
    end: i64,
}

/// Streaming tokenizer over a pairwise report
pub struct PairwiseTokenizer<R> {
    lines: Lines<R>,
    line_no: usize,
    query_id: Option<String>,
    subject_id: Option<String>,
    hsp: Option<PendingHsp>,
    done: bool,
}

impl<R: BufRead> PairwiseTokenizer<R> {
    pub fn new(reader: R) -> Self {
        PairwiseTokenizer {
            lines: reader.lines(),
            line_no: 0,
            query_id: None,
            subject_id: None,
            hsp: None,
            done: false,
        }
    }

    /// Emit the open submatch under the ids current at the time it was read.
    ///
    /// Missing ids become empty strings, which the grouping engine reports
    /// as a malformed stream.
    fn close_hsp(&mut self) -> Option<Result<AlignmentTuple>> {
        let hsp = self.hsp.take()?;
        if hsp.query_rows == 0 || hsp.subject_rows == 0 {
            return Some(Err(BlastGroupError::parse(
                hsp.line,
                "alignment block has no Query/Sbjct rows",
            )));
        }
        let tuple = AlignmentTuple::new(
            self.query_id.clone().unwrap_or_default(),
            self.subject_id.clone().unwrap_or_default(),
            Submatch::new(hsp.fields),
        )
        .at_line(hsp.line);
        Some(Ok(tuple))
    }

    fn handle_line(&mut self, line: &str) -> Option<Result<AlignmentTuple>> {
        let n = self.line_no;
        let trimmed = line.trim_start();

        if let Some(rest) = line.strip_prefix("Query=") {
            let closed = self.close_hsp();
            self.query_id = rest.split_whitespace().next().map(str::to_string);
            self.subject_id = None;
            return closed;
        }

        if let Some(rest) = line.strip_prefix('>') {
            let closed = self.close_hsp();
            self.subject_id = rest.split_whitespace().next().map(str::to_string);
            return closed;
        }

        if trimmed.starts_with("Score =") || trimmed.starts_with("Score=") {
            let closed = self.close_hsp();
            match parse_score_line(trimmed, n) {
                Ok(fields) => {
                    self.hsp = Some(PendingHsp {
                        line: n,
                        fields,
                        ..Default::default()
                    });
                }
                Err(e) => return Some(Err(e)),
            }
            return closed;
        }

        if is_footer(trimmed) {
            return self.close_hsp();
        }

        let hsp = self.hsp.as_mut()?;

        if let Some(rest) = trimmed.strip_prefix("Identities") {
            match parse_identity(rest) {
                Some(pct) => hsp.fields.identity_percent = pct,
                None => {
                    return Some(Err(BlastGroupError::parse(
                        n,
                        format!("invalid Identities line '{}'", trimmed),
                    )))
                }
            }
        } else if let Some(rest) = trimmed.strip_prefix("Frame") {
            match parse_frames(rest) {
                Some((q, s)) => {
                    hsp.fields.frame_query = q;
                    hsp.fields.frame_subject = s;
                }
                None => {
                    return Some(Err(BlastGroupError::parse(
                        n,
                        format!("invalid Frame line '{}'", trimmed),
                    )))
                }
            }
        } else if let Some(rest) = line.strip_prefix("Query") {
            match parse_row(rest) {
                Some(Ok(row)) => hsp.add_row(row, true),
                Some(Err(msg)) => return Some(Err(BlastGroupError::parse(n, msg))),
                None => {}
            }
        } else if let Some(rest) = line.strip_prefix("Sbjct") {
            match parse_row(rest) {
                Some(Ok(row)) => hsp.add_row(row, false),
                Some(Err(msg)) => return Some(Err(BlastGroupError::parse(n, msg))),
                None => {}
            }
        }
        None
    }
}

impl<R: BufRead> Iterator for PairwiseTokenizer<R> {
    type Item = Result<AlignmentTuple>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                None => {
                    self.done = true;
                    return self.close_hsp();
                }
            };
            self.line_no += 1;
            let line = line.trim_end_matches('\r');
            if let Some(item) = self.handle_line(line) {
                if item.is_err() {
                    self.done = true;
                }
                return Some(item);
            }
        }
    }
}

/// Lines that end the alignment section of a query
fn is_footer(trimmed: &str) -> bool {
    trimmed.starts_with("Lambda")
        || trimmed.starts_with("Database:")
        || trimmed.starts_with("Effective search space")
        || trimmed.starts_with("Matrix:")
        || trimmed.starts_with("Gap Penalties:")
}

/// ` Score = 185 bits (200),  Expect = 1e-50` (also `Expect(2) = ...`)
fn parse_score_line(trimmed: &str, line: usize) -> Result<SubmatchFields> {
    let bad = || BlastGroupError::parse(line, format!("invalid Score line '{}'", trimmed));

    let after_score = trimmed
        .strip_prefix("Score")
        .and_then(|rest| rest.trim_start().strip_prefix('='))
        .ok_or_else(bad)?;
    let score: f64 = after_score
        .split_whitespace()
        .next()
        .and_then(|tok| tok.parse().ok())
        .ok_or_else(bad)?;

    let expect_pos = trimmed.find("Expect").ok_or_else(bad)?;
    let after_expect = &trimmed[expect_pos..];
    let eq = after_expect.find('=').ok_or_else(bad)?;
    let expect = after_expect[eq + 1..]
        .split_whitespace()
        .next()
        .and_then(parse_expect)
        .ok_or_else(bad)?;

    Ok(SubmatchFields {
        score,
        expect_exponent: expect_to_exponent(expect),
        ..Default::default()
    })
}

/// ` = 95/100 (95%), ...` → 95.0; falls back to the ratio when no percentage is printed
fn parse_identity(rest: &str) -> Option<f64> {
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    if let (Some(open), Some(pct)) = (rest.find('('), rest.find('%')) {
        if open < pct {
            return rest[open + 1..pct].trim().parse().ok();
        }
    }
    let ratio = rest.split(|c: char| c == ',' || c.is_whitespace()).next()?;
    let (num, den) = ratio.split_once('/')?;
    let num: f64 = num.parse().ok()?;
    let den: f64 = den.parse().ok()?;
    if den == 0.0 {
        return None;
    }
    Some(100.0 * num / den)
}

/// ` = +1/-2` or ` = -3`
fn parse_frames(rest: &str) -> Option<(Option<i32>, Option<i32>)> {
    let rest = rest.trim_start().strip_prefix('=')?.trim();
    let token = rest.split_whitespace().next()?;
    match token.split_once('/') {
        Some((q, s)) => Some((Some(q.parse().ok()?), Some(s.parse().ok()?))),
        None => Some((Some(token.parse().ok()?), None)),
    }
}

/// Text after `Query`/`Sbjct`: `  1    MVLSP  60` or `: 1 MVLSP 60`.
///
/// `None` when the line is not an alignment row at all.
fn parse_row(rest: &str) -> Option<std::result::Result<AlignmentRow<'_>, String>> {
    let rest = rest.strip_prefix(':').unwrap_or(rest);
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.len() < 2 {
        return Some(Err(format!("alignment row too short: '{}'", rest.trim())));
    }
    let start = match tokens[0].parse() {
        Ok(v) => v,
        Err(_) => return Some(Err(format!("invalid row start '{}'", tokens[0]))),
    };
    let last = tokens[tokens.len() - 1];
    let end = match last.parse() {
        Ok(v) => v,
        Err(_) => return Some(Err(format!("invalid row end '{}'", last))),
    };
    // Elided rows ("[... 120 aa ...]") carry coordinates only
    let residues = if tokens.len() == 3 { tokens[1] } else { "" };
    Some(Ok(AlignmentRow { start, residues, end }))
}
