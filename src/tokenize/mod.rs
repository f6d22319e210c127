//! BLAST report tokenizers.
//!
//! A tokenizer turns a report into the flat, ordered stream of
//! `(query id, subject id, submatch)` tuples consumed by the grouping
//! engine. Two report layouts are read:
//!
//! - `tabular` - outfmt 6/7 (tab-separated, `#` comments)
//! - `pairwise` - outfmt 0 (traditional text report)

pub mod pairwise;
pub mod tabular;

pub use pairwise::PairwiseTokenizer;
pub use tabular::{Column, ColumnLayout, TabularTokenizer};

use crate::error::{BlastGroupError, Result};
use crate::record::Submatch;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// One elementary alignment as produced by a tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentTuple {
    pub query_id: String,
    pub subject_id: String,
    pub submatch: Submatch,
    /// Report line the submatch was read from, when known
    pub line: Option<usize>,
}

impl AlignmentTuple {
    pub fn new(query_id: impl Into<String>, subject_id: impl Into<String>, submatch: Submatch) -> Self {
        AlignmentTuple {
            query_id: query_id.into(),
            subject_id: subject_id.into(),
            submatch,
            line: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// Boxed tuple stream returned by [`open_report`]
pub type TupleSource = Box<dyn Iterator<Item = Result<AlignmentTuple>>>;

/// Report layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Decide from the first non-blank line
    #[default]
    Auto,
    /// outfmt 6/7
    Tabular,
    /// outfmt 0
    Pairwise,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ReportFormat::Auto),
            "tabular" | "6" | "7" => Ok(ReportFormat::Tabular),
            "pairwise" | "0" => Ok(ReportFormat::Pairwise),
            other => Err(format!(
                "Unsupported report format: {}. Supported: auto, tabular (6/7), pairwise (0)",
                other
            )),
        }
    }
}

/// Guess the layout from the start of a report.
///
/// Tab-separated or `#`-commented text is tabular; anything carrying a
/// program banner or a `Query=` line is pairwise.
pub fn sniff_format(head: &str) -> ReportFormat {
    for line in head.lines() {
        let line = line.trim_end();
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with('#') || line.contains('\t') {
            return ReportFormat::Tabular;
        }
        return ReportFormat::Pairwise;
    }
    ReportFormat::Tabular
}

/// Open a report file and return its tuple stream.
///
/// Input is gunzipped when `gzip` is set or the path ends in `.gz`.
/// `columns` is an outfmt-style field spec for tabular input (`None` for
/// the 12 standard columns).
pub fn open_report(
    path: &Path,
    format: ReportFormat,
    gzip: bool,
    columns: Option<&str>,
) -> Result<TupleSource> {
    let file = File::open(path)?;
    let compressed = gzip || path.extension().map_or(false, |ext| ext == "gz");
    let inner: Box<dyn Read> = if compressed {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };
    let reader = BufReader::new(inner);
    debug!(path = %path.display(), compressed, "opening report");
    tokenize_reader(reader, format, columns)
}

/// Tokenize any buffered reader (see [`open_report`]).
pub fn tokenize_reader<R>(
    mut reader: R,
    format: ReportFormat,
    columns: Option<&str>,
) -> Result<TupleSource>
where
    R: BufRead + 'static,
{
    let format = match format {
        ReportFormat::Auto => {
            let head = String::from_utf8_lossy(reader.fill_buf()?).into_owned();
            let sniffed = sniff_format(&head);
            debug!(?sniffed, "detected report format");
            sniffed
        }
        other => other,
    };

    match format {
        ReportFormat::Pairwise => {
            if columns.is_some() {
                return Err(BlastGroupError::Configuration(
                    "column specs only apply to tabular reports".to_string(),
                ));
            }
            Ok(Box::new(PairwiseTokenizer::new(reader)))
        }
        _ => {
            let layout = match columns {
                Some(spec) => ColumnLayout::parse(spec)?,
                None => ColumnLayout::default(),
            };
            Ok(Box::new(TabularTokenizer::with_layout(reader, layout)))
        }
    }
}

/// Parse an expect string as printed by BLAST.
///
/// Old reports drop the mantissa of very small values (`e-150`).
pub(crate) fn parse_expect(raw: &str) -> Option<f64> {
    let raw = raw.trim().trim_end_matches(',');
    if raw.starts_with('e') || raw.starts_with('E') {
        return format!("1{}", raw).parse().ok();
    }
    raw.parse().ok()
}
