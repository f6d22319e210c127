//! Error types for blastgroup
//!
//! One enum covers the grouping engine and its collaborators. Collaborator
//! failures (I/O, SQLite, JSON, CSV) are wrapped unchanged so callers see the
//! original cause through `source()`.

use thiserror::Error;

/// Result type alias for blastgroup operations
pub type Result<T> = std::result::Result<T, BlastGroupError>;

/// Errors raised while tokenizing, grouping, storing or exporting records
#[derive(Debug, Error)]
pub enum BlastGroupError {
    /// A submatch arrived without an established query or subject context.
    ///
    /// Fatal: the record sequence stops at this point.
    #[error("malformed alignment stream{}: {reason}", fmt_line(.line))]
    MalformedStream {
        /// Report line the tuple came from, when the tokenizer knows it
        line: Option<usize>,
        /// What was missing
        reason: String,
    },

    /// Invalid combination of grouping options
    #[error("invalid grouping configuration: {0}")]
    Configuration(String),

    /// A report line could not be tokenized
    #[error("parse error at line {line}: {msg}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Error message
        msg: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record store (SQLite) error
    #[error("record store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// Record (de)serialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl BlastGroupError {
    /// Build a [`BlastGroupError::Parse`]
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        BlastGroupError::Parse {
            line,
            msg: msg.into(),
        }
    }

    /// True for the fatal stream-consistency error
    pub fn is_malformed_stream(&self) -> bool {
        matches!(self, BlastGroupError::MalformedStream { .. })
    }
}

fn fmt_line(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" at line {}", n),
        None => String::new(),
    }
}
