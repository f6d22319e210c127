//! Options shared by every command that reads a BLAST report.

use crate::tokenize::ReportFormat;
use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct ReadOptions {
    /// Report layout: auto, tabular (6/7) or pairwise (0)
    #[arg(long, default_value = "auto")]
    pub format: ReportFormat,
    /// Input is gzip-compressed (implied for *.gz paths)
    #[arg(short = 'z', long, default_value_t = false)]
    pub gzip: bool,
    /// Tabular column layout, NCBI -outfmt style.
    ///
    /// Default: qseqid sseqid pident length mismatch gapopen qstart qend sstart send evalue bitscore
    #[arg(long)]
    pub columns: Option<String>,
    /// Show a progress spinner on stderr
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

impl ReadOptions {
    pub fn columns(&self) -> Option<&str> {
        self.columns.as_deref()
    }
}
