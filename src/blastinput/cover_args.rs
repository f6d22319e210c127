use super::blast_args::ReadOptions;
use crate::post::cover::DEFAULT_MIN_SCORE;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CoverArgs {
    /// Reference FASTA whose bases are counted
    pub reference: PathBuf,
    /// BLAST report of queries against the reference
    pub report: PathBuf,
    /// Only queries at least this long contribute
    pub min_query_len: usize,
    /// Query FASTA (for sequence lengths)
    pub queries: PathBuf,
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
    pub min_score: f64,
    #[command(flatten)]
    pub read: ReadOptions,
}
