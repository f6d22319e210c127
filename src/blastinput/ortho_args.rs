use super::blast_args::ReadOptions;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct OrthoArgs {
    /// FASTA of set A (descriptions)
    pub query_seqs: PathBuf,
    /// FASTA of set B (descriptions)
    pub against_seqs: PathBuf,
    /// Report of A searched against B
    pub a_vs_b: PathBuf,
    /// Report of B searched against A
    pub b_vs_a: PathBuf,
    /// Output file (default: stdout)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    #[command(flatten)]
    pub read: ReadOptions,
}
