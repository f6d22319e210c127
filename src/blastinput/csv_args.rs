use super::blast_args::ReadOptions;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CsvArgs {
    /// BLAST report to convert
    pub report: PathBuf,
    /// FASTA of the query sequences; adds description columns
    #[arg(long, requires = "subject_names")]
    pub query_names: Option<PathBuf>,
    /// FASTA of the database sequences; adds description columns
    #[arg(long, requires = "query_names")]
    pub subject_names: Option<PathBuf>,
    /// Output file (default: stdout)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    #[command(flatten)]
    pub read: ReadOptions,
}
