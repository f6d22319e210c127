use super::blast_args::ReadOptions;
use crate::group::GroupingConfig;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct StoreArgs {
    /// BLAST report to load
    pub report: PathBuf,
    /// SQLite database to write (created if missing)
    pub db: PathBuf,
    /// Skip queries left without hits
    #[arg(short = 'n', long, default_value_t = false)]
    pub ignore_empty_hits: bool,
    /// Keep queries left without hits as empty records
    #[arg(long, default_value_t = false, conflicts_with = "ignore_empty_hits")]
    pub keep_empty_hits: bool,
    /// Drop submatches scoring below this
    #[arg(long)]
    pub min_score: Option<f64>,
    /// Drop submatches with a larger expect value
    #[arg(long)]
    pub max_expect: Option<f64>,
    #[command(flatten)]
    pub read: ReadOptions,
}

impl StoreArgs {
    /// Engine options; filters without an explicit policy skip empty records
    pub fn grouping_config(&self) -> GroupingConfig {
        let filtered = self.min_score.is_some() || self.max_expect.is_some();
        GroupingConfig {
            ignore_empty_records: self.ignore_empty_hits
                || (filtered && !self.keep_empty_hits),
            emit_empty_records: self.keep_empty_hits,
            min_score: self.min_score,
            max_expect: self.max_expect,
        }
    }
}
