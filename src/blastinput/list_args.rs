use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// SQLite database written by `store`
    pub db: PathBuf,
    /// One `query<TAB>hit groups<TAB>submatches` line per record, full ids
    #[arg(long, default_value_t = false)]
    pub full: bool,
}
