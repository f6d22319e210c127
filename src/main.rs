use anyhow::Result;
use blastgroup::blastinput::{CoverArgs, CsvArgs, ListArgs, OrthoArgs, StoreArgs};
use blastgroup::{commands, logging};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blastgroup")]
#[command(version = "0.1.0")]
#[command(about = "Group BLAST reports into per-query records and analyse them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a report to CSV (one row per submatch)
    Csv(CsvArgs),

    /// Store grouped records in an SQLite database keyed by query id
    Store(StoreArgs),

    /// List records held in a database
    List(ListArgs),

    /// Fraction of a reference covered by BLAST matches
    Cover(CoverArgs),

    /// Reciprocal best hits between two searches
    Ortho(OrthoArgs),
}

fn main() -> Result<()> {
    logging::init("info");
    let cli = Cli::parse();

    match cli.command {
        Commands::Csv(args) => commands::run_csv(args)?,
        Commands::Store(args) => commands::run_store(args)?,
        Commands::List(args) => commands::run_list(args)?,
        Commands::Cover(args) => commands::run_cover(args)?,
        Commands::Ortho(args) => commands::run_ortho(args)?,
    }
    Ok(())
}
