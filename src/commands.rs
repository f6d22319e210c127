//! Subcommand drivers used by the `blastgroup` binary.

use crate::blastinput::{CoverArgs, CsvArgs, ListArgs, OrthoArgs, ReadOptions, StoreArgs};
use crate::group::GroupingEngine;
use crate::logging::spinner;
use crate::post::cover::{accumulate, long_enough, Coverage};
use crate::post::ortho::{best_hits_both, reciprocal_best_hits, write_pairs};
use crate::report::{CsvReport, NameTables};
use crate::sequence::{sequence_lengths, NameTable};
use crate::store::{store_records, RecordStore, PROGRESS_INTERVAL};
use crate::tokenize::{open_report, TupleSource};
use crate::utils::shorten_default;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

fn open_input(path: &Path, read: &ReadOptions) -> Result<TupleSource> {
    open_report(path, read.format, read.gzip, read.columns())
        .with_context(|| format!("Failed to open BLAST report {}", path.display()))
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn load_names(path: &Path) -> Result<NameTable> {
    info!(path = %path.display(), "reading sequence names");
    NameTable::from_fasta(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// `csv`: one row per submatch
pub fn run_csv(args: CsvArgs) -> Result<()> {
    let tuples = open_input(&args.report, &args.read)?;
    let out = open_output(args.out.as_deref())?;

    let mut report = match (&args.query_names, &args.subject_names) {
        (Some(q), Some(s)) => CsvReport::with_names(
            out,
            NameTables {
                query: load_names(q)?,
                subject: load_names(s)?,
            },
        ),
        _ => CsvReport::new(out),
    };

    let bar = spinner("records", args.read.verbose);
    let mut records = 0usize;
    for record in GroupingEngine::new(tuples) {
        let record = record.with_context(|| format!("Failed to group {}", args.report.display()))?;
        report.write_query(&record)?;
        records += 1;
        bar.inc(1);
        if records % PROGRESS_INTERVAL == 0 {
            debug!(records, query = %record.label(), "converting");
        }
    }
    report.flush()?;
    bar.finish_and_clear();

    info!(records, rows = report.rows(), "wrote CSV");
    Ok(())
}

/// `store`: persist records keyed by query id
pub fn run_store(args: StoreArgs) -> Result<()> {
    let config = args.grouping_config();
    let tuples = open_input(&args.report, &args.read)?;
    let engine = GroupingEngine::with_config(tuples, config.clone())
        .context("Invalid grouping options")?;
    let mut store = RecordStore::open(&args.db)
        .with_context(|| format!("Failed to open record store {}", args.db.display()))?;

    let bar = spinner("records", args.read.verbose);
    let stored = store_records(
        engine.inspect(|_| bar.inc(1)),
        &mut store,
        config.ignore_empty_records,
    )
    .with_context(|| format!("Failed to store records from {}", args.report.display()))?;
    bar.finish_and_clear();

    info!(stored, db = %args.db.display(), "done");
    Ok(())
}

/// `list`: stored records in key order
pub fn run_list(args: ListArgs) -> Result<()> {
    let store = RecordStore::open(&args.db)
        .with_context(|| format!("Failed to open record store {}", args.db.display()))?;
    let mut out = open_output(None)?;
    for record in store.iter()? {
        if args.full {
            writeln!(
                out,
                "{}\t{}\t{}",
                record.query_id(),
                record.len(),
                record.submatch_count()
            )?;
        } else {
            writeln!(out, "{}", record.label())?;
            for group in record.iter() {
                writeln!(out, "  {}", group.label())?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// `cover`: fraction of reference bases hit by long queries
pub fn run_cover(args: CoverArgs) -> Result<()> {
    let reference = sequence_lengths(&args.reference)
        .with_context(|| format!("Failed to read {}", args.reference.display()))?;
    let query_lengths = sequence_lengths(&args.queries)
        .with_context(|| format!("Failed to read {}", args.queries.display()))?;
    let queries = long_enough(&query_lengths, args.min_query_len);
    info!(
        references = reference.len(),
        queries = queries.len(),
        min_query_len = args.min_query_len,
        "loaded sequences"
    );

    let mut coverage = Coverage::new(&reference, queries, args.min_score);
    let tuples = open_input(&args.report, &args.read)?;
    let bar = spinner("records", args.read.verbose);
    accumulate(&mut coverage, GroupingEngine::new(tuples).inspect(|_| bar.inc(1)))
        .with_context(|| format!("Failed to read {}", args.report.display()))?;
    bar.finish_and_clear();
    if coverage.clipped() > 0 {
        warn!(clipped = coverage.clipped(), "submatches clipped to reference length");
    }

    let summary = coverage.summary();
    let mut out = open_output(None)?;
    writeln!(out, "total bases in reference: {}", summary.total_bases)?;
    writeln!(out, "total ref bases covered : {}", summary.covered_bases)?;
    writeln!(out, "fraction                : {}", summary.fraction())?;
    writeln!(out, "reference               : {}", args.reference.display())?;
    writeln!(out, "blast file              : {}", args.report.display())?;
    writeln!(out, "query sequences         : {}", args.queries.display())?;
    out.flush()?;
    Ok(())
}

/// `ortho`: reciprocal best hits as CSV
pub fn run_ortho(args: OrthoArgs) -> Result<()> {
    let query_names = load_names(&args.query_seqs)?;
    let against_names = load_names(&args.against_seqs)?;

    let (ab, ba) = best_hits_both(
        &args.a_vs_b,
        &args.b_vs_a,
        args.read.format,
        args.read.gzip,
        args.read.columns(),
    )
    .context("Failed to collect best hits")?;
    info!(a_queries = ab.len(), b_queries = ba.len(), "calculating reciprocal best hits");

    let pairs = reciprocal_best_hits(&ab, &ba);
    for (a, b) in pairs.iter().take(5) {
        debug!(a = %shorten_default(a), b = %shorten_default(b), "reciprocal pair");
    }

    let written = write_pairs(
        open_output(args.out.as_deref())?,
        &pairs,
        &query_names,
        &against_names,
    )?;
    info!(pairs = written, "wrote reciprocal best hits");
    Ok(())
}
