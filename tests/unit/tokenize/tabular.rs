//! Tabular (outfmt 6/7) reports through the grouping engine

use super::super::helpers::{hg, qr, shape, tabular_line, write_temp};
use blastgroup::tokenize::{open_report, ReportFormat};
use blastgroup::{GroupingEngine, QueryRecord, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

fn report() -> String {
    let mut text = String::from("# BLASTN 2.15.0+\n# Query: q1\n# 3 hits found\n");
    text.push_str(&tabular_line("q1", "chr1", 1, 50, "1e-20", 90.0));
    text.push_str(&tabular_line("q1", "chr1", 200, 151, "2e-10", 60.0));
    text.push_str(&tabular_line("q1", "chr2", 10, 40, "0.001", 30.0));
    text.push_str("# Query: q2\n");
    text.push_str(&tabular_line("q2", "chr1", 300, 340, "0.0", 120.0));
    text
}

fn read_all(path: &std::path::Path, format: ReportFormat, gzip: bool) -> Vec<QueryRecord> {
    let tuples = open_report(path, format, gzip, None).unwrap();
    GroupingEngine::new(tuples).collect::<Result<Vec<_>>>().unwrap()
}

#[test]
fn test_outfmt7_file_groups_by_query_and_subject() {
    let file = write_temp(&report(), ".tsv");
    let records = read_all(file.path(), ReportFormat::Auto, false);
    assert_eq!(
        shape(&records),
        vec![
            qr("q1", vec![hg("chr1", &[90.0, 60.0]), hg("chr2", &[30.0])]),
            qr("q2", vec![hg("chr1", &[120.0])]),
        ]
    );
    let reverse = &records[0][0][1];
    assert!(reverse.is_reverse_subject());
    assert_eq!(reverse.subject_span(), (151, 200));
    assert_eq!(records[1][0][0].expect(), 0.0);
}

#[test]
fn test_gzip_detected_from_extension() {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(report().as_bytes()).unwrap();
    let bytes = encoder.finish().unwrap();

    let mut file = tempfile::Builder::new().suffix(".tsv.gz").tempfile().unwrap();
    file.write_all(&bytes).unwrap();
    file.flush().unwrap();

    let records = read_all(file.path(), ReportFormat::Tabular, false);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].submatch_count(), 3);
}

#[test]
fn test_parse_error_surfaces_through_engine() {
    let mut text = tabular_line("q1", "s1", 1, 10, "1e-5", 20.0);
    text.push_str("q1\ts1\tbroken\n");
    let file = write_temp(&text, ".tsv");
    let tuples = open_report(file.path(), ReportFormat::Tabular, false, None).unwrap();
    let results: Vec<Result<QueryRecord>> = GroupingEngine::new(tuples).collect();
    assert_eq!(results.len(), 1);
    assert!(matches!(
        results[0],
        Err(blastgroup::BlastGroupError::Parse { line: 2, .. })
    ));
}

#[test]
fn test_custom_columns() {
    let text = "q1\ts1\t1e-30\t88.5\t1\t30\t5\t34\n";
    let file = write_temp(text, ".tsv");
    let tuples = open_report(
        file.path(),
        ReportFormat::Tabular,
        false,
        Some("6 qseqid sseqid evalue bitscore qstart qend sstart send"),
    )
    .unwrap();
    let records: Vec<QueryRecord> = GroupingEngine::new(tuples).collect::<Result<_>>().unwrap();
    assert_eq!(records[0][0][0].score(), 88.5);
    assert_eq!(records[0][0][0].subject_span(), (5, 34));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = open_report(
        std::path::Path::new("/nonexistent/report.tsv"),
        ReportFormat::Auto,
        false,
        None,
    )
    .err()
    .unwrap();
    assert!(matches!(err, blastgroup::BlastGroupError::Io(_)));
}
