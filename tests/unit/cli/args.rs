//! Unit tests for blastinput/*_args.rs

use blastgroup::blastinput::{CoverArgs, CsvArgs, OrthoArgs, StoreArgs};
use blastgroup::tokenize::ReportFormat;
use clap::{Args, Command, FromArgMatches};
use std::path::PathBuf;

fn parse<T: Args + FromArgMatches>(name: &'static str, args: &[&str]) -> T {
    let mut all_args = vec!["blastgroup".to_string(), name.to_string()];
    all_args.extend(args.iter().map(|s| s.to_string()));

    let cmd = Command::new("blastgroup").subcommand(T::augment_args(Command::new(name)));
    let matches = cmd.try_get_matches_from(all_args).unwrap();
    let sub_matches = matches.subcommand_matches(name).unwrap();
    T::from_arg_matches(sub_matches).unwrap()
}

fn try_parse<T: Args + FromArgMatches>(name: &'static str, args: &[&str]) -> bool {
    let mut all_args = vec!["blastgroup".to_string(), name.to_string()];
    all_args.extend(args.iter().map(|s| s.to_string()));
    Command::new("blastgroup")
        .subcommand(T::augment_args(Command::new(name)))
        .try_get_matches_from(all_args)
        .is_ok()
}

#[test]
fn test_csv_defaults() {
    let args: CsvArgs = parse("csv", &["hits.tsv"]);
    assert_eq!(args.report, PathBuf::from("hits.tsv"));
    assert_eq!(args.read.format, ReportFormat::Auto);
    assert!(!args.read.gzip);
    assert!(args.read.columns.is_none());
    assert!(args.query_names.is_none());
    assert!(args.out.is_none());
}

#[test]
fn test_csv_names_must_come_in_pairs() {
    assert!(!try_parse::<CsvArgs>("csv", &["hits.tsv", "--query-names", "q.fa"]));
    let args: CsvArgs = parse(
        "csv",
        &["hits.tsv", "--query-names", "q.fa", "--subject-names", "s.fa", "--format", "0", "-z"],
    );
    assert_eq!(args.subject_names, Some(PathBuf::from("s.fa")));
    assert_eq!(args.read.format, ReportFormat::Pairwise);
    assert!(args.read.gzip);
}

#[test]
fn test_store_grouping_config() {
    let args: StoreArgs = parse("store", &["hits.tsv", "hits.db"]);
    let config = args.grouping_config();
    assert!(!config.ignore_empty_records);
    assert!(config.validate().is_ok());

    let args: StoreArgs = parse("store", &["hits.tsv", "hits.db", "-n"]);
    assert!(args.grouping_config().ignore_empty_records);

    let args: StoreArgs = parse("store", &["hits.tsv", "hits.db", "--min-score", "50"]);
    let config = args.grouping_config();
    assert!(config.ignore_empty_records);
    assert_eq!(config.min_score, Some(50.0));
    assert!(config.validate().is_ok());

    let args: StoreArgs = parse(
        "store",
        &["hits.tsv", "hits.db", "--max-expect", "1e-5", "--keep-empty-hits"],
    );
    let config = args.grouping_config();
    assert!(config.emit_empty_records);
    assert!(!config.ignore_empty_records);
    assert!(config.validate().is_ok());

    assert!(!try_parse::<StoreArgs>("store", &["hits.tsv", "hits.db", "-n", "--keep-empty-hits"]));
}

#[test]
fn test_cover_positionals_and_default_score() {
    let args: CoverArgs = parse("cover", &["ref.fa", "q.x.ref.tsv", "500", "q.fa"]);
    assert_eq!(args.reference, PathBuf::from("ref.fa"));
    assert_eq!(args.report, PathBuf::from("q.x.ref.tsv"));
    assert_eq!(args.min_query_len, 500);
    assert_eq!(args.queries, PathBuf::from("q.fa"));
    assert_eq!(args.min_score, 200.0);
}

#[test]
fn test_ortho_positionals() {
    let args: OrthoArgs = parse("ortho", &["a.fa", "b.fa", "a_vs_b.tsv", "b_vs_a.tsv", "--columns", "6 std"]);
    assert_eq!(args.b_vs_a, PathBuf::from("b_vs_a.tsv"));
    assert_eq!(args.read.columns(), Some("6 std"));
}

#[test]
fn test_unknown_format_rejected() {
    assert!(!try_parse::<CsvArgs>("csv", &["hits.tsv", "--format", "xml"]));
}
