//! Unit tests for report/csv_rows.rs over grouped records

use super::super::helpers::{group, make_tuple, tabular_line, write_temp};
use blastgroup::report::{CsvReport, NameTables};
use blastgroup::sequence::NameTable;
use blastgroup::tokenize::{open_report, ReportFormat};
use blastgroup::GroupingEngine;

#[test]
fn test_rows_follow_record_order() {
    let records = group(vec![
        make_tuple("q1", "s1", 10.0),
        make_tuple("q1", "s1", 20.0),
        make_tuple("q2", "s2", 30.0),
    ]);
    let mut report = CsvReport::new(Vec::new());
    for record in &records {
        report.write_query(record).unwrap();
    }
    let text = String::from_utf8(report.into_inner().unwrap()).unwrap();
    assert_eq!(
        text,
        "q1,s1,10,1e-10\nq1,s1,20,1e-10\nq2,s2,30,1e-10\n"
    );
}

#[test]
fn test_names_loaded_from_fasta() {
    let queries = write_temp(">gi|42|ref|XP_1.1| hypothetical protein\nMKV\n", ".fa");
    let subjects = write_temp(">s1 ribosomal protein L2\nMKV\n", ".fa");
    let names = NameTables {
        query: NameTable::from_fasta(queries.path()).unwrap(),
        subject: NameTable::from_fasta(subjects.path()).unwrap(),
    };

    let records = group(vec![make_tuple("gi|42|ref|XP_1.1|", "s1", 55.0)]);
    let mut report = CsvReport::with_names(Vec::new(), names);
    report.write_query(&records[0]).unwrap();
    let text = String::from_utf8(report.into_inner().unwrap()).unwrap();
    assert_eq!(
        text,
        "gi|42|ref|XP_1.1|,hypothetical protein,s1,ribosomal protein L2,55,1e-10\n"
    );
}

#[test]
fn test_tabular_expect_exported_unrounded() {
    let mut text = tabular_line("q1", "s1", 1, 50, "1e-200", 400.0);
    text.push_str(&tabular_line("q1", "s2", 1, 50, "2.345678e-10", 60.2));
    let report = write_temp(&text, ".tsv");

    let tuples = open_report(report.path(), ReportFormat::Tabular, false, None).unwrap();
    let mut csv = CsvReport::new(Vec::new());
    for record in GroupingEngine::new(tuples) {
        csv.write_query(&record.unwrap()).unwrap();
    }
    let text = String::from_utf8(csv.into_inner().unwrap()).unwrap();
    assert_eq!(text, "q1,s1,400,1e-200\nq1,s2,60.2,2.345678e-10\n");
}
