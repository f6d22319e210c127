//! Error propagation through the grouping engine

use super::super::helpers::make_tuple;
use blastgroup::{AlignmentTuple, BlastGroupError, GroupingConfig, GroupingEngine, Result};

#[test]
fn test_missing_subject_yields_no_partial_records() {
    let mut orphan = make_tuple("q2", "", 3.0);
    orphan.line = Some(42);
    let tuples = vec![make_tuple("q1", "s1", 1.0), make_tuple("q1", "s1", 2.0), orphan];

    let mut engine = GroupingEngine::from_tuples(tuples);
    match engine.next() {
        Some(Err(BlastGroupError::MalformedStream { line, .. })) => assert_eq!(line, Some(42)),
        other => panic!("expected malformed stream, got {:?}", other),
    }
    assert!(engine.next().is_none());
    assert_eq!(engine.emitted(), 0);
}

#[test]
fn test_missing_query_is_malformed() {
    let results: Vec<Result<_>> = GroupingEngine::from_tuples(vec![make_tuple("", "s1", 1.0)]).collect();
    assert_eq!(results.len(), 1);
    assert!(results[0].as_ref().unwrap_err().is_malformed_stream());
}

#[test]
fn test_records_before_the_error_are_kept() {
    let tuples = vec![
        make_tuple("q1", "s1", 1.0),
        make_tuple("q2", "s1", 2.0),
        make_tuple("q2", "", 3.0),
    ];
    let results: Vec<Result<_>> = GroupingEngine::from_tuples(tuples).collect();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap().query_id(), "q1");
    assert!(results[1].is_err());
}

#[test]
fn test_tokenizer_error_passes_through_unchanged() {
    let source: Vec<Result<AlignmentTuple>> = vec![
        Ok(make_tuple("q1", "s1", 1.0)),
        Err(BlastGroupError::parse(9, "bad evalue")),
        Ok(make_tuple("q2", "s1", 2.0)),
    ];
    let results: Vec<Result<_>> = GroupingEngine::new(source).collect();
    assert_eq!(results.len(), 1);
    match &results[0] {
        Err(BlastGroupError::Parse { line, msg }) => {
            assert_eq!(*line, 9);
            assert_eq!(msg, "bad evalue");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_invalid_configuration_rejected_before_reading() {
    let mut pulled = false;
    let source = std::iter::once(make_tuple("q1", "s1", 1.0)).map(|t| {
        pulled = true;
        Ok(t)
    });
    let config = GroupingConfig {
        ignore_empty_records: true,
        emit_empty_records: true,
        ..Default::default()
    };
    let err = GroupingEngine::with_config(source, config).err().unwrap();
    assert!(matches!(err, BlastGroupError::Configuration(_)));
    assert!(!pulled);
}

#[test]
fn test_filter_without_policy_rejected() {
    let config = GroupingConfig {
        min_score: Some(50.0),
        ..Default::default()
    };
    assert!(config.validate().is_err());
    assert!(GroupingConfig::ignoring_empty().with_max_expect(-1.0).validate().is_err());
    assert!(GroupingConfig::ignoring_empty().with_min_score(f64::NAN).validate().is_err());
    assert!(GroupingConfig::ignoring_empty().with_max_expect(1e-3).validate().is_ok());
}
