//! Unit tests for store/mod.rs

use super::super::helpers::{group, make_tuple};
use blastgroup::store::{store_records, RecordStore};
use blastgroup::GroupingEngine;

#[test]
fn test_later_repeat_of_query_replaces_earlier_record() {
    let tuples = vec![
        make_tuple("q1", "s1", 1.0),
        make_tuple("q2", "s2", 2.0),
        make_tuple("q1", "s3", 3.0),
    ];
    let mut store = RecordStore::in_memory().unwrap();
    let stored = store_records(GroupingEngine::from_tuples(tuples), &mut store, false).unwrap();
    assert_eq!(stored, 3);
    assert_eq!(store.len().unwrap(), 2);

    let q1 = store.get("q1").unwrap().unwrap();
    assert_eq!(q1.len(), 1);
    assert_eq!(q1[0].subject_id(), "s3");
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.db");

    let records = group(vec![
        make_tuple("q2", "s1", 5.0),
        make_tuple("q1", "s1", 6.0),
        make_tuple("q1", "s2", 7.0),
    ]);
    {
        let mut store = RecordStore::open(&path).unwrap();
        for record in &records {
            store.put(record).unwrap();
        }
    }

    let store = RecordStore::open(&path).unwrap();
    let reopened: Vec<_> = store.iter().unwrap().collect();
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened[0], records[1]);
    assert_eq!(reopened[1], records[0]);
    assert_eq!(reopened[0][1][0].score(), 7.0);
}
