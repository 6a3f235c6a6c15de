//! Storage integration tests against an on-disk database.

use std::sync::{Arc, Barrier};
use std::thread;

use clinic_records_core::db::{Database, DbError};
use clinic_records_core::models::{NewTestRecord, TestRecord};

fn make_record(test_id: &str, clinic_id: &str) -> TestRecord {
    TestRecord::from_submission(NewTestRecord {
        test_id: test_id.to_string(),
        patient_id: "patient-1".to_string(),
        clinic_id: clinic_id.to_string(),
        test_type: "pcr".to_string(),
        result: "positive".to_string(),
    })
}

#[test]
fn test_records_survive_reconnect() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.db");

    Database::open(&path).unwrap();
    {
        let mut db = Database::connect(&path).unwrap();
        db.insert_test_record(&make_record("t1", "c1")).unwrap();
    }

    // Schema initializer on a later startup keeps existing rows
    let db = Database::open(&path).unwrap();
    let listed = db.list_test_records_by_clinic("c1").unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].test_id, "t1");
}

#[test]
fn test_concurrent_duplicate_inserts() {
    let dir = tempfile::tempdir().unwrap();
    let path = Arc::new(dir.path().join("records.db"));
    Database::open(path.as_path()).unwrap();

    const WRITERS: usize = 8;
    let barrier = Arc::new(Barrier::new(WRITERS));

    let handles: Vec<_> = (0..WRITERS)
        .map(|i| {
            let path = Arc::clone(&path);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let mut db = Database::connect(path.as_path()).unwrap();
                let mut record = make_record("shared-id", "c1");
                record.result = format!("writer-{}", i);
                barrier.wait();
                db.insert_test_record(&record)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(DbError::Duplicate(_))))
        .count();
    assert_eq!(successes, 1);
    assert_eq!(duplicates, WRITERS - 1);

    let db = Database::connect(path.as_path()).unwrap();
    assert_eq!(db.count_test_records().unwrap(), 1);
}

#[test]
fn test_concurrent_distinct_inserts() {
    let dir = tempfile::tempdir().unwrap();
    let path = Arc::new(dir.path().join("records.db"));
    Database::open(path.as_path()).unwrap();

    let handles: Vec<_> = (0..6)
        .map(|i| {
            let path = Arc::clone(&path);
            thread::spawn(move || {
                let mut db = Database::connect(path.as_path()).unwrap();
                db.insert_test_record(&make_record(&format!("t{}", i), "c1"))
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    let db = Database::connect(path.as_path()).unwrap();
    assert_eq!(db.list_test_records_by_clinic("c1").unwrap().len(), 6);
}
