//! Diagnostic test record database operations.

use rusqlite::{ffi, params, Row, TransactionBehavior};

use super::{Database, DbError, DbResult};
use crate::models::TestRecord;

impl Database {
    /// Insert a new test record in its own transaction.
    ///
    /// The primary key on `test_id` is the only uniqueness check; a
    /// constraint failure rolls back and returns [`DbError::Duplicate`].
    pub fn insert_test_record(&mut self, record: &TestRecord) -> DbResult<()> {
        // Dropping the transaction without commit rolls it back.
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            r#"
            INSERT INTO tests (
                test_id, patient_id, clinic_id, test_type, result, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                record.test_id,
                record.patient_id,
                record.clinic_id,
                record.test_type,
                record.result,
                record.created_at,
            ],
        )
        .map_err(|e| {
            if is_unique_violation(&e) {
                DbError::Duplicate(record.test_id.clone())
            } else {
                DbError::Sqlite(e)
            }
        })?;

        tx.commit()?;
        Ok(())
    }

    /// List records for a clinic (exact, case-sensitive match), oldest first.
    pub fn list_test_records_by_clinic(&self, clinic_id: &str) -> DbResult<Vec<TestRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT test_id, patient_id, clinic_id, test_type, result, created_at
            FROM tests
            WHERE clinic_id = ?
            ORDER BY rowid
            "#,
        )?;

        let rows = stmt.query_map([clinic_id], record_from_row)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Count all stored records.
    pub fn count_test_records(&self) -> DbResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM tests", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<TestRecord> {
    Ok(TestRecord {
        test_id: row.get(0)?,
        patient_id: row.get(1)?,
        clinic_id: row.get(2)?,
        test_type: row.get(3)?,
        result: row.get(4)?,
        created_at: row.get(5)?,
    })
}
