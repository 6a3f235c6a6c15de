//! SQLite schema definition.

/// Complete database schema for clinic records.
///
/// Every statement is "create if absent", so running it on each startup is safe.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Diagnostic Test Records (Append-Only - Immutable after creation)
-- ============================================================================

CREATE TABLE IF NOT EXISTS tests (
    test_id TEXT PRIMARY KEY,
    patient_id TEXT NOT NULL,
    clinic_id TEXT NOT NULL,
    test_type TEXT NOT NULL,
    result TEXT NOT NULL,
    created_at TEXT NOT NULL                     -- RFC 3339, server clock
);

CREATE INDEX IF NOT EXISTS idx_tests_clinic_id ON tests(clinic_id);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_schema_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        conn.execute(
            "INSERT INTO tests VALUES ('t1', 'p1', 'c1', 'pcr', 'positive', '2024-01-01T00:00:00+00:00')",
            [],
        )
        .unwrap();

        // Re-running must not drop or clear the table
        conn.execute_batch(SCHEMA).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM tests", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_primary_key_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        let insert = "INSERT INTO tests VALUES (?, 'p1', 'c1', 'pcr', 'positive', 'now')";
        assert!(conn.execute(insert, ["t1"]).is_ok());
        assert!(conn.execute(insert, ["t1"]).is_err());
    }

    #[test]
    fn test_not_null_columns() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        let result = conn.execute(
            "INSERT INTO tests (test_id, patient_id, clinic_id, test_type, result) VALUES ('t1', 'p1', 'c1', 'pcr', 'neg')",
            [],
        );
        assert!(result.is_err(), "created_at is required");
    }
}
