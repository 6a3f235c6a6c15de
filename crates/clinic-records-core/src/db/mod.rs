//! Database layer for clinic records.

mod schema;
mod records;

pub use schema::*;

use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// How long a connection waits for another writer to release the lock.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Duplicate test_id: {0}")]
    Duplicate(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Database connection wrapper.
///
/// Each value owns one connection; dropping it closes the connection.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database at path, creating the file and schema if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let db = Self::connect(path)?;
        db.initialize()?;
        Ok(db)
    }

    /// Open a connection to an already initialized database.
    pub fn connect<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(Self { conn })
    }

    /// Create in-memory database (for testing).
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Initialize schema.
    fn initialize(&self) -> DbResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Get raw connection (for advanced queries).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}
