//! HTTP API for clinic test records.

pub mod error;
pub mod records;
pub mod router;

pub use error::ApiError;
pub use router::router;

use std::path::PathBuf;
use std::sync::Arc;

/// Shared handler state.
///
/// Holds only where the database lives; every request opens its own
/// connection and drops it before responding.
#[derive(Clone, Debug)]
pub struct AppState {
    db_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: Arc::new(db_path.into()),
        }
    }

    pub fn db_path(&self) -> Arc<PathBuf> {
        Arc::clone(&self.db_path)
    }
}
