//! HTTP service for clinic diagnostic test records.
//!
//! Wraps [`clinic_records_core`] with an axum router, JSON error mapping
//! and structured logging.

pub mod api;
pub mod logging;
pub mod server;

pub use api::{router, ApiError, AppState};
