//! Clinic Records Core Library
//!
//! Record keeping for diagnostic test submissions.
//!
//! # Architecture
//!
//! ```text
//! submission JSON → NewTestRecord::from_json → TestRecord::from_submission
//!                                                        │
//!                                     BEGIN IMMEDIATE / INSERT / COMMIT
//!                                                        │
//!                                          tests table (test_id PK)
//!                                                        │
//!                                       list by clinic_id (exact match)
//! ```
//!
//! # Core Principle
//!
//! **The storage layer is the only uniqueness check.** A duplicate `test_id`
//! is detected by the insert itself, never by a prior lookup.
//!
//! # Modules
//!
//! - [`db`]: SQLite database layer
//! - [`models`]: Domain types (TestRecord, NewTestRecord)
//! - [`config`]: Environment configuration

pub mod config;
pub mod db;
pub mod models;

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use db::{Database, DbError, DbResult};
pub use models::{NewTestRecord, TestRecord, ValidationError, REQUIRED_FIELDS};
