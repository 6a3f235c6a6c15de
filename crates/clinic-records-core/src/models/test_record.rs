//! Diagnostic test record models.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Client-supplied fields, in the order they are validated.
pub const REQUIRED_FIELDS: [&str; 5] = ["test_id", "patient_id", "clinic_id", "test_type", "result"];

/// A submission field that was missing, not a string, or blank.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid or missing field: {field}")]
pub struct ValidationError {
    pub field: &'static str,
}

/// A validated submission, before the server assigns `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTestRecord {
    pub test_id: String,
    pub patient_id: String,
    pub clinic_id: String,
    pub test_type: String,
    pub result: String,
}

impl NewTestRecord {
    /// Validate a decoded request body.
    ///
    /// Fields are checked in [`REQUIRED_FIELDS`] order and the first failure
    /// is reported. Values are kept exactly as submitted; trimming only
    /// decides whether a value counts as blank.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        // Struct fields are evaluated in the order written here.
        Ok(Self {
            test_id: required_str(body, "test_id")?.to_owned(),
            patient_id: required_str(body, "patient_id")?.to_owned(),
            clinic_id: required_str(body, "clinic_id")?.to_owned(),
            test_type: required_str(body, "test_type")?.to_owned(),
            result: required_str(body, "result")?.to_owned(),
        })
    }
}

fn required_str<'a>(body: &'a Value, field: &'static str) -> Result<&'a str, ValidationError> {
    match body.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s),
        _ => Err(ValidationError { field }),
    }
}

/// A persisted diagnostic test record. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestRecord {
    /// Globally unique test identifier
    pub test_id: String,
    /// Patient the sample belongs to
    pub patient_id: String,
    /// Clinic that submitted the test (list filter)
    pub clinic_id: String,
    /// Test kind (e.g., "pcr", "antigen")
    pub test_type: String,
    /// Reported result
    pub result: String,
    /// Server-assigned creation timestamp (RFC 3339, UTC)
    pub created_at: String,
}

impl TestRecord {
    /// Stamp a validated submission with the current server time.
    pub fn from_submission(submission: NewTestRecord) -> Self {
        Self::with_created_at(submission, chrono::Utc::now().to_rfc3339())
    }

    /// Build a record with an explicit creation timestamp.
    pub fn with_created_at(submission: NewTestRecord, created_at: String) -> Self {
        let NewTestRecord {
            test_id,
            patient_id,
            clinic_id,
            test_type,
            result,
        } = submission;
        Self {
            test_id,
            patient_id,
            clinic_id,
            test_type,
            result,
            created_at,
        }
    }
}
