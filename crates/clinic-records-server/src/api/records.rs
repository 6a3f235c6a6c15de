//! Test record endpoints.
//!
//! Two endpoints:
//! - `POST /tests` — submit a diagnostic test record
//! - `GET /tests?clinic_id=` — list a clinic's records

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use clinic_records_core::db::{Database, DbError, DbResult};
use clinic_records_core::models::{NewTestRecord, TestRecord};

use crate::api::error::ApiError;
use crate::api::AppState;

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub status: &'static str,
}

/// `POST /tests` — validate and insert one record.
///
/// The body is read raw so a missing `Content-Type` is not an error.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<CreateResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    let body = body.map_err(|rejection| {
        let err = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::MalformedInput
        };
        warn!(
            event = "validation_failed",
            request_id = %request_id,
            reason = %err,
            error = %rejection.body_text(),
            "Failed to read request body"
        );
        err
    })?;

    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        warn!(
            event = "validation_failed",
            request_id = %request_id,
            reason = "Invalid Json",
            error = %e,
            "Rejected malformed request body"
        );
        ApiError::MalformedInput
    })?;

    let submission = NewTestRecord::from_json(&payload).map_err(|e| {
        warn!(
            event = "validation_failed",
            request_id = %request_id,
            reason = %e,
            "Rejected test submission"
        );
        ApiError::InvalidField(e.field)
    })?;

    let record = TestRecord::from_submission(submission);
    let test_id = record.test_id.clone();
    let db_path = state.db_path();

    let outcome = tokio::task::spawn_blocking(move || -> DbResult<()> {
        let mut db = Database::connect(db_path.as_path())?;
        db.insert_test_record(&record)
    })
    .await;

    match outcome {
        Ok(Ok(())) => {
            info!(
                event = "test_created",
                request_id = %request_id,
                test_id = %test_id,
                "Test record created"
            );
            Ok(Json(CreateResponse { status: "success" }))
        }
        Ok(Err(DbError::Duplicate(_))) => {
            error!(
                event = "duplicate_test",
                request_id = %request_id,
                test_id = %test_id,
                "Duplicate test_id rejected"
            );
            Err(ApiError::Duplicate)
        }
        Ok(Err(e)) => {
            error!(
                event = "internal_server_error",
                request_id = %request_id,
                error = %e,
                "Failed to store test record"
            );
            Err(ApiError::Internal)
        }
        Err(e) => {
            error!(
                event = "internal_server_error",
                request_id = %request_id,
                error = %e,
                "Storage task failed"
            );
            Err(ApiError::Internal)
        }
    }
}

/// `GET /tests` — records whose `clinic_id` equals the query parameter.
///
/// A repeated `clinic_id` uses its last value. An unparsable query string
/// counts as a missing `clinic_id`.
pub async fn list(
    State(state): State<AppState>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Result<Json<Vec<TestRecord>>, ApiError> {
    let clinic_id = match query
        .and_then(|Query(pairs)| last_value(pairs, "clinic_id"))
        .filter(|c| !c.is_empty())
    {
        Some(clinic_id) => clinic_id,
        None => {
            warn!(event = "missing_clinic_id", "Missing clinic_id query parameter");
            return Err(ApiError::MissingClinicId);
        }
    };

    let db_path = state.db_path();
    let lookup = clinic_id.clone();
    let outcome = tokio::task::spawn_blocking(move || -> DbResult<Vec<TestRecord>> {
        let db = Database::connect(db_path.as_path())?;
        db.list_test_records_by_clinic(&lookup)
    })
    .await;

    let failure = match outcome {
        Ok(Ok(records)) => {
            info!(
                event = "fetch_tests",
                clinic_id = %clinic_id,
                count = records.len(),
                "Fetched test records"
            );
            return Ok(Json(records));
        }
        Ok(Err(e)) => e.to_string(),
        Err(e) => e.to_string(),
    };

    error!(
        event = "fetch_failed",
        clinic_id = %clinic_id,
        error = %failure,
        "Failed to fetch test records"
    );
    Err(ApiError::FetchFailed)
}

fn last_value(pairs: Vec<(String, String)>, key: &str) -> Option<String> {
    pairs
        .into_iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v)
        .last()
}
