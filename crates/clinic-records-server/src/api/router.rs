//! Route table.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::api::{records, AppState};

/// Largest accepted request body. Larger bodies get a JSON 413.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Returns a `Router` serving `POST /tests` and `GET /tests`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/tests", post(records::create).get(records::list))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
