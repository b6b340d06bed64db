pub mod missions;

use axum::http::StatusCode;

/// Fallback for every unmatched path or method: `404` with an empty body.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
