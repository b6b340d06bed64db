use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use missions_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as a plain-text body. The `Display` text is the
/// body, so clients can match on it.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No mission store was configured at startup.
    #[error("Database not configured")]
    StoreNotConfigured,

    /// The request body is not valid JSON.
    #[error("Invalid JSON body")]
    InvalidJson(#[source] serde_json::Error),

    /// A domain-level error from `missions_core` (field presence or type).
    #[error("Missing or invalid fields")]
    Core(#[from] CoreError),

    /// The insert ran but the store reported no written row.
    #[error("Failed to create mission")]
    CreateFailed,

    /// A database error from sqlx. The driver message is forwarded as-is.
    #[error("Database error: {}", driver_message(.0))]
    Database(#[from] sqlx::Error),
}

/// The server's own message for errors it reported, without sqlx's
/// `error returned from database:` prefix. Other sqlx errors keep their
/// `Display` text.
fn driver_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidJson(_) | AppError::Core(_) => StatusCode::BAD_REQUEST,
            AppError::StoreNotConfigured | AppError::CreateFailed | AppError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::StoreNotConfigured => {
                tracing::warn!("Request rejected, no database configured");
            }
            AppError::InvalidJson(err) => {
                tracing::debug!(error = %err, "Rejected malformed JSON body");
            }
            AppError::Core(CoreError::Validation(fields)) => {
                tracing::debug!(%fields, "Rejected mission payload");
            }
            AppError::CreateFailed => {
                tracing::error!("Store reported failure for mission insert");
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
            }
        }

        (self.status(), self.to_string()).into_response()
    }
}
