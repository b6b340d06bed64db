use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use missions_db::MissionStore;

use crate::error::AppError;
use crate::state::AppState;

/// Short-circuits with `500 Database not configured` before routing when the
/// server has no store. Applies to unknown paths as well, and the body is
/// never read.
pub async fn require_store(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.store.is_none() {
        return AppError::StoreNotConfigured.into_response();
    }
    next.run(request).await
}

/// The configured mission store.
///
/// ```ignore
/// async fn handler(Store(store): Store) -> AppResult<Json<Vec<Value>>> {
///     Ok(Json(store.list().await?))
/// }
/// ```
pub struct Store(pub Arc<dyn MissionStore>);

impl FromRequestParts<AppState> for Store {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .store
            .clone()
            .map(Store)
            .ok_or(AppError::StoreNotConfigured)
    }
}
