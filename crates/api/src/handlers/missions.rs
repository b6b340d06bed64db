//! Handlers for `/missions`.
//!
//! Create reads the raw body rather than using the `Json` extractor so that
//! the content type is not inspected and every parse failure maps to the
//! same `Invalid JSON body` response.

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use missions_core::mission::NewMission;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::middleware::store::Store;

/// POST /missions
///
/// Validate the body and insert one mission. Returns 201 with a plain-text
/// confirmation.
pub async fn create_mission(Store(store): Store, body: Bytes) -> AppResult<impl IntoResponse> {
    let payload: Value = serde_json::from_slice(&body).map_err(AppError::InvalidJson)?;
    let mission = NewMission::from_json(&payload)?;

    if !store.insert(&mission).await? {
        return Err(AppError::CreateFailed);
    }

    tracing::info!(
        objective = %mission.objective,
        reward = mission.reward,
        active = mission.active,
        failed = mission.failed,
        "Mission created",
    );

    Ok((StatusCode::CREATED, "Mission created successfully"))
}

/// GET /missions
///
/// Every stored row, unfiltered, as a JSON array.
pub async fn list_missions(Store(store): Store) -> AppResult<Json<Vec<Value>>> {
    let missions = store.list().await?;

    tracing::debug!(count = missions.len(), "Listed missions");

    Ok(Json(missions))
}
