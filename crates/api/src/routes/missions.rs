use axum::routing::get;
use axum::Router;

use crate::handlers::{self, missions};
use crate::state::AppState;

/// Mission routes.
///
/// ```text
/// GET  /missions  -> list_missions
/// POST /missions  -> create_mission
/// HEAD /missions  -> not_found
/// *    /missions  -> not_found
/// ```
///
/// HEAD is routed explicitly, otherwise axum would answer it with the GET
/// handler.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/missions",
        get(missions::list_missions)
            .post(missions::create_mission)
            .head(handlers::not_found)
            .fallback(handlers::not_found),
    )
}
