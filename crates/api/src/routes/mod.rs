pub mod missions;

use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the route tree.
///
/// ```text
/// /missions        list (GET), create (POST)
/// *                404, empty body
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(missions::router())
        .fallback(handlers::not_found)
}
