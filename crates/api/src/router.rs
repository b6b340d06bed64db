//! Shared application router builder.
//!
//! [`build_app_router`] is used by both `main.rs` and `tests/common/mod.rs`.
//! No layer in the stack produces a response of its own for a well-formed
//! request: every reply comes from the store guard, a mission handler, or
//! the 404 fallback.

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::middleware::store::require_store;
use crate::routes;
use crate::state::AppState;

/// Build the application [`Router`].
///
/// Outermost first:
///
/// 1. `x-request-id` assigned (UUID unless the client sent one)
/// 2. Request/response span at INFO
/// 3. `x-request-id` copied onto the response
/// 4. `408` after `request_timeout_secs`
/// 5. Handler panics become `500`
/// 6. Store guard, ahead of routing and the fallback
/// 7. Body limit for `POST /missions` (`max_body_bytes`)
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    routes::app_routes()
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_store,
        ))
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}
