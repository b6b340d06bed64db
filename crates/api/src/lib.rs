//! Missions API server library.
//!
//! Exposes config, state, error handling and the router builder so the
//! binary entrypoint and the integration tests assemble the same app.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
