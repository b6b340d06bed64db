//! Shared helpers for API integration tests.
//!
//! Requests go straight into the router via `tower::ServiceExt::oneshot`, no
//! TCP listener. The store is an in-memory [`FakeMissionStore`] so the tests
//! run without PostgreSQL.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use missions_api::config::ServerConfig;
use missions_api::router::build_app_router;
use missions_api::state::AppState;
use missions_core::mission::NewMission;
use missions_db::MissionStore;
use serde_json::{json, Value};
use tower::ServiceExt;

/// How the fake store answers the next calls.
#[derive(Debug, Clone, Default)]
pub enum StoreMode {
    #[default]
    Normal,
    /// Inserts run but report no written row.
    ReportFailure,
    /// Every call raises a driver error with this message.
    Raise(String),
}

/// In-memory [`MissionStore`] that records how often it was called.
#[derive(Default)]
pub struct FakeMissionStore {
    rows: Mutex<Vec<Value>>,
    mode: Mutex<StoreMode>,
    insert_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

impl FakeMissionStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_mode(mode: StoreMode) -> Arc<Self> {
        let store = Self::new();
        *store.mode.lock().unwrap() = mode;
        store
    }

    pub fn rows(&self) -> Vec<Value> {
        self.rows.lock().unwrap().clone()
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// The error raised in [`StoreMode::Raise`].
    pub fn driver_error(message: &str) -> sqlx::Error {
        sqlx::Error::Protocol(message.to_string())
    }

    fn mode(&self) -> StoreMode {
        self.mode.lock().unwrap().clone()
    }
}

#[async_trait]
impl MissionStore for FakeMissionStore {
    async fn insert(&self, mission: &NewMission) -> Result<bool, sqlx::Error> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        match self.mode() {
            StoreMode::Normal => {
                let mut rows = self.rows.lock().unwrap();
                let id = rows.len() as i64 + 1;
                rows.push(json!({
                    "id": id,
                    "objective": mission.objective,
                    "reward": mission.reward,
                    "active": mission.active,
                    "failed": mission.failed,
                    "created_at": "2026-01-01T00:00:00+00:00",
                }));
                Ok(true)
            }
            StoreMode::ReportFailure => Ok(false),
            StoreMode::Raise(message) => Err(Self::driver_error(&message)),
        }
    }

    async fn list(&self) -> Result<Vec<Value>, sqlx::Error> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match self.mode() {
            StoreMode::Raise(message) => Err(Self::driver_error(&message)),
            _ => Ok(self.rows()),
        }
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        max_body_bytes: 100 * 1024 * 1024,
        database_url: None,
        db_max_connections: 1,
        run_migrations: false,
    }
}

/// Build the full application router backed by `store`.
pub fn build_test_app(store: Arc<FakeMissionStore>) -> Router {
    let store: Arc<dyn MissionStore> = store;
    build_app_router(AppState::new(store), &test_config())
}

/// Build the application router with no store configured.
pub fn build_unconfigured_app() -> Router {
    build_app_router(AppState::unconfigured(), &test_config())
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

/// POST a raw body with a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The example mission used across tests.
pub fn scout_ridge() -> Value {
    json!({
        "objective": "scout ridge",
        "reward": 50,
        "active": true,
        "failed": false,
    })
}
