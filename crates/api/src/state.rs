use std::sync::Arc;

use missions_db::MissionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Mission store, or `None` when no database was configured at startup.
    pub store: Option<Arc<dyn MissionStore>>,
}

impl AppState {
    pub fn new(store: Arc<dyn MissionStore>) -> Self {
        Self { store: Some(store) }
    }

    /// State for a server running without a database.
    pub fn unconfigured() -> Self {
        Self { store: None }
    }
}
