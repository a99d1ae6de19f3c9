use std::sync::Arc;

use karmic_core::session::SessionStore;

use crate::config::ApiConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionStore>,
    pub config: ApiConfig,
}
