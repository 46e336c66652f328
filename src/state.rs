//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Application state shared across request handlers.
///
/// Constructed once in `server::run` and cloned per request by axum.
/// There is no module-level singleton; the storage gateway travels here.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Creates the application state.
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}
