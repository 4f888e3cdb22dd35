//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! only thing shared across requests is the immutable startup config; auth
//! sessions live in the browser.

use std::sync::Arc;

use orkitt_client::config::AppConfig;

/// Clone is required by Axum; the config is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}
