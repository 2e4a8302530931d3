//! Application state management
//!
//! Shared state passed to request handlers via Axum's state extraction.
//! With no database or cache, the only shared resource is the configuration;
//! the projection engine itself is stateless.

use crate::config::AppConfig;
use std::sync::Arc;

/// Shared application state
///
/// `config` is wrapped in Arc so cloning across async tasks is O(1).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
