//! Application state for the report gateway.
//!
//! Contains the shared state that is passed to all handlers.

use std::sync::Arc;

use crate::config;
use crate::services::UpstreamClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Client for the upstream report API.
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    /// Create application state from the global configuration.
    pub fn new() -> Self {
        let config = config::config();
        Self {
            upstream: Arc::new(UpstreamClient::from_config(&config.upstream)),
        }
    }

    /// Create application state against an explicit upstream base URL.
    /// Used by integration tests to point the gateway at a mock server.
    pub fn with_upstream(base_url: impl Into<String>) -> Self {
        Self {
            upstream: Arc::new(UpstreamClient::new(base_url, 30)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
