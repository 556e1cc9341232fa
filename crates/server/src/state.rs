//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;
use zapatos_core::ShoeRegistry;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The registry sits behind a
/// single `RwLock` so concurrent requests never lose updates or allocate
/// duplicate identifiers; handlers must not hold the guard across I/O.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    registry: RwLock<ShoeRegistry>,
}

impl AppState {
    /// Create a new application state with an empty registry.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                registry: RwLock::new(ShoeRegistry::new()),
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the shoe registry lock.
    #[must_use]
    pub fn registry(&self) -> &RwLock<ShoeRegistry> {
        &self.inner.registry
    }
}
