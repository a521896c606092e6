//! Application state shared across handlers.

use std::sync::Arc;

use unsold_flower_core::Catalog;

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// Cheap to clone; the configuration sits behind an `Arc`. Per-visitor
/// state never lives here, only in the session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
}

impl AppState {
    /// Create application state over the built-in catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::standard(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// The static market and flower catalog.
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        self.inner.catalog
    }
}
