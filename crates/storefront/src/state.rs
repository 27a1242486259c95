//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::search::{SearchError, SearchIndex, build_index};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the configuration, the product catalog and its search index.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    search: SearchIndex,
}

impl AppState {
    /// Create application state over the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the search index cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, SearchError> {
        Self::with_catalog(config, Catalog::placeholder())
    }

    /// Create application state over a specific catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the search index cannot be built.
    pub fn with_catalog(config: StorefrontConfig, catalog: Catalog) -> Result<Self, SearchError> {
        let search = build_index(catalog.products())?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                search,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the product search index.
    #[must_use]
    pub fn search(&self) -> &SearchIndex {
        &self.inner.search
    }
}
