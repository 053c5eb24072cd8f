//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::catalog::{CatalogClient, CatalogError};
use crate::config::StorefrontConfig;
use crate::controller::AppController;
use crate::store::SharedStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog client, the configuration, and the single UI controller.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    controller: Mutex<AppController>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Bootstraps the controller from `store`: the theme is loaded and any
    /// persisted session restored.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog HTTP client cannot be built.
    pub fn new(config: StorefrontConfig, store: SharedStore) -> Result<Self, CatalogError> {
        let catalog = CatalogClient::new(&config.catalog)?;
        let controller = AppController::bootstrap(store);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                controller: Mutex::new(controller),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog API client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Lock the UI controller.
    ///
    /// Do not hold the guard across catalog requests.
    pub async fn controller(&self) -> MutexGuard<'_, AppController> {
        self.inner.controller.lock().await
    }
}
