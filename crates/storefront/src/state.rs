//! Application state shared across handlers.

use std::sync::Arc;

use crate::backend::BackendClient;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::services::ContactSubmitter;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the catalog loaders, the contact submitter and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Arc<Catalog>,
    contact: ContactSubmitter,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The catalog is built but not loaded; mounting the shell starts the
    /// first load.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let backend = BackendClient::new(config.backend_url.as_ref());
        let catalog = Arc::new(Catalog::new(backend.clone()));
        let contact = ContactSubmitter::new(backend);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                contact,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.inner.catalog
    }

    /// Get a reference to the contact submitter.
    #[must_use]
    pub fn contact(&self) -> &ContactSubmitter {
        &self.inner.contact
    }
}
