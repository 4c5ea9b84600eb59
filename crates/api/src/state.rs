//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::CatalogRepository;

/// Application state shared across all handlers.
///
/// Cheaply cloneable; the catalog is built once at startup and only read
/// afterwards, so no locking is involved.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: Box<dyn CatalogRepository>,
}

impl AppState {
    /// Create a new application state around a catalog backend.
    #[must_use]
    pub fn new(catalog: impl CatalogRepository + 'static) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                catalog: Box::new(catalog),
            }),
        }
    }

    /// Get a reference to the catalog repository.
    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogRepository {
        self.inner.catalog.as_ref()
    }
}
