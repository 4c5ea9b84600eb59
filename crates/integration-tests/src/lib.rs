//! End-to-end test harness for ONGO.
//!
//! Each test binds the real routers to ephemeral ports on 127.0.0.1 and
//! drives them over HTTP with `reqwest`. Nothing external is needed: the API
//! runs on its seeded in-memory catalog and the storefront is pointed at it.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ongo-integration-tests
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let api = spawn_api().await;
//! let resp = reqwest::get(api.url("/api/categories")).await?;
//! assert_eq!(resp.status(), 200);
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use ongo_api::{AppState as ApiState, CatalogRepository, MemoryCatalog, RepositoryError};
use ongo_core::{Campaign, Category, CategoryId, Product, Store};
use ongo_storefront::AppState as StorefrontState;
use ongo_storefront::config::{ApiClientConfig, StorefrontConfig};
use tokio::task::JoinHandle;
use url::Url;

/// A router served on an ephemeral local port.
///
/// The server task is aborted when this is dropped.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Base URL of this server.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Serve `router` on 127.0.0.1 with an OS-assigned port.
///
/// # Panics
///
/// Panics if no local port can be bound.
pub async fn spawn(router: Router) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no local address");

    let handle = tokio::spawn(async move {
        // The task is aborted on drop; a serve error just ends the test server.
        let _ = axum::serve(listener, router).await;
    });

    TestServer { addr, handle }
}

/// Serve the API over the reference catalog.
///
/// # Panics
///
/// Panics if the reference fixture fails to seed.
pub async fn spawn_api() -> TestServer {
    let catalog = MemoryCatalog::seeded().expect("Reference fixture must seed");
    spawn_api_with(catalog).await
}

/// Serve the API over any catalog backend.
pub async fn spawn_api_with(catalog: impl CatalogRepository + 'static) -> TestServer {
    spawn(ongo_api::app(ApiState::new(catalog))).await
}

/// Serve the storefront against the API at `api_base_url`.
///
/// # Panics
///
/// Panics if the URL is invalid or the API client cannot be built.
pub async fn spawn_storefront(api_base_url: &str) -> TestServer {
    let base_url = Url::parse(api_base_url).expect("API base URL must be absolute");
    let config = StorefrontConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/static")),
        api: ApiClientConfig::with_base_url(base_url),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
    };
    let state = StorefrontState::new(config).expect("Failed to build storefront state");
    spawn(ongo_storefront::app(state)).await
}

/// A catalog backend whose every read fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingCatalog;

fn unavailable<T>() -> Result<T, RepositoryError> {
    Err(RepositoryError::Unavailable(
        "connection reset by test backend".to_string(),
    ))
}

impl CatalogRepository for FailingCatalog {
    fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        unavailable()
    }

    fn get_category_by_slug(&self, _slug: &str) -> Result<Option<Category>, RepositoryError> {
        unavailable()
    }

    fn list_products_by_category(
        &self,
        _category_id: CategoryId,
    ) -> Result<Vec<Product>, RepositoryError> {
        unavailable()
    }

    fn get_product_by_slug(&self, _slug: &str) -> Result<Option<Product>, RepositoryError> {
        unavailable()
    }

    fn list_active_campaigns(&self) -> Result<Vec<Campaign>, RepositoryError> {
        unavailable()
    }

    fn list_stores(&self) -> Result<Vec<Store>, RepositoryError> {
        unavailable()
    }

    fn list_stores_by_city(&self, _city_query: &str) -> Result<Vec<Store>, RepositoryError> {
        unavailable()
    }
}

/// A catalog backend that panics on store reads and delegates everything else.
#[derive(Debug, Clone)]
pub struct PanickingStores(pub MemoryCatalog);

impl CatalogRepository for PanickingStores {
    fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        self.0.list_categories()
    }

    fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError> {
        self.0.get_category_by_slug(slug)
    }

    fn list_products_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Product>, RepositoryError> {
        self.0.list_products_by_category(category_id)
    }

    fn get_product_by_slug(&self, slug: &str) -> Result<Option<Product>, RepositoryError> {
        self.0.get_product_by_slug(slug)
    }

    fn list_active_campaigns(&self) -> Result<Vec<Campaign>, RepositoryError> {
        self.0.list_active_campaigns()
    }

    #[allow(clippy::panic)]
    fn list_stores(&self) -> Result<Vec<Store>, RepositoryError> {
        panic!("store table corrupted")
    }

    #[allow(clippy::panic)]
    fn list_stores_by_city(&self, _city_query: &str) -> Result<Vec<Store>, RepositoryError> {
        panic!("store table corrupted")
    }
}
