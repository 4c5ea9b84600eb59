//! Client for the ONGO catalog API.
//!
//! # Architecture
//!
//! - `reqwest` for HTTP, JSON decoded straight into `ongo-core` types
//! - Responses cached in memory with `moka`, keyed by [`QueryKey`]
//! - Concurrent requests for the same key are coalesced into one fetch
//! - Failures are never cached; the next request retries
//!
//! Views consume results through [`QueryState`], which keeps "still
//! loading", "failed" and "loaded" apart.
//!
//! # Example
//!
//! ```rust,ignore
//! use ongo_storefront::client::{ApiClient, QueryState};
//!
//! let client = ApiClient::new(&config.api)?;
//! let categories = QueryState::from_result(client.categories().await);
//! ```

mod cache;

use std::sync::Arc;

use moka::future::Cache;
use ongo_core::{Campaign, Category, CategoryId, Product, Store};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use crate::config::ApiClientConfig;

pub use cache::{CacheValue, QueryKey};

/// Errors that can occur when talking to the catalog API.
///
/// Cloneable so a single failed fetch can be handed to every caller that was
/// waiting on it.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The request could not be sent or the connection failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The API answered 404.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The API answered with another non-success status.
    #[error("API returned {status} for {path}")]
    Status { status: u16, path: String },

    /// The response body did not match the expected shape.
    #[error("JSON decode error: {0}")]
    Decode(String),

    /// The request URL could not be built from the base URL.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

/// Result type alias for `ClientError`.
pub type Result<T> = std::result::Result<T, ClientError>;

// =============================================================================
// QueryState
// =============================================================================

/// The state of a data fetch as seen by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<T> {
    /// The data has not arrived yet; views render a skeleton.
    Loading,
    /// The fetch failed. Holds the technical message for logs.
    Error(String),
    /// The data is available.
    Success(T),
}

impl<T> QueryState<T> {
    /// Convert a finished fetch into a state, logging failures.
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(e) => {
                tracing::warn!(error = %e, "Catalog fetch failed");
                Self::Error(e.to_string())
            }
        }
    }

    /// True while the data is still loading.
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The failure message, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// The loaded data, if any.
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Transform the loaded data, keeping loading and error states.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryState<U> {
        match self {
            Self::Loading => QueryState::Loading,
            Self::Error(message) => QueryState::Error(message),
            Self::Success(data) => QueryState::Success(f(data)),
        }
    }
}

// =============================================================================
// ApiClient
// =============================================================================

/// Client for the catalog API.
///
/// Cheaply cloneable; clones share the HTTP connection pool and the cache.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
    cache: Cache<QueryKey, CacheValue>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("cached_entries", &self.inner.cache.entry_count())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Http` if the HTTP client cannot be built.
    pub fn new(config: &ApiClientConfig) -> Result<Self> {
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("ongo-storefront/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.base_url.clone(),
                cache,
            }),
        })
    }

    /// All categories.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the API cannot be reached or answers with an error.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        match self.query(QueryKey::Categories).await? {
            CacheValue::Categories(categories) => Ok(categories.as_ref().clone()),
            other => Err(mismatch(&other)),
        }
    }

    /// A category by slug.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if no category has this slug.
    pub async fn category(&self, slug: &str) -> Result<Category> {
        match self.query(QueryKey::Category(slug.to_string())).await? {
            CacheValue::Category(category) => Ok(category.as_ref().clone()),
            other => Err(mismatch(&other)),
        }
    }

    /// The products in a category.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the API cannot be reached or answers with an error.
    pub async fn products_in_category(&self, category_id: CategoryId) -> Result<Vec<Product>> {
        match self.query(QueryKey::CategoryProducts(category_id)).await? {
            CacheValue::Products(products) => Ok(products.as_ref().clone()),
            other => Err(mismatch(&other)),
        }
    }

    /// A product by slug.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if no product has this slug.
    pub async fn product(&self, slug: &str) -> Result<Product> {
        match self.query(QueryKey::Product(slug.to_string())).await? {
            CacheValue::Product(product) => Ok(product.as_ref().clone()),
            other => Err(mismatch(&other)),
        }
    }

    /// Active campaigns.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the API cannot be reached or answers with an error.
    pub async fn campaigns(&self) -> Result<Vec<Campaign>> {
        match self.query(QueryKey::Campaigns).await? {
            CacheValue::Campaigns(campaigns) => Ok(campaigns.as_ref().clone()),
            other => Err(mismatch(&other)),
        }
    }

    /// Stores, optionally filtered by the API's city filter.
    ///
    /// An empty city is sent as no filter.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the API cannot be reached or answers with an error.
    pub async fn stores(&self, city: Option<&str>) -> Result<Vec<Store>> {
        let city = city.filter(|c| !c.is_empty()).map(str::to_string);
        match self.query(QueryKey::Stores { city }).await? {
            CacheValue::Stores(stores) => Ok(stores.as_ref().clone()),
            other => Err(mismatch(&other)),
        }
    }

    /// Serve `key` from the cache, fetching it on a miss.
    ///
    /// Concurrent misses for the same key wait on a single fetch.
    async fn query(&self, key: QueryKey) -> Result<CacheValue> {
        self.inner
            .cache
            .try_get_with(key.clone(), self.fetch(key))
            .await
            .map_err(Arc::unwrap_or_clone)
    }

    /// Fetch and decode the response for `key`.
    #[instrument(skip(self))]
    async fn fetch(&self, key: QueryKey) -> Result<CacheValue> {
        let value = match &key {
            QueryKey::Categories => CacheValue::Categories(Arc::new(self.get_json(&key).await?)),
            QueryKey::Category(_) => CacheValue::Category(Arc::new(self.get_json(&key).await?)),
            QueryKey::CategoryProducts(_) => {
                CacheValue::Products(Arc::new(self.get_json(&key).await?))
            }
            QueryKey::Product(_) => CacheValue::Product(Arc::new(self.get_json(&key).await?)),
            QueryKey::Campaigns => CacheValue::Campaigns(Arc::new(self.get_json(&key).await?)),
            QueryKey::Stores { .. } => CacheValue::Stores(Arc::new(self.get_json(&key).await?)),
        };
        debug!(kind = value.kind(), "Fetched from API");
        Ok(value)
    }

    /// Build the request URL for `key`.
    fn url(&self, key: &QueryKey) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.inner.base_url.to_string()))?
            .pop_if_empty()
            .extend(key.segments());
        if let Some((name, value)) = key.query() {
            url.query_pairs_mut().append_pair(name, value);
        }
        Ok(url)
    }

    /// GET `key` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, key: &QueryKey) -> Result<T> {
        let url = self.url(key)?;
        let response = self.inner.client.get(url.clone()).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(url.path().to_string()));
        }
        if !status.is_success() {
            tracing::error!(
                status = %status,
                url = %url,
                "Catalog API returned non-success status"
            );
            return Err(ClientError::Status {
                status: status.as_u16(),
                path: url.path().to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

fn mismatch(value: &CacheValue) -> ClientError {
    ClientError::Decode(format!("unexpected cached {} entry", value.kind()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
    use ongo_core::{CategoryId, Slug};

    use super::*;

    #[derive(Clone, Default)]
    struct Hits(Arc<AtomicUsize>);

    impl Hits {
        fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    async fn slow_categories(State(hits): State<Hits>) -> Json<Vec<Category>> {
        hits.0.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        Json(vec![Category {
            id: CategoryId::generate(),
            name: "Kök".to_string(),
            slug: Slug::parse("kok").unwrap(),
            description: None,
            image_url: None,
        }])
    }

    async fn missing(State(hits): State<Hits>) -> StatusCode {
        hits.0.fetch_add(1, Ordering::SeqCst);
        StatusCode::NOT_FOUND
    }

    async fn broken(State(hits): State<Hits>) -> StatusCode {
        hits.0.fetch_add(1, Ordering::SeqCst);
        StatusCode::INTERNAL_SERVER_ERROR
    }

    async fn echo_city(
        State(hits): State<Hits>,
        axum::extract::Query(params): axum::extract::Query<std::collections::HashMap<String, String>>,
    ) -> Json<Vec<Store>> {
        hits.0.fetch_add(1, Ordering::SeqCst);
        let city = params.get("city").cloned().unwrap_or_default();
        Json(vec![Store {
            id: ongo_core::StoreId::generate(),
            name: format!("ONGO {city}"),
            address: "Testgatan 1".to_string(),
            city,
            postal_code: "111 11".to_string(),
            phone: None,
            latitude: None,
            longitude: None,
            opening_hours: None,
        }])
    }

    async fn spawn_api() -> (ApiClient, Hits) {
        let hits = Hits::default();
        let app = Router::new()
            .route("/api/categories", get(slow_categories))
            .route("/api/categories/{slug}", get(missing))
            .route("/api/campaigns", get(broken))
            .route("/api/stores", get(echo_city))
            .with_state(hits.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = ApiClientConfig {
            base_url: Url::parse(&format!("http://{addr}")).unwrap(),
            cache_ttl: Duration::from_secs(60),
            cache_capacity: 64,
            request_timeout: Duration::from_secs(5),
        };
        (ApiClient::new(&config).unwrap(), hits)
    }

    #[tokio::test]
    async fn test_cached_key_fetched_once() {
        let (client, hits) = spawn_api().await;

        let first = client.categories().await.unwrap();
        let second = client.categories().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(hits.count(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_fetches_coalesce() {
        let (client, hits) = spawn_api().await;

        let mut set = tokio::task::JoinSet::new();
        for _ in 0..8 {
            let client = client.clone();
            set.spawn(async move { client.categories().await });
        }
        while let Some(result) = set.join_next().await {
            assert_eq!(result.unwrap().unwrap().len(), 1);
        }

        assert_eq!(hits.count(), 1);
    }

    #[tokio::test]
    async fn test_not_found_is_not_cached() {
        let (client, hits) = spawn_api().await;

        let err = client.category("finns-inte").await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
        let _ = client.category("finns-inte").await;

        assert_eq!(hits.count(), 2);
    }

    #[tokio::test]
    async fn test_server_error_surfaces_status() {
        let (client, _) = spawn_api().await;

        let err = client.campaigns().await.unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_city_is_part_of_key_and_query() {
        let (client, hits) = spawn_api().await;

        let malmo = client.stores(Some("Malmö")).await.unwrap();
        let uppsala = client.stores(Some("Uppsala")).await.unwrap();
        let again = client.stores(Some("Malmö")).await.unwrap();

        assert_eq!(malmo.first().map(|s| s.city.as_str()), Some("Malmö"));
        assert_eq!(uppsala.first().map(|s| s.city.as_str()), Some("Uppsala"));
        assert_eq!(malmo, again);
        assert_eq!(hits.count(), 2);
    }

    #[tokio::test]
    async fn test_empty_city_means_no_filter() {
        let (client, hits) = spawn_api().await;

        let all = client.stores(Some("")).await.unwrap();
        let _ = client.stores(None).await.unwrap();

        assert_eq!(all.first().map(|s| s.city.as_str()), Some(""));
        assert_eq!(hits.count(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_api_is_http_error() {
        let config = ApiClientConfig {
            base_url: Url::parse("http://127.0.0.1:9").unwrap(),
            cache_ttl: Duration::from_secs(60),
            cache_capacity: 8,
            request_timeout: Duration::from_secs(2),
        };
        let client = ApiClient::new(&config).unwrap();

        assert!(matches!(
            client.categories().await,
            Err(ClientError::Http(_))
        ));
    }

    #[test]
    fn test_url_escapes_slug_segments() {
        let config = ApiClientConfig {
            base_url: Url::parse("http://api.test/").unwrap(),
            cache_ttl: Duration::from_secs(1),
            cache_capacity: 1,
            request_timeout: Duration::from_secs(1),
        };
        let client = ApiClient::new(&config).unwrap();

        let url = client
            .url(&QueryKey::Product("../admin".to_string()))
            .unwrap();
        assert_eq!(url.as_str(), "http://api.test/api/products/..%2Fadmin");

        let url = client
            .url(&QueryKey::Stores {
                city: Some("Västerås".to_string()),
            })
            .unwrap();
        assert_eq!(url.path(), "/api/stores");
        assert_eq!(
            url.query_pairs().next().map(|(k, v)| (k.into_owned(), v.into_owned())),
            Some(("city".to_string(), "Västerås".to_string()))
        );
    }

    #[test]
    fn test_query_state_from_result() {
        let loaded = QueryState::from_result(Ok(vec![1u8, 2]));
        assert_eq!(loaded.data().map(Vec::len), Some(2));
        assert!(loaded.error().is_none());

        let failed: QueryState<Vec<u8>> =
            QueryState::from_result(Err(ClientError::Http("refused".to_string())));
        assert_eq!(failed.error(), Some("HTTP error: refused"));
        assert!(failed.data().is_none());
        assert!(!failed.is_loading());
    }

    #[test]
    fn test_query_state_map_keeps_loading() {
        let loading: QueryState<u8> = QueryState::Loading;
        assert!(loading.map(|n| n + 1).is_loading());
        assert_eq!(QueryState::Success(1).map(|n: u8| n + 1).data(), Some(&2));
    }
}
