//! HTTP route handlers for the catalog API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                             - Liveness check
//!
//! # Categories
//! GET  /api/categories                     - All categories
//! GET  /api/categories/{slug}              - Category by slug (404 if missing)
//! GET  /api/categories/{categoryId}/products - Products in a category
//!
//! # Products
//! GET  /api/products/{slug}                - Product by slug (404 if missing)
//!
//! # Campaigns
//! GET  /api/campaigns                      - Active campaigns
//!
//! # Stores
//! GET  /api/stores?city=                   - All stores, or filtered by city
//! ```

pub mod campaigns;
pub mod categories;
pub mod products;
pub mod stores;

use axum::{Router, routing::get};

use crate::error::ApiError;
use crate::state::AppState;

/// Create the category routes router.
///
/// Both the slug lookup and the product listing share the first path
/// segment, so they share a parameter name.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index))
        .route("/{category}", get(categories::show))
        .route("/{category}/products", get(products::by_category))
}

/// Create all routes under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category_routes())
        .route("/products/{slug}", get(products::show))
        .route("/campaigns", get(campaigns::index))
        .route("/stores", get(stores::index))
        .fallback(not_found)
}

/// Create all routes for the API server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

/// JSON 404 for unknown API paths.
async fn not_found() -> ApiError {
    ApiError::NotFound("Not found")
}
