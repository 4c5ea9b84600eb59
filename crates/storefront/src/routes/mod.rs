//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /kategorier             - Category grid
//! GET  /kategorier/lista       - Category grid fragment (HTMX)
//! GET  /kategori/{slug}        - Category page
//! GET  /kategori/{slug}/produkter - Product grid fragment (HTMX)
//! GET  /produkt/{slug}         - Product detail
//! GET  /erbjudanden            - Campaign cards fragment (HTMX)
//!
//! # Stores
//! GET  /butiker                - Store search page
//! GET  /butiker/resultat?q=    - Store results fragment (HTMX)
//!
//! # Pages
//! GET  /om-oss                 - About ONGO
//! ```
//!
//! Anything else renders the 404 page.

pub mod campaigns;
pub mod categories;
pub mod home;
pub mod pages;
pub mod products;
pub mod stores;
pub mod views;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the store search routes router.
pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(stores::index))
        .route("/resultat", get(stores::results))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        // Catalog
        .route("/kategorier", get(categories::index))
        .route("/kategorier/lista", get(categories::grid))
        .route("/kategori/{slug}", get(categories::show))
        .route("/kategori/{slug}/produkter", get(categories::products))
        .route("/produkt/{slug}", get(products::show))
        .route("/erbjudanden", get(campaigns::list))
        // Stores
        .nest("/butiker", store_routes())
        // Static pages
        .route("/om-oss", get(pages::about))
        .fallback(pages::not_found)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the catalog API.
async fn health() -> &'static str {
    "ok"
}
