//! ONGO catalog API library.
//!
//! Serves the in-memory catalog as JSON. The crate is a library so the
//! router can be mounted by tests and by the `ongo-api` binary alike.
//!
//! # Example
//!
//! ```rust,ignore
//! use ongo_api::{AppState, MemoryCatalog, app};
//!
//! let catalog = MemoryCatalog::seeded()?;
//! let router = app(AppState::new(catalog));
//! axum::serve(listener, router).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{Router, extract::Request};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use catalog::{CatalogRepository, MemoryCatalog, RepositoryError};
pub use state::AppState;

/// Build the complete API router with its middleware stack.
pub fn app(state: AppState) -> Router {
    routes::routes()
        .with_state(state)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        ))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
}
