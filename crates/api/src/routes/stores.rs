//! Store handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use ongo_core::Store;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Store listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct StoreQuery {
    /// Case-insensitive city substring. Absent or empty means all stores.
    pub city: Option<String>,
}

/// List stores, optionally filtered by city.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<StoreQuery>,
) -> Result<Json<Vec<Store>>> {
    let catalog = state.catalog();
    let stores = match query.city.as_deref() {
        Some(city) if !city.is_empty() => catalog.list_stores_by_city(city),
        _ => catalog.list_stores(),
    }
    .map_err(ApiError::fetch("stores"))?;
    Ok(Json(stores))
}
