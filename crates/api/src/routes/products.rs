//! Product handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use ongo_core::{CategoryId, Product};
use tracing::instrument;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// List the products in a category.
///
/// An id that is not a UUID cannot match any category, so it gets the same
/// empty list as an unknown id.
#[instrument(skip(state))]
pub async fn by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<Vec<Product>>> {
    let Ok(category_id) = category_id.parse::<CategoryId>() else {
        tracing::debug!(%category_id, "Category id is not a UUID");
        return Ok(Json(Vec::new()));
    };

    let products = state
        .catalog()
        .list_products_by_category(category_id)
        .map_err(ApiError::fetch("products"))?;
    Ok(Json(products))
}

/// Look up a product by slug.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Product>> {
    state
        .catalog()
        .get_product_by_slug(&slug)
        .map_err(ApiError::fetch("product"))?
        .map(Json)
        .ok_or(ApiError::NotFound("Product not found"))
}
