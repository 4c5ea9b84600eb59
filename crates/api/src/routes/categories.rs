//! Category handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use ongo_core::Category;
use tracing::instrument;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// List all categories.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = state
        .catalog()
        .list_categories()
        .map_err(ApiError::fetch("categories"))?;
    Ok(Json(categories))
}

/// Look up a category by slug.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Category>> {
    state
        .catalog()
        .get_category_by_slug(&slug)
        .map_err(ApiError::fetch("category"))?
        .map(Json)
        .ok_or(ApiError::NotFound("Category not found"))
}
