//! Campaign handlers.

use axum::{Json, extract::State};
use ongo_core::Campaign;
use tracing::instrument;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// List active campaigns.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Campaign>>> {
    let campaigns = state
        .catalog()
        .list_active_campaigns()
        .map_err(ApiError::fetch("campaigns"))?;
    Ok(Json(campaigns))
}
