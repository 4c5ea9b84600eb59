//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::views::ProductView;
use crate::state::AppState;

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductView,
}

/// Display product detail page.
///
/// # Errors
///
/// Renders the not-found page if no product has this slug.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ProductShowTemplate> {
    let product = state.api().product(&slug).await.map_err(AppError::lookup(
        "Produkt inte hittad",
        "Produkten du söker efter existerar inte.",
    ))?;

    Ok(ProductShowTemplate {
        product: ProductView::from(&product),
    })
}
