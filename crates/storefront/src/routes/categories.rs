//! Category route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::instrument;

use crate::client::QueryState;
use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::views::{CategoryView, ProductView};
use crate::state::AppState;

/// Category grid template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/index.html")]
pub struct CategoriesIndexTemplate {
    pub categories: QueryState<Vec<CategoryView>>,
}

/// Category grid fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/category_grid.html")]
pub struct CategoryGridTemplate {
    pub categories: QueryState<Vec<CategoryView>>,
}

/// Category detail template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/show.html")]
pub struct CategoryShowTemplate {
    pub category: CategoryView,
    pub products: QueryState<Vec<ProductView>>,
    pub products_url: String,
}

/// Product grid fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: QueryState<Vec<ProductView>>,
}

async fn fetch_categories(state: &AppState) -> QueryState<Vec<CategoryView>> {
    QueryState::from_result(state.api().categories().await)
        .map(|list| list.iter().map(CategoryView::from).collect())
}

/// Display all categories.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    CategoriesIndexTemplate {
        categories: fetch_categories(&state).await,
    }
}

/// Category grid fragment, loaded into the home page.
#[instrument(skip(state))]
pub async fn grid(State(state): State<AppState>) -> impl IntoResponse {
    CategoryGridTemplate {
        categories: fetch_categories(&state).await,
    }
}

/// Display a category; its products load from [`products`].
///
/// # Errors
///
/// Renders the not-found page if no category has this slug.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<CategoryShowTemplate> {
    let category = state.api().category(&slug).await.map_err(AppError::lookup(
        "Kategori inte hittad",
        "Kategorin du söker efter existerar inte.",
    ))?;
    let category = CategoryView::from(&category);

    Ok(CategoryShowTemplate {
        products_url: products_href(&category),
        category,
        products: QueryState::Loading,
    })
}

/// Product grid fragment for one category.
///
/// Always renders; a failed lookup becomes the fragment's error state.
#[instrument(skip(state))]
pub async fn products(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let api = state.api();
    let result = async {
        let category = api.category(&slug).await?;
        api.products_in_category(category.id).await
    }
    .await;

    ProductGridTemplate {
        products: QueryState::from_result(result)
            .map(|list| list.iter().map(ProductView::from).collect()),
    }
}

fn products_href(category: &CategoryView) -> String {
    format!("{}/produkter", category.href)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn kitchen() -> CategoryView {
        CategoryView {
            name: "Kök".to_string(),
            href: "/kategori/kok".to_string(),
            description: None,
            image_url: None,
            is_deals: false,
        }
    }

    #[test]
    fn test_products_href_hangs_off_category() {
        assert_eq!(products_href(&kitchen()), "/kategori/kok/produkter");
    }

    #[test]
    fn test_show_page_starts_with_skeleton() {
        let category = kitchen();
        let page = CategoryShowTemplate {
            products_url: products_href(&category),
            category,
            products: QueryState::Loading,
        };
        let html = page.render().unwrap();

        assert!(html.contains("hx-get=\"/kategori/kok/produkter\""));
        assert!(html.contains("skeleton"));
        assert!(!html.contains("Inga produkter hittades"));
    }

    #[test]
    fn test_product_fragment_renders_error_state() {
        let fragment = ProductGridTemplate {
            products: QueryState::Error("Status 500".to_string()),
        };
        let html = fragment.render().unwrap();

        assert!(html.contains("Kunde inte hämta produkter"));
        assert!(!html.contains("Status 500"));
        assert!(!html.contains("skeleton"));
    }
}
