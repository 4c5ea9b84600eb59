//! Store search route handlers.
//!
//! The page renders the search box and a skeleton grid; htmx then loads
//! `/butiker/resultat` into the grid and reloads it as the visitor types.
//! Filtering happens here, on the full store list, matching city or store
//! name. The API's own `city` filter is not used, so results are filtered
//! exactly once.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use ongo_core::Store;
use serde::Deserialize;
use tracing::instrument;

use crate::client::QueryState;
use crate::filters;
use crate::routes::views::StoreView;
use crate::state::AppState;

/// Cities offered as search shortcuts.
pub const POPULAR_CITIES: [&str; 6] = [
    "Stockholm",
    "Göteborg",
    "Malmö",
    "Uppsala",
    "Västerås",
    "Sundsvall",
];

/// A shortcut link to the store search for one city.
#[derive(Debug, Clone)]
pub struct CityLink {
    pub name: &'static str,
    pub href: String,
}

/// Search links for [`POPULAR_CITIES`].
pub fn popular_city_links() -> Vec<CityLink> {
    POPULAR_CITIES
        .iter()
        .map(|&name| CityLink {
            name,
            href: search_href(name),
        })
        .collect()
}

/// Link to the store search page with `term` filled in.
fn search_href(term: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", term)
        .finish();
    format!("/butiker?{query}")
}

/// Search query for the store pages.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

impl SearchQuery {
    fn term(&self) -> &str {
        self.q.trim()
    }
}

/// Store search page template.
#[derive(Template, WebTemplate)]
#[template(path = "stores/index.html")]
pub struct StoresTemplate {
    pub query: String,
    pub popular_cities: Vec<CityLink>,
    pub stores: QueryState<Vec<StoreView>>,
}

/// Store results fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/store_results.html")]
pub struct StoreResultsTemplate {
    pub query: String,
    pub stores: QueryState<Vec<StoreView>>,
}

/// Display the store search page.
#[instrument]
pub async fn index(Query(query): Query<SearchQuery>) -> impl IntoResponse {
    StoresTemplate {
        query: query.term().to_string(),
        popular_cities: popular_city_links(),
        stores: QueryState::Loading,
    }
}

/// Store results fragment.
///
/// Returns store cards matching the query on city or name, or the empty
/// state when nothing matches.
#[instrument(skip(state))]
pub async fn results(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let term = query.term();
    let stores = QueryState::from_result(state.api().stores(None).await)
        .map(|all| filter_stores(&all, term));

    StoreResultsTemplate {
        query: term.to_string(),
        stores,
    }
}

/// Stores whose city or name contains `term`, case-insensitively.
fn filter_stores(stores: &[Store], term: &str) -> Vec<StoreView> {
    stores
        .iter()
        .filter(|store| store.matches_search(term))
        .map(StoreView::from)
        .collect()
}
