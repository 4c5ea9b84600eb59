//! Campaign fragment handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::client::QueryState;
use crate::routes::views::CampaignView;
use crate::state::AppState;

/// Campaign cards fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/campaigns.html")]
pub struct CampaignsTemplate {
    pub campaigns: QueryState<Vec<CampaignView>>,
}

/// Active campaigns fragment, loaded into the home page.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    let campaigns = QueryState::from_result(state.api().campaigns().await)
        .map(|list| list.iter().map(CampaignView::from).collect());

    CampaignsTemplate { campaigns }
}
