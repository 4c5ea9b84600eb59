//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::client::QueryState;
use crate::filters;
use crate::routes::stores::{CityLink, popular_city_links};
use crate::routes::views::{CampaignView, CategoryView};

/// A selling point in the "how it works" section.
pub struct Highlight {
    pub title: &'static str,
    pub text: &'static str,
    pub tag: &'static str,
}

const HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        title: "Gå in i butik",
        text: "Hitta din närmaste ONGO-butik och kom förbi när det passar dig",
        tag: "Enkelt",
    },
    Highlight {
        title: "Ta del av våra låga priser",
        text: "Upptäck kvalitetsprodukter till riktigt bra priser för hem och fritid",
        tag: "Prisvärt",
    },
    Highlight {
        title: "Inget medlemskap behövs",
        text: "Inga krångliga registreringar eller medlemsavgifter - bara bra priser direkt",
        tag: "Utan krångel",
    },
    Highlight {
        title: "Byggt för hela Sverige",
        text: "Med butiker från Göteborg till Sundsvall finns vi nära dig",
        tag: "Nära dig",
    },
];

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub categories: QueryState<Vec<CategoryView>>,
    pub campaigns: QueryState<Vec<CampaignView>>,
    pub highlights: &'static [Highlight],
    pub popular_cities: Vec<CityLink>,
}

/// Display the home page.
///
/// Categories and campaigns render as skeletons; htmx loads each section
/// from its own fragment, so a failure in one does not blank the other.
#[instrument]
pub async fn home() -> impl IntoResponse {
    HomeTemplate {
        categories: QueryState::Loading,
        campaigns: QueryState::Loading,
        highlights: &HIGHLIGHTS,
        popular_cities: popular_city_links(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_home_sections_load_from_fragments() {
        let page = HomeTemplate {
            categories: QueryState::Loading,
            campaigns: QueryState::Loading,
            highlights: &HIGHLIGHTS,
            popular_cities: popular_city_links(),
        };
        let html = page.render().unwrap();

        assert!(html.contains("hx-get=\"/kategorier/lista\""));
        assert!(html.contains("hx-get=\"/erbjudanden\""));
        assert_eq!(html.matches("card skeleton").count(), 9);
        assert!(!html.contains("Kunde inte hämta"));
    }
}
