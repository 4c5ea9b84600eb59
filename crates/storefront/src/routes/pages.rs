//! Static content page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;

/// A company value on the about page.
pub struct Value {
    pub title: &'static str,
    pub text: &'static str,
}

const VALUES: [Value; 4] = [
    Value {
        title: "Rätt pris",
        text: "Vi erbjuder kvalitetsprodukter till riktigt bra priser - utan dolda kostnader eller krångel.",
    },
    Value {
        title: "Brett sortiment",
        text: "Allt du behöver för hemmet och fritiden samlat på ett ställe - från trädgård till förvaring.",
    },
    Value {
        title: "Fysiska butiker",
        text: "Med butiker från Göteborg till Sundsvall finns vi nära dig när du behöver oss.",
    },
    Value {
        title: "Kundfokus",
        text: "Ingen registrering, inga medlemsavgifter - bara bra produkter och bra service.",
    },
];

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub values: &'static [Value],
}

/// Display the about page.
#[instrument]
pub async fn about() -> impl IntoResponse {
    AboutTemplate { values: &VALUES }
}

/// Fallback for unknown paths.
#[instrument]
pub async fn not_found() -> AppError {
    AppError::page_not_found()
}
