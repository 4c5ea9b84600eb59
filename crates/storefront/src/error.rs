//! Unified error handling with Sentry integration.
//!
//! Page handlers return `Result<T, AppError>`. Errors render as full HTML
//! pages: a not-found view with status 404, or a generic error view for
//! upstream failures. Upstream failures are captured to Sentry before the
//! page is rendered.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::client::ClientError;
use crate::filters;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested page or record does not exist.
    #[error("Not found: {heading}")]
    NotFound {
        /// Page heading, e.g. "Produkt inte hittad".
        heading: &'static str,
        /// Explanation shown under the heading.
        message: &'static str,
    },

    /// The catalog API failed.
    #[error("Catalog API error: {0}")]
    Api(#[from] ClientError),
}

impl AppError {
    /// The generic not-found page.
    pub const fn page_not_found() -> Self {
        Self::NotFound {
            heading: "Sidan hittades inte",
            message: "Sidan du letar efter finns inte eller har flyttats.",
        }
    }

    /// Map a failed single-record lookup: an API 404 becomes the given
    /// not-found page, anything else stays an upstream failure.
    pub fn lookup(
        heading: &'static str,
        message: &'static str,
    ) -> impl FnOnce(ClientError) -> Self {
        move |err| match err {
            ClientError::NotFound(_) => Self::NotFound { heading, message },
            other => Self::Api(other),
        }
    }
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "errors/not_found.html")]
pub struct NotFoundTemplate {
    pub heading: &'static str,
    pub message: &'static str,
}

/// Error page template for upstream failures.
#[derive(Template, WebTemplate)]
#[template(path = "errors/error.html")]
pub struct ErrorTemplate {
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { heading, message } => (
                StatusCode::NOT_FOUND,
                NotFoundTemplate { heading, message },
            )
                .into_response(),
            Self::Api(ref err) => {
                let event_id = sentry::capture_error(&self);
                tracing::error!(
                    error = %self,
                    sentry_event_id = %event_id,
                    "Request error"
                );

                let status = match err {
                    ClientError::InvalidUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
                    _ => StatusCode::BAD_GATEWAY,
                };

                // Don't expose upstream details to visitors
                (
                    status,
                    ErrorTemplate {
                        message: "Vi kunde inte hämta sidan just nu. Försök igen om en stund.",
                    },
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound {
            heading: "Produkt inte hittad",
            message: "Produkten finns inte.",
        };
        assert_eq!(err.to_string(), "Not found: Produkt inte hittad");

        let err = AppError::from(ClientError::Http("connection refused".to_string()));
        assert_eq!(
            err.to_string(),
            "Catalog API error: HTTP error: connection refused"
        );
    }

    #[test]
    fn test_lookup_maps_only_not_found() {
        let missing = AppError::lookup("Produkt inte hittad", "Produkten finns inte.")(
            ClientError::NotFound("/api/products/x".to_string()),
        );
        assert!(matches!(
            missing,
            AppError::NotFound {
                heading: "Produkt inte hittad",
                ..
            }
        ));

        let failed = AppError::lookup("Produkt inte hittad", "Produkten finns inte.")(
            ClientError::Decode("bad json".to_string()),
        );
        assert!(matches!(failed, AppError::Api(ClientError::Decode(_))));
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(get_status(AppError::page_not_found()), StatusCode::NOT_FOUND);
        assert_eq!(
            get_status(ClientError::Http("refused".to_string()).into()),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            get_status(
                ClientError::Status {
                    status: 500,
                    path: "/api/campaigns".to_string()
                }
                .into()
            ),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            get_status(ClientError::InvalidUrl("mailto:x".to_string()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
