//! Unified error handling with Sentry integration.
//!
//! Every API handler returns `Result<T, ApiError>`. Errors render as a JSON
//! body of the form `{"message": "..."}`; server faults are captured to
//! Sentry and logged, but their details never reach the client.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::catalog::RepositoryError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested record does not exist. Carries the client-facing message.
    #[error("{0}")]
    NotFound(&'static str),

    /// A repository read failed.
    #[error("Failed to fetch {what}: {source}")]
    Fetch {
        /// Plural noun for the client message, e.g. "categories".
        what: &'static str,
        #[source]
        source: RepositoryError,
    },

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Wrap a repository error with the collection being read.
    pub fn fetch(what: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Fetch { what, source }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Fetch { .. } | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Fetch { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::NotFound(message) => (*message).to_string(),
            Self::Fetch { what, .. } => format!("Failed to fetch {what}"),
            Self::Internal(_) => "Internal server error".to_string(),
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Response for a handler that panicked.
///
/// Used with `CatchPanicLayer` so a panic surfaces as the same generic 500
/// body as any other internal fault.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_else(|| "handler panicked".to_string());
    ApiError::Internal(detail).into_response()
}
