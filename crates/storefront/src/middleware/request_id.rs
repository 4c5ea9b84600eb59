//! Request ID middleware for request tracing and correlation.
//!
//! The storefront is the public edge, usually behind Cloudflare or a load
//! balancer. The request ID is taken from the first usable upstream header:
//! - `x-request-id` from a proxy that sets one
//! - `cf-ray` from Cloudflare
//!
//! Otherwise a UUID v4 is generated. The ID is recorded in the current
//! tracing span, tagged on the Sentry scope and returned in the response.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Cloudflare's per-request ray ID.
const CF_RAY_HEADER: &str = "cf-ray";

/// Upstream IDs longer than this are replaced.
const MAX_UPSTREAM_ID_LEN: usize = 128;

/// Middleware that ensures every request has a request ID.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id =
        upstream_request_id(request.headers()).unwrap_or_else(|| Uuid::new_v4().to_string());

    Span::current().record("request_id", &request_id);

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// The ID set by a proxy in front of us, preferring `x-request-id`.
fn upstream_request_id(headers: &HeaderMap) -> Option<String> {
    [REQUEST_ID_HEADER, CF_RAY_HEADER]
        .into_iter()
        .filter_map(|name| headers.get(name)?.to_str().ok())
        .find(|id| is_usable(id))
        .map(String::from)
}

fn is_usable(id: &str) -> bool {
    !id.is_empty() && id.len() <= MAX_UPSTREAM_ID_LEN && id.bytes().all(|b| b.is_ascii_graphic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for &(name, value) in pairs {
            if let Ok(value) = HeaderValue::from_str(value) {
                headers.insert(name, value);
            }
        }
        headers
    }

    #[test]
    fn test_proxy_request_id_wins_over_cf_ray() {
        let headers = headers(&[
            (REQUEST_ID_HEADER, "lb-42"),
            (CF_RAY_HEADER, "8a1b2c3d4e5f6789-ARN"),
        ]);
        assert_eq!(upstream_request_id(&headers).as_deref(), Some("lb-42"));
    }

    #[test]
    fn test_cf_ray_used_when_no_request_id() {
        let headers = headers(&[(CF_RAY_HEADER, "8a1b2c3d4e5f6789-ARN")]);
        assert_eq!(
            upstream_request_id(&headers).as_deref(),
            Some("8a1b2c3d4e5f6789-ARN")
        );
    }

    #[test]
    fn test_unusable_request_id_falls_back_to_cf_ray() {
        let headers = headers(&[
            (REQUEST_ID_HEADER, "has space"),
            (CF_RAY_HEADER, "8a1b2c3d4e5f6789-ARN"),
        ]);
        assert_eq!(
            upstream_request_id(&headers).as_deref(),
            Some("8a1b2c3d4e5f6789-ARN")
        );
    }

    #[test]
    fn test_nothing_usable_is_none() {
        assert_eq!(upstream_request_id(&HeaderMap::new()), None);

        let too_long = "a".repeat(MAX_UPSTREAM_ID_LEN + 1);
        let headers = headers(&[(REQUEST_ID_HEADER, ""), (CF_RAY_HEADER, &too_long)]);
        assert_eq!(upstream_request_id(&headers), None);
    }
}
