//! HTTP middleware stack for the API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (record on span, echo in response)
//! 4. `CatchPanicLayer` (panics become a JSON 500)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
