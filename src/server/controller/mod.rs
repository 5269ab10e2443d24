//! HTTP controller endpoints.
//!
//! Each module groups a family of demonstration handlers, and each handler
//! shows exactly one Axum idiom for reading a request or producing a
//! response. Handlers log what they bound with `tracing` and return a
//! fixed string, a JSON echo, or a rendered HTML page. All endpoints are
//! documented with utoipa and browsable from the Swagger UI.

pub mod body_json;
pub mod body_text;
pub mod mapping;
pub mod param;
pub mod view;

/// Upper bound when draining request bodies by hand.
pub(crate) const MAX_BODY_BYTES: usize = 1024 * 1024;
