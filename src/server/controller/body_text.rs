//! Plain-text request body demonstrations.
//!
//! The same behavior, reading a text body and answering `ok`, written five
//! ways: draining the raw request by hand, the `Bytes` extractor with an
//! explicit UTF-8 decode, headers and body together, an explicit status
//! tuple response, and the plain `String` extractor.

use axum::{
    body::{to_bytes, Bytes},
    extract::Request,
    http::{header, HeaderMap, StatusCode},
};

use crate::server::{
    controller::MAX_BODY_BYTES,
    error::{binding::BindingError, Error},
};

pub static BODY_TEXT_TAG: &str = "body-text";

/// Raw access: drain the request body by hand
///
/// Takes the whole `Request` and drains the body stream itself with
/// `to_bytes` before decoding it as UTF-8.
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
/// - 400 (Bad Request): Body is not valid UTF-8 or could not be read
#[utoipa::path(
    post,
    path = "/request-body-string-v1",
    tag = BODY_TEXT_TAG,
    request_body(content = String, content_type = "text/plain"),
    responses(
        (status = 200, description = "Fixed string response", body = String)
    ),
)]
pub async fn body_text_manual(req: Request) -> Result<&'static str, Error> {
    let bytes = to_bytes(req.into_body(), MAX_BODY_BYTES).await?;
    let message = std::str::from_utf8(&bytes).map_err(|_| BindingError::InvalidBody)?;

    tracing::info!("message body = {}", message);
    Ok("ok")
}

/// Body as raw bytes with an explicit decode
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
/// - 400 (Bad Request): Body is not valid UTF-8
#[utoipa::path(
    post,
    path = "/request-body-string-v2",
    tag = BODY_TEXT_TAG,
    request_body(content = String, content_type = "text/plain"),
    responses(
        (status = 200, description = "Fixed string response", body = String)
    ),
)]
pub async fn body_text_bytes(body: Bytes) -> Result<&'static str, Error> {
    let message = std::str::from_utf8(&body).map_err(|_| BindingError::InvalidBody)?;

    tracing::info!("message body = {}", message);
    Ok("ok")
}

/// Headers and body bound together
///
/// The closest analogue to receiving the whole HTTP message at once:
/// the header map and the decoded body arrive as separate arguments.
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
#[utoipa::path(
    post,
    path = "/request-body-string-v3",
    tag = BODY_TEXT_TAG,
    request_body(content = String, content_type = "text/plain"),
    responses(
        (status = 200, description = "Fixed string response", body = String)
    ),
)]
pub async fn body_text_entity(headers: HeaderMap, body: String) -> &'static str {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("none");

    tracing::info!("content type = {}, message body = {}", content_type, body);
    "ok"
}

/// Explicit status tuple response
///
/// Returning `(StatusCode, body)` instead of a bare string sets the
/// response status explicitly; this route answers 201 Created.
///
/// # Responses
/// - 201 (Created): The fixed string `ok`
#[utoipa::path(
    post,
    path = "/request-body-string-other-v3",
    tag = BODY_TEXT_TAG,
    request_body(content = String, content_type = "text/plain"),
    responses(
        (status = 201, description = "Fixed string response with explicit status", body = String)
    ),
)]
pub async fn body_text_response(body: String) -> (StatusCode, &'static str) {
    tracing::info!("message body = {}", body);
    (StatusCode::CREATED, "ok")
}

/// Plain `String` extractor
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
#[utoipa::path(
    post,
    path = "/request-body-string-v4",
    tag = BODY_TEXT_TAG,
    request_body(content = String, content_type = "text/plain"),
    responses(
        (status = 200, description = "Fixed string response", body = String)
    ),
)]
pub async fn body_text_extract(body: String) -> &'static str {
    tracing::info!("message body = {}", body);
    "ok"
}
