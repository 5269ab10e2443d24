//! JSON request body demonstrations.
//!
//! Reading the same member object out of a JSON body six ways: manual
//! draining and parsing, parsing a `String` body, the `Json` extractor,
//! headers alongside `Json`, a full JSON echo, and manual serialization
//! with an explicit status tuple.

use axum::{
    body::to_bytes,
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    Json,
};

use crate::{
    model::{api::ErrorDto, member::MemberDto},
    server::{controller::MAX_BODY_BYTES, error::Error},
};

pub static BODY_JSON_TAG: &str = "body-json";

/// Raw access: drain and parse the JSON body by hand
///
/// Drains the request body and runs it through `serde_json::from_slice`
/// itself; the `Json` extractor variants below get both steps from the
/// framework.
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
/// - 400 (Bad Request): Body is not valid JSON for a member
#[utoipa::path(
    post,
    path = "/request-body-json-v1",
    tag = BODY_JSON_TAG,
    request_body = MemberDto,
    responses(
        (status = 200, description = "Fixed string response", body = String),
        (status = 400, description = "Malformed JSON body", body = ErrorDto)
    ),
)]
pub async fn body_json_manual(req: Request) -> Result<&'static str, Error> {
    let bytes = to_bytes(req.into_body(), MAX_BODY_BYTES).await?;
    let member: MemberDto = serde_json::from_slice(&bytes)?;

    tracing::info!("username = {}, age = {}", member.username, member.age);
    Ok("ok")
}

/// JSON read from a `String` body and parsed explicitly
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
/// - 400 (Bad Request): Body is not valid JSON for a member
#[utoipa::path(
    post,
    path = "/request-body-json-v2",
    tag = BODY_JSON_TAG,
    request_body = MemberDto,
    responses(
        (status = 200, description = "Fixed string response", body = String),
        (status = 400, description = "Malformed JSON body", body = ErrorDto)
    ),
)]
pub async fn body_json_string(body: String) -> Result<&'static str, Error> {
    tracing::info!("message body = {}", body);

    let member: MemberDto = serde_json::from_str(&body)?;
    tracing::info!("username = {}, age = {}", member.username, member.age);

    Ok("ok")
}

/// JSON converted by the `Json` extractor
///
/// Malformed JSON, a schema mismatch, or a missing JSON content type are
/// all rejected by the extractor before the handler runs.
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
/// - 400 (Bad Request): Body is not syntactically valid JSON
/// - 415 (Unsupported Media Type): Request content type is not JSON
/// - 422 (Unprocessable Entity): JSON does not match the member shape
#[utoipa::path(
    post,
    path = "/request-body-json-v3",
    tag = BODY_JSON_TAG,
    request_body = MemberDto,
    responses(
        (status = 200, description = "Fixed string response", body = String)
    ),
)]
pub async fn body_json_extract(Json(member): Json<MemberDto>) -> &'static str {
    tracing::info!("username = {}, age = {}", member.username, member.age);
    "ok"
}

/// Headers alongside the converted JSON body
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
#[utoipa::path(
    post,
    path = "/request-body-json-v4",
    tag = BODY_JSON_TAG,
    request_body = MemberDto,
    responses(
        (status = 200, description = "Fixed string response", body = String)
    ),
)]
pub async fn body_json_entity(headers: HeaderMap, Json(member): Json<MemberDto>) -> &'static str {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("none");

    tracing::info!("content type = {}", content_type);
    tracing::info!("username = {}, age = {}", member.username, member.age);
    "ok"
}

/// JSON echo: object in, object out
///
/// Returning `Json` serializes the bound member back out, so the response
/// body mirrors the request body.
///
/// # Responses
/// - 200 (OK): The member echoed back as JSON
#[utoipa::path(
    post,
    path = "/request-body-json-v5",
    tag = BODY_JSON_TAG,
    request_body = MemberDto,
    responses(
        (status = 200, description = "The bound member echoed back", body = MemberDto)
    ),
)]
pub async fn body_json_echo(Json(member): Json<MemberDto>) -> Json<MemberDto> {
    tracing::info!("username = {}, age = {}", member.username, member.age);
    Json(member)
}

/// Manual parse and manual serialization with a status tuple
///
/// Parses the body itself, then serializes a blank member back to a JSON
/// string with `serde_json::to_string` to show the other direction of the
/// conversion, and answers with an explicit `(StatusCode, body)` tuple.
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
/// - 400 (Bad Request): Body is not valid JSON for a member
#[utoipa::path(
    post,
    path = "/request-body-test-v6",
    tag = BODY_JSON_TAG,
    request_body = MemberDto,
    responses(
        (status = 200, description = "Fixed string response", body = String),
        (status = 400, description = "Malformed JSON body", body = ErrorDto)
    ),
)]
pub async fn body_json_response(body: String) -> Result<(StatusCode, &'static str), Error> {
    tracing::info!("message body = {}", body);

    let member: MemberDto = serde_json::from_str(&body)?;
    tracing::info!("member = {:?}", member);

    let blank = serde_json::to_string(&MemberDto::default())?;
    tracing::info!("blank member serialized = {}", blank);

    Ok((StatusCode::OK, "ok"))
}
