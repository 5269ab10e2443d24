//! Query and form parameter binding demonstrations.
//!
//! Every handler here binds the same two values, a username and an age,
//! each through a different mechanism: raw query-string parsing, map
//! lookups, typed structs, optional and defaulted fields, and form bodies.

use std::collections::HashMap;

use axum::{
    extract::{Query, Request},
    Form,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, member::MemberDto},
    server::error::{binding::BindingError, Error},
};

pub static PARAM_TAG: &str = "param";

/// Username and age as required query parameters
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MemberParams {
    /// Display name of the member
    pub username: String,
    /// Age of the member in years
    pub age: i32,
}

/// Username required, age optional
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OptionalMemberParams {
    /// Display name of the member
    pub username: String,
    /// Age of the member in years, may be omitted
    pub age: Option<i32>,
}

/// Both parameters fall back to defaults when omitted
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DefaultedMemberParams {
    /// Display name of the member, defaults to `guest`
    #[serde(default = "default_username")]
    pub username: String,
    /// Age of the member in years, defaults to `-1`
    #[serde(default = "default_age")]
    pub age: i32,
}

fn default_username() -> String {
    "guest".to_string()
}

fn default_age() -> i32 {
    -1
}

/// Raw access: parse the query string by hand
///
/// Takes the whole `Request` and does everything itself: pulls the query
/// string off the URI, parses it with serde_urlencoded, looks up both
/// parameters, and parses the age with `str::parse`. The extractor-based
/// variants below get all of this from the framework.
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
/// - 400 (Bad Request): A parameter is missing or the age is not an integer
#[utoipa::path(
    get,
    path = "/request-param-v1",
    tag = PARAM_TAG,
    params(MemberParams),
    responses(
        (status = 200, description = "Fixed string response", body = String),
        (status = 400, description = "Missing or invalid parameter", body = ErrorDto)
    ),
)]
pub async fn param_manual(req: Request) -> Result<&'static str, Error> {
    let query = req.uri().query().unwrap_or_default();
    let params: HashMap<String, String> =
        serde_urlencoded::from_str(query).map_err(|err| BindingError::InvalidParam {
            param: "query".to_string(),
            reason: err.to_string(),
        })?;

    let username = params
        .get("username")
        .ok_or_else(|| BindingError::MissingParam("username".to_string()))?;
    let age: i32 = params
        .get("age")
        .ok_or_else(|| BindingError::MissingParam("age".to_string()))?
        .parse()
        .map_err(|_| BindingError::InvalidParam {
            param: "age".to_string(),
            reason: "expected an integer".to_string(),
        })?;

    tracing::info!("username = {}, age = {}", username, age);
    Ok("ok")
}

/// Query parameters through a map with explicit lookups
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
/// - 400 (Bad Request): A required parameter is missing
#[utoipa::path(
    get,
    path = "/request-param-v2",
    tag = PARAM_TAG,
    params(MemberParams),
    responses(
        (status = 200, description = "Fixed string response", body = String),
        (status = 400, description = "Missing parameter", body = ErrorDto)
    ),
)]
pub async fn param_extract(
    Query(params): Query<HashMap<String, String>>,
) -> Result<&'static str, Error> {
    let member_name = params
        .get("username")
        .ok_or_else(|| BindingError::MissingParam("username".to_string()))?;
    let member_age = params
        .get("age")
        .ok_or_else(|| BindingError::MissingParam("age".to_string()))?;

    tracing::info!("member_name = {}, member_age = {}", member_name, member_age);
    Ok("ok")
}

/// Query parameters bound onto a typed struct
///
/// A missing or non-numeric parameter is rejected by the extractor with
/// 400 before the handler runs.
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
/// - 400 (Bad Request): A parameter is missing or not an integer
#[utoipa::path(
    get,
    path = "/request-param-v3",
    tag = PARAM_TAG,
    params(MemberParams),
    responses(
        (status = 200, description = "Fixed string response", body = String)
    ),
)]
pub async fn param_typed(Query(params): Query<MemberParams>) -> &'static str {
    tracing::info!("username = {}, age = {}", params.username, params.age);
    "ok"
}

/// Query parameters bound straight onto the domain DTO
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
/// - 400 (Bad Request): A parameter is missing or not an integer
#[utoipa::path(
    get,
    path = "/request-param-v4",
    tag = PARAM_TAG,
    params(MemberDto),
    responses(
        (status = 200, description = "Fixed string response", body = String)
    ),
)]
pub async fn param_model(Query(member): Query<MemberDto>) -> &'static str {
    tracing::info!("username = {}, age = {}", member.username, member.age);
    tracing::info!("member = {:?}", member);
    "ok"
}

/// Required versus optional parameters
///
/// The username must be present; the age may be omitted and binds as
/// `None` when it is.
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
/// - 400 (Bad Request): The username is missing
#[utoipa::path(
    get,
    path = "/request-param-required",
    tag = PARAM_TAG,
    params(OptionalMemberParams),
    responses(
        (status = 200, description = "Fixed string response", body = String)
    ),
)]
pub async fn param_optional(Query(params): Query<OptionalMemberParams>) -> &'static str {
    tracing::info!("username = {}, age = {:?}", params.username, params.age);
    "ok"
}

/// Parameters with serde defaults
///
/// Omitting either parameter falls back to `guest` / `-1` instead of
/// rejecting the request.
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
#[utoipa::path(
    get,
    path = "/request-param-default",
    tag = PARAM_TAG,
    params(DefaultedMemberParams),
    responses(
        (status = 200, description = "Fixed string response", body = String)
    ),
)]
pub async fn param_default(Query(params): Query<DefaultedMemberParams>) -> &'static str {
    tracing::info!("username = {}, age = {}", params.username, params.age);
    "ok"
}

/// Every query parameter dumped from a map
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
#[utoipa::path(
    get,
    path = "/request-param-map",
    tag = PARAM_TAG,
    responses(
        (status = 200, description = "Fixed string response", body = String)
    ),
)]
pub async fn param_map(Query(params): Query<HashMap<String, String>>) -> &'static str {
    tracing::info!(
        "username = {}, age = {}",
        params.get("username").map(String::as_str).unwrap_or(""),
        params.get("age").map(String::as_str).unwrap_or("0")
    );
    "ok"
}

/// Form body bound onto the domain DTO
///
/// Binds `application/x-www-form-urlencoded` request bodies; a request
/// with a different content type is rejected with 415.
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
/// - 415 (Unsupported Media Type): Request body is not form encoded
#[utoipa::path(
    post,
    path = "/model-attribute-v1",
    tag = PARAM_TAG,
    request_body(content = MemberDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Fixed string response", body = String)
    ),
)]
pub async fn form_model(Form(member): Form<MemberDto>) -> &'static str {
    tracing::info!("username = {}, age = {}", member.username, member.age);
    tracing::info!("member = {:?}", member);
    "ok"
}
