//! Route mapping demonstrations.
//!
//! These handlers show how routes are declared and matched: one handler
//! mounted at several paths, path variables (single and multiple, typed),
//! restricting the accepted request content type, and producing a response
//! with an explicit content type.

use axum::{extract::Path, response::Html, Json};

pub static MAPPING_TAG: &str = "mapping";

/// Plain route returning a fixed string
///
/// Mounted at both `/hello-basic` and `/hello-test`; the alias is
/// registered in the router with the long-form `on(MethodFilter::GET, ..)`
/// registration while this path uses the `routes!` shortcut.
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
#[utoipa::path(
    get,
    path = "/hello-basic",
    tag = MAPPING_TAG,
    responses(
        (status = 200, description = "Fixed string response", body = String)
    ),
)]
pub async fn hello_basic() -> &'static str {
    tracing::info!("hello_basic");
    "ok"
}

/// Route registered through the `get(..)` method-router shortcut
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
#[utoipa::path(
    get,
    path = "/mapping-get-v2",
    tag = MAPPING_TAG,
    responses(
        (status = 200, description = "Fixed string response", body = String)
    ),
)]
pub async fn mapping_get() -> &'static str {
    tracing::info!("mapping_get");
    "ok"
}

/// Single path variable bound as a `String`
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
#[utoipa::path(
    get,
    path = "/mapping/{user_id}",
    tag = MAPPING_TAG,
    params(
        ("user_id" = String, Path, description = "User identifier taken from the path")
    ),
    responses(
        (status = 200, description = "Fixed string response", body = String)
    ),
)]
pub async fn mapping_path(Path(user_id): Path<String>) -> &'static str {
    tracing::info!("mapping_path user_id = {}", user_id);
    "ok"
}

/// Multiple path variables bound as a typed tuple
///
/// The order identifier is an `i64`; a path segment that does not parse as
/// one is rejected by the extractor with 400 before this handler runs.
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
/// - 400 (Bad Request): `order_id` segment is not an integer
#[utoipa::path(
    get,
    path = "/mapping/users/{user_id}/orders/{order_id}",
    tag = MAPPING_TAG,
    params(
        ("user_id" = String, Path, description = "User identifier taken from the path"),
        ("order_id" = i64, Path, description = "Numeric order identifier taken from the path")
    ),
    responses(
        (status = 200, description = "Fixed string response", body = String)
    ),
)]
pub async fn mapping_path_multi(Path((user_id, order_id)): Path<(String, i64)>) -> &'static str {
    tracing::info!("mapping_path_multi user_id = {}, order_id = {}", user_id, order_id);
    "ok"
}

/// Route restricted to JSON requests
///
/// Binding through `Json` makes the route reject requests without an
/// `application/json` content type; the payload itself is ignored.
///
/// # Responses
/// - 200 (OK): The fixed string `ok`
/// - 415 (Unsupported Media Type): Request content type is not JSON
#[utoipa::path(
    post,
    path = "/mapping-consume",
    tag = MAPPING_TAG,
    request_body(content = String, content_type = "application/json"),
    responses(
        (status = 200, description = "Fixed string response", body = String)
    ),
)]
pub async fn mapping_consume(Json(payload): Json<serde_json::Value>) -> &'static str {
    tracing::info!("mapping_consume payload = {}", payload);
    "ok"
}

/// Route producing an HTML response
///
/// Wrapping the body in `Html` sets the `text/html` response content type.
///
/// # Responses
/// - 200 (OK): The fixed string `ok` served as `text/html`
#[utoipa::path(
    post,
    path = "/mapping-produce",
    tag = MAPPING_TAG,
    responses(
        (status = 200, description = "Fixed string served as HTML", body = String, content_type = "text/html")
    ),
)]
pub async fn mapping_produce() -> Html<&'static str> {
    tracing::info!("mapping_produce");
    Html("ok")
}
