//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every handler is registered here with its OpenAPI specification via
//! utoipa, and Swagger UI is served at `/api/docs` so each binding
//! demonstration can be tried from the browser.

use axum::{
    routing::{on, MethodFilter},
    Router,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all demonstration endpoints
/// and Swagger UI documentation.
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`, and
/// interactive documentation is served at `/api/docs`. The `/hello-test`
/// alias is mounted outside the `routes!` macro (utoipa documents one path
/// per handler) using the long-form `on(MethodFilter::GET, ..)`
/// registration.
///
/// # Returns
/// An Axum `Router<AppState>` with all routes registered, ready for
/// `with_state`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Mimir", description = "Request binding and response handling playground"), tags(
        (name = controller::mapping::MAPPING_TAG, description = "Route mapping demonstrations"),
        (name = controller::param::PARAM_TAG, description = "Query and form parameter binding demonstrations"),
        (name = controller::body_text::BODY_TEXT_TAG, description = "Plain-text request body demonstrations"),
        (name = controller::body_json::BODY_JSON_TAG, description = "JSON request body demonstrations"),
        (name = controller::view::VIEW_TAG, description = "HTML page response demonstrations"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::mapping::hello_basic))
        .routes(routes!(controller::mapping::mapping_get))
        .routes(routes!(controller::mapping::mapping_path))
        .routes(routes!(controller::mapping::mapping_path_multi))
        .routes(routes!(controller::mapping::mapping_consume))
        .routes(routes!(controller::mapping::mapping_produce))
        .routes(routes!(controller::param::param_manual))
        .routes(routes!(controller::param::param_extract))
        .routes(routes!(controller::param::param_typed))
        .routes(routes!(controller::param::param_model))
        .routes(routes!(controller::param::param_optional))
        .routes(routes!(controller::param::param_default))
        .routes(routes!(controller::param::param_map))
        .routes(routes!(controller::param::form_model))
        .routes(routes!(controller::body_text::body_text_manual))
        .routes(routes!(controller::body_text::body_text_bytes))
        .routes(routes!(controller::body_text::body_text_entity))
        .routes(routes!(controller::body_text::body_text_response))
        .routes(routes!(controller::body_text::body_text_extract))
        .routes(routes!(controller::body_json::body_json_manual))
        .routes(routes!(controller::body_json::body_json_string))
        .routes(routes!(controller::body_json::body_json_extract))
        .routes(routes!(controller::body_json::body_json_entity))
        .routes(routes!(controller::body_json::body_json_echo))
        .routes(routes!(controller::body_json::body_json_response))
        .routes(routes!(controller::view::view_model))
        .routes(routes!(controller::view::view_name))
        .routes(routes!(controller::view::view_page))
        .split_for_parts();

    let routes = routes
        .route(
            "/hello-test",
            on(MethodFilter::GET, controller::mapping::hello_basic),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
