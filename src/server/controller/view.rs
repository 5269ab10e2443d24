//! HTML page response demonstrations.
//!
//! Axum has no view-name resolution; a page is just a handler returning
//! `Html`. These routes show the rendered page, what you get when you
//! return a path instead of wrapping it in `Html`, and the page addressed
//! directly.

use axum::{extract::State, response::Html};

use crate::server::model::app::AppState;

pub static VIEW_TAG: &str = "view";

/// Model value shown on the hello page.
const PAGE_DATA: &str = "hello!";

/// Path of the rendered page route.
const PAGE_PATH: &str = "/response/hello";

fn render_hello_page(site_name: &str, data: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>{site_name}</title></head>\n\
         <body>\n\
         <p>{data}</p>\n\
         </body>\n\
         </html>\n"
    )
}

/// Rendered HTML page response
///
/// Builds the page with the model value and returns it wrapped in `Html`,
/// which sets the `text/html` content type.
///
/// # Responses
/// - 200 (OK): The rendered hello page
#[utoipa::path(
    get,
    path = "/response-view-v1",
    tag = VIEW_TAG,
    responses(
        (status = 200, description = "Rendered hello page", body = String, content_type = "text/html")
    ),
)]
pub async fn view_model(State(state): State<AppState>) -> Html<String> {
    tracing::info!("view_model data = {}", PAGE_DATA);
    Html(render_hello_page(&state.config.site_name, PAGE_DATA))
}

/// Page path returned as plain text
///
/// Without the `Html` wrapper a returned string is just a text body; this
/// route answers with the path of the page route instead of the page.
///
/// # Responses
/// - 200 (OK): The path of the hello page route as plain text
#[utoipa::path(
    get,
    path = "/response-view-v2",
    tag = VIEW_TAG,
    responses(
        (status = 200, description = "Page path as plain text", body = String)
    ),
)]
pub async fn view_name() -> &'static str {
    tracing::info!("view_name data = {}", PAGE_DATA);
    PAGE_PATH
}

/// The hello page addressed directly
///
/// Serves the same page as `/response-view-v1`, so the path returned by
/// `/response-view-v2` is a live route.
///
/// # Responses
/// - 200 (OK): The rendered hello page
#[utoipa::path(
    get,
    path = "/response/hello",
    tag = VIEW_TAG,
    responses(
        (status = 200, description = "Rendered hello page", body = String, content_type = "text/html")
    ),
)]
pub async fn view_page(State(state): State<AppState>) -> Html<String> {
    tracing::info!("view_page data = {}", PAGE_DATA);
    Html(render_hello_page(&state.config.site_name, PAGE_DATA))
}
