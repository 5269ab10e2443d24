use axum::{http::StatusCode, response::IntoResponse};
use mimir::server::controller::view::view_name;
use mimir_test_utils::prelude::*;

/// Expect the page path as a plain-text body, not a rendered page
#[tokio::test]
async fn returns_page_path_as_text() -> Result<(), TestError> {
    let resp = view_name().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = response::body_string(resp).await?;
    assert_eq!(body, "/response/hello");
    assert!(!body.contains("<html>"));

    Ok(())
}
