use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use mimir::server::controller::view::view_model;
use mimir_test_utils::prelude::*;

use crate::controller::test_state;

/// Expect the rendered page with the model value and the site name
#[tokio::test]
async fn renders_hello_page() -> Result<(), TestError> {
    let resp = view_model(State(test_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response::body_string(resp).await?;
    assert!(body.contains("hello!"));
    assert!(body.contains(TEST_SITE_NAME));

    Ok(())
}
