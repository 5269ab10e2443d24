use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};
use mimir::server::controller::mapping::mapping_produce;
use mimir_test_utils::prelude::*;

/// Expect 200 OK served with a text/html content type
#[tokio::test]
async fn returns_ok_as_html() -> Result<(), TestError> {
    let resp = mapping_produce().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    assert_eq!(response::body_string(resp).await?, "ok");

    Ok(())
}
