use axum::{http::StatusCode, response::IntoResponse};
use mimir::server::controller::body_text::body_text_response;
use mimir_test_utils::prelude::*;

/// Expect 201 Created from the explicit status tuple
#[tokio::test]
async fn returns_created() -> Result<(), TestError> {
    let resp = body_text_response("hello".to_string())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(response::body_string(resp).await?, "ok");

    Ok(())
}
