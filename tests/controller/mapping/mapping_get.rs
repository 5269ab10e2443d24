use axum::{http::StatusCode, response::IntoResponse};
use mimir::server::controller::mapping::mapping_get;
use mimir_test_utils::prelude::*;

/// Expect 200 OK with the fixed string body
#[tokio::test]
async fn returns_ok() -> Result<(), TestError> {
    let resp = mapping_get().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(response::body_string(resp).await?, "ok");

    Ok(())
}
