use axum::{http::StatusCode, response::IntoResponse};
use mimir::server::controller::body_json::body_json_response;
use mimir_test_utils::prelude::*;

/// Expect 200 OK from the explicit status tuple for valid member JSON
#[tokio::test]
async fn returns_ok_for_member_json() -> Result<(), TestError> {
    let body = "{\"username\": \"alice\", \"age\": 20}".to_string();

    let result = body_json_response(body).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(response::body_string(resp).await?, "ok");

    Ok(())
}

/// Expect 400 when the body is not valid JSON
#[tokio::test]
async fn rejects_malformed_json() -> Result<(), TestError> {
    let result = body_json_response("{broken".to_string()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
