use axum::{http::StatusCode, response::IntoResponse};
use mimir::{
    model::{api::ErrorDto, member::MemberDto},
    server::controller::body_json::body_json_manual,
};
use mimir_test_utils::prelude::*;

/// Expect 200 OK after manually parsing a member from the raw request
#[tokio::test]
async fn returns_ok_for_member_json() -> Result<(), TestError> {
    let member = MemberDto {
        username: "alice".to_string(),
        age: 20,
    };
    let req = request::post_json("/request-body-json-v1", &member)?;

    let result = body_json_manual(req).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(response::body_string(resp).await?, "ok");

    Ok(())
}

/// Expect 400 with an error body for malformed JSON
#[tokio::test]
async fn rejects_malformed_json() -> Result<(), TestError> {
    let req = request::post_raw(
        "/request-body-json-v1",
        "application/json",
        "{\"username\": \"alice\",",
    )?;

    let result = body_json_manual(req).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = response::body_json(resp).await?;
    assert!(error.error.contains("Invalid JSON"));

    Ok(())
}

/// Expect 400 when the JSON does not match the member shape
#[tokio::test]
async fn rejects_mismatched_json() -> Result<(), TestError> {
    let req = request::post_raw(
        "/request-body-json-v1",
        "application/json",
        "{\"username\": \"alice\", \"age\": \"twenty\"}",
    )?;

    let result = body_json_manual(req).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
