use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    response::IntoResponse,
};
use mimir::server::controller::body_text::body_text_manual;
use mimir_test_utils::prelude::*;

/// Expect 200 OK after draining a text body from the raw request
#[tokio::test]
async fn returns_ok_for_text_body() -> Result<(), TestError> {
    let req = request::post_text("/request-body-string-v1", "hello")?;

    let result = body_text_manual(req).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(response::body_string(resp).await?, "ok");

    Ok(())
}

/// Expect 200 OK for an empty body
#[tokio::test]
async fn returns_ok_for_empty_body() -> Result<(), TestError> {
    let req = request::post_text("/request-body-string-v1", "")?;

    let result = body_text_manual(req).await;

    assert!(result.is_ok());

    Ok(())
}

/// Expect 400 when the body is not valid UTF-8
#[tokio::test]
async fn rejects_non_utf8_body() -> Result<(), TestError> {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/request-body-string-v1")
        .body(Body::from(vec![0xff, 0xfe, 0xfd]))?;

    let result = body_text_manual(req).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
