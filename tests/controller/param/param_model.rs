use axum::{extract::Query, http::StatusCode, response::IntoResponse};
use mimir::{model::member::MemberDto, server::controller::param::param_model};
use mimir_test_utils::prelude::*;

/// Expect 200 OK with the domain DTO bound from the query
#[tokio::test]
async fn returns_ok_for_bound_dto() -> Result<(), TestError> {
    let member = MemberDto {
        username: "alice".to_string(),
        age: 20,
    };

    let resp = param_model(Query(member)).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(response::body_string(resp).await?, "ok");

    Ok(())
}
