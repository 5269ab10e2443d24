use axum::{extract::Path, http::StatusCode, response::IntoResponse};
use mimir::server::controller::mapping::mapping_path_multi;
use mimir_test_utils::prelude::*;

/// Expect 200 OK with both typed path variables bound
#[tokio::test]
async fn returns_ok_for_bound_tuple() -> Result<(), TestError> {
    let resp = mapping_path_multi(Path(("alpha".to_string(), 42)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(response::body_string(resp).await?, "ok");

    Ok(())
}
