//! Response body readers for asserting on handler output.

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;

use crate::error::TestError;

/// Read a response body to completion as a UTF-8 string
pub async fn body_string(response: Response) -> Result<String, TestError> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;

    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Read a response body to completion and deserialize it from JSON
pub async fn body_json<T: DeserializeOwned>(response: Response) -> Result<T, TestError> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;

    Ok(serde_json::from_slice(&bytes)?)
}
