use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors produced by the handlers that bind request data by hand.
///
/// The extractor-based handlers never construct these; their failures are
/// rejected by Axum before the handler runs.
#[derive(Error, Debug)]
pub enum BindingError {
    #[error("Missing required parameter: {0}")]
    MissingParam(String),
    #[error("Invalid value for parameter {param}: {reason}")]
    InvalidParam { param: String, reason: String },
    #[error("Invalid JSON in request body: {0}")]
    InvalidJson(String),
    #[error("Request body is not valid UTF-8")]
    InvalidBody,
}

impl IntoResponse for BindingError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
