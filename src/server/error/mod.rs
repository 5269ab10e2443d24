//! Error types for the mimir server.
//!
//! Custom errors only exist where a handler performs request binding by
//! hand (the raw-access demonstration variants); everything bound through
//! an Axum extractor surfaces the framework's own rejection response
//! instead. All error types here implement `IntoResponse` and use
//! `thiserror` for their `Display` and `Error` implementations.

pub mod binding;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{binding::BindingError, config::ConfigError},
};

/// Main error type for the mimir server.
///
/// Aggregates the domain error types and the external library errors the
/// manual binding demonstrations can produce, with `#[from]` conversions so
/// handlers can use the `?` operator throughout.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Manual request binding error (missing/invalid parameter or body).
    #[error(transparent)]
    BindingError(#[from] BindingError),
    /// Body read error (client disconnected or body length limit hit).
    #[error(transparent)]
    BodyError(#[from] axum::Error),
    /// JSON error from manually deserializing a request body.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// I/O error (binding the TCP listener at startup).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Binding failures from the manual demonstration handlers map to 400 Bad
/// Request, matching the status the equivalent extractor rejection would
/// produce. Everything else is a 500 with a generic message.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::BindingError(err) => err.into_response(),
            Self::BodyError(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!("Failed to read request body: {}", err),
                }),
            )
                .into_response(),
            Self::JsonError(err) => BindingError::InvalidJson(err.to_string()).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message, but returns a generic message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
