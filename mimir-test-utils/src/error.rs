use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    HttpError(#[from] axum::http::Error),
    #[error(transparent)]
    BodyError(#[from] axum::Error),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error(transparent)]
    FormError(#[from] serde_urlencoded::ser::Error),
    #[error(transparent)]
    Utf8Error(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Infallible(#[from] std::convert::Infallible),
}
