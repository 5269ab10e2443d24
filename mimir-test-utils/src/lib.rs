//! Shared test helpers for the mimir request binding playground.
//!
//! Provides request builders for driving handlers and the assembled router
//! in tests, response body readers for asserting on what came back, and a
//! `TestError` so test functions can use the `?` operator throughout.

pub mod constant;
pub mod error;
pub mod request;
pub mod response;

pub use error::TestError;

pub mod prelude {
    pub use crate::{constant::TEST_SITE_NAME, error::TestError, request, response};
}
