//! Request builders for handler and router tests.
//!
//! Each builder returns a ready `Request<Body>` with the method, content
//! type, and body already set, so tests only state the URI and payload.

use axum::{
    body::Body,
    http::{header, Method, Request},
};
use serde::Serialize;

use crate::error::TestError;

/// Build a GET request for the given URI (query string included)
pub fn get(uri: &str) -> Result<Request<Body>, TestError> {
    Ok(Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())?)
}

/// Build a POST request with a plain-text body
pub fn post_text(uri: &str, body: &str) -> Result<Request<Body>, TestError> {
    Ok(Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(body.to_string()))?)
}

/// Build a POST request with a JSON-serialized body
pub fn post_json<T: Serialize>(uri: &str, body: &T) -> Result<Request<Body>, TestError> {
    Ok(Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?)
}

/// Build a POST request with a raw body and an explicit content type
///
/// For the malformed-payload cases where serializing a value would get in
/// the way of sending broken input.
pub fn post_raw(uri: &str, content_type: &str, body: &str) -> Result<Request<Body>, TestError> {
    Ok(Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))?)
}

/// Build a POST request with a form-urlencoded body
pub fn post_form<T: Serialize>(uri: &str, body: &T) -> Result<Request<Body>, TestError> {
    Ok(Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(body)?))?)
}
