//! Request binding and response handling playground.
//!
//! Each HTTP endpoint in this crate demonstrates exactly one way of reading
//! an incoming request (raw request access, typed query extraction, form
//! binding, text or JSON bodies, path variables) or producing a response
//! (plain text, status tuples, JSON echo, rendered HTML). Handlers log what
//! they bound and return a fixed result, so every route can be poked with
//! curl or from the Swagger UI at `/api/docs`.

pub mod model;
pub mod server;
