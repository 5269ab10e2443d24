//! Server-side models.
//!
//! Contains types used only by the server, currently just the shared
//! application state handed to the router.

pub mod app;
