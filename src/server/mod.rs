//! Server application core modules.
//!
//! This module contains all server-side functionality for the mimir
//! playground: HTTP routing with OpenAPI documentation, the controller
//! endpoints demonstrating each request binding and response idiom, error
//! types, environment configuration, and startup helpers.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod startup;
