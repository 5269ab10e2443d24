//! Shared data transfer objects.
//!
//! These models define the JSON and form shapes exchanged with clients:
//! the error envelope returned by failed requests and the member value
//! object that every binding demonstration binds onto.

pub mod api;
pub mod member;
