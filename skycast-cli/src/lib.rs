//! Library half of `skycast-cli`: the HTTP API and terminal rendering,
//! exposed so integration tests can drive the router directly.

pub mod http;
pub mod render;
