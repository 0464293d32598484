//! Core application primitives (HTTP server and routing)

pub mod http;

pub use http::*;
