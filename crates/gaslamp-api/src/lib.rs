//! Gaslamp mystery engine — HTTP API surface.
//!
//! Thin request/response boundary over the bounded contexts: routes
//! deserialize requests into commands, hand them to the context handlers,
//! and translate outcomes and errors into JSON payloads and status codes.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
