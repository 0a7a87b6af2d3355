//! Gaslamp mystery engine — Visual Scenes bounded context.
//!
//! Responsible for the case's illustrations: the crime-scene image rendered
//! right after a case is generated, and testimony scenes rendered when a
//! detective's question asks a witness to picture something.

pub mod application;
pub mod domain;
