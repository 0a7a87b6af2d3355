//! Gaslamp Core — shared domain abstractions.
//!
//! This crate defines the case data model, the error taxonomy, and the
//! capability ports (case store, text generators, image generator) that all
//! bounded contexts depend on. It contains no infrastructure code.

pub mod clock;
pub mod error;
pub mod generator;
pub mod model;
pub mod parse;
pub mod store;
