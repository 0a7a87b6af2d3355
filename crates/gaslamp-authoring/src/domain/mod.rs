//! Domain logic for case authoring.

pub mod commands;
pub mod fallback;
pub mod parse;
pub mod prompts;
