//! Domain logic for visual scenes.

pub mod commands;
pub mod prompts;
pub mod triggers;
