//! Application layer for visual scenes.

pub mod command_handlers;
