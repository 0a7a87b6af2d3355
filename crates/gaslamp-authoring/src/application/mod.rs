//! Application layer for case authoring.

pub mod command_handlers;
