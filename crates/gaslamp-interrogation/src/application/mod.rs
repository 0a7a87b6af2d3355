//! Application layer for interrogation and roster expansion.

pub mod command_handlers;
