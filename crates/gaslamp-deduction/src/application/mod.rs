//! Application layer for evidence deduction.

pub mod command_handlers;
