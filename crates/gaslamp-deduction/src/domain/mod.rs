//! Domain logic for evidence deduction.

pub mod commands;
pub mod prompts;
