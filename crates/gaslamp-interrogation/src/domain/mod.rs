//! Domain logic for interrogation and roster expansion.

pub mod commands;
pub mod draft;
pub mod mentions;
pub mod outcome;
pub mod prompts;
