//! Gaslamp mystery engine — Interrogation and Roster Expansion bounded context.
//!
//! Responsible for in-character testimony, detection of newly mentioned
//! people in that testimony, and the draft-validate-append cycle that grows
//! the case's roster while play is underway.

pub mod application;
pub mod domain;
