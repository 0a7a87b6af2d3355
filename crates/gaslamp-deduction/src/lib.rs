//! Gaslamp mystery engine — Evidence Deduction bounded context.
//!
//! Responsible for analyzing a detective's theory against the evidence they
//! selected, using the analytic generator.

pub mod application;
pub mod domain;
