//! Gaslamp mystery engine — Case Authoring bounded context.
//!
//! Responsible for generating complete mystery cases: prompting the
//! narrative generator, parsing and shape-checking its output, and falling
//! back to the stock case when the output cannot be used.

pub mod application;
pub mod domain;
