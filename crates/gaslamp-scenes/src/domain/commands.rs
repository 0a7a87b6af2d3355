//! Commands for the Visual Scenes context.

use uuid::Uuid;

/// Command to render an illustration of what a witness just described.
#[derive(Debug, Clone)]
pub struct IllustrateTestimony {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The case the scene belongs to.
    pub case_id: Uuid,
    /// Name of the witness who gave the testimony.
    pub witness: String,
    /// The detective's question, verbatim.
    pub question: String,
    /// The testimony to depict.
    pub testimony: String,
}
