//! Commands for the Interrogation context.

use uuid::Uuid;

/// Command to put a question to a character on the case's roster.
#[derive(Debug, Clone)]
pub struct QuestionCharacter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The case under investigation.
    pub case_id: Uuid,
    /// The character being questioned.
    pub character_id: Uuid,
    /// The detective's question, verbatim.
    pub question: String,
}

/// Command to draft a character for a mentioned role and, if it survives
/// validation, append it to the roster.
#[derive(Debug, Clone)]
pub struct DraftCharacter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The case the character belongs to.
    pub case_id: Uuid,
    /// The mentioned role, e.g. "the gardener".
    pub role: String,
    /// What was said about them.
    pub context: String,
}
