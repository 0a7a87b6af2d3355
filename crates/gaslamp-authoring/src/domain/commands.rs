//! Commands for the Case Authoring context.

use uuid::Uuid;

/// Command to generate and persist a new mystery case.
#[derive(Debug, Clone)]
pub struct GenerateCase {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}
