//! Commands for the Evidence Deduction context.

use uuid::Uuid;

/// Command to analyze a theory against selected evidence.
#[derive(Debug, Clone)]
pub struct AnalyzeEvidence {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The case under investigation.
    pub case_id: Uuid,
    /// Evidence the detective selected. Unknown identifiers are skipped.
    pub evidence_ids: Vec<Uuid>,
    /// The detective's theory, verbatim.
    pub theory: String,
}
