//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

use crate::generator::GeneratorError;

/// Top-level domain error type.
///
/// Only these variants ever reach the API boundary. Malformed generator
/// output and draft-validation rejections are absorbed at their call sites
/// (fallback case, empty mention list, dropped draft) and are therefore not
/// represented here.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No case exists with the given identifier.
    #[error("case not found: {0}")]
    CaseNotFound(Uuid),

    /// The case exists but holds no character with the given identifier.
    #[error("character not found: {0}")]
    CharacterNotFound(Uuid),

    /// An upstream generator call failed outright.
    #[error("generator failure: {0}")]
    Generator(#[from] GeneratorError),

    /// A storage/persistence error.
    #[error("storage error: {0}")]
    Storage(String),
}
