//! Persistence port for case documents.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;
use crate::model::{Case, Character, VisualScene};

/// Storage for case documents.
///
/// The append operations must be atomic single-field appends on the stored
/// document: two concurrent appends to the same case both land, and neither
/// overwrites the other. Implementations must not read the document, modify
/// it in memory, and write it back.
#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// Persists a freshly generated case.
    async fn insert_case(&self, case: &Case) -> Result<(), DomainError>;

    /// Loads a case by id, `None` when no such case exists.
    async fn find_case(&self, case_id: Uuid) -> Result<Option<Case>, DomainError>;

    /// Appends a character to the case's roster.
    async fn append_character(
        &self,
        case_id: Uuid,
        character: &Character,
    ) -> Result<(), DomainError>;

    /// Appends a visual scene to the case.
    async fn append_scene(&self, case_id: Uuid, scene: &VisualScene) -> Result<(), DomainError>;

    /// Records the crime-scene illustration URL.
    async fn set_crime_scene_image(&self, case_id: Uuid, url: &str) -> Result<(), DomainError>;
}
