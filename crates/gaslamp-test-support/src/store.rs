//! Test repositories — mock `CaseRepository` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use gaslamp_core::error::DomainError;
use gaslamp_core::model::{Case, Character, VisualScene};
use gaslamp_core::store::CaseRepository;
use uuid::Uuid;

/// A case repository backed by an in-memory map. Appends happen under a
/// single lock, so they are atomic the same way the production store's
/// single-statement appends are.
#[derive(Debug, Default)]
pub struct InMemoryCaseRepository {
    cases: Mutex<HashMap<Uuid, Case>>,
}

impl InMemoryCaseRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository pre-seeded with the given cases.
    #[must_use]
    pub fn seeded(cases: impl IntoIterator<Item = Case>) -> Self {
        Self {
            cases: Mutex::new(cases.into_iter().map(|c| (c.id, c)).collect()),
        }
    }

    /// Snapshot of a stored case, straight from the map.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn stored(&self, case_id: Uuid) -> Option<Case> {
        self.cases.lock().unwrap().get(&case_id).cloned()
    }

    /// Number of cases currently stored.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn len(&self) -> usize {
        self.cases.lock().unwrap().len()
    }

    /// Whether the repository holds no cases.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn is_empty(&self) -> bool {
        self.cases.lock().unwrap().is_empty()
    }

    fn with_case<T>(
        &self,
        case_id: Uuid,
        f: impl FnOnce(&mut Case) -> T,
    ) -> Result<T, DomainError> {
        let mut cases = self.cases.lock().unwrap();
        let case = cases.get_mut(&case_id).ok_or(DomainError::CaseNotFound(case_id))?;
        Ok(f(case))
    }
}

#[async_trait]
impl CaseRepository for InMemoryCaseRepository {
    async fn insert_case(&self, case: &Case) -> Result<(), DomainError> {
        self.cases.lock().unwrap().insert(case.id, case.clone());
        Ok(())
    }

    async fn find_case(&self, case_id: Uuid) -> Result<Option<Case>, DomainError> {
        Ok(self.cases.lock().unwrap().get(&case_id).cloned())
    }

    async fn append_character(
        &self,
        case_id: Uuid,
        character: &Character,
    ) -> Result<(), DomainError> {
        self.with_case(case_id, |case| case.characters.push(character.clone()))
    }

    async fn append_scene(&self, case_id: Uuid, scene: &VisualScene) -> Result<(), DomainError> {
        self.with_case(case_id, |case| case.visual_scenes.push(scene.clone()))
    }

    async fn set_crime_scene_image(&self, case_id: Uuid, url: &str) -> Result<(), DomainError> {
        self.with_case(case_id, |case| {
            case.crime_scene_image_url = Some(url.to_owned());
        })
    }
}

/// A case repository that always returns a storage error. Useful for testing
/// error-handling paths.
#[derive(Debug)]
pub struct FailingCaseRepository;

impl FailingCaseRepository {
    fn refused<T>() -> Result<T, DomainError> {
        Err(DomainError::Storage("connection refused".into()))
    }
}

#[async_trait]
impl CaseRepository for FailingCaseRepository {
    async fn insert_case(&self, _case: &Case) -> Result<(), DomainError> {
        Self::refused()
    }

    async fn find_case(&self, _case_id: Uuid) -> Result<Option<Case>, DomainError> {
        Self::refused()
    }

    async fn append_character(
        &self,
        _case_id: Uuid,
        _character: &Character,
    ) -> Result<(), DomainError> {
        Self::refused()
    }

    async fn append_scene(&self, _case_id: Uuid, _scene: &VisualScene) -> Result<(), DomainError> {
        Self::refused()
    }

    async fn set_crime_scene_image(&self, _case_id: Uuid, _url: &str) -> Result<(), DomainError> {
        Self::refused()
    }
}
