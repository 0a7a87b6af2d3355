//! `PostgreSQL` implementation of the `CaseRepository` trait.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use gaslamp_core::error::DomainError;
use gaslamp_core::model::{Case, Character, VisualScene};
use gaslamp_core::store::CaseRepository;

/// PostgreSQL-backed case repository. One row per case; the whole case
/// lives in the `doc` JSONB column.
#[derive(Debug, Clone)]
pub struct PgCaseRepository {
    pool: PgPool,
}

impl PgCaseRepository {
    /// Creates a new `PgCaseRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Appends one JSON element to an array field of the stored document.
    /// A single `UPDATE`, so concurrent appends serialize on the row lock
    /// and never lose each other's writes.
    async fn append_to_array(
        &self,
        case_id: Uuid,
        field: &str,
        element: serde_json::Value,
    ) -> Result<(), DomainError> {
        // `field` is one of our own column-path literals, never user input.
        let sql = format!(
            "UPDATE cases \
             SET doc = jsonb_set( \
                 doc, \
                 '{{{field}}}', \
                 COALESCE(doc->'{field}', '[]'::jsonb) || jsonb_build_array($2::jsonb) \
             ) \
             WHERE id = $1"
        );
        let result = sqlx::query(&sql)
            .bind(case_id)
            .bind(element)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::CaseNotFound(case_id));
        }
        tracing::debug!(%case_id, field, "appended element to case document");
        Ok(())
    }
}

#[async_trait]
impl CaseRepository for PgCaseRepository {
    async fn insert_case(&self, case: &Case) -> Result<(), DomainError> {
        let doc = case_to_doc(case)?;
        sqlx::query("INSERT INTO cases (id, doc, created_at) VALUES ($1, $2, $3)")
            .bind(case.id)
            .bind(doc)
            .bind(case.created_at)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        tracing::debug!(case_id = %case.id, "inserted case document");
        Ok(())
    }

    async fn find_case(&self, case_id: Uuid) -> Result<Option<Case>, DomainError> {
        let doc: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT doc FROM cases WHERE id = $1")
                .bind(case_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(storage_err)?;
        doc.map(doc_to_case).transpose()
    }

    async fn append_character(
        &self,
        case_id: Uuid,
        character: &Character,
    ) -> Result<(), DomainError> {
        let element = serde_json::to_value(character).map_err(encode_err)?;
        self.append_to_array(case_id, "characters", element).await
    }

    async fn append_scene(&self, case_id: Uuid, scene: &VisualScene) -> Result<(), DomainError> {
        let element = serde_json::to_value(scene).map_err(encode_err)?;
        self.append_to_array(case_id, "visual_scenes", element).await
    }

    async fn set_crime_scene_image(&self, case_id: Uuid, url: &str) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE cases \
             SET doc = jsonb_set(doc, '{crime_scene_image_url}', to_jsonb($2::text)) \
             WHERE id = $1",
        )
        .bind(case_id)
        .bind(url)
        .execute(&self.pool)
        .await
        .map_err(storage_err)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::CaseNotFound(case_id));
        }
        Ok(())
    }
}

fn storage_err(err: sqlx::Error) -> DomainError {
    DomainError::Storage(err.to_string())
}

fn encode_err(err: serde_json::Error) -> DomainError {
    DomainError::Storage(format!("failed to encode case document: {err}"))
}

/// Serializes a case into its stored document form.
fn case_to_doc(case: &Case) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(case).map_err(encode_err)
}

/// Deserializes a stored document back into a case.
fn doc_to_case(doc: serde_json::Value) -> Result<Case, DomainError> {
    serde_json::from_value(doc)
        .map_err(|err| DomainError::Storage(format!("failed to decode case document: {err}")))
}
