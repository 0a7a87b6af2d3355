//! Routes for the Visual Scenes bounded context.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use gaslamp_core::error::DomainError;
use gaslamp_core::model::VisualScene;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for GET /case-scenes/{id}.
#[derive(Debug, Serialize)]
pub struct SceneGalleryResponse {
    /// Every scene rendered for the case so far, in render order.
    pub scenes: Vec<VisualScene>,
}

/// GET /case-scenes/{case_id}
#[instrument(skip(state))]
async fn case_scenes(
    State(state): State<AppState>,
    Path(case_id): Path<Uuid>,
) -> Result<Json<SceneGalleryResponse>, ApiError> {
    let case = state
        .cases
        .find_case(case_id)
        .await?
        .ok_or(DomainError::CaseNotFound(case_id))?;

    Ok(Json(SceneGalleryResponse {
        scenes: case.visual_scenes,
    }))
}

/// Returns the router for the scenes context.
pub fn router() -> Router<AppState> {
    Router::new().route("/case-scenes/{case_id}", get(case_scenes))
}
