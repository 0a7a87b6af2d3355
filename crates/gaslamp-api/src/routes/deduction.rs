//! Routes for the Evidence Deduction bounded context.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use gaslamp_deduction::application::command_handlers;
use gaslamp_deduction::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /analyze-evidence.
#[derive(Debug, Deserialize)]
pub struct AnalyzeEvidenceRequest {
    /// The case under investigation.
    pub case_id: Uuid,
    /// Evidence the detective selected. Unknown identifiers are skipped.
    pub evidence_ids: Vec<Uuid>,
    /// The detective's theory.
    pub theory: String,
}

/// Response body for POST /analyze-evidence.
#[derive(Debug, Serialize)]
pub struct AnalyzeEvidenceResponse {
    /// The analytic generator's assessment, verbatim.
    pub analysis: String,
}

/// POST /analyze-evidence
#[instrument(skip(state, request), fields(case_id = %request.case_id))]
async fn analyze_evidence(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeEvidenceRequest>,
) -> Result<Json<AnalyzeEvidenceResponse>, ApiError> {
    let command = commands::AnalyzeEvidence {
        correlation_id: Uuid::new_v4(),
        case_id: request.case_id,
        evidence_ids: request.evidence_ids,
        theory: request.theory,
    };

    info!(correlation_id = %command.correlation_id, "handling analyze_evidence command");

    let analysis = command_handlers::handle_analyze_evidence(
        &command,
        state.analytic.as_ref(),
        state.cases.as_ref(),
    )
    .await?;

    Ok(Json(AnalyzeEvidenceResponse { analysis }))
}

/// Returns the router for the deduction context.
pub fn router() -> Router<AppState> {
    Router::new().route("/analyze-evidence", post(analyze_evidence))
}
