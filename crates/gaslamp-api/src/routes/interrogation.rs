//! Routes for the Interrogation and Roster Expansion bounded context.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use gaslamp_core::model::{Character, VisualScene};
use gaslamp_interrogation::application::command_handlers;
use gaslamp_interrogation::domain::commands;
use gaslamp_scenes::application::command_handlers::handle_illustrate_testimony;
use gaslamp_scenes::domain::commands::IllustrateTestimony;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /question-character.
#[derive(Debug, Deserialize)]
pub struct QuestionCharacterRequest {
    /// The case under investigation.
    pub case_id: Uuid,
    /// The character being questioned.
    pub character_id: Uuid,
    /// The detective's question.
    pub question: String,
}

/// Request body for POST /generate-dynamic-character.
#[derive(Debug, Deserialize)]
pub struct DynamicCharacterRequest {
    /// The case the character belongs to.
    pub case_id: Uuid,
    /// The mentioned role, e.g. "the gardener".
    pub role: String,
    /// What was said about them.
    pub context: String,
}

/// One roster discovery, with the provenance the client shows the player.
#[derive(Debug, Serialize)]
pub struct DiscoveredCharacterPayload {
    /// The newly appended character.
    pub character: Character,
    /// Name of the witness whose testimony surfaced them.
    pub discovered_through: String,
    /// What the witness said about them.
    pub context: String,
}

/// Response body for POST /question-character.
#[derive(Debug, Serialize)]
pub struct QuestionCharacterResponse {
    /// Name of the character who answered.
    pub character_name: String,
    /// The in-character reply.
    pub response: String,
    /// Characters discovered and appended during this exchange.
    pub new_characters_discovered: Vec<DiscoveredCharacterPayload>,
    /// Illustration of the testimony, when the question asked for one and
    /// rendering succeeded.
    pub visual_scene_generated: Option<VisualScene>,
}

/// Response body for POST /generate-dynamic-character.
#[derive(Debug, Serialize)]
pub struct DynamicCharacterResponse {
    /// The drafted, validated, and persisted character.
    pub character: Character,
}

/// POST /question-character
#[instrument(
    skip(state, request),
    fields(case_id = %request.case_id, character_id = %request.character_id)
)]
async fn question_character(
    State(state): State<AppState>,
    Json(request): Json<QuestionCharacterRequest>,
) -> Result<Json<QuestionCharacterResponse>, ApiError> {
    let command = commands::QuestionCharacter {
        correlation_id: Uuid::new_v4(),
        case_id: request.case_id,
        character_id: request.character_id,
        question: request.question,
    };

    info!(correlation_id = %command.correlation_id, "handling question_character command");

    let outcome = command_handlers::handle_question_character(
        &command,
        state.narrative.as_ref(),
        state.analytic.as_ref(),
        state.cases.as_ref(),
    )
    .await?;

    let visual_scene_generated = match &state.illustrator {
        Some(illustrator) => {
            let scene_command = IllustrateTestimony {
                correlation_id: command.correlation_id,
                case_id: command.case_id,
                witness: outcome.character_name.clone(),
                question: command.question.clone(),
                testimony: outcome.reply.clone(),
            };
            handle_illustrate_testimony(
                &scene_command,
                state.clock.as_ref(),
                illustrator.as_ref(),
                state.cases.as_ref(),
            )
            .await
        }
        None => None,
    };

    Ok(Json(QuestionCharacterResponse {
        character_name: outcome.character_name,
        response: outcome.reply,
        new_characters_discovered: outcome
            .discovered
            .into_iter()
            .map(|d| DiscoveredCharacterPayload {
                character: d.character,
                discovered_through: d.discovered_through,
                context: d.context,
            })
            .collect(),
        visual_scene_generated,
    }))
}

/// POST /generate-dynamic-character
#[instrument(skip(state, request), fields(case_id = %request.case_id, role = %request.role))]
async fn generate_dynamic_character(
    State(state): State<AppState>,
    Json(request): Json<DynamicCharacterRequest>,
) -> Result<Json<DynamicCharacterResponse>, ApiError> {
    let command = commands::DraftCharacter {
        correlation_id: Uuid::new_v4(),
        case_id: request.case_id,
        role: request.role,
        context: request.context,
    };

    info!(correlation_id = %command.correlation_id, "handling draft_character command");

    let character = command_handlers::handle_draft_character(
        &command,
        state.narrative.as_ref(),
        state.analytic.as_ref(),
        state.cases.as_ref(),
    )
    .await?
    .ok_or(ApiError::DraftNotProduced)?;

    Ok(Json(DynamicCharacterResponse { character }))
}

/// Returns the router for the interrogation context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/question-character", post(question_character))
        .route("/generate-dynamic-character", post(generate_dynamic_character))
}
