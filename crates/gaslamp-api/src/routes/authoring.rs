//! Routes for the Case Authoring bounded context.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use gaslamp_authoring::application::command_handlers;
use gaslamp_authoring::domain::commands;
use gaslamp_core::error::DomainError;
use gaslamp_core::model::Case;
use gaslamp_scenes::application::command_handlers::handle_attach_crime_scene_image;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for POST /generate-case.
#[derive(Debug, Serialize)]
pub struct GenerateCaseResponse {
    /// The freshly generated case, solution redacted.
    pub case: Case,
    /// Identifier for the player's investigation session.
    pub session_id: Uuid,
}

/// Response body for GET /cases/{id}.
#[derive(Debug, Serialize)]
pub struct CaseResponse {
    /// The requested case, solution redacted.
    pub case: Case,
}

/// POST /generate-case
#[instrument(skip(state))]
async fn generate_case(
    State(state): State<AppState>,
) -> Result<Json<GenerateCaseResponse>, ApiError> {
    let command = commands::GenerateCase {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling generate_case command");

    let case = command_handlers::handle_generate_case(
        &command,
        state.clock.as_ref(),
        state.narrative.as_ref(),
        state.cases.as_ref(),
    )
    .await?;

    // The case is playable without its illustration; render it after the
    // response has gone out.
    if let Some(illustrator) = state.illustrator.clone() {
        let cases = state.cases.clone();
        let case_for_image = case.clone();
        tokio::spawn(async move {
            if let Err(err) =
                handle_attach_crime_scene_image(&case_for_image, illustrator.as_ref(), cases.as_ref())
                    .await
            {
                warn!(case_id = %case_for_image.id, error = %err, "crime scene illustration failed");
            }
        });
    }

    Ok(Json(GenerateCaseResponse {
        case: case.redacted(),
        session_id: Uuid::new_v4(),
    }))
}

/// GET /cases/{case_id}
#[instrument(skip(state))]
async fn get_case(
    State(state): State<AppState>,
    Path(case_id): Path<Uuid>,
) -> Result<Json<CaseResponse>, ApiError> {
    let case = state
        .cases
        .find_case(case_id)
        .await?
        .ok_or(DomainError::CaseNotFound(case_id))?;

    Ok(Json(CaseResponse {
        case: case.redacted(),
    }))
}

/// Returns the router for the authoring context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-case", post(generate_case))
        .route("/cases/{case_id}", get(get_case))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{TimeZone, Utc};
    use gaslamp_core::model::REDACTED_SOLUTION;
    use gaslamp_test_support::{
        FailingGenerator, FixedClock, InMemoryCaseRepository, ScriptedGenerator, sample_case,
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app_state(
        cases: Arc<InMemoryCaseRepository>,
        narrative: Arc<dyn gaslamp_core::generator::TextGenerator>,
    ) -> AppState {
        AppState::new(
            Arc::new(FixedClock(
                Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
            )),
            cases,
            narrative,
            Arc::new(ScriptedGenerator::always("[]")),
            None,
        )
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_case_falls_back_on_prose_and_redacts() {
        // Arrange: the generator produces prose, so the stock case is
        // served; either way the solution must come back redacted.
        let cases = Arc::new(InMemoryCaseRepository::new());
        let app = router().with_state(app_state(
            cases.clone(),
            Arc::new(ScriptedGenerator::always("Once upon a time...")),
        ));

        let request = Request::builder()
            .method("POST")
            .uri("/generate-case")
            .body(Body::empty())
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["case"]["solution"], REDACTED_SOLUTION);
        assert!(json["session_id"].is_string());
        assert_eq!(cases.len(), 1);
    }

    #[tokio::test]
    async fn test_generate_case_surfaces_generator_failure_as_500() {
        // Arrange
        let cases = Arc::new(InMemoryCaseRepository::new());
        let app = router().with_state(app_state(cases.clone(), Arc::new(FailingGenerator::default())));

        let request = Request::builder()
            .method("POST")
            .uri("/generate-case")
            .body(Body::empty())
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "generator_failure");
        assert_eq!(cases.len(), 0);
    }

    #[tokio::test]
    async fn test_get_case_returns_redacted_case() {
        // Arrange
        let case = sample_case();
        let cases = Arc::new(InMemoryCaseRepository::seeded([case.clone()]));
        let app = router().with_state(app_state(
            cases,
            Arc::new(ScriptedGenerator::always("unused")),
        ));

        let request = Request::builder()
            .method("GET")
            .uri(format!("/cases/{}", case.id))
            .body(Body::empty())
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["case"]["title"], case.title);
        assert_eq!(json["case"]["solution"], REDACTED_SOLUTION);
        assert_eq!(
            json["case"]["characters"].as_array().unwrap().len(),
            case.characters.len()
        );
    }

    #[tokio::test]
    async fn test_get_unknown_case_returns_404() {
        // Arrange
        let cases = Arc::new(InMemoryCaseRepository::new());
        let app = router().with_state(app_state(
            cases,
            Arc::new(ScriptedGenerator::always("unused")),
        ));

        let request = Request::builder()
            .method("GET")
            .uri(format!("/cases/{}", Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "case_not_found");
    }
}
