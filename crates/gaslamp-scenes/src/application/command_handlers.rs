//! Command handlers for the Visual Scenes context.

use uuid::Uuid;

use gaslamp_core::clock::Clock;
use gaslamp_core::error::DomainError;
use gaslamp_core::generator::ImageGenerator;
use gaslamp_core::model::{Case, VisualScene};
use gaslamp_core::store::CaseRepository;

use crate::domain::commands::IllustrateTestimony;
use crate::domain::prompts::{
    crime_scene_prompt, scene_description, scene_title, testimony_scene_prompt,
};
use crate::domain::triggers::is_visual_request;

/// Renders the crime-scene illustration for a freshly generated case and
/// records its URL. Runs after the case has already been returned to the
/// player, so callers typically spawn it and log the outcome.
///
/// # Errors
///
/// Returns `DomainError::Generator` if rendering fails and
/// `DomainError::Storage` / `DomainError::CaseNotFound` if recording the
/// URL fails.
pub async fn handle_attach_crime_scene_image(
    case: &Case,
    illustrator: &dyn ImageGenerator,
    repo: &dyn CaseRepository,
) -> Result<(), DomainError> {
    let url = illustrator.render(&crime_scene_prompt(case)).await?;
    repo.set_crime_scene_image(case.id, &url).await?;
    tracing::info!(case_id = %case.id, url, "crime scene image attached");
    Ok(())
}

/// Handles the `IllustrateTestimony` command: if the question asks the
/// witness to picture something, renders the described moment and appends
/// it to the case's scenes.
///
/// Illustration is advisory. Non-visual questions, rendering failures, and
/// append failures all yield `None`; questioning is never disturbed by
/// them.
pub async fn handle_illustrate_testimony(
    command: &IllustrateTestimony,
    clock: &dyn Clock,
    illustrator: &dyn ImageGenerator,
    repo: &dyn CaseRepository,
) -> Option<VisualScene> {
    if !is_visual_request(&command.question) {
        return None;
    }

    let case = match repo.find_case(command.case_id).await {
        Ok(Some(case)) => case,
        Ok(None) => {
            tracing::warn!(case_id = %command.case_id, "testimony scene skipped, case vanished");
            return None;
        }
        Err(err) => {
            tracing::warn!(case_id = %command.case_id, error = %err, "testimony scene skipped");
            return None;
        }
    };

    let prompt = testimony_scene_prompt(&case, &command.witness, &command.testimony);
    let url = match illustrator.render(&prompt).await {
        Ok(url) => url,
        Err(err) => {
            tracing::warn!(
                correlation_id = %command.correlation_id,
                case_id = %case.id,
                error = %err,
                "testimony scene rendering failed"
            );
            return None;
        }
    };

    let scene = VisualScene {
        id: Uuid::new_v4(),
        title: scene_title(&command.witness),
        description: scene_description(&command.testimony),
        image_url: url,
        generated_from: command.question.clone(),
        character_involved: command.witness.clone(),
        created_at: clock.now(),
    };

    if let Err(err) = repo.append_scene(case.id, &scene).await {
        tracing::warn!(
            correlation_id = %command.correlation_id,
            case_id = %case.id,
            error = %err,
            "testimony scene could not be stored"
        );
        return None;
    }

    tracing::info!(
        correlation_id = %command.correlation_id,
        case_id = %case.id,
        scene_id = %scene.id,
        "testimony scene appended"
    );

    Some(scene)
}
