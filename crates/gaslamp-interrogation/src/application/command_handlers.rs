//! Command handlers for the Interrogation context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: load the case, produce testimony, detect
//! mentions, and run the draft-validate-append cycle for each one.

use uuid::Uuid;

use gaslamp_core::error::DomainError;
use gaslamp_core::generator::TextGenerator;
use gaslamp_core::model::{Case, Character};
use gaslamp_core::store::CaseRepository;

use crate::domain::commands::{DraftCharacter, QuestionCharacter};
use crate::domain::draft::{is_validation_pass, parse_draft};
use crate::domain::mentions::{CharacterMention, parse_mentions};
use crate::domain::outcome::{
    DiscoveredCharacter, DroppedMention, MentionDropReason, QuestioningOutcome,
};
use crate::domain::prompts::{
    detection_prompt, drafting_prompt, roleplay_prompt, validation_prompt,
};

/// Handles the `QuestionCharacter` command: produces an in-character reply,
/// detects new people mentioned in it, and appends every mention that
/// survives the draft-validate cycle to the roster.
///
/// Mention detection and drafting are advisory: their failures are absorbed
/// and questioning succeeds with whatever discoveries were made.
///
/// # Errors
///
/// Returns `DomainError::CaseNotFound` / `DomainError::CharacterNotFound`
/// for unknown identifiers, `DomainError::Generator` if the testimony call
/// itself fails, and `DomainError::Storage` if appending a validated
/// character fails.
pub async fn handle_question_character(
    command: &QuestionCharacter,
    narrative: &dyn TextGenerator,
    analytic: &dyn TextGenerator,
    repo: &dyn CaseRepository,
) -> Result<QuestioningOutcome, DomainError> {
    let case = repo
        .find_case(command.case_id)
        .await?
        .ok_or(DomainError::CaseNotFound(command.case_id))?;
    let character = case
        .character(command.character_id)
        .ok_or(DomainError::CharacterNotFound(command.character_id))?
        .clone();

    let reply = narrative
        .generate(&roleplay_prompt(&case, &character, &command.question))
        .await?;

    let mentions = detect_mentions(command, &case, &character.name, &reply, analytic).await;

    let mut discovered = Vec::new();
    let mut dropped = Vec::new();
    for mention in mentions {
        let candidate =
            match draft_character(command.correlation_id, &case, &mention, narrative, analytic)
                .await
            {
                Ok(candidate) => candidate,
                Err(reason) => {
                    dropped.push(DroppedMention {
                        role: mention.role,
                        context: mention.context,
                        reason,
                    });
                    continue;
                }
            };

        repo.append_character(case.id, &candidate).await?;
        tracing::info!(
            correlation_id = %command.correlation_id,
            case_id = %case.id,
            character = %candidate.name,
            role = %mention.role,
            "discovered character appended to roster"
        );

        discovered.push(DiscoveredCharacter {
            character: candidate,
            discovered_through: character.name.clone(),
            context: mention.context,
        });
    }

    Ok(QuestioningOutcome {
        character_name: character.name,
        reply,
        discovered,
        dropped,
    })
}

/// Handles the `DraftCharacter` command: runs the draft-validate cycle for
/// one explicit mention and appends the character if it survives. Returns
/// `None` when the draft is unusable or validation rejects it.
///
/// # Errors
///
/// Returns `DomainError::CaseNotFound` for an unknown case and
/// `DomainError::Storage` if the append fails.
pub async fn handle_draft_character(
    command: &DraftCharacter,
    narrative: &dyn TextGenerator,
    analytic: &dyn TextGenerator,
    repo: &dyn CaseRepository,
) -> Result<Option<Character>, DomainError> {
    let case = repo
        .find_case(command.case_id)
        .await?
        .ok_or(DomainError::CaseNotFound(command.case_id))?;

    let mention = CharacterMention {
        role: command.role.clone(),
        context: command.context.clone(),
    };

    let Ok(character) =
        draft_character(command.correlation_id, &case, &mention, narrative, analytic).await
    else {
        return Ok(None);
    };

    repo.append_character(case.id, &character).await?;
    Ok(Some(character))
}

/// Runs mention detection over an exchange. Advisory: any failure yields an
/// empty list.
async fn detect_mentions(
    command: &QuestionCharacter,
    case: &Case,
    witness: &str,
    reply: &str,
    analytic: &dyn TextGenerator,
) -> Vec<CharacterMention> {
    match analytic
        .generate(&detection_prompt(case, witness, &command.question, reply))
        .await
    {
        Ok(detection_reply) => parse_mentions(&detection_reply),
        Err(err) => {
            tracing::warn!(
                correlation_id = %command.correlation_id,
                case_id = %case.id,
                error = %err,
                "mention detection failed, continuing without roster expansion"
            );
            Vec::new()
        }
    }
}

/// Runs the draft-validate cycle for one mention. Every failure along the
/// way — drafting call, draft parse, validation call, validation verdict —
/// is absorbed into a drop reason rather than an error.
async fn draft_character(
    correlation_id: Uuid,
    case: &Case,
    mention: &CharacterMention,
    narrative: &dyn TextGenerator,
    analytic: &dyn TextGenerator,
) -> Result<Character, MentionDropReason> {
    let draft_reply = match narrative
        .generate(&drafting_prompt(case, &mention.role, &mention.context))
        .await
    {
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!(%correlation_id, role = %mention.role, error = %err, "character drafting failed");
            return Err(MentionDropReason::GeneratorFailure);
        }
    };

    let draft = match parse_draft(&draft_reply) {
        Ok(draft) => draft,
        Err(err) => {
            tracing::warn!(%correlation_id, role = %mention.role, error = %err, "character draft was unusable");
            return Err(MentionDropReason::MalformedDraft);
        }
    };

    let draft_json = match serde_json::to_string_pretty(&draft) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(%correlation_id, role = %mention.role, error = %err, "character draft could not be serialized");
            return Err(MentionDropReason::MalformedDraft);
        }
    };

    let verdict = match analytic
        .generate(&validation_prompt(case, &draft_json, &mention.context))
        .await
    {
        Ok(verdict) => verdict,
        Err(err) => {
            tracing::warn!(%correlation_id, role = %mention.role, error = %err, "draft validation call failed");
            return Err(MentionDropReason::GeneratorFailure);
        }
    };

    if !is_validation_pass(&verdict) {
        tracing::info!(%correlation_id, role = %mention.role, "character draft rejected by validation");
        return Err(MentionDropReason::ValidationRejection);
    }

    Ok(draft.into_character())
}
