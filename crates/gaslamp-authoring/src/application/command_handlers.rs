//! Command handlers for the Case Authoring context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: prompt the generator, parse or fall back,
//! persist the case.

use gaslamp_core::clock::Clock;
use gaslamp_core::error::DomainError;
use gaslamp_core::generator::TextGenerator;
use gaslamp_core::model::Case;
use gaslamp_core::store::CaseRepository;

use crate::domain::commands::GenerateCase;
use crate::domain::fallback::fallback_case;
use crate::domain::parse::parse_case;
use crate::domain::prompts::case_prompt;

/// Handles the `GenerateCase` command: asks the narrative generator for a
/// case, parses it strictly, falls back to the stock case when the output
/// is unusable, and persists the result.
///
/// # Errors
///
/// Returns `DomainError::Generator` if the generator call itself fails and
/// `DomainError::Storage` if the case cannot be persisted. Unusable
/// generator output is not an error; it produces the stock case.
pub async fn handle_generate_case(
    command: &GenerateCase,
    clock: &dyn Clock,
    narrative: &dyn TextGenerator,
    repo: &dyn CaseRepository,
) -> Result<Case, DomainError> {
    let reply = narrative.generate(case_prompt()).await?;

    let case = match parse_case(&reply, clock.now()) {
        Ok(case) => case,
        Err(err) => {
            tracing::warn!(
                correlation_id = %command.correlation_id,
                error = %err,
                "generated case was unusable, serving the stock case"
            );
            fallback_case(clock.now())
        }
    };

    repo.insert_case(&case).await?;

    tracing::info!(
        correlation_id = %command.correlation_id,
        case_id = %case.id,
        title = %case.title,
        "case generated"
    );

    Ok(case)
}
