//! Command handlers for the Evidence Deduction context.

use gaslamp_core::error::DomainError;
use gaslamp_core::generator::TextGenerator;
use gaslamp_core::store::CaseRepository;

use crate::domain::commands::AnalyzeEvidence;
use crate::domain::prompts::{analysis_prompt, evidence_summary};

/// Handles the `AnalyzeEvidence` command: loads the case, summarizes the
/// selected evidence, and returns the analytic generator's assessment of
/// the theory.
///
/// # Errors
///
/// Returns `DomainError::CaseNotFound` for an unknown case and
/// `DomainError::Generator` if the analysis call fails.
pub async fn handle_analyze_evidence(
    command: &AnalyzeEvidence,
    analytic: &dyn TextGenerator,
    repo: &dyn CaseRepository,
) -> Result<String, DomainError> {
    let case = repo
        .find_case(command.case_id)
        .await?
        .ok_or(DomainError::CaseNotFound(command.case_id))?;

    let evidence_text = evidence_summary(&case, &command.evidence_ids);
    let analysis = analytic
        .generate(&analysis_prompt(&case, &command.theory, &evidence_text))
        .await?;

    tracing::info!(
        correlation_id = %command.correlation_id,
        case_id = %case.id,
        selected = command.evidence_ids.len(),
        "theory analyzed"
    );

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use gaslamp_core::error::DomainError;
    use gaslamp_test_support::{
        FailingGenerator, InMemoryCaseRepository, ScriptedGenerator, sample_case, sample_character,
    };

    use crate::application::command_handlers::handle_analyze_evidence;
    use crate::domain::commands::AnalyzeEvidence;

    fn command(case_id: Uuid, evidence_ids: Vec<Uuid>) -> AnalyzeEvidence {
        AnalyzeEvidence {
            correlation_id: Uuid::new_v4(),
            case_id,
            evidence_ids,
            theory: "Colonel Webb poisoned the tea out of rivalry".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_analysis_returns_the_generator_reply() {
        // Arrange
        let case = sample_case();
        let evidence_id = case.evidence[0].id;
        let repo = InMemoryCaseRepository::seeded([case.clone()]);
        let analytic = ScriptedGenerator::always("1. **Strengths of this theory** - the residue.");

        // Act
        let analysis = handle_analyze_evidence(
            &command(case.id, vec![evidence_id]),
            &analytic,
            &repo,
        )
        .await
        .unwrap();

        // Assert
        assert!(analysis.contains("Strengths of this theory"));
        let prompt = analytic.prompts().remove(0);
        assert!(prompt.contains("Colonel Webb poisoned the tea out of rivalry"));
        assert!(prompt.contains("Shattered teacup"));
    }

    #[tokio::test]
    async fn test_analysis_prompt_includes_characters_discovered_later() {
        // Arrange: the roster has grown since the case was generated.
        let mut case = sample_case();
        case.characters.push(sample_character("Albert Crane"));
        let repo = InMemoryCaseRepository::seeded([case.clone()]);
        let analytic = ScriptedGenerator::always("analysis");

        // Act
        handle_analyze_evidence(&command(case.id, Vec::new()), &analytic, &repo)
            .await
            .unwrap();

        // Assert
        let prompt = analytic.prompts().remove(0);
        assert!(prompt.contains("Albert Crane"));
        assert!(prompt.contains("No specific evidence selected"));
    }

    #[tokio::test]
    async fn test_unknown_case_is_case_not_found() {
        // Arrange
        let repo = InMemoryCaseRepository::new();
        let analytic = ScriptedGenerator::always("analysis");
        let missing = Uuid::new_v4();

        // Act
        let result = handle_analyze_evidence(&command(missing, Vec::new()), &analytic, &repo).await;

        // Assert
        assert!(matches!(result, Err(DomainError::CaseNotFound(id)) if id == missing));
    }

    #[tokio::test]
    async fn test_generator_failure_propagates() {
        // Arrange
        let case = sample_case();
        let repo = InMemoryCaseRepository::seeded([case.clone()]);
        let analytic = FailingGenerator::default();

        // Act
        let result = handle_analyze_evidence(&command(case.id, Vec::new()), &analytic, &repo).await;

        // Assert
        assert!(matches!(result, Err(DomainError::Generator(_))));
    }
}
