//! Integration tests for evidence-theory analysis.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use gaslamp_test_support::{InMemoryCaseRepository, ScriptedGenerator, sample_case};
use uuid::Uuid;

const ANALYSIS_REPLY: &str = "1. **Strengths of this theory**\n\
    The bitter residue in the teacup supports poisoning.\n\
    2. **Weaknesses or gaps**\n\
    Nothing yet places the colonel near the tea service.";

#[tokio::test]
async fn test_analysis_returns_the_analytic_reply_verbatim() {
    // Arrange
    let case = sample_case();
    let cases = Arc::new(InMemoryCaseRepository::seeded([case.clone()]));
    let app = common::build_test_app(
        cases,
        Arc::new(ScriptedGenerator::always("unused")),
        Arc::new(ScriptedGenerator::always(ANALYSIS_REPLY)),
    );
    let body = serde_json::json!({
        "case_id": case.id,
        "evidence_ids": [case.evidence[0].id],
        "theory": "Colonel Webb poisoned the tea.",
    });

    // Act
    let (status, json) = common::post_json(app, "/api/analyze-evidence", &body).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["analysis"], ANALYSIS_REPLY);
}

#[tokio::test]
async fn test_unknown_evidence_id_is_skipped_not_fatal() {
    // Arrange: one resolvable id, one that matches nothing.
    let case = sample_case();
    let cases = Arc::new(InMemoryCaseRepository::seeded([case.clone()]));
    let analytic = Arc::new(ScriptedGenerator::always(ANALYSIS_REPLY));
    let app = common::build_test_app(
        cases,
        Arc::new(ScriptedGenerator::always("unused")),
        analytic.clone(),
    );
    let phantom_id = Uuid::new_v4();
    let body = serde_json::json!({
        "case_id": case.id,
        "evidence_ids": [case.evidence[0].id, phantom_id],
        "theory": "The teacup carried the poison.",
    });

    // Act
    let (status, _) = common::post_json(app, "/api/analyze-evidence", &body).await;

    // Assert: success, and the prompt only summarizes the known item.
    assert_eq!(status, StatusCode::OK);
    let prompt = analytic.prompts().pop().unwrap();
    assert!(prompt.contains(&case.evidence[0].name));
    assert!(!prompt.contains(&phantom_id.to_string()));
}

#[tokio::test]
async fn test_analysis_with_no_resolvable_evidence_still_succeeds() {
    // Arrange
    let case = sample_case();
    let cases = Arc::new(InMemoryCaseRepository::seeded([case.clone()]));
    let analytic = Arc::new(ScriptedGenerator::always(ANALYSIS_REPLY));
    let app = common::build_test_app(
        cases,
        Arc::new(ScriptedGenerator::always("unused")),
        analytic.clone(),
    );
    let body = serde_json::json!({
        "case_id": case.id,
        "evidence_ids": [Uuid::new_v4()],
        "theory": "It was an accident after all.",
    });

    // Act
    let (status, _) = common::post_json(app, "/api/analyze-evidence", &body).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    let prompt = analytic.prompts().pop().unwrap();
    assert!(prompt.contains("No specific evidence selected"));
}
