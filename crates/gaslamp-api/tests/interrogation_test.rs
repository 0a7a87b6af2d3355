//! Integration tests for questioning and roster expansion.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use gaslamp_core::model::REDACTED_SOLUTION;
use gaslamp_test_support::{InMemoryCaseRepository, ScriptedGenerator, sample_case};
use uuid::Uuid;

const GARDENER_TESTIMONY: &str =
    "I kept to the kitchen all evening, inspector. Though the gardener was acting strange that day.";

const GARDENER_MENTION: &str = r#"[{"role": "gardener", "context": "acting strange"}]"#;

const GARDENER_DRAFT: &str = r#"{
    "name": "Ezra Polk",
    "description": "A stooped man in a mud-caked oilskin",
    "background": "Has tended the conservatory grounds for a decade",
    "alibi": "Claims he was pruning by lantern light",
    "motive": "The professor cut his wages last spring"
}"#;

#[tokio::test]
async fn test_gardener_mention_grows_the_roster_end_to_end() {
    // Arrange: a witness mentions the gardener; detection, drafting, and
    // validation are all scripted to succeed.
    let case = sample_case();
    let witness = case.characters[0].clone();
    let original_ids: Vec<Uuid> = case.characters.iter().map(|c| c.id).collect();
    let cases = Arc::new(InMemoryCaseRepository::seeded([case.clone()]));
    let app = common::build_test_app(
        cases.clone(),
        Arc::new(ScriptedGenerator::new([GARDENER_TESTIMONY, GARDENER_DRAFT])),
        Arc::new(ScriptedGenerator::new([GARDENER_MENTION, "VALID"])),
    );
    let body = serde_json::json!({
        "case_id": case.id,
        "character_id": witness.id,
        "question": "Did anyone else have reason to visit the conservatory?",
    });

    // Act
    let (status, json) = common::post_json(app, "/api/question-character", &body).await;

    // Assert: the reply and exactly one discovery, with provenance.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["character_name"], witness.name);
    assert_eq!(json["response"], GARDENER_TESTIMONY);
    let discovered = json["new_characters_discovered"].as_array().unwrap();
    assert_eq!(discovered.len(), 1);
    assert_eq!(discovered[0]["character"]["name"], "Ezra Polk");
    assert_eq!(discovered[0]["character"]["is_culprit"], false);
    assert_eq!(discovered[0]["discovered_through"], witness.name);
    assert_eq!(discovered[0]["context"], "acting strange");

    // The roster grew by appending; the originals kept their ids and order.
    let stored = cases.stored(case.id).unwrap();
    assert_eq!(stored.characters.len(), 4);
    let stored_ids: Vec<Uuid> = stored.characters.iter().map(|c| c.id).collect();
    assert_eq!(&stored_ids[..3], &original_ids[..]);
    assert_eq!(stored.characters[3].name, "Ezra Polk");

    // No duplicate identifiers anywhere on the roster.
    let mut deduped = stored_ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), stored_ids.len());

    // Expansion never touches the stored solution.
    assert_ne!(stored.solution, REDACTED_SOLUTION);
}

#[tokio::test]
async fn test_unparsable_mention_reply_degrades_to_no_discoveries() {
    // Arrange: the analytic voice rambles instead of returning an array.
    let case = sample_case();
    let witness = case.characters[0].clone();
    let cases = Arc::new(InMemoryCaseRepository::seeded([case.clone()]));
    let app = common::build_test_app(
        cases.clone(),
        Arc::new(ScriptedGenerator::always(GARDENER_TESTIMONY)),
        Arc::new(ScriptedGenerator::always(
            "Hmm, several people come to mind but none seem new.",
        )),
    );
    let body = serde_json::json!({
        "case_id": case.id,
        "character_id": witness.id,
        "question": "Who else was about?",
    });

    // Act
    let (status, json) = common::post_json(app, "/api/question-character", &body).await;

    // Assert: the reply still lands, the roster is untouched.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["response"], GARDENER_TESTIMONY);
    assert_eq!(json["new_characters_discovered"].as_array().unwrap().len(), 0);
    assert_eq!(cases.stored(case.id).unwrap().characters.len(), 3);
}

#[tokio::test]
async fn test_rejected_draft_leaves_the_roster_unchanged() {
    // Arrange: validation opens with INVALID, which must not pass.
    let case = sample_case();
    let witness = case.characters[0].clone();
    let cases = Arc::new(InMemoryCaseRepository::seeded([case.clone()]));
    let app = common::build_test_app(
        cases.clone(),
        Arc::new(ScriptedGenerator::new([GARDENER_TESTIMONY, GARDENER_DRAFT])),
        Arc::new(ScriptedGenerator::new([
            GARDENER_MENTION,
            "INVALID: a gardener would not prune after dark in January",
        ])),
    );
    let body = serde_json::json!({
        "case_id": case.id,
        "character_id": witness.id,
        "question": "Did anyone else have access?",
    });

    // Act
    let (status, json) = common::post_json(app, "/api/question-character", &body).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["new_characters_discovered"].as_array().unwrap().len(), 0);
    assert_eq!(cases.stored(case.id).unwrap().characters.len(), 3);
}

#[tokio::test]
async fn test_repeated_questioning_only_ever_appends() {
    // Arrange: two questions in sequence, the first surfacing a discovery.
    let case = sample_case();
    let witness = case.characters[0].clone();
    let original_ids: Vec<Uuid> = case.characters.iter().map(|c| c.id).collect();
    let cases = Arc::new(InMemoryCaseRepository::seeded([case.clone()]));
    let body = serde_json::json!({
        "case_id": case.id,
        "character_id": witness.id,
        "question": "Walk me through your evening.",
    });

    // Act
    let first_app = common::build_test_app(
        cases.clone(),
        Arc::new(ScriptedGenerator::new([GARDENER_TESTIMONY, GARDENER_DRAFT])),
        Arc::new(ScriptedGenerator::new([GARDENER_MENTION, "VALID"])),
    );
    let (first_status, _) = common::post_json(first_app, "/api/question-character", &body).await;

    let second_app = common::build_test_app(
        cases.clone(),
        Arc::new(ScriptedGenerator::always("I have told you everything.")),
        Arc::new(ScriptedGenerator::always("[]")),
    );
    let (second_status, _) = common::post_json(second_app, "/api/question-character", &body).await;

    // Assert: one append total, originals untouched and in order.
    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    let stored = cases.stored(case.id).unwrap();
    assert_eq!(stored.characters.len(), 4);
    for (stored_char, original_id) in stored.characters.iter().zip(&original_ids) {
        assert_eq!(stored_char.id, *original_id);
    }
}

#[tokio::test]
async fn test_questioning_an_unknown_case_returns_404() {
    // Arrange
    let app = common::build_test_app(
        Arc::new(InMemoryCaseRepository::new()),
        Arc::new(ScriptedGenerator::always("unused")),
        Arc::new(ScriptedGenerator::always("[]")),
    );
    let body = serde_json::json!({
        "case_id": Uuid::new_v4(),
        "character_id": Uuid::new_v4(),
        "question": "Anyone home?",
    });

    // Act
    let (status, json) = common::post_json(app, "/api/question-character", &body).await;

    // Assert
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "case_not_found");
}

#[tokio::test]
async fn test_narrative_failure_surfaces_as_500() {
    // Arrange
    let case = sample_case();
    let witness = case.characters[0].clone();
    let cases = Arc::new(InMemoryCaseRepository::seeded([case.clone()]));
    let app = common::build_test_app(
        cases,
        Arc::new(gaslamp_test_support::FailingGenerator::default()),
        Arc::new(ScriptedGenerator::always("[]")),
    );
    let body = serde_json::json!({
        "case_id": case.id,
        "character_id": witness.id,
        "question": "Well?",
    });

    // Act
    let (status, json) = common::post_json(app, "/api/question-character", &body).await;

    // Assert
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "generator_failure");
}
