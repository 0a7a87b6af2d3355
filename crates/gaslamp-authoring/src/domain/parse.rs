//! Strict parsing of generated cases.
//!
//! The generator's reply must contain a JSON object with every narrative
//! field present, at least one character, at least one piece of evidence,
//! and exactly one culprit. Anything less is a shape failure; the caller
//! decides what to do about it (in practice: fall back to the stock case).

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use gaslamp_core::model::{Case, Character, Evidence};
use gaslamp_core::parse::{OutputParseError, extract_json_object};

#[derive(Debug, Deserialize)]
struct RawCase {
    title: String,
    setting: String,
    crime_scene_description: String,
    victim_name: String,
    #[serde(default)]
    characters: Vec<RawCharacter>,
    #[serde(default)]
    evidence: Vec<RawEvidence>,
    solution: String,
}

#[derive(Debug, Deserialize)]
struct RawCharacter {
    name: String,
    description: String,
    background: String,
    alibi: String,
    #[serde(default)]
    motive: Option<String>,
    #[serde(default)]
    is_culprit: bool,
}

#[derive(Debug, Deserialize)]
struct RawEvidence {
    name: String,
    description: String,
    location_found: String,
    significance: String,
    #[serde(default)]
    is_key_evidence: bool,
}

/// Parses a generator reply into a complete case. Every entity gets a
/// fresh identifier; `now` becomes the case's creation time.
///
/// # Errors
///
/// Returns [`OutputParseError`] if the reply holds no JSON object, the
/// object is missing required fields, the roster or evidence list is
/// empty, or the culprit count is not exactly one.
pub fn parse_case(reply: &str, now: DateTime<Utc>) -> Result<Case, OutputParseError> {
    let payload = extract_json_object(reply).ok_or(OutputParseError::MissingPayload)?;
    let raw: RawCase = serde_json::from_str(payload)?;

    if raw.characters.is_empty() {
        return Err(OutputParseError::Constraint(
            "case has no characters".to_owned(),
        ));
    }
    if raw.evidence.is_empty() {
        return Err(OutputParseError::Constraint(
            "case has no evidence".to_owned(),
        ));
    }
    let culprits = raw.characters.iter().filter(|c| c.is_culprit).count();
    if culprits != 1 {
        return Err(OutputParseError::Constraint(format!(
            "expected exactly one culprit, found {culprits}"
        )));
    }

    Ok(Case {
        id: Uuid::new_v4(),
        title: raw.title,
        setting: raw.setting,
        crime_scene_description: raw.crime_scene_description,
        victim_name: raw.victim_name,
        characters: raw.characters.into_iter().map(assemble_character).collect(),
        evidence: raw.evidence.into_iter().map(assemble_evidence).collect(),
        solution: raw.solution,
        created_at: now,
        difficulty: "medium".to_owned(),
        crime_scene_image_url: None,
        visual_scenes: Vec::new(),
    })
}

fn assemble_character(raw: RawCharacter) -> Character {
    Character {
        id: Uuid::new_v4(),
        name: raw.name,
        description: raw.description,
        background: raw.background,
        alibi: raw.alibi,
        motive: raw.motive,
        is_culprit: raw.is_culprit,
    }
}

fn assemble_evidence(raw: RawEvidence) -> Evidence {
    Evidence {
        id: Uuid::new_v4(),
        name: raw.name,
        description: raw.description,
        location_found: raw.location_found,
        significance: raw.significance,
        is_key_evidence: raw.is_key_evidence,
    }
}
