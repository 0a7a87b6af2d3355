//! Character drafts and the validation verdict.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gaslamp_core::model::Character;
use gaslamp_core::parse::{OutputParseError, extract_json_object};

/// A drafted character as the narrative generator proposes it, before
/// validation and before it gains an identity on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDraft {
    pub name: String,
    pub description: String,
    pub background: String,
    pub alibi: String,
    #[serde(default)]
    pub motive: Option<String>,
}

impl CharacterDraft {
    /// Promotes the draft to a roster character. Discovered characters are
    /// never the culprit.
    #[must_use]
    pub fn into_character(self) -> Character {
        Character {
            id: Uuid::new_v4(),
            name: self.name,
            description: self.description,
            background: self.background,
            alibi: self.alibi,
            motive: self.motive,
            is_culprit: false,
        }
    }
}

/// Parses a drafting reply strictly: a JSON object with all four narrative
/// fields present and non-empty.
///
/// # Errors
///
/// Returns [`OutputParseError`] if the reply holds no JSON object, the
/// object is missing required fields, or a required field is blank.
pub fn parse_draft(reply: &str) -> Result<CharacterDraft, OutputParseError> {
    let payload = extract_json_object(reply).ok_or(OutputParseError::MissingPayload)?;
    let draft: CharacterDraft = serde_json::from_str(payload)?;

    for (field, value) in [
        ("name", &draft.name),
        ("description", &draft.description),
        ("background", &draft.background),
        ("alibi", &draft.alibi),
    ] {
        if value.trim().is_empty() {
            return Err(OutputParseError::Constraint(format!(
                "draft field `{field}` is empty"
            )));
        }
    }

    Ok(draft)
}

/// Whether a validation reply is a pass. Only a reply whose first word is
/// exactly `VALID` passes; in particular a reply opening with `INVALID`
/// does not.
#[must_use]
pub fn is_validation_pass(reply: &str) -> bool {
    reply
        .split(|c: char| !c.is_ascii_alphanumeric())
        .find(|token| !token.is_empty())
        .is_some_and(|token| token == "VALID")
}
