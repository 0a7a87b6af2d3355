//! Best-effort parsing of detected character mentions.

use serde::Deserialize;

use gaslamp_core::parse::extract_json_array;

/// A new person spotted in testimony: who they are and what was said.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CharacterMention {
    /// Role or title, e.g. "gardener".
    pub role: String,
    /// What the witness said about them.
    #[serde(default)]
    pub context: String,
}

/// Parses the detection reply into mentions. Detection is advisory, so any
/// failure here — no payload, bad JSON, wrong shape — yields an empty list
/// rather than an error.
#[must_use]
pub fn parse_mentions(reply: &str) -> Vec<CharacterMention> {
    let Some(payload) = extract_json_array(reply) else {
        return Vec::new();
    };
    serde_json::from_str(payload).unwrap_or_default()
}
