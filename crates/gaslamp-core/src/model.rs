//! Case documents and their parts.
//!
//! A `Case` is the sole owner of its characters, evidence, and visual
//! scenes: none of these has identity or lifecycle outside the case
//! document. Characters and scenes are only ever appended; once persisted
//! they are never mutated, reordered, or removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder sent in place of the solution until a case is solved.
pub const REDACTED_SOLUTION: &str = "Hidden until case is solved";

/// A questionable person attached to a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Identifier, unique within the owning case.
    pub id: Uuid,
    /// Display name. Not guaranteed unique across dynamically discovered
    /// characters; all lookups go through the id.
    pub name: String,
    /// Physical description and personality.
    pub description: String,
    /// Role, history, and connection to the case.
    pub background: String,
    /// What they claim they were doing during the crime.
    pub alibi: String,
    /// Potential reason to be involved, if any.
    #[serde(default)]
    pub motive: Option<String>,
    /// Whether this character committed the crime. Dynamically discovered
    /// characters always carry `false`.
    #[serde(default)]
    pub is_culprit: bool,
}

/// A piece of evidence attached to a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// Identifier, unique within the owning case.
    pub id: Uuid,
    /// Short display name.
    pub name: String,
    /// What the item is.
    pub description: String,
    /// Where it was found.
    pub location_found: String,
    /// Why it matters to the investigation.
    pub significance: String,
    /// Whether it is decisive for the solution.
    #[serde(default)]
    pub is_key_evidence: bool,
}

/// An illustration rendered from a witness's testimony.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualScene {
    /// Scene identifier.
    pub id: Uuid,
    /// Short caption, derived from the witness's name.
    pub title: String,
    /// Excerpt of the testimony the scene depicts.
    pub description: String,
    /// URL of the rendered illustration.
    pub image_url: String,
    /// The question that triggered this scene.
    pub generated_from: String,
    /// Name of the witness whose account is depicted.
    pub character_involved: String,
    /// When the scene was rendered.
    pub created_at: DateTime<Utc>,
}

/// One complete mystery: metadata, roster, evidence, and the withheld
/// solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    /// Case identifier.
    pub id: Uuid,
    /// Case title.
    pub title: String,
    /// Location and time period.
    pub setting: String,
    /// Description of the crime scene as found.
    pub crime_scene_description: String,
    /// Name of the victim.
    pub victim_name: String,
    /// Ordered roster. Originally generated characters come first;
    /// dynamically discovered ones are appended at the tail.
    pub characters: Vec<Character>,
    /// Ordered evidence list.
    pub evidence: Vec<Evidence>,
    /// Full solution text. Always stored, never sent to clients unredacted.
    pub solution: String,
    /// When the case was generated.
    pub created_at: DateTime<Utc>,
    /// Difficulty label.
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    /// Crime-scene illustration, attached asynchronously after generation.
    #[serde(default)]
    pub crime_scene_image_url: Option<String>,
    /// Testimony illustrations, appended as questioning produces them.
    #[serde(default)]
    pub visual_scenes: Vec<VisualScene>,
}

fn default_difficulty() -> String {
    "medium".to_owned()
}

impl Case {
    /// Returns a copy safe to send to clients: the solution is replaced
    /// with [`REDACTED_SOLUTION`].
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            solution: REDACTED_SOLUTION.to_owned(),
            ..self.clone()
        }
    }

    /// Looks up a character on the roster by identifier.
    #[must_use]
    pub fn character(&self, character_id: Uuid) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == character_id)
    }

    /// Looks up an evidence item by identifier.
    #[must_use]
    pub fn evidence_item(&self, evidence_id: Uuid) -> Option<&Evidence> {
        self.evidence.iter().find(|e| e.id == evidence_id)
    }

    /// Names of everyone currently on the roster, in roster order.
    #[must_use]
    pub fn character_names(&self) -> Vec<&str> {
        self.characters.iter().map(|c| c.name.as_str()).collect()
    }
}
