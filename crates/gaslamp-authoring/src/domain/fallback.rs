//! The stock case served when generation output cannot be used.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use gaslamp_core::model::{Case, Character, Evidence};

/// Builds the stock Blackwood Manor case. Served whenever the narrative
/// generator answers but its output fails parsing or shape checks, so a
/// player always receives a playable case.
#[must_use]
pub fn fallback_case(now: DateTime<Utc>) -> Case {
    Case {
        id: Uuid::new_v4(),
        title: "Murder at Blackwood Manor".to_owned(),
        setting: "A Victorian mansion during a thunderstorm in 1920s England".to_owned(),
        crime_scene_description:
            "Lord Blackwood found dead in his locked study, a glass of brandy spilled beside him"
                .to_owned(),
        victim_name: "Lord Blackwood".to_owned(),
        characters: vec![
            Character {
                id: Uuid::new_v4(),
                name: "Lady Margaret Blackwood".to_owned(),
                description: "The victim's wife, elegant but cold".to_owned(),
                background: "Married Lord Blackwood for his fortune 10 years ago".to_owned(),
                alibi: "Claims she was reading in her bedroom".to_owned(),
                motive: Some("Stands to inherit everything".to_owned()),
                is_culprit: false,
            },
            Character {
                id: Uuid::new_v4(),
                name: "Dr. Harrison".to_owned(),
                description: "The family physician and old friend".to_owned(),
                background: "Has been treating the family for 20 years".to_owned(),
                alibi: "Was examining medical equipment in his room".to_owned(),
                motive: Some("Lord Blackwood discovered Dr. Harrison's gambling debts".to_owned()),
                is_culprit: true,
            },
        ],
        evidence: vec![
            Evidence {
                id: Uuid::new_v4(),
                name: "Poisoned Brandy Glass".to_owned(),
                description: "A crystal glass with traces of cyanide".to_owned(),
                location_found: "Lord Blackwood's study desk".to_owned(),
                significance: "The murder weapon".to_owned(),
                is_key_evidence: true,
            },
            Evidence {
                id: Uuid::new_v4(),
                name: "Medical Bag".to_owned(),
                description: "Dr. Harrison's bag with missing cyanide vial".to_owned(),
                location_found: "Dr. Harrison's guest room".to_owned(),
                significance: "Contains the poison used in the murder".to_owned(),
                is_key_evidence: true,
            },
        ],
        solution:
            "Dr. Harrison poisoned Lord Blackwood's brandy with cyanide to prevent exposure of his gambling debts"
                .to_owned(),
        created_at: now,
        difficulty: "medium".to_owned(),
        crime_scene_image_url: None,
        visual_scenes: Vec::new(),
    }
}
