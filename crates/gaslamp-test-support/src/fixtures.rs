//! Case fixtures — ready-made domain values for tests.

use chrono::{TimeZone, Utc};
use gaslamp_core::model::{Case, Character, Evidence, VisualScene};
use uuid::Uuid;

/// A complete case with three characters (one culprit) and two evidence
/// items (one key). Identifiers are fresh on every call; read them off the
/// returned value.
///
/// # Panics
///
/// Panics if the fixed fixture timestamp is invalid, which it is not.
#[must_use]
pub fn sample_case() -> Case {
    Case {
        id: Uuid::new_v4(),
        title: "The Silvermist Conservatory Affair".to_owned(),
        setting: "A glass conservatory outside Edinburgh, winter 1887".to_owned(),
        crime_scene_description:
            "Professor Silvermist slumped over his orchid bench, a shattered teacup at his feet"
                .to_owned(),
        victim_name: "Professor Aldous Silvermist".to_owned(),
        characters: vec![
            Character {
                id: Uuid::new_v4(),
                name: "Miriam Voss".to_owned(),
                description: "The professor's research assistant, precise and guarded".to_owned(),
                background: "Co-authored his last three papers without credit".to_owned(),
                alibi: "Says she was cataloguing seeds in the cellar".to_owned(),
                motive: Some("Resentment over stolen authorship".to_owned()),
                is_culprit: false,
            },
            Character {
                id: Uuid::new_v4(),
                name: "Colonel Webb".to_owned(),
                description: "An old rival from the Botanical Society".to_owned(),
                background: "Lost the Society chairmanship to the victim".to_owned(),
                alibi: "Claims he never left the smoking room".to_owned(),
                motive: Some("Decades of professional humiliation".to_owned()),
                is_culprit: true,
            },
            Character {
                id: Uuid::new_v4(),
                name: "Mrs. Petrie".to_owned(),
                description: "The housekeeper, in service here thirty years".to_owned(),
                background: "Manages the household and the tea service".to_owned(),
                alibi: "Was polishing silver with the scullery maid".to_owned(),
                motive: None,
                is_culprit: false,
            },
        ],
        evidence: vec![
            Evidence {
                id: Uuid::new_v4(),
                name: "Shattered teacup".to_owned(),
                description: "Bone china, traces of a bitter residue".to_owned(),
                location_found: "The conservatory floor".to_owned(),
                significance: "Carried the poison that killed the professor".to_owned(),
                is_key_evidence: true,
            },
            Evidence {
                id: Uuid::new_v4(),
                name: "Muddy boot print".to_owned(),
                description: "A size-ten print in potting soil".to_owned(),
                location_found: "Beside the orchid bench".to_owned(),
                significance: "Someone approached the bench from the garden door".to_owned(),
                is_key_evidence: false,
            },
        ],
        solution: "Colonel Webb dosed the teacup with aconite from the poison cabinet".to_owned(),
        created_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap(),
        difficulty: "medium".to_owned(),
        crime_scene_image_url: None,
        visual_scenes: Vec::new(),
    }
}

/// A dynamically-discovered-shaped character: no culprit flag, no motive.
#[must_use]
pub fn sample_character(name: &str) -> Character {
    Character {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        description: format!("{name}, recently come to light in testimony"),
        background: "Mentioned by a witness during questioning".to_owned(),
        alibi: "Unverified".to_owned(),
        motive: None,
        is_culprit: false,
    }
}

/// A testimony illustration fixture.
///
/// # Panics
///
/// Panics if the fixed fixture timestamp is invalid, which it is not.
#[must_use]
pub fn sample_scene(witness: &str) -> VisualScene {
    VisualScene {
        id: Uuid::new_v4(),
        title: format!("{witness}'s Account"),
        description: format!("The scene as {witness} described it"),
        image_url: "https://images.test/scene.png".to_owned(),
        generated_from: "What did you see that night?".to_owned(),
        character_involved: witness.to_owned(),
        created_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 5, 0).unwrap(),
    }
}
