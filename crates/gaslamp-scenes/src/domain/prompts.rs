//! Image prompts and scene text.

use gaslamp_core::model::Case;

/// Longest scene description we store; testimony beyond this is cut at a
/// character boundary.
const DESCRIPTION_LIMIT: usize = 280;

/// Prompt for the crime-scene illustration rendered after case generation.
#[must_use]
pub fn crime_scene_prompt(case: &Case) -> String {
    format!(
        "A detailed atmospheric illustration of a crime scene from a detective mystery. \
         {crime_scene}. Setting: {setting}. \
         Moody period-accurate lighting, cinematic composition, no people visible, no text.",
        crime_scene = case.crime_scene_description,
        setting = case.setting,
    )
}

/// Prompt for a testimony illustration.
#[must_use]
pub fn testimony_scene_prompt(case: &Case, witness: &str, testimony: &str) -> String {
    format!(
        "A detailed atmospheric illustration of a moment from a detective mystery, \
         as recalled by a witness. Setting: {setting}. \
         {witness} describes: {testimony}. \
         Moody period-accurate lighting, dramatic composition, no text.",
        setting = case.setting,
    )
}

/// Caption for a testimony scene.
#[must_use]
pub fn scene_title(witness: &str) -> String {
    format!("{witness}'s Account")
}

/// Scene description: the testimony itself, cut to a storable length.
#[must_use]
pub fn scene_description(testimony: &str) -> String {
    if testimony.chars().count() <= DESCRIPTION_LIMIT {
        return testimony.to_owned();
    }
    let cut: String = testimony.chars().take(DESCRIPTION_LIMIT - 3).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gaslamp_test_support::sample_case;

    #[test]
    fn test_crime_scene_prompt_carries_scene_and_setting() {
        let case = sample_case();

        let prompt = crime_scene_prompt(&case);

        assert!(prompt.contains("slumped over his orchid bench"));
        assert!(prompt.contains("glass conservatory outside Edinburgh"));
    }

    #[test]
    fn test_testimony_prompt_names_the_witness() {
        let case = sample_case();

        let prompt = testimony_scene_prompt(&case, "Mrs. Petrie", "The colonel stood by the tea trolley.");

        assert!(prompt.contains("Mrs. Petrie describes: The colonel stood by the tea trolley."));
    }

    #[test]
    fn test_short_testimony_is_kept_whole() {
        assert_eq!(
            scene_description("I saw a shadow by the gate."),
            "I saw a shadow by the gate."
        );
    }

    #[test]
    fn test_long_testimony_is_cut() {
        let testimony = "a ".repeat(400);

        let description = scene_description(&testimony);

        assert!(description.chars().count() <= 280);
        assert!(description.ends_with("..."));
    }

    #[test]
    fn test_scene_title_uses_the_witness_name() {
        assert_eq!(scene_title("Mrs. Petrie"), "Mrs. Petrie's Account");
    }
}
