//! Prompts for testimony, mention detection, drafting, and validation.

use gaslamp_core::model::{Case, Character};

/// Puts the narrative generator in character to answer the detective.
#[must_use]
pub fn roleplay_prompt(case: &Case, character: &Character, question: &str) -> String {
    let motive = character.motive.as_deref().unwrap_or("No clear motive");
    let culprit = if character.is_culprit { "Yes" } else { "No" };
    let others = case.character_names().join(", ");

    format!(
        r#"You are roleplaying as {name} in the detective mystery "{title}".

CHARACTER CONTEXT:
- Name: {name}
- Description: {description}
- Background: {background}
- Your alibi: {alibi}
- Possible motive: {motive}
- Are you the culprit: {culprit}

CASE CONTEXT:
- Victim: {victim}
- Setting: {setting}
- Crime scene: {crime_scene}
- Other people involved: {others}

The detective is asking you: "{question}"

IMPORTANT: You may naturally mention other people who could be relevant to the investigation - staff members, visitors, family, neighbors, etc. Be realistic about who might have been around or involved.

Respond in character with:
- Personality consistent with your background and description
- Show appropriate emotions (nervousness if guilty, concern if innocent)
- Provide helpful information but with realistic evasions if you're hiding something
- Stay true to your alibi and background
- If you're the culprit, be subtle - don't confess easily but show slight nervousness
- If innocent, be helpful but may have your own concerns or secrets
- Naturally mention other people if relevant (e.g., "The gardener was acting strange that day" or "I saw the cook leaving early")

Keep responses conversational, realistic, and under 150 words. Make it feel like a real interrogation."#,
        name = character.name,
        title = case.title,
        description = character.description,
        background = character.background,
        alibi = character.alibi,
        victim = case.victim_name,
        setting = case.setting,
        crime_scene = case.crime_scene_description,
    )
}

/// Asks the analytic generator to list new people mentioned in an exchange.
#[must_use]
pub fn detection_prompt(case: &Case, witness: &str, question: &str, reply: &str) -> String {
    let existing = case.character_names().join(", ");

    format!(
        r#"Analyze the following conversation for mentions of NEW people who could potentially be questioned in this detective investigation.

CONVERSATION:
Detective: "{question}"
{witness}: "{reply}"

EXISTING CHARACTERS (do not include these): {existing}

Look for mentions of:
- Staff members (gardener, cook, maid, butler, driver, etc.)
- Visitors or guests
- Neighbors or locals
- Family members not yet listed
- Service people (delivery person, mailman, doctor, etc.)
- Anyone else who might have been present or relevant

For each NEW person mentioned, extract:
1. Their role/title (e.g., "gardener", "cook", "delivery person")
2. Any descriptive context from the conversation

Return a JSON array of new characters found:
[
  {{
    "role": "role/title",
    "context": "what was said about them"
  }}
]

If no new people are mentioned, return an empty array: []

Return ONLY the JSON array, nothing else."#
    )
}

/// Asks the narrative generator to flesh a mentioned role into a full
/// character draft.
#[must_use]
pub fn drafting_prompt(case: &Case, role: &str, context: &str) -> String {
    format!(
        r#"Create a new character for the detective mystery "{title}" based on this mention:

CASE CONTEXT:
- Title: {title}
- Setting: {setting}
- Victim: {victim}
- Crime scene: {crime_scene}

CHARACTER MENTION:
- Role: {role}
- Context: {context}

Create a detailed character with:
1. A realistic name that fits the setting/time period
2. Physical description appropriate for their role
3. Background and how they relate to the case/location
4. A believable alibi for the time of the crime
5. A potential motive (even if weak) that could make them a person of interest
6. Make them a viable suspect but not obviously guilty

Return ONLY a JSON object with this structure:
{{
  "name": "Full Name",
  "description": "Brief physical description and personality",
  "background": "Their role, history, and connection to the case",
  "alibi": "What they claim they were doing during the crime",
  "motive": "Potential reason they might be involved (or 'No clear motive')"
}}"#,
        title = case.title,
        setting = case.setting,
        victim = case.victim_name,
        crime_scene = case.crime_scene_description,
    )
}

/// Asks the analytic generator to pass judgment on a character draft.
#[must_use]
pub fn validation_prompt(case: &Case, draft_json: &str, context: &str) -> String {
    format!(
        r#"Review this dynamically generated character for logical consistency:

CASE: {title}
SETTING: {setting}
NEW CHARACTER: {draft_json}
ORIGINAL MENTION: "{context}"

Check:
1. Does the character fit the setting and time period?
2. Is their background realistic for their role?
3. Does their alibi make sense?
4. Is their potential motive believable?
5. Do they add value to the investigation?

If valid, respond with: VALID
If issues found, suggest improvements in this format:
ISSUES: [list problems]
SUGGESTIONS: [improvements]"#,
        title = case.title,
        setting = case.setting,
    )
}
