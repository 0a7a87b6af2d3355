//! Prompt assembly for theory analysis.

use uuid::Uuid;

use gaslamp_core::model::Case;

/// Renders the selected evidence as prompt lines. Identifiers that do not
/// belong to the case are skipped; an empty selection becomes a fixed
/// placeholder so the analysis can still proceed.
#[must_use]
pub fn evidence_summary(case: &Case, evidence_ids: &[Uuid]) -> String {
    let lines: Vec<String> = evidence_ids
        .iter()
        .filter_map(|id| case.evidence_item(*id))
        .map(|item| {
            format!(
                "- {}: {} (Found: {}, Significance: {})",
                item.name, item.description, item.location_found, item.significance
            )
        })
        .collect();

    if lines.is_empty() {
        "No specific evidence selected".to_owned()
    } else {
        lines.join("\n")
    }
}

/// Asks the analytic generator to weigh a theory against the evidence.
#[must_use]
pub fn analysis_prompt(case: &Case, theory: &str, evidence_text: &str) -> String {
    let characters = case
        .characters
        .iter()
        .map(|c| format!("{} ({})", c.name, c.description))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"Analyze the following detective theory and evidence for the case "{title}":

CASE CONTEXT:
- Victim: {victim}
- Setting: {setting}
- Crime Scene: {crime_scene}

DETECTIVE'S THEORY:
{theory}

EVIDENCE BEING CONSIDERED:
{evidence_text}

AVAILABLE CHARACTERS:
{characters}

Provide a logical analysis including:
1. **Strengths of this theory** - What evidence supports it?
2. **Weaknesses or gaps** - What doesn't add up or what's missing?
3. **Evidence relationships** - How do the selected pieces connect?
4. **Additional investigation needed** - What questions or evidence would strengthen/weaken this theory?
5. **Alternative explanations** - Other possible scenarios to consider
6. **Logical consistency check** - Does the timeline and evidence chain make sense?

Provide a thorough but focused analysis that helps guide the investigation."#,
        title = case.title,
        victim = case.victim_name,
        setting = case.setting,
        crime_scene = case.crime_scene_description,
    )
}
