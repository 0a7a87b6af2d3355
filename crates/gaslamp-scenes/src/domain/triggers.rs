//! Detecting questions that ask a witness to picture something.

/// Phrases that mark a question as visual. Matched case-insensitively
/// anywhere in the question.
const TRIGGER_PHRASES: &[&str] = &[
    "did you see",
    "describe",
    "what happened",
    "look like",
    "the scene",
    "found the body",
    "confrontation",
];

/// Whether a question asks the witness to picture something, and so should
/// produce a testimony illustration.
#[must_use]
pub fn is_visual_request(question: &str) -> bool {
    let question = question.to_lowercase();
    TRIGGER_PHRASES
        .iter()
        .any(|phrase| question.contains(phrase))
}
