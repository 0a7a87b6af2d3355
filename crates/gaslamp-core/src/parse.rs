//! Extraction of JSON payloads from generator replies.
//!
//! Generators are asked for bare JSON but routinely wrap it in markdown
//! fences or conversational prose. Extraction here is lenient about the
//! wrapping; what the extracted payload must contain is each caller's
//! concern and is checked strictly after parsing.

use thiserror::Error;

/// Failure to turn a generator reply into the structure a caller asked for.
#[derive(Debug, Error)]
pub enum OutputParseError {
    /// The reply contained no candidate JSON payload at all.
    #[error("no JSON payload found in generator output")]
    MissingPayload,
    /// A candidate payload was found but did not parse as JSON.
    #[error("malformed JSON payload: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The payload parsed but violated a structural requirement.
    #[error("constraint violated: {0}")]
    Constraint(String),
}

/// Extracts the JSON object embedded in `text`, if any.
#[must_use]
pub fn extract_json_object(text: &str) -> Option<&str> {
    extract_delimited(text, '{', '}')
}

/// Extracts the JSON array embedded in `text`, if any.
#[must_use]
pub fn extract_json_array(text: &str) -> Option<&str> {
    extract_delimited(text, '[', ']')
}

fn extract_delimited(text: &str, open: char, close: char) -> Option<&str> {
    if let Some(block) = fenced_block(text) {
        if let Some(inner) = extract_span(block, open, close) {
            return Some(inner);
        }
    }
    extract_span(text, open, close)
}

/// Widest span from the first `open` to the last `close`. The generator
/// prompt asks for a single top-level value, so the widest span is the
/// whole payload rather than a fragment of it.
fn extract_span(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end >= start).then(|| &text[start..=end])
}

/// Contents of the first ```-fenced block, with an optional `json`
/// language tag stripped.
fn fenced_block(text: &str) -> Option<&str> {
    let after_open = &text[text.find("```")? + 3..];
    let body = after_open.strip_prefix("json").unwrap_or(after_open);
    let end = body.find("```")?;
    Some(&body[..end])
}
