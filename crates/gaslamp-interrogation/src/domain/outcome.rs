//! What questioning a character produces.

use gaslamp_core::model::Character;

/// A character added to the roster as a result of testimony.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredCharacter {
    /// The newly appended character.
    pub character: Character,
    /// Name of the witness whose testimony surfaced them.
    pub discovered_through: String,
    /// What the witness said about them.
    pub context: String,
}

/// Why a detected mention produced no roster character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionDropReason {
    /// A generator call during drafting or validation failed.
    GeneratorFailure,
    /// The drafting reply held no usable draft.
    MalformedDraft,
    /// Validation did not return a passing verdict.
    ValidationRejection,
}

/// A mention that was detected but dropped before reaching the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedMention {
    /// The mentioned role, e.g. "gardener".
    pub role: String,
    /// What the witness said about them.
    pub context: String,
    /// Where the draft-validate cycle gave up on them.
    pub reason: MentionDropReason,
}

/// The full result of one question: the in-character reply plus, per
/// detected mention, either the character it became or why it was dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestioningOutcome {
    /// Name of the character who answered.
    pub character_name: String,
    /// The in-character reply, verbatim.
    pub reply: String,
    /// Characters discovered and appended during this exchange, in the
    /// order they were appended.
    pub discovered: Vec<DiscoveredCharacter>,
    /// Mentions that survived detection but not the draft-validate cycle.
    pub dropped: Vec<DroppedMention>,
}
