//! Answer matching for fill-in-the-blank mode.

use serde::{Deserialize, Serialize};

/// Words of the canonical answer with at least this many characters are key words.
pub const KEY_WORD_MIN_CHARS: usize = 4;

/// Result of comparing a typed answer to the canonical answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
    /// Normalized canonical answer (for display).
    pub correct_normalized: String,
    /// Key words of the canonical answer that no typed word contains.
    pub missing_key_words: Vec<String>,
}

/// Compare a typed answer to the canonical answer.
///
/// An exact match (after lowercasing and whitespace normalization) is correct.
/// Otherwise every key word of the canonical answer must be a substring of at
/// least one typed word. A canonical answer without key words only accepts an
/// exact match.
pub fn compare_answers(typed: &str, correct: &str) -> MatchResult {
    let typed_normalized = normalize(typed);
    let correct_normalized = normalize(correct);

    if typed_normalized == correct_normalized {
        return MatchResult {
            is_correct: true,
            typed_normalized,
            correct_normalized,
            missing_key_words: Vec::new(),
        };
    }

    let key_words = key_words(&correct_normalized);
    let typed_words: Vec<&str> = typed_normalized.split_whitespace().collect();

    let missing_key_words: Vec<String> = key_words
        .iter()
        .filter(|key| !typed_words.iter().any(|word| word.contains(*key)))
        .map(|key| key.to_string())
        .collect();
    let is_correct = !key_words.is_empty() && missing_key_words.is_empty();

    MatchResult {
        is_correct,
        typed_normalized,
        correct_normalized,
        missing_key_words,
    }
}

/// Shorthand for `compare_answers(typed, correct).is_correct`.
pub fn check_answer(typed: &str, correct: &str) -> bool {
    compare_answers(typed, correct).is_correct
}

/// Words of `answer` long enough to be required in a typed answer.
pub fn key_words(answer: &str) -> Vec<&str> {
    answer
        .split_whitespace()
        .filter(|word| word.chars().count() >= KEY_WORD_MIN_CHARS)
        .collect()
}

/// Lowercase, trim and collapse runs of whitespace.
fn normalize(s: &str) -> String {
    s.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}
