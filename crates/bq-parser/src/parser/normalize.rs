//! Input normalization and tokenization.

use super::vocabulary::is_filler;

/// Lower-case, trim, and collapse internal whitespace runs to single spaces.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split normalized input into words, dropping filler words.
///
/// Returns an empty vector for blank input.
pub fn tokenize(raw: &str) -> Vec<String> {
    normalize(raw)
        .split(' ')
        .filter(|word| !word.is_empty() && !is_filler(word))
        .map(str::to_string)
        .collect()
}
