//! Target name resolution against known entity names.

use super::normalize::normalize;

/// Resolve a target phrase to one of the candidate names.
///
/// Tries, in order: exact match, a candidate starting with the phrase, then a
/// candidate containing the phrase, all after normalization. Within each rule
/// the first candidate in list order wins.
pub fn find_best_match<'a, S: AsRef<str>>(phrase: &str, candidates: &'a [S]) -> Option<&'a str> {
    let needle = normalize(phrase);
    let names: Vec<(&'a str, String)> = candidates
        .iter()
        .map(|c| (c.as_ref(), normalize(c.as_ref())))
        .collect();

    names
        .iter()
        .find(|(_, n)| *n == needle)
        .or_else(|| names.iter().find(|(_, n)| n.starts_with(&needle)))
        .or_else(|| names.iter().find(|(_, n)| n.contains(&needle)))
        .map(|(name, _)| *name)
}
