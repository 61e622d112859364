//! Autocomplete suggestions for partial input.

use std::collections::HashSet;

use crate::context::CommandContext;
use crate::parser::normalize;
use crate::parser::vocabulary::{DIRECTION_ALIASES, VERB_SYNONYMS};

/// Upper bound on the number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 10;

/// Suggest completions for a partial input, at most [`MAX_SUGGESTIONS`].
pub fn suggest(partial: &str, context: Option<&CommandContext>) -> Vec<String> {
    suggest_with_limit(partial, context, MAX_SUGGESTIONS)
}

/// Suggest completions for a partial input, at most `limit` (clamped to
/// 1-[`MAX_SUGGESTIONS`]).
///
/// Verb aliases and direction aliases must start with the partial input;
/// names from the context (room items, carried items, scenery, then the
/// hostile) only need to contain it. Duplicates are dropped, keeping the
/// first occurrence.
pub fn suggest_with_limit(
    partial: &str,
    context: Option<&CommandContext>,
    limit: usize,
) -> Vec<String> {
    let needle = normalize(partial);
    if needle.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<&str> = VERB_SYNONYMS
        .iter()
        .map(|(alias, _)| *alias)
        .chain(DIRECTION_ALIASES.iter().map(|(alias, _)| *alias))
        .filter(|alias| alias.starts_with(&needle))
        .collect();
    candidates.extend(
        context
            .into_iter()
            .flat_map(|c| {
                c.visible_items
                    .iter()
                    .chain(&c.inventory_items)
                    .chain(&c.visible_features)
                    .map(String::as_str)
                    .chain(c.hostile())
            })
            .filter(|name| normalize(name).contains(&needle)),
    );

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|suggestion| seen.insert(*suggestion))
        .take(limit.clamp(1, MAX_SUGGESTIONS))
        .map(str::to_string)
        .collect()
}
