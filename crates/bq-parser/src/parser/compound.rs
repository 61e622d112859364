//! Splitting one line into several commands.

use std::sync::LazyLock;

use regex::Regex;

use crate::context::CommandContext;
use crate::error::CommandError;

use super::builder::build;
use super::command::ParsedCommand;

static DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*(?:\band\b|\bthen\b|,)\s*").expect("delimiter pattern is valid")
});

/// Split a line on "and", "then" and commas.
///
/// Returns the non-blank fragments, trimmed, in input order. A line without
/// any delimiter comes back as a single fragment.
pub fn split_compound(raw: &str) -> Vec<&str> {
    DELIMITER
        .split(raw)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Parse a possibly compound line ("take sword and attack goblin").
///
/// Every fragment is parsed on its own against the same context snapshot.
pub fn build_many(raw: &str, context: Option<&CommandContext>) -> Vec<ParsedCommand> {
    if !DELIMITER.is_match(raw) {
        return vec![build(raw, context)];
    }

    let fragments = split_compound(raw);
    if fragments.is_empty() {
        return vec![ParsedCommand::invalid(raw, None, CommandError::EmptyInput)];
    }

    tracing::debug!(raw, count = fragments.len(), "compound command");
    fragments
        .into_iter()
        .map(|fragment| build(fragment, context))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Direction, Verb};

    #[test]
    fn split_on_and() {
        let commands = build_many("take sword and attack goblin", None);
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].verb(), Some(Verb::Take));
        assert_eq!(commands[0].target(), Some("sword"));
        assert_eq!(commands[1].verb(), Some(Verb::Attack));
        assert_eq!(commands[1].target(), Some("goblin"));
    }

    #[test]
    fn split_on_then() {
        let commands = build_many("go north then look", None);
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].direction(), Some(Direction::North));
        assert_eq!(commands[1].verb(), Some(Verb::Look));
    }

    #[test]
    fn split_on_comma() {
        let commands = build_many("take potion, use potion", None);
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].target(), Some("potion"));
        assert_eq!(commands[1].verb(), Some(Verb::Use));
        assert_eq!(commands[1].target(), Some("potion"));
    }

    #[test]
    fn case_insensitive_and_mixed() {
        let commands = build_many("N THEN e,s AND look", None);
        let verbs: Vec<_> = commands.iter().map(|c| c.verb()).collect();
        assert_eq!(
            verbs,
            [Some(Verb::Go), Some(Verb::Go), Some(Verb::Go), Some(Verb::Look)]
        );
        assert_eq!(commands[1].direction(), Some(Direction::East));
    }

    #[test]
    fn single_command() {
        let commands = build_many("go north", None);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].raw(), "go north");
    }

    #[test]
    fn does_not_split_inside_words() {
        let commands = build_many("take sandbag", None);
        assert_eq!(commands.len(), 1);
        let commands = build_many("take sand bag", None);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].target(), Some("sand bag"));
        assert_eq!(split_compound("athens"), vec!["athens"]);
    }

    #[test]
    fn blank_fragments_are_skipped() {
        let commands = build_many("take sword and", None);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].target(), Some("sword"));
    }

    #[test]
    fn only_delimiters() {
        let commands = build_many(" , and ", None);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].error(), Some(&CommandError::EmptyInput));
        assert_eq!(commands[0].raw(), " , and ");
        let commands = build_many(", ", None);
        assert_eq!(commands[0].error(), Some(&CommandError::EmptyInput));
    }

    #[test]
    fn fragments_share_context() {
        let ctx = CommandContext::new(1)
            .with_visible_items(["iron sword"])
            .with_visible_monster("goblin scout");
        let commands = build_many("take sword then attack", Some(&ctx));
        assert_eq!(commands[0].target(), Some("iron sword"));
        assert_eq!(commands[1].target(), Some("goblin scout"));
    }
}
