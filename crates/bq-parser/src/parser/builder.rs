//! Building a structured command from one line of player input.

use crate::context::CommandContext;
use crate::error::CommandError;

use super::command::{Command, ParsedCommand, Verb};
use super::matcher::find_best_match;
use super::normalize::{normalize, tokenize};
use super::vocabulary::{direction_for, is_filler, verb_for};

/// Parse one command string into a [`ParsedCommand`].
///
/// When a context is supplied, target phrases are resolved against the names
/// the player can currently see or carry, and attacks without a target fall
/// back to the visible hostile. Failures are reported on the returned
/// command, never as a panic.
pub fn build(raw: &str, context: Option<&CommandContext>) -> ParsedCommand {
    let tokens = tokenize(raw);

    let Some(first) = tokens.first().map(String::as_str) else {
        return ParsedCommand::invalid(raw, None, CommandError::EmptyInput);
    };

    // Shortcuts that bypass verb resolution
    if tokens.len() == 1 && matches!(first, "i" | "inventory") {
        return ParsedCommand::valid(raw, Command::Inventory);
    }
    if tokens.len() == 1 && matches!(first, "stats" | "status") {
        return ParsedCommand::valid(raw, Command::Stats);
    }
    if matches!(first, "help" | "?" | "commands") {
        return ParsedCommand::valid(raw, Command::Help);
    }

    let verb = verb_for(first);
    let direction = tokens.iter().find_map(|token| direction_for(token));

    // Bare direction: implicit "go"
    if let (None, Some(direction)) = (verb, direction) {
        tracing::trace!(raw, %direction, "implicit movement");
        return ParsedCommand::valid(raw, Command::Go { direction });
    }

    let Some(verb) = verb else {
        tracing::debug!(raw, word = first, "unrecognized verb");
        let error = CommandError::UnrecognizedVerb(first.to_string());
        return ParsedCommand::invalid(raw, None, error);
    };

    let phrase = target_phrase(&tokens[1..]);

    let command = match verb {
        Verb::Go => direction
            .map(|direction| Command::Go { direction })
            .ok_or(CommandError::MissingDirection),
        Verb::Take => require(verb, phrase).map(|item| Command::Take {
            item: resolve(item, context.map(|c| c.visible_items.as_slice())),
        }),
        Verb::Drop => require(verb, phrase).map(|item| Command::Drop {
            item: resolve(item, context.map(|c| c.inventory_items.as_slice())),
        }),
        Verb::Use => require(verb, phrase).map(|item| build_use(raw, first, item, context)),
        Verb::Equip => require(verb, phrase).map(|item| Command::Equip {
            item: resolve(item, context.map(|c| c.inventory_items.as_slice())),
        }),
        Verb::Unequip => require(verb, phrase).map(|item| Command::Unequip {
            item: resolve(item, context.map(|c| c.equipped_items.as_slice())),
        }),
        Verb::Attack => phrase
            .or_else(|| context.and_then(CommandContext::hostile).map(str::to_string))
            .map(|target| Command::Attack { target })
            .ok_or(CommandError::MissingTarget(Verb::Attack)),
        Verb::Look => Ok(Command::Look {
            target: phrase.map(|target| match context {
                Some(c) => resolve(target, Some(c.lookable_names().as_slice())),
                None => target,
            }),
        }),
        Verb::Inventory => Ok(Command::Inventory),
        Verb::Stats => Ok(Command::Stats),
        Verb::Help => Ok(Command::Help),
        Verb::Save => Ok(Command::Save),
        Verb::Load => Ok(Command::Load),
        Verb::Quit => Ok(Command::Quit),
    };

    match command {
        Ok(command) => {
            tracing::trace!(raw, ?command, "built command");
            ParsedCommand::valid(raw, command)
        }
        Err(error) => {
            tracing::debug!(raw, %verb, %error, "incomplete command");
            ParsedCommand::invalid(raw, Some(verb), error)
        }
    }
}

/// Join the words that are neither filler nor directions into one phrase.
fn target_phrase<S: AsRef<str>>(words: &[S]) -> Option<String> {
    let kept: Vec<&str> = words
        .iter()
        .map(|w| w.as_ref())
        .filter(|w| !w.is_empty() && !is_filler(w) && direction_for(w).is_none())
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join(" "))
    }
}

fn require(verb: Verb, phrase: Option<String>) -> Result<String, CommandError> {
    phrase.ok_or(CommandError::MissingTarget(verb))
}

/// Replace a phrase with the best matching known name, if any.
fn resolve<S: AsRef<str>>(phrase: String, candidates: Option<&[S]>) -> String {
    candidates
        .and_then(|names| find_best_match(&phrase, names))
        .map_or(phrase, str::to_string)
}

/// Build a `use` command, splitting "use X on Y" / "use X with Y".
///
/// Works on the normalized words rather than the tokens because the
/// prepositions are filler words. `phrase` is the whole target phrase, used
/// when there is no split.
fn build_use(
    raw: &str,
    verb_word: &str,
    phrase: String,
    context: Option<&CommandContext>,
) -> Command {
    let normalized = normalize(raw);
    let words: Vec<&str> = normalized.split(' ').collect();
    let rest = words
        .iter()
        .position(|w| *w == verb_word)
        .map_or(&[][..], |i| &words[i + 1..]);

    let split = rest.iter().enumerate().find_map(|(i, w)| {
        if !matches!(*w, "on" | "with") {
            return None;
        }
        let item = target_phrase(&rest[..i])?;
        let on = target_phrase(&rest[i + 1..])?;
        Some((item, on))
    });

    let carried = context.map(|c| c.inventory_items.as_slice());
    match split {
        Some((item, on)) => Command::Use {
            item: resolve(item, carried),
            on: Some(match context {
                Some(c) => resolve(on, Some(c.lookable_names().as_slice())),
                None => on,
            }),
        },
        None => Command::Use {
            item: resolve(phrase, carried),
            on: None,
        },
    }
}
