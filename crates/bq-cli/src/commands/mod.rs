pub mod parse;
pub mod repl;
pub mod suggest;
pub mod vocab;

use std::path::Path;

use bq_parser::parser::vocabulary::closest_verb;
use bq_parser::{CommandContext, CommandError, InterpreterConfig, ParsedCommand};
use colored::Colorize;
use serde::Serialize;

/// Load the room snapshot, if one was given.
fn load_context(path: Option<&Path>) -> Result<Option<CommandContext>, String> {
    path.map(|p| CommandContext::load(p).map_err(|e| format!("failed to load context: {e}")))
        .transpose()
}

/// Load interpreter settings, falling back to the defaults.
fn load_config(path: Option<&Path>) -> Result<InterpreterConfig, String> {
    match path {
        Some(p) => InterpreterConfig::load(p).map_err(|e| format!("failed to load config: {e}")),
        None => Ok(InterpreterConfig::default()),
    }
}

/// Flat, printable view of a parsed command.
#[derive(Debug, Serialize)]
struct CommandReport {
    raw: String,
    valid: bool,
    category: &'static str,
    verb: Option<&'static str>,
    direction: Option<&'static str>,
    target: Option<String>,
    secondary_target: Option<String>,
    error: Option<String>,
}

impl From<&ParsedCommand> for CommandReport {
    fn from(command: &ParsedCommand) -> Self {
        Self {
            raw: command.raw().to_string(),
            valid: command.is_valid(),
            category: command.category().name(),
            verb: command.verb().map(|v| v.name()),
            direction: command.direction().map(|d| d.name()),
            target: command.target().map(str::to_string),
            secondary_target: command.secondary_target().map(str::to_string),
            error: command.error().map(ToString::to_string),
        }
    }
}

/// Render an error message, with a verb hint for unknown words.
fn describe_error(error: &CommandError) -> String {
    let message = error.to_string().red();
    let hint = match error {
        CommandError::UnrecognizedVerb(word) => closest_verb(word),
        _ => None,
    };
    match hint {
        Some(verb) => format!("{message} {}", format!("(did you mean '{verb}'?)").yellow()),
        None => message.to_string(),
    }
}
