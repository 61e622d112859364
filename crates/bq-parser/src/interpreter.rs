//! Stateful front end for an input surface.

use crate::autocomplete::suggest_with_limit;
use crate::config::InterpreterConfig;
use crate::context::CommandContext;
use crate::history::CommandHistory;
use crate::parser::{ParsedCommand, build_many};
use crate::validate::validate;

/// Parses submitted lines and remembers them.
///
/// Holds no world state: the caller passes a fresh [`CommandContext`] with
/// every call.
#[derive(Debug, Clone)]
pub struct CommandInterpreter {
    config: InterpreterConfig,
    history: CommandHistory,
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new(InterpreterConfig::default())
    }
}

impl CommandInterpreter {
    /// Create an interpreter with an empty history.
    pub fn new(config: InterpreterConfig) -> Self {
        let history = CommandHistory::new(config.history_capacity);
        Self { config, history }
    }

    /// Submit one input line.
    ///
    /// The line is recorded in history, split into its commands, and each
    /// command is checked against `context` when one is given.
    pub fn submit(&mut self, line: &str, context: Option<&CommandContext>) -> Vec<ParsedCommand> {
        self.history.add(line);

        let commands = build_many(line, context);
        let commands: Vec<ParsedCommand> = match context {
            Some(ctx) => commands
                .into_iter()
                .map(|command| validate(command, ctx))
                .collect(),
            None => commands,
        };

        tracing::debug!(
            line,
            commands = commands.len(),
            valid = commands.iter().filter(|c| c.is_valid()).count(),
            "submitted"
        );
        commands
    }

    /// Autocomplete a partial line, up to the configured limit.
    pub fn suggest(&self, partial: &str, context: Option<&CommandContext>) -> Vec<String> {
        suggest_with_limit(partial, context, self.config.max_suggestions)
    }

    /// The configuration in use.
    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Submitted lines.
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Submitted lines, for up/down navigation.
    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }
}
