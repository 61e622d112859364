//! Error types for the command interpreter.

use std::path::PathBuf;

use thiserror::Error;

use crate::parser::{Direction, Verb};

/// Result type for interpreter operations outside of parsing.
pub type ParserResult<T> = Result<T, ParserError>;

/// Why a line of input did not produce a usable command.
///
/// These are carried on a [`ParsedCommand`](crate::ParsedCommand) as data;
/// the `Display` text is meant to be shown to the player as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Blank or whitespace-only input.
    #[error("Please enter a command.")]
    EmptyInput,

    /// The first word is neither a verb nor a direction.
    #[error("I don't understand '{0}'. Type 'help' for a list of commands.")]
    UnrecognizedVerb(String),

    /// A movement verb without a direction.
    #[error("Which direction? Try: north, south, east, west, up, down.")]
    MissingDirection,

    /// A verb that needs a target was given none.
    #[error("What do you want to {0}?")]
    MissingTarget(Verb),

    /// The current room has no exit that way.
    #[error("You can't go {0} from here.")]
    NoExit(Direction),

    /// An attack with nothing hostile in sight.
    #[error("There is nothing to attack here.")]
    NothingToAttack,
}

/// Broad class of a [`CommandError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Nothing was typed.
    EmptyInput,
    /// The verb is not in the vocabulary.
    UnrecognizedVerb,
    /// A required target or direction is missing.
    MissingArgument,
    /// Well-formed, but impossible in the current room.
    InfeasibleInContext,
}

impl CommandError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::UnrecognizedVerb(_) => ErrorKind::UnrecognizedVerb,
            Self::MissingDirection | Self::MissingTarget(_) => ErrorKind::MissingArgument,
            Self::NoExit(_) | Self::NothingToAttack => ErrorKind::InfeasibleInContext,
        }
    }
}

/// Errors loading interpreter inputs such as context snapshots or config.
#[derive(Debug, Error)]
pub enum ParserError {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A JSON document did not match the expected shape.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
