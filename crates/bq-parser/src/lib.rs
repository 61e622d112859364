//! Natural-language command interpreter for Bubbly Quest.
//!
//! Turns free-form player text ("take the health potion", "n", "fight goblin
//! and loot it") into structured commands. Parsing tolerates synonyms,
//! direction abbreviations, filler words and partial object names, splits
//! compound lines, and checks commands against a caller-supplied snapshot of
//! what is currently visible. Also provides a shell-style command history
//! and autocomplete for the input surface.
//!
//! Nothing here mutates world state: every call either produces a command
//! or explains, as data, why the input could not be understood.

/// Autocomplete suggestions for partial input.
pub mod autocomplete;
/// Interpreter configuration.
pub mod config;
/// Caller-supplied world snapshot.
pub mod context;
/// Error types for the interpreter.
pub mod error;
/// Bounded command history with shell-style navigation.
pub mod history;
/// Stateful front end combining parsing, validation and history.
pub mod interpreter;
/// Tokenizing, vocabulary, fuzzy matching and command building.
pub mod parser;
/// Context feasibility checks for parsed commands.
pub mod validate;

pub use autocomplete::{MAX_SUGGESTIONS, suggest, suggest_with_limit};
pub use config::InterpreterConfig;
pub use context::CommandContext;
pub use error::{CommandError, ErrorKind, ParserError, ParserResult};
pub use history::CommandHistory;
pub use interpreter::CommandInterpreter;
pub use parser::{
    Category, Command, Direction, ParsedCommand, Verb, build, build_many, find_best_match,
    normalize, tokenize,
};
pub use validate::validate;
