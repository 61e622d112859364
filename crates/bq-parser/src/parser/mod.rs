//! Command parsing and target resolution.

mod builder;
mod command;
mod compound;
mod matcher;
mod normalize;
pub mod vocabulary;

pub use builder::build;
pub use command::{Category, Command, Direction, ParsedCommand, Verb};
pub use compound::{build_many, split_compound};
pub use matcher::find_best_match;
pub use normalize::{normalize, tokenize};
