//! Static verb and direction vocabulary.
//!
//! The tables are ordered: lookups go through hash maps built once on first
//! use, while autocomplete walks the slices so suggestions come out in a
//! stable order.

use std::collections::HashMap;
use std::sync::LazyLock;

use strsim::jaro_winkler;

use super::command::{Direction, Verb};

/// Minimum similarity for a "did you mean" verb hint (0.0-1.0).
const HINT_THRESHOLD: f64 = 0.8;

/// Words ignored when tokenizing.
pub const FILLER_WORDS: &[&str] = &[
    "a", "an", "the", "to", "at", "in", "on", "with", "my", "some",
];

/// Every recognized verb alias and the canonical verb it stands for.
pub const VERB_SYNONYMS: &[(&str, Verb)] = &[
    // Movement
    ("go", Verb::Go),
    ("move", Verb::Go),
    ("walk", Verb::Go),
    ("travel", Verb::Go),
    ("head", Verb::Go),
    ("run", Verb::Go),
    // Taking items
    ("take", Verb::Take),
    ("get", Verb::Take),
    ("grab", Verb::Take),
    ("pick", Verb::Take),
    ("pickup", Verb::Take),
    ("loot", Verb::Take),
    // Dropping items
    ("drop", Verb::Drop),
    ("discard", Verb::Drop),
    ("throw", Verb::Drop),
    // Using items
    ("use", Verb::Use),
    ("consume", Verb::Use),
    ("drink", Verb::Use),
    ("eat", Verb::Use),
    ("apply", Verb::Use),
    // Equipment
    ("equip", Verb::Equip),
    ("wear", Verb::Equip),
    ("wield", Verb::Equip),
    ("unequip", Verb::Unequip),
    ("remove", Verb::Unequip),
    ("doff", Verb::Unequip),
    // Combat
    ("attack", Verb::Attack),
    ("fight", Verb::Attack),
    ("hit", Verb::Attack),
    ("strike", Verb::Attack),
    ("kill", Verb::Attack),
    // Looking
    ("look", Verb::Look),
    ("examine", Verb::Look),
    ("inspect", Verb::Look),
    ("check", Verb::Look),
    ("observe", Verb::Look),
    ("view", Verb::Look),
    ("read", Verb::Look),
    // Inventory
    ("inventory", Verb::Inventory),
    ("inv", Verb::Inventory),
    ("i", Verb::Inventory),
    ("items", Verb::Inventory),
    ("bag", Verb::Inventory),
    // Stats
    ("stats", Verb::Stats),
    ("status", Verb::Stats),
    ("character", Verb::Stats),
    ("player", Verb::Stats),
    // System
    ("help", Verb::Help),
    ("commands", Verb::Help),
    ("?", Verb::Help),
    ("save", Verb::Save),
    ("load", Verb::Load),
    ("quit", Verb::Quit),
    ("exit", Verb::Quit),
];

/// Every recognized direction alias and the direction it stands for.
pub const DIRECTION_ALIASES: &[(&str, Direction)] = &[
    // Cardinal
    ("north", Direction::North),
    ("n", Direction::North),
    ("forward", Direction::North),
    ("south", Direction::South),
    ("s", Direction::South),
    ("back", Direction::South),
    ("backward", Direction::South),
    ("east", Direction::East),
    ("e", Direction::East),
    ("right", Direction::East),
    ("west", Direction::West),
    ("w", Direction::West),
    ("left", Direction::West),
    // Diagonal
    ("northeast", Direction::Northeast),
    ("ne", Direction::Northeast),
    ("north-east", Direction::Northeast),
    ("northwest", Direction::Northwest),
    ("nw", Direction::Northwest),
    ("north-west", Direction::Northwest),
    ("southeast", Direction::Southeast),
    ("se", Direction::Southeast),
    ("south-east", Direction::Southeast),
    ("southwest", Direction::Southwest),
    ("sw", Direction::Southwest),
    ("south-west", Direction::Southwest),
    // Vertical
    ("up", Direction::Up),
    ("u", Direction::Up),
    ("upstairs", Direction::Up),
    ("climb", Direction::Up),
    ("down", Direction::Down),
    ("d", Direction::Down),
    ("downstairs", Direction::Down),
    ("descend", Direction::Down),
];

static VERBS: LazyLock<HashMap<&'static str, Verb>> =
    LazyLock::new(|| VERB_SYNONYMS.iter().copied().collect());

static DIRECTIONS: LazyLock<HashMap<&'static str, Direction>> =
    LazyLock::new(|| DIRECTION_ALIASES.iter().copied().collect());

/// Look up the canonical verb for a lower-cased word.
pub fn verb_for(word: &str) -> Option<Verb> {
    VERBS.get(word).copied()
}

/// Look up the canonical direction for a lower-cased word.
pub fn direction_for(word: &str) -> Option<Direction> {
    DIRECTIONS.get(word).copied()
}

/// Whether a word is dropped during tokenization.
pub fn is_filler(word: &str) -> bool {
    FILLER_WORDS.contains(&word)
}

/// All aliases of a canonical verb, in table order.
pub fn aliases_of(verb: Verb) -> impl Iterator<Item = &'static str> {
    VERB_SYNONYMS
        .iter()
        .filter(move |(_, v)| *v == verb)
        .map(|(alias, _)| *alias)
}

/// All aliases of a canonical direction, in table order.
pub fn direction_aliases_of(direction: Direction) -> impl Iterator<Item = &'static str> {
    DIRECTION_ALIASES
        .iter()
        .filter(move |(_, d)| *d == direction)
        .map(|(alias, _)| *alias)
}

/// Suggest the verb a mistyped word most likely meant.
///
/// Used for "did you mean" hints on the input surface only; parsing never
/// guesses.
pub fn closest_verb(word: &str) -> Option<Verb> {
    let word = word.to_lowercase();
    let mut best: Option<(Verb, f64)> = None;
    for (alias, verb) in VERB_SYNONYMS {
        let score = jaro_winkler(&word, alias);
        if score >= HINT_THRESHOLD && best.is_none_or(|(_, top)| score > top) {
            best = Some((*verb, score));
        }
    }
    best.map(|(verb, _)| verb)
}
