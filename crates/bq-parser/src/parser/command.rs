//! Parsed command types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CommandError;

/// Direction for movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Northeast.
    Northeast,
    /// Northwest.
    Northwest,
    /// Southeast.
    Southeast,
    /// Southwest.
    Southwest,
    /// Up.
    Up,
    /// Down.
    Down,
}

impl Direction {
    /// All directions, compass points first.
    pub const ALL: [Direction; 10] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Northeast,
        Self::Northwest,
        Self::Southeast,
        Self::Southwest,
        Self::Up,
        Self::Down,
    ];

    /// Parse a direction from any of its aliases ("n", "upstairs", "left").
    pub fn parse(s: &str) -> Option<Self> {
        super::vocabulary::direction_for(&s.to_lowercase())
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::Southeast => "southeast",
            Self::Southwest => "southwest",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The canonical action a player word resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    /// Move in a direction.
    Go,
    /// Pick up an item.
    Take,
    /// Put down a carried item.
    Drop,
    /// Use or consume a carried item.
    Use,
    /// Equip a carried item.
    Equip,
    /// Remove an equipped item.
    Unequip,
    /// Attack a hostile.
    Attack,
    /// Look around or examine something.
    Look,
    /// List carried items.
    Inventory,
    /// Show character stats.
    Stats,
    /// Show help.
    Help,
    /// Save the game.
    Save,
    /// Load a saved game.
    Load,
    /// Quit the game.
    Quit,
}

impl Verb {
    /// All canonical verbs.
    pub const ALL: [Verb; 14] = [
        Self::Go,
        Self::Take,
        Self::Drop,
        Self::Use,
        Self::Equip,
        Self::Unequip,
        Self::Attack,
        Self::Look,
        Self::Inventory,
        Self::Stats,
        Self::Help,
        Self::Save,
        Self::Load,
        Self::Quit,
    ];

    /// Canonical name of the verb.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Take => "take",
            Self::Drop => "drop",
            Self::Use => "use",
            Self::Equip => "equip",
            Self::Unequip => "unequip",
            Self::Attack => "attack",
            Self::Look => "look",
            Self::Inventory => "inventory",
            Self::Stats => "stats",
            Self::Help => "help",
            Self::Save => "save",
            Self::Load => "load",
            Self::Quit => "quit",
        }
    }

    /// The category this verb belongs to.
    pub fn category(&self) -> Category {
        match self {
            Self::Go => Category::Movement,
            Self::Take | Self::Drop | Self::Use => Category::Interaction,
            Self::Attack => Category::Combat,
            Self::Inventory | Self::Equip | Self::Unequip => Category::Inventory,
            Self::Help | Self::Save | Self::Load | Self::Quit => Category::System,
            Self::Look | Self::Stats => Category::Information,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Broad grouping of commands, derived from the verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Moving between rooms.
    Movement,
    /// Taking, dropping and using items.
    Interaction,
    /// Fighting.
    Combat,
    /// Inventory and equipment management.
    Inventory,
    /// Help, save, load and quit.
    System,
    /// Looking around and checking stats.
    Information,
    /// Input that did not resolve to a verb.
    Unknown,
}

impl Category {
    /// Display name of the category.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Movement => "movement",
            Self::Interaction => "interaction",
            Self::Combat => "combat",
            Self::Inventory => "inventory",
            Self::System => "system",
            Self::Information => "information",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A structurally complete player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move in a direction.
    Go {
        /// The direction to move.
        direction: Direction,
    },
    /// Take an item.
    Take {
        /// The item name.
        item: String,
    },
    /// Drop an item.
    Drop {
        /// The item name.
        item: String,
    },
    /// Use an item, optionally on something else.
    Use {
        /// The item name.
        item: String,
        /// What the item is used on.
        on: Option<String>,
    },
    /// Equip an item.
    Equip {
        /// The item name.
        item: String,
    },
    /// Unequip an item.
    Unequip {
        /// The item name.
        item: String,
    },
    /// Attack something.
    Attack {
        /// The target name.
        target: String,
    },
    /// Look around, or at a specific target.
    Look {
        /// Optional target to examine.
        target: Option<String>,
    },
    /// List inventory.
    Inventory,
    /// Show character stats.
    Stats,
    /// Show help.
    Help,
    /// Save the game.
    Save,
    /// Load a saved game.
    Load,
    /// Quit the game.
    Quit,
}

impl Command {
    /// The canonical verb of this command.
    pub fn verb(&self) -> Verb {
        match self {
            Self::Go { .. } => Verb::Go,
            Self::Take { .. } => Verb::Take,
            Self::Drop { .. } => Verb::Drop,
            Self::Use { .. } => Verb::Use,
            Self::Equip { .. } => Verb::Equip,
            Self::Unequip { .. } => Verb::Unequip,
            Self::Attack { .. } => Verb::Attack,
            Self::Look { .. } => Verb::Look,
            Self::Inventory => Verb::Inventory,
            Self::Stats => Verb::Stats,
            Self::Help => Verb::Help,
            Self::Save => Verb::Save,
            Self::Load => Verb::Load,
            Self::Quit => Verb::Quit,
        }
    }

    /// The movement direction, if this is a movement command.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Go { direction } => Some(*direction),
            _ => None,
        }
    }

    /// The primary target (item, hostile or examined object).
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Take { item }
            | Self::Drop { item }
            | Self::Use { item, .. }
            | Self::Equip { item }
            | Self::Unequip { item } => Some(item.as_str()),
            Self::Attack { target } => Some(target.as_str()),
            Self::Look { target } => target.as_deref(),
            _ => None,
        }
    }

    /// The secondary target ("door" in "use key on door").
    pub fn secondary_target(&self) -> Option<&str> {
        match self {
            Self::Use { on, .. } => on.as_deref(),
            _ => None,
        }
    }
}

/// The result of interpreting one command string.
///
/// A command is valid exactly when it carries no error. A valid result always
/// carries a [`Command`], so a valid movement has a direction and a valid
/// take, drop, use, equip, unequip or attack has a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    raw: String,
    verb: Option<Verb>,
    command: Option<Command>,
    error: Option<CommandError>,
}

impl ParsedCommand {
    /// A successfully interpreted command.
    pub fn valid(raw: impl Into<String>, command: Command) -> Self {
        Self {
            raw: raw.into(),
            verb: Some(command.verb()),
            command: Some(command),
            error: None,
        }
    }

    /// Input that could not be turned into a complete command.
    pub fn invalid(raw: impl Into<String>, verb: Option<Verb>, error: CommandError) -> Self {
        Self {
            raw: raw.into(),
            verb,
            command: None,
            error: Some(error),
        }
    }

    /// Mark a command as rejected, keeping what was understood.
    pub fn reject(mut self, error: CommandError) -> Self {
        self.error = Some(error);
        self
    }

    /// The input exactly as typed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The resolved verb, if any.
    pub fn verb(&self) -> Option<Verb> {
        self.verb
    }

    /// The command category, derived from the verb.
    pub fn category(&self) -> Category {
        self.verb.map_or(Category::Unknown, |verb| verb.category())
    }

    /// The structured command, present whenever parsing completed.
    ///
    /// A command rejected by validation keeps its structure here.
    pub fn command(&self) -> Option<&Command> {
        self.command.as_ref()
    }

    /// The movement direction, if any.
    pub fn direction(&self) -> Option<Direction> {
        self.command.as_ref().and_then(Command::direction)
    }

    /// The primary target, if any.
    pub fn target(&self) -> Option<&str> {
        self.command.as_ref().and_then(Command::target)
    }

    /// The secondary target, if any.
    pub fn secondary_target(&self) -> Option<&str> {
        self.command.as_ref().and_then(Command::secondary_target)
    }

    /// Whether the command can be handed to the action resolver.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Why the command is invalid.
    pub fn error(&self) -> Option<&CommandError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_verb_has_a_known_category() {
        for verb in Verb::ALL {
            assert_ne!(verb.category(), Category::Unknown, "{verb}");
        }
    }

    #[test]
    fn category_table() {
        assert_eq!(Verb::Go.category(), Category::Movement);
        assert_eq!(Verb::Use.category(), Category::Interaction);
        assert_eq!(Verb::Attack.category(), Category::Combat);
        assert_eq!(Verb::Unequip.category(), Category::Inventory);
        assert_eq!(Verb::Load.category(), Category::System);
        assert_eq!(Verb::Stats.category(), Category::Information);
    }

    #[test]
    fn direction_parse_accepts_aliases() {
        assert_eq!(Direction::parse("N"), Some(Direction::North));
        assert_eq!(Direction::parse("south-west"), Some(Direction::Southwest));
        assert_eq!(Direction::parse("nowhere"), None);
    }

    #[test]
    fn valid_command_reports_fields() {
        let parsed = ParsedCommand::valid(
            "use key on door",
            Command::Use {
                item: "key".to_string(),
                on: Some("door".to_string()),
            },
        );
        assert!(parsed.is_valid());
        assert_eq!(parsed.verb(), Some(Verb::Use));
        assert_eq!(parsed.category(), Category::Interaction);
        assert_eq!(parsed.target(), Some("key"));
        assert_eq!(parsed.secondary_target(), Some("door"));
        assert_eq!(parsed.direction(), None);
    }

    #[test]
    fn invalid_without_verb_is_unknown() {
        let parsed = ParsedCommand::invalid("", None, CommandError::EmptyInput);
        assert!(!parsed.is_valid());
        assert_eq!(parsed.category(), Category::Unknown);
        assert!(parsed.command().is_none());
    }

    #[test]
    fn rejected_command_keeps_structure() {
        let parsed = ParsedCommand::valid(
            "go west",
            Command::Go {
                direction: Direction::West,
            },
        )
        .reject(CommandError::NoExit(Direction::West));
        assert!(!parsed.is_valid());
        assert_eq!(parsed.direction(), Some(Direction::West));
        assert_eq!(parsed.raw(), "go west");
    }
}
