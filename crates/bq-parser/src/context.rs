//! Snapshot of what the player can currently see and carry.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ParserError, ParserResult};
use crate::parser::Direction;

/// Read-only view of the game state, supplied fresh for each call.
///
/// Missing fields default to empty when deserializing, so a snapshot file
/// only needs to list what is actually present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandContext {
    /// Identifier of the room the player is in.
    pub current_room_id: u32,
    /// Exits that can be taken from this room.
    pub available_exits: Vec<Direction>,
    /// Items lying in the room.
    pub visible_items: Vec<String>,
    /// A hostile creature in the room, if any.
    pub visible_monster: Option<String>,
    /// Scenery that can be examined.
    pub visible_features: Vec<String>,
    /// Items the player carries.
    pub inventory_items: Vec<String>,
    /// Items the player has equipped.
    pub equipped_items: Vec<String>,
    /// Whether a fight is in progress.
    pub in_combat: bool,
}

impl CommandContext {
    /// Create an empty snapshot for a room.
    pub fn new(current_room_id: u32) -> Self {
        Self {
            current_room_id,
            ..Self::default()
        }
    }

    /// Parse a snapshot from JSON.
    pub fn from_json_str(json: &str) -> ParserResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a snapshot from a JSON file.
    pub fn load(path: &Path) -> ParserResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ParserError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Set the usable exits.
    pub fn with_exits(mut self, exits: impl IntoIterator<Item = Direction>) -> Self {
        self.available_exits = exits.into_iter().collect();
        self
    }

    /// Set the items lying in the room.
    pub fn with_visible_items<S: Into<String>>(
        mut self,
        items: impl IntoIterator<Item = S>,
    ) -> Self {
        self.visible_items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Set the visible hostile.
    pub fn with_visible_monster(mut self, name: impl Into<String>) -> Self {
        self.visible_monster = Some(name.into());
        self
    }

    /// Set the examinable scenery.
    pub fn with_visible_features<S: Into<String>>(
        mut self,
        features: impl IntoIterator<Item = S>,
    ) -> Self {
        self.visible_features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Set the carried items.
    pub fn with_inventory_items<S: Into<String>>(
        mut self,
        items: impl IntoIterator<Item = S>,
    ) -> Self {
        self.inventory_items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Set the equipped items.
    pub fn with_equipped_items<S: Into<String>>(
        mut self,
        items: impl IntoIterator<Item = S>,
    ) -> Self {
        self.equipped_items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Set the combat flag.
    pub fn with_combat(mut self, in_combat: bool) -> Self {
        self.in_combat = in_combat;
        self
    }

    /// Whether an exit leads in the given direction.
    pub fn has_exit(&self, direction: Direction) -> bool {
        self.available_exits.contains(&direction)
    }

    /// The visible hostile, treating a blank name as no hostile.
    pub fn hostile(&self) -> Option<&str> {
        self.visible_monster
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    /// Everything that can be looked at: room items, scenery, then the hostile.
    pub fn lookable_names(&self) -> Vec<&str> {
        self.visible_items
            .iter()
            .chain(&self.visible_features)
            .map(String::as_str)
            .chain(self.hostile())
            .collect()
    }
}
