//! Configuration for the command interpreter.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::autocomplete::MAX_SUGGESTIONS;
use crate::error::{ParserError, ParserResult};

/// Default number of commands kept in history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Configuration for a [`CommandInterpreter`](crate::CommandInterpreter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Maximum number of commands kept in history.
    pub history_capacity: usize,
    /// Maximum number of autocomplete suggestions (1-10).
    pub max_suggestions: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            max_suggestions: MAX_SUGGESTIONS,
        }
    }
}

impl InterpreterConfig {
    /// Set the history capacity (at least 1).
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity.max(1);
        self
    }

    /// Set the suggestion limit (clamped to 1-10).
    pub fn with_max_suggestions(mut self, limit: usize) -> Self {
        self.max_suggestions = limit.clamp(1, MAX_SUGGESTIONS);
        self
    }

    /// Parse a configuration from JSON, applying the same bounds as the
    /// builder methods.
    pub fn from_json_str(json: &str) -> ParserResult<Self> {
        let raw: Self = serde_json::from_str(json)?;
        Ok(Self::default()
            .with_history_capacity(raw.history_capacity)
            .with_max_suggestions(raw.max_suggestions))
    }

    /// Read a configuration from a JSON file.
    pub fn load(path: &Path) -> ParserResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ParserError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = InterpreterConfig::default();
        assert_eq!(cfg.history_capacity, 100);
        assert_eq!(cfg.max_suggestions, 10);
    }

    #[test]
    fn builder_methods() {
        let cfg = InterpreterConfig::default()
            .with_history_capacity(25)
            .with_max_suggestions(5);
        assert_eq!(cfg.history_capacity, 25);
        assert_eq!(cfg.max_suggestions, 5);
    }

    #[test]
    fn limits_clamped() {
        let cfg = InterpreterConfig::default()
            .with_history_capacity(0)
            .with_max_suggestions(0);
        assert_eq!(cfg.history_capacity, 1);
        assert_eq!(cfg.max_suggestions, 1);
        let cfg = InterpreterConfig::default().with_max_suggestions(99);
        assert_eq!(cfg.max_suggestions, 10);
    }

    #[test]
    fn from_json() {
        let cfg = InterpreterConfig::from_json_str(r#"{"max_suggestions": 50}"#).unwrap();
        assert_eq!(cfg.history_capacity, 100);
        assert_eq!(cfg.max_suggestions, 10);
        assert!(InterpreterConfig::from_json_str("not json").is_err());
    }
}
