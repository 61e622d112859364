//! Bounded command history with shell-style navigation.

use std::collections::VecDeque;

use crate::config::DEFAULT_HISTORY_CAPACITY;

/// Previously submitted command lines, oldest first.
///
/// The navigation cursor ranges over `0..=len`; `len` means "past the end",
/// i.e. a fresh input line.
#[derive(Debug, Clone)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    capacity: usize,
    cursor: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl CommandHistory {
    /// Create an empty history holding at most `capacity` entries (at least 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::new(),
            capacity,
            cursor: 0,
        }
    }

    /// Record a submitted command.
    ///
    /// Blank lines and exact repeats of the newest entry are ignored. The
    /// oldest entry is evicted once the capacity is exceeded, and navigation
    /// restarts from the end.
    pub fn add(&mut self, command: impl Into<String>) {
        let command = command.into();
        if command.trim().is_empty() || self.entries.back() == Some(&command) {
            return;
        }

        self.entries.push_back(command);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.reset_navigation();
    }

    /// Step back to an older entry (up arrow).
    ///
    /// Stops at the oldest entry. Returns `None` only when the history is
    /// empty.
    pub fn navigate_back(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = self.cursor.saturating_sub(1);
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step forward to a newer entry (down arrow).
    ///
    /// Past the newest entry this yields `""`, a fresh input line, and stays
    /// there. Returns `None` only when the history is empty.
    pub fn navigate_forward(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            self.entries.get(self.cursor).map(String::as_str)
        } else {
            self.cursor = self.entries.len();
            Some("")
        }
    }

    /// Move the navigation cursor past the newest entry.
    pub fn reset_navigation(&mut self) {
        self.cursor = self.entries.len();
    }

    /// All entries, oldest first.
    pub fn all(&self) -> Vec<&str> {
        self.entries.iter().map(String::as_str).collect()
    }

    /// The newest `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> Vec<&str> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).map(String::as_str).collect()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn history() -> CommandHistory {
        CommandHistory::new(10)
    }

    #[test]
    fn adds_commands() {
        let mut h = history();
        h.add("go north");
        h.add("take sword");
        assert_eq!(h.all(), ["go north", "take sword"]);
    }

    #[test]
    fn ignores_blank_commands() {
        let mut h = history();
        h.add("");
        h.add("   ");
        assert!(h.is_empty());
    }

    #[test]
    fn ignores_consecutive_duplicates() {
        let mut h = history();
        h.add("go north");
        h.add("go north");
        assert_eq!(h.len(), 1);
        h.add("look");
        h.add("go north");
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn navigate_back_clamps_at_oldest() {
        let mut h = history();
        h.add("go north");
        h.add("take sword");
        h.add("attack goblin");
        assert_eq!(h.navigate_back(), Some("attack goblin"));
        assert_eq!(h.navigate_back(), Some("take sword"));
        assert_eq!(h.navigate_back(), Some("go north"));
        assert_eq!(h.navigate_back(), Some("go north"));
    }

    #[test]
    fn navigate_forward_ends_on_fresh_line() {
        let mut h = history();
        h.add("go north");
        h.add("take sword");
        h.navigate_back();
        h.navigate_back();
        assert_eq!(h.navigate_forward(), Some("take sword"));
        assert_eq!(h.navigate_forward(), Some(""));
        assert_eq!(h.navigate_forward(), Some(""));
        assert_eq!(h.navigate_back(), Some("take sword"));
    }

    #[test]
    fn forward_without_navigating_is_fresh_line() {
        let mut h = history();
        h.add("look");
        assert_eq!(h.navigate_forward(), Some(""));
    }

    #[test]
    fn empty_history_navigation() {
        let mut h = history();
        assert_eq!(h.navigate_back(), None);
        assert_eq!(h.navigate_forward(), None);
    }

    #[test]
    fn add_resets_navigation() {
        let mut h = history();
        h.add("a1");
        h.add("a2");
        h.navigate_back();
        h.navigate_back();
        h.add("a3");
        assert_eq!(h.navigate_back(), Some("a3"));
    }

    #[test]
    fn evicts_oldest() {
        let mut h = CommandHistory::new(3);
        for cmd in ["command1", "command2", "command3", "command4"] {
            h.add(cmd);
        }
        assert_eq!(h.all(), ["command2", "command3", "command4"]);
    }

    #[test]
    fn recent_commands() {
        let mut h = history();
        for cmd in ["cmd1", "cmd2", "cmd3", "cmd4"] {
            h.add(cmd);
        }
        assert_eq!(h.recent(2), ["cmd3", "cmd4"]);
        assert_eq!(h.recent(10).len(), 4);
        assert!(h.recent(0).is_empty());
    }

    #[test]
    fn clear_history() {
        let mut h = history();
        h.add("go north");
        h.add("take sword");
        h.clear();
        assert!(h.all().is_empty());
        assert_eq!(h.navigate_back(), None);
    }

    #[test]
    fn zero_capacity_keeps_one() {
        let mut h = CommandHistory::new(0);
        h.add("a");
        h.add("b");
        assert_eq!(h.capacity(), 1);
        assert_eq!(h.all(), ["b"]);
    }

    proptest! {
        #[test]
        fn never_exceeds_capacity(
            capacity in 1usize..8,
            commands in proptest::collection::vec("[a-c ]{0,3}", 0..40),
        ) {
            let mut h = CommandHistory::new(capacity);
            for cmd in &commands {
                h.add(cmd.as_str());
            }
            prop_assert!(h.len() <= capacity);
            let all = h.all();
            for pair in all.windows(2) {
                prop_assert_ne!(pair[0], pair[1]);
            }
        }

        #[test]
        fn back_then_forward_returns_to_fresh_line(
            commands in proptest::collection::vec("[a-z]{1,4}", 1..10),
            steps in 1usize..12,
        ) {
            let mut h = CommandHistory::new(20);
            for cmd in &commands {
                h.add(cmd.as_str());
            }
            for _ in 0..steps {
                prop_assert!(h.navigate_back().is_some());
            }
            let mut last = None;
            for _ in 0..=steps {
                last = h.navigate_forward().map(str::to_string);
            }
            prop_assert_eq!(last.as_deref(), Some(""));
        }
    }
}
