//! Feasibility checks for parsed commands.
//!
//! Only the checks that the room snapshot answers cheaply and unambiguously
//! live here: whether an exit exists and whether anything can be attacked.
//! Whether the player really holds an item is for the action resolver.

use crate::context::CommandContext;
use crate::error::CommandError;
use crate::parser::{Category, ParsedCommand};

/// Check a parsed command against the current room.
///
/// Already-invalid commands are returned untouched. Rejected commands keep
/// their verb and structure; only the error is added.
pub fn validate(command: ParsedCommand, context: &CommandContext) -> ParsedCommand {
    if !command.is_valid() {
        return command;
    }

    match command.category() {
        Category::Movement => match command.direction() {
            Some(direction) if !context.has_exit(direction) => {
                tracing::debug!(raw = command.raw(), %direction, "no exit");
                command.reject(CommandError::NoExit(direction))
            }
            _ => command,
        },
        Category::Combat if context.hostile().is_none() => {
            tracing::debug!(raw = command.raw(), "nothing to attack");
            command.reject(CommandError::NothingToAttack)
        }
        _ => command,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::parser::{Direction, build};

    fn context() -> CommandContext {
        CommandContext::new(1)
            .with_exits([Direction::North, Direction::South, Direction::East])
            .with_visible_monster("goblin scout")
    }

    #[test]
    fn open_exit_passes() {
        let validated = validate(build("go north", None), &context());
        assert!(validated.is_valid());
    }

    #[test]
    fn missing_exit_rejected() {
        let validated = validate(build("go west", None), &context());
        assert!(!validated.is_valid());
        let error = validated.error().unwrap();
        assert!(error.to_string().contains("can't go west"));
        assert_eq!(error.kind(), ErrorKind::InfeasibleInContext);
        assert_eq!(validated.direction(), Some(Direction::West));
    }

    #[test]
    fn attack_with_monster_passes() {
        let ctx = context();
        let validated = validate(build("attack", Some(&ctx)), &ctx);
        assert!(validated.is_valid());
    }

    #[test]
    fn attack_without_monster_rejected() {
        let mut ctx = context();
        ctx.visible_monster = None;
        let validated = validate(build("attack rat", Some(&ctx)), &ctx);
        assert!(!validated.is_valid());
        assert_eq!(validated.error(), Some(&CommandError::NothingToAttack));
        assert_eq!(validated.target(), Some("rat"));
    }

    #[test]
    fn attack_with_blank_hostile_rejected() {
        let ctx = CommandContext::from_json_str(r#"{"visible_monster": ""}"#).unwrap();
        let validated = validate(build("attack goblin", Some(&ctx)), &ctx);
        assert_eq!(validated.error(), Some(&CommandError::NothingToAttack));
    }

    #[test]
    fn invalid_input_untouched() {
        let mut ctx = context();
        ctx.visible_monster = None;
        let parsed = build("attack", Some(&ctx));
        let validated = validate(parsed.clone(), &ctx);
        assert_eq!(validated, parsed);
        assert!(validated.error().unwrap().to_string().contains("attack"));
    }

    #[test]
    fn other_categories_pass_through() {
        let ctx = CommandContext::new(1);
        for input in ["take lantern", "look", "inventory", "save", "stats"] {
            assert!(validate(build(input, None), &ctx).is_valid(), "{input}");
        }
    }
}
