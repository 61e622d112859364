use std::path::Path;

use bq_parser::CommandInterpreter;

use super::{load_config, load_context};

pub fn run(partial: &str, context: Option<&Path>, config: Option<&Path>) -> Result<(), String> {
    let context = load_context(context)?;
    let interpreter = CommandInterpreter::new(load_config(config)?);

    let suggestions = interpreter.suggest(partial, context.as_ref());
    if suggestions.is_empty() {
        println!("  No suggestions.");
        return Ok(());
    }

    for suggestion in &suggestions {
        println!("{suggestion}");
    }

    Ok(())
}
