use std::path::Path;

use bq_parser::{ParsedCommand, build_many, validate};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::{CommandReport, describe_error, load_context};

pub fn run(
    input: &str,
    context: Option<&Path>,
    check: bool,
    json: bool,
) -> Result<(), String> {
    let context = load_context(context)?;

    let mut commands = build_many(input, context.as_ref());
    if let Some(ctx) = context.as_ref().filter(|_| check) {
        commands = commands.into_iter().map(|c| validate(c, ctx)).collect();
    }
    tracing::debug!(input, commands = commands.len(), "parsed");

    if json {
        let reports: Vec<CommandReport> = commands.iter().map(CommandReport::from).collect();
        let out = serde_json::to_string_pretty(&reports)
            .map_err(|e| format!("JSON serialization failed: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    print_table(&commands);
    Ok(())
}

fn print_table(commands: &[ParsedCommand]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Input", "Verb", "Category", "Direction", "Target", "With"]);

    for command in commands {
        table.add_row(vec![
            command.raw().to_string(),
            command.verb().map_or("-".into(), |v| v.to_string()),
            command.category().to_string(),
            command.direction().map_or("-".into(), |d| d.to_string()),
            command.target().unwrap_or("-").to_string(),
            command.secondary_target().unwrap_or("-").to_string(),
        ]);
    }

    println!("{table}");
    println!();

    for (i, command) in commands.iter().enumerate() {
        match command.error() {
            Some(error) => println!("  {}. {}", i + 1, describe_error(error)),
            None => println!("  {}. {}", i + 1, "ok".green()),
        }
    }
}
