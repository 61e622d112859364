use std::io::{self, BufRead, Write};
use std::path::Path;

use bq_parser::{CommandInterpreter, ParsedCommand};
use colored::Colorize;

use super::{describe_error, load_config, load_context};

pub fn run(context: Option<&Path>, config: Option<&Path>) -> Result<(), String> {
    let context = load_context(context)?;
    let mut interpreter = CommandInterpreter::new(load_config(config)?);

    println!("  {} command interpreter", "Bubbly Quest".bold());
    match &context {
        Some(ctx) => println!("  Room {} | validating against context", ctx.current_room_id),
        None => println!("  No context loaded, commands are parsed only"),
    }
    println!("  Type ':history' to list past input, ':quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        match input {
            "" => continue,
            ":quit" | ":q" => break,
            ":history" => {
                for (i, entry) in interpreter.history().all().iter().enumerate() {
                    println!("  {:>3}  {entry}", i + 1);
                }
                continue;
            }
            _ => {}
        }

        for command in interpreter.submit(input, context.as_ref()) {
            println!("{}", render(&command));
        }
        println!();
    }

    Ok(())
}

fn render(command: &ParsedCommand) -> String {
    if let Some(error) = command.error() {
        return format!("  {}", describe_error(error));
    }

    let mut out = format!("  {} {}", "->".green(), command.category());
    if let Some(verb) = command.verb() {
        out.push_str(&format!(" {}", verb.to_string().bold()));
    }
    if let Some(direction) = command.direction() {
        out.push_str(&format!(" {direction}"));
    }
    if let Some(target) = command.target() {
        out.push_str(&format!(" {}", target.cyan()));
    }
    if let Some(secondary) = command.secondary_target() {
        out.push_str(&format!(" on {}", secondary.cyan()));
    }
    out
}
