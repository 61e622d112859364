//! Developer CLI for the Bubbly Quest command interpreter.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "bq",
    about = "Bubbly Quest command interpreter: parse, validate and autocomplete player input",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one input line and show the resulting commands
    Parse {
        /// Player input, e.g. "take the potion and go north"
        input: String,

        /// JSON file describing the current room
        #[arg(short, long)]
        context: Option<PathBuf>,

        /// Check each command against the context
        #[arg(long, requires = "context")]
        validate: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Suggest completions for a partial input
    Suggest {
        /// Partial input, e.g. "ta" or "pot"
        partial: String,

        /// JSON file describing the current room
        #[arg(short, long)]
        context: Option<PathBuf>,

        /// JSON file with interpreter settings
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List recognized verbs and directions
    Vocab,

    /// Read commands from stdin and interpret them one line at a time
    Repl {
        /// JSON file describing the current room
        #[arg(short, long)]
        context: Option<PathBuf>,

        /// JSON file with interpreter settings
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bq_cli=info,bq_parser=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input,
            context,
            validate,
            json,
        } => commands::parse::run(&input, context.as_deref(), validate, json),
        Commands::Suggest {
            partial,
            context,
            config,
        } => commands::suggest::run(&partial, context.as_deref(), config.as_deref()),
        Commands::Vocab => commands::vocab::run(),
        Commands::Repl { context, config } => {
            commands::repl::run(context.as_deref(), config.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
