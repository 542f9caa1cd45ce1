//! `quiz` — take quizzes from the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod catalog;
mod commands;

#[derive(Parser)]
#[command(name = "quiz", version, about = "Take multiple-choice quizzes in the terminal")]
struct Cli {
    /// Catalog TOML file (defaults to the built-in sample catalog)
    #[arg(long, global = true, env = "QUIZ_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List quizzes in the catalog
    List,

    /// Take a quiz interactively (option number, `p` to go back, `q` to exit)
    Take {
        /// Quiz id as shown by `list`
        quiz_id: u64,

        /// Print the final report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate a catalog file
    Validate,

    /// Print the built-in catalog as TOML
    Sample,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List => commands::list::execute(cli.catalog.as_deref()),
        Commands::Take { quiz_id, json } => {
            commands::take::execute(cli.catalog.as_deref(), quiz_id, json)
        }
        Commands::Validate => commands::validate::execute(cli.catalog.as_deref()),
        Commands::Sample => commands::sample::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(2);
    }
}
