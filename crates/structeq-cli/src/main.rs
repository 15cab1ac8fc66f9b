//! structeq CLI
//!
//! Command-line interface for deep structural comparison of JSON documents

use clap::{Parser, Subcommand};

mod commands;

/// Exit code for a failed run (unreadable input, bad configuration)
const EXIT_ERROR: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "structeq")]
#[command(about = "structeq - Deep structural equality of documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two JSON documents
    Compare(commands::compare::CompareArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
    };

    match result {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_ERROR);
        }
    }
}
