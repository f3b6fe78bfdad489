mod commands;
mod config;
mod extractor;
mod reporter;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::CheckCommand;

/// Macrolink CLI - documentation macro-reference checker
#[derive(Debug, Parser)]
#[command(
    name = "macrolink",
    version,
    about = "Documentation macro-reference checker"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve every macro reference under a docs root
    Check(CheckCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check(cmd) => cmd.execute()?,
    };

    std::process::exit(exit_code);
}
