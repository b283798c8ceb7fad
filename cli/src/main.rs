//! Subgram CLI - Command-line interface for the vocabulary builder.
//!
//! This is the main entry point for the `subgram` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{BuildCommand, DumpCommand, SubwordsCommand};

#[derive(Parser)]
#[command(name = "subgram")]
#[command(about = "A subword vocabulary builder for embedding training", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a vocabulary from a text corpus
    Build(BuildCommand),
    /// Dump vocabulary entries
    Dump(DumpCommand),
    /// Print the subword rows of a word
    Subwords(SubwordsCommand),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build(cmd) => commands::build::run(cmd)?,
        Commands::Dump(cmd) => commands::dump::run(cmd)?,
        Commands::Subwords(cmd) => commands::subwords::run(cmd)?,
    }

    Ok(())
}
