//! Dump command implementation.

use clap::Parser;

/// Dump command arguments.
#[derive(Parser)]
pub struct DumpCommand {
    /// Saved vocabulary file
    #[arg(short, long)]
    pub vocab: std::path::PathBuf,

    /// Emit JSON instead of plain text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

use super::ConfigArgs;
use anyhow::Result as AnyhowResult;
use std::sync::Arc;
use subgram_core::EntryKind;
use subgram_corpus::DictLoader;

pub fn run(cmd: DumpCommand) -> AnyhowResult<()> {
    let config = Arc::new(cmd.config.to_config());
    let dict = DictLoader::load_from_path(&cmd.vocab, config)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(dict.entries())?);
        return Ok(());
    }

    println!("{}", dict.size());
    for entry in dict.entries() {
        let kind = match entry.kind {
            EntryKind::Word => "word",
            EntryKind::Label => "label",
        };
        println!("{} {} {}", entry.text, entry.count, kind);
    }

    Ok(())
}
