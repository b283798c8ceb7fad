//! Subwords command implementation.

use clap::Parser;

/// Subwords command arguments.
#[derive(Parser)]
pub struct SubwordsCommand {
    /// Saved vocabulary file
    #[arg(short, long)]
    pub vocab: std::path::PathBuf,

    /// Word to look up (may be out of vocabulary)
    #[arg(short, long)]
    pub word: String,

    #[command(flatten)]
    pub config: ConfigArgs,
}

use super::ConfigArgs;
use anyhow::Result as AnyhowResult;
use std::sync::Arc;
use subgram_corpus::DictLoader;

pub fn run(cmd: SubwordsCommand) -> AnyhowResult<()> {
    let config = Arc::new(cmd.config.to_config());
    let dict = DictLoader::load_from_path(&cmd.vocab, config)?;

    let rows = dict.subwords_of(&cmd.word);
    match dict.get_id(&cmd.word) {
        Some(id) => println!("{} (id {})", cmd.word, id),
        None => println!("{} (out of vocabulary)", cmd.word),
    }
    let rows_str: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
    println!("{}", rows_str.join(" "));

    Ok(())
}
