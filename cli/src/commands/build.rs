//! Build command implementation.

use clap::Parser;

/// Build command arguments.
#[derive(Parser)]
pub struct BuildCommand {
    /// Input corpus file ("-" for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output vocabulary file
    #[arg(short, long)]
    pub output: std::path::PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}

use super::ConfigArgs;
use anyhow::Result as AnyhowResult;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use subgram_corpus::{DictSaver, VocabBuilder};

pub fn run(cmd: BuildCommand) -> AnyhowResult<()> {
    let config = Arc::new(cmd.config.to_config());
    let mut builder = VocabBuilder::new(config)?;

    if cmd.input == "-" {
        builder.read_from(std::io::stdin().lock())?;
    } else {
        let file = File::open(&cmd.input)?;
        builder.read_from(BufReader::new(file))?;
    }

    let dict = builder.finish()?;
    DictSaver::new(&dict).save_to_path(&cmd.output)?;

    println!(
        "Saved {} words and {} labels ({} tokens) to {}",
        dict.nwords(),
        dict.nlabels(),
        dict.ntokens(),
        cmd.output.display()
    );

    Ok(())
}
