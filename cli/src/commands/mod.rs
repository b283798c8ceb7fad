//! CLI command implementations.

pub mod build;
pub mod dump;
pub mod subwords;

pub use build::BuildCommand;
pub use dump::DumpCommand;
pub use subwords::SubwordsCommand;

use clap::Args;
use subgram_core::DictConfig;

/// Vocabulary hyperparameters shared by every subcommand.
///
/// The binary format does not embed them, so commands reading a saved
/// vocabulary must be given the same values it was built with.
#[derive(Args)]
pub struct ConfigArgs {
    /// Minimum word occurrence count
    #[arg(long, default_value_t = 5)]
    pub min_count: u64,

    /// Minimum label occurrence count
    #[arg(long, default_value_t = 0)]
    pub min_count_label: u64,

    /// Literal prefix marking label tokens
    #[arg(long, default_value = "__label__")]
    pub label: String,

    /// Minimum character n-gram length
    #[arg(long, default_value_t = 3)]
    pub minn: usize,

    /// Maximum character n-gram length
    #[arg(long, default_value_t = 6)]
    pub maxn: usize,

    /// Number of n-gram hash buckets
    #[arg(long, default_value_t = 2_000_000)]
    pub bucket: u32,

    /// Subsampling threshold
    #[arg(long, default_value_t = 1e-4)]
    pub sample_threshold: f64,

    /// Word n-gram order for classification line reading
    #[arg(long, default_value_t = 1)]
    pub word_ngrams: usize,

    /// Slot table capacity
    #[arg(long, default_value_t = 30_000_000)]
    pub max_vocab_size: usize,

    /// Maximum tokens per logical line
    #[arg(long, default_value_t = 1024)]
    pub max_line_size: usize,
}

impl ConfigArgs {
    pub fn to_config(&self) -> DictConfig {
        DictConfig {
            min_count: self.min_count,
            min_count_label: self.min_count_label,
            label_prefix: self.label.clone(),
            minn: self.minn,
            maxn: self.maxn,
            bucket: self.bucket,
            sample_threshold: self.sample_threshold,
            word_ngrams: self.word_ngrams,
            max_vocab_size: self.max_vocab_size,
            max_line_size: self.max_line_size,
        }
    }
}
