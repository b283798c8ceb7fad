//! Shared hyperparameter configuration.
//!
//! A single [`DictConfig`] is built once by the caller and handed to the
//! vocabulary by `Arc`, so independent vocabularies (e.g. in tests) never
//! share mutable global state.

use crate::error::{DictError, Result};
use serde::{Deserialize, Serialize};

/// Hyperparameters consumed by the vocabulary builder.
///
/// Defaults match the conventional values used for skip-gram / CBOW
/// training on large corpora.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictConfig {
    /// Minimum occurrence count for a word to survive the final threshold
    pub min_count: u64,
    /// Minimum occurrence count for a label to survive the final threshold
    pub min_count_label: u64,
    /// Literal prefix marking label tokens (e.g. `__label__`)
    pub label_prefix: String,
    /// Minimum character n-gram length
    pub minn: usize,
    /// Maximum character n-gram length
    pub maxn: usize,
    /// Number of hash buckets for character and word n-grams
    pub bucket: u32,
    /// Subsampling threshold for the discard table
    pub sample_threshold: f64,
    /// Word n-gram order for the label-aware line reader (1 = unigrams only)
    pub word_ngrams: usize,
    /// Capacity of the open-addressing slot table; never grown, only rebuilt
    pub max_vocab_size: usize,
    /// Maximum tokens per logical line before an end-of-line sentinel is forced
    pub max_line_size: usize,
}

impl Default for DictConfig {
    fn default() -> Self {
        Self {
            min_count: 5,
            min_count_label: 0,
            label_prefix: "__label__".to_string(),
            minn: 3,
            maxn: 6,
            bucket: 2_000_000,
            sample_threshold: 1e-4,
            word_ngrams: 1,
            max_vocab_size: 30_000_000,
            max_line_size: 1024,
        }
    }
}

impl DictConfig {
    /// Validate parameter combinations that would otherwise surface as
    /// confusing behavior deep inside the builder.
    pub fn validate(&self) -> Result<()> {
        if self.minn > self.maxn {
            return Err(DictError::InvalidConfig(format!(
                "minn ({}) must not exceed maxn ({})",
                self.minn, self.maxn
            )));
        }
        if self.bucket == 0 {
            return Err(DictError::InvalidConfig("bucket must be positive".into()));
        }
        if self.max_vocab_size == 0 {
            return Err(DictError::InvalidConfig(
                "max_vocab_size must be positive".into(),
            ));
        }
        if !(self.sample_threshold > 0.0) {
            return Err(DictError::InvalidConfig(
                "sample_threshold must be positive".into(),
            ));
        }
        if self.word_ngrams == 0 {
            return Err(DictError::InvalidConfig(
                "word_ngrams must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
