//! Vocabulary construction from a raw corpus stream.

use std::io::BufRead;
use std::sync::Arc;

use log::info;

use subgram_core::{DictConfig, Dictionary, Result, EOS};

use crate::reader::TokenReader;

/// Builds a [`Dictionary`] by streaming a corpus through it.
///
/// Construction is single-threaded: tokens are added one by one, a
/// load-factor guard bounds memory on very large corpora, and
/// [`VocabBuilder::finish`] applies the final threshold and computes
/// the derived tables.
pub struct VocabBuilder {
    dict: Dictionary,
    /// Escalating cutoff used by the load-factor guard. Starts at 1 and
    /// grows by one per triggered pass, so repeated triggers prune
    /// progressively harder instead of oscillating around the guard.
    min_threshold: u64,
}

impl VocabBuilder {
    pub fn new(config: Arc<DictConfig>) -> Result<Self> {
        Ok(Self {
            dict: Dictionary::new(config)?,
            min_threshold: 1,
        })
    }

    /// The dictionary as built so far. Counts and ids are provisional
    /// until [`VocabBuilder::finish`].
    pub fn dict(&self) -> &Dictionary {
        &self.dict
    }

    /// Stream a corpus into the vocabulary. May be called repeatedly to
    /// concatenate inputs.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let max_line = self.dict.config().max_line_size;
        let mut tokens = TokenReader::new(reader);
        let mut token = String::new();
        let mut line_tokens = 0usize;

        while tokens.next_token(&mut token)? {
            self.dict.add(&token);
            if token == EOS {
                line_tokens = 0;
            } else {
                line_tokens += 1;
                if line_tokens >= max_line {
                    // Overlong physical line: force the sentinel and
                    // continue as a fresh logical line.
                    self.dict.add(EOS);
                    line_tokens = 0;
                }
            }
            if self.dict.ntokens() % 1_000_000 == 0 {
                info!("read {}M tokens", self.dict.ntokens() / 1_000_000);
            }
            if self.dict.load_factor() > 0.75 {
                self.min_threshold += 1;
                self.dict
                    .threshold(self.min_threshold, self.min_threshold)?;
            }
        }
        Ok(())
    }

    /// Apply the final configured thresholds, compute the discard and
    /// subword tables, and return the finished dictionary.
    pub fn finish(mut self) -> Result<Dictionary> {
        let (min_count, min_count_label) = {
            let c = self.dict.config();
            (c.min_count, c.min_count_label)
        };
        self.dict.threshold(min_count, min_count_label)?;
        self.dict.finalize();
        info!(
            "vocabulary: {} words, {} labels, {} tokens",
            self.dict.nwords(),
            self.dict.nlabels(),
            self.dict.ntokens()
        );
        Ok(self.dict)
    }
}
