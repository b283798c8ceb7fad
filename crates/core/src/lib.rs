//! Subgram-core - Vocabulary structures for subword embedding training
//!
//! This crate builds and maintains the vocabulary used to train word,
//! subword and text-classification models: it maps tokens to stable
//! integer ids through a fixed-capacity open-addressing table, tracks
//! frequency statistics, derives hashed character n-gram rows for
//! out-of-vocabulary robustness, precomputes frequency-based discard
//! probabilities, and supports irreversible pruning with id remapping
//! for deployment-size reduction.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use subgram_core::{DictConfig, Dictionary};
//!
//! let config = Arc::new(DictConfig {
//!     max_vocab_size: 1_000,
//!     ..Default::default()
//! });
//! let mut dict = Dictionary::new(config)?;
//! dict.add("hello");
//! dict.add("world");
//! dict.add("hello");
//! assert_eq!(dict.get_id("hello"), Some(0));
//! # Ok::<(), subgram_core::DictError>(())
//! ```

pub mod error;
pub use error::{DictError, Result};

pub mod config;
pub use config::DictConfig;

pub mod hash;
pub use hash::fnv1a;

pub mod entry;
pub use entry::{Entry, EntryKind, RowId};

pub mod subword;

pub mod dictionary;
pub use dictionary::Dictionary;

/// End-of-sentence sentinel, inserted by the token reader for every
/// newline.
pub const EOS: &str = "</s>";
/// Begin-of-word boundary marker used during n-gram extraction.
pub const BOW: &str = "<";
/// End-of-word boundary marker used during n-gram extraction.
pub const EOW: &str = ">";
