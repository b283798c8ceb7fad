//! Subgram-corpus - Corpus reading and vocabulary persistence
//!
//! This crate is the stream-facing layer around `subgram-core`: a
//! whitespace token reader with end-of-line sentinel handling, a
//! vocabulary builder with a load-factor guard for very large corpora,
//! line-to-ids conversion with optional frequency-based discard
//! sampling, and the binary save/load format.
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//! use std::sync::Arc;
//! use subgram_corpus::VocabBuilder;
//! use subgram_core::DictConfig;
//!
//! let config = Arc::new(DictConfig {
//!     min_count: 1,
//!     max_vocab_size: 1_000,
//!     ..Default::default()
//! });
//! let mut builder = VocabBuilder::new(config)?;
//! builder.read_from(Cursor::new(b"the cat sat\n".to_vec()))?;
//! let dict = builder.finish()?;
//! assert_eq!(dict.nwords(), 4); // the, cat, sat, </s>
//! # Ok::<(), subgram_core::DictError>(())
//! ```

pub use subgram_core::{DictConfig, DictError, Dictionary, Result};

pub mod reader;
pub use reader::TokenReader;

pub mod builder;
pub use builder::VocabBuilder;

pub mod io;
pub use io::{DictLoader, DictSaver};
