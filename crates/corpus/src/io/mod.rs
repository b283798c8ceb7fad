//! Binary save/load of the vocabulary.

pub mod format;
pub mod load;
pub mod save;

pub use load::DictLoader;
pub use save::DictSaver;
