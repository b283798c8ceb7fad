//! Vocabulary entry model.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Kind of a vocabulary entry.
///
/// Labels are recognized during corpus reading by a configured literal
/// prefix; everything else is a word. The discriminants are the on-disk
/// tag values and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i8)]
pub enum EntryKind {
    Word = 0,
    Label = 1,
}

impl EntryKind {
    /// On-disk tag byte.
    #[inline]
    pub fn tag(self) -> i8 {
        self as i8
    }

    /// Decode an on-disk tag byte.
    pub fn from_tag(tag: i8) -> Option<Self> {
        match tag {
            0 => Some(EntryKind::Word),
            1 => Some(EntryKind::Label),
            _ => None,
        }
    }
}

/// One distinct word or label.
///
/// An entry's position in the store is its id; ids are stable only
/// between threshold/prune passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Token text, immutable after creation
    pub text: CompactString,
    /// Total occurrence count
    pub count: u64,
    /// Word or label
    pub kind: EntryKind,
    /// Combined-space subword rows; populated for words after
    /// finalization, always empty for labels
    #[serde(skip)]
    pub subwords: Vec<u32>,
}

impl Entry {
    pub fn new(text: CompactString, kind: EntryKind) -> Self {
        Self {
            text,
            count: 1,
            kind,
            subwords: Vec::new(),
        }
    }
}

/// A row in the combined embedding-id space: either a vocabulary word or
/// a hashed n-gram bucket offset past the word region.
///
/// Keeping the two ranges as an explicit tagged value confines the
/// `nwords` offset arithmetic to this type, so pruning cannot introduce
/// off-by-offset ids elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowId {
    /// Entry-store word id, `0 <= id < nwords`
    Word(u32),
    /// Hashed n-gram bucket index, `0 <= bucket < bucket_count`
    Bucket(u32),
}

impl RowId {
    /// Decompose a combined id given the current word-region size.
    #[inline]
    pub fn from_combined(id: u32, nwords: u32) -> Self {
        if id < nwords {
            RowId::Word(id)
        } else {
            RowId::Bucket(id - nwords)
        }
    }

    /// Flatten back into the combined id space.
    #[inline]
    pub fn combined(self, nwords: u32) -> u32 {
        match self {
            RowId::Word(id) => id,
            RowId::Bucket(b) => nwords + b,
        }
    }
}
