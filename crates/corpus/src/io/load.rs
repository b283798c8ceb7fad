//! Loading a serialized vocabulary.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use compact_str::CompactString;

use subgram_core::{DictConfig, DictError, Dictionary, Entry, EntryKind, Result};

use super::format::{read_i32, read_i64, read_i8, MAX_TEXT_LEN, PRUNE_NONE};

/// Upper bound on speculative preallocation from header-declared counts.
/// Anything larger grows as records actually arrive.
const MAX_PREALLOC: usize = 1 << 16;

/// Reads the binary vocabulary format into a fresh [`Dictionary`].
///
/// Load fails fast on malformed input; no partially loaded vocabulary
/// is ever returned. The slot table, subword lists and discard table
/// are rebuilt from the persisted entries.
pub struct DictLoader;

impl DictLoader {
    pub fn load<R: Read>(reader: &mut R, config: Arc<DictConfig>) -> Result<Dictionary> {
        let size = read_i32(reader)?;
        let nwords = read_i32(reader)?;
        let nlabels = read_i32(reader)?;
        let ntokens = read_i64(reader)?;
        let prune_size = read_i64(reader)?;

        if size < 0 || nwords < 0 || nlabels < 0 || ntokens < 0 {
            return Err(DictError::Format("negative counter in header".into()));
        }
        if nwords as i64 + nlabels as i64 != size as i64 {
            return Err(DictError::Format(format!(
                "declared totals disagree: {nwords} words + {nlabels} labels != {size} entries"
            )));
        }
        if prune_size < PRUNE_NONE {
            return Err(DictError::Format(format!(
                "invalid prune table size {prune_size}"
            )));
        }

        // Header counts are untrusted until the records arrive; an
        // impossible declared size must surface as a truncation error,
        // not an allocation failure.
        let mut entries = Vec::with_capacity((size as usize).min(MAX_PREALLOC));
        for _ in 0..size {
            entries.push(Self::read_entry(reader)?);
        }

        let declared_words = entries
            .iter()
            .filter(|e| e.kind == EntryKind::Word)
            .count();
        if declared_words != nwords as usize {
            return Err(DictError::Format(format!(
                "header declares {nwords} words but records contain {declared_words}"
            )));
        }

        let prune_pairs = if prune_size == PRUNE_NONE {
            None
        } else {
            let mut pairs = Vec::with_capacity((prune_size as usize).min(MAX_PREALLOC));
            for _ in 0..prune_size {
                let old = read_i32(reader)?;
                let new = read_i32(reader)?;
                if old < 0 || new < 0 {
                    return Err(DictError::Format("negative id in prune table".into()));
                }
                pairs.push((old as u32, new as u32));
            }
            Some(pairs)
        };

        Dictionary::from_parts(config, entries, ntokens as u64, prune_pairs)
    }

    pub fn load_from_path(path: &Path, config: Arc<DictConfig>) -> Result<Dictionary> {
        let file = File::open(path)?;
        Self::load(&mut BufReader::new(file), config)
    }

    fn read_entry<R: Read>(reader: &mut R) -> Result<Entry> {
        let len = read_i32(reader)?;
        if len < 0 || len as usize > MAX_TEXT_LEN {
            return Err(DictError::Format(format!("impossible text length {len}")));
        }
        let mut bytes = vec![0u8; len as usize];
        reader.read_exact(&mut bytes).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                DictError::Format("truncated entry record".into())
            } else {
                DictError::Io(e)
            }
        })?;
        let text = match String::from_utf8(bytes) {
            Ok(s) => CompactString::from(s),
            Err(_) => return Err(DictError::Format("entry text is not UTF-8".into())),
        };

        let count = read_i64(reader)?;
        if count < 0 {
            return Err(DictError::Format(format!("negative count {count}")));
        }
        let tag = read_i8(reader)?;
        let kind = EntryKind::from_tag(tag)
            .ok_or_else(|| DictError::Format(format!("unknown entry kind tag {tag}")))?;

        let mut entry = Entry::new(text, kind);
        entry.count = count as u64;
        Ok(entry)
    }
}
