//! Saving a finished vocabulary.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use subgram_core::{DictError, Dictionary, Result};

use super::format::{write_i32, write_i64, write_i8, PRUNE_NONE};

/// Writes a dictionary in the binary vocabulary format.
pub struct DictSaver<'a> {
    dict: &'a Dictionary,
}

impl<'a> DictSaver<'a> {
    pub fn new(dict: &'a Dictionary) -> Self {
        Self { dict }
    }

    /// Serialize to any byte sink.
    pub fn save<W: Write>(&self, writer: &mut W) -> Result<()> {
        let dict = self.dict;
        if dict.size() > i32::MAX as u32 {
            return Err(DictError::Format(format!(
                "vocabulary too large to serialize: {} entries",
                dict.size()
            )));
        }
        write_i32(writer, dict.size() as i32)?;
        write_i32(writer, dict.nwords() as i32)?;
        write_i32(writer, dict.nlabels() as i32)?;
        write_i64(writer, dict.ntokens() as i64)?;

        let prune_pairs = dict.prune_pairs();
        let prune_size = prune_pairs.as_ref().map_or(PRUNE_NONE, |p| p.len() as i64);
        write_i64(writer, prune_size)?;

        for entry in dict.entries() {
            let bytes = entry.text.as_bytes();
            write_i32(writer, bytes.len() as i32)?;
            writer.write_all(bytes)?;
            write_i64(writer, entry.count as i64)?;
            write_i8(writer, entry.kind.tag())?;
        }

        if let Some(pairs) = prune_pairs {
            for (old, new) in pairs {
                write_i32(writer, old as i32)?;
                write_i32(writer, new as i32)?;
            }
        }
        Ok(())
    }

    /// Serialize to a file.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.save(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
