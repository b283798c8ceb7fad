//! Byte layout of the serialized vocabulary.
//!
//! All integers are little-endian. The layout is:
//!
//! ```text
//! i32 size, i32 nwords, i32 nlabels, i64 ntokens, i64 pruneidx_size
//! per entry: i32 text_len, text bytes, i64 count, i8 kind_tag
//! if pruneidx_size >= 0: pruneidx_size x (i32 old_id, i32 new_id)
//! ```
//!
//! `pruneidx_size` is -1 for a vocabulary that was never pruned. The
//! subword and discard tables are not persisted; they are recomputed
//! deterministically on load.

use std::io::{Read, Write};

use subgram_core::{DictError, Result};

/// `pruneidx_size` value marking an unpruned vocabulary.
pub const PRUNE_NONE: i64 = -1;

/// Upper bound on a single entry's text length; anything larger is
/// corruption, not vocabulary.
pub const MAX_TEXT_LEN: usize = 1 << 20;

fn read_bytes<R: Read, const N: usize>(reader: &mut R) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            DictError::Format("truncated vocabulary stream".into())
        } else {
            DictError::Io(e)
        }
    })?;
    Ok(buf)
}

pub fn read_i32<R: Read>(reader: &mut R) -> Result<i32> {
    Ok(i32::from_le_bytes(read_bytes(reader)?))
}

pub fn read_i64<R: Read>(reader: &mut R) -> Result<i64> {
    Ok(i64::from_le_bytes(read_bytes(reader)?))
}

pub fn read_i8<R: Read>(reader: &mut R) -> Result<i8> {
    Ok(i8::from_le_bytes(read_bytes(reader)?))
}

pub fn write_i32<W: Write>(writer: &mut W, v: i32) -> Result<()> {
    writer.write_all(&v.to_le_bytes())?;
    Ok(())
}

pub fn write_i64<W: Write>(writer: &mut W, v: i64) -> Result<()> {
    writer.write_all(&v.to_le_bytes())?;
    Ok(())
}

pub fn write_i8<W: Write>(writer: &mut W, v: i8) -> Result<()> {
    writer.write_all(&v.to_le_bytes())?;
    Ok(())
}
