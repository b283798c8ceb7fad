//! Character n-gram extraction.
//!
//! Words are bracketed with boundary markers (`<word>`) and every
//! contiguous character substring with a length inside the configured
//! bounds is hashed into a fixed bucket space. Extraction respects UTF-8
//! character boundaries; a fragment never splits a multi-byte sequence.

use crate::hash::fnv1a;
use crate::{BOW, EOW};

/// Bracket a word with the boundary markers.
#[inline]
pub fn bracket(word: &str) -> String {
    let mut out = String::with_capacity(word.len() + BOW.len() + EOW.len());
    out.push_str(BOW);
    out.push_str(word);
    out.push_str(EOW);
    out
}

/// Visit every n-gram of the (already bracketed) `word` with a character
/// length in `minn..=maxn`.
///
/// Length-1 fragments consisting solely of a boundary marker are
/// suppressed; they carry no information beyond the marker itself.
pub fn for_each_ngram<F: FnMut(&str)>(word: &str, minn: usize, maxn: usize, mut visit: F) {
    // Byte offsets of character boundaries, including the end.
    let mut bounds: Vec<usize> = word.char_indices().map(|(i, _)| i).collect();
    bounds.push(word.len());
    let nchars = bounds.len() - 1;

    for i in 0..nchars {
        let upper = maxn.min(nchars - i);
        for n in minn.max(1)..=upper {
            if n == 1 && (i == 0 || i + n == nchars) {
                continue;
            }
            visit(&word[bounds[i]..bounds[i + n]]);
        }
    }
}

/// Visit the raw bucket index of every n-gram of the bracketed `word`.
pub fn for_each_bucket<F: FnMut(u32)>(word: &str, minn: usize, maxn: usize, bucket: u32, mut visit: F) {
    for_each_ngram(word, minn, maxn, |ngram| {
        visit(fnv1a(ngram) % bucket);
    });
}
