//! Whitespace token reading and line-to-ids conversion.
//!
//! Tokens are delimited by ASCII whitespace; every newline produces the
//! `</s>` sentinel so sentence boundaries survive tokenization. A
//! newline that terminates a token is held back and surfaces as the
//! next token.

use std::io::BufRead;

use rand::Rng;

use subgram_core::entry::EntryKind;
use subgram_core::hash::{combine, fnv1a};
use subgram_core::{Dictionary, Result, EOS};

/// Delimiters matching the original whitespace set, NUL included.
#[inline]
fn is_delimiter(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\r' | b'\t' | 0x0b | 0x0c | 0x00)
}

/// Streaming token reader over any buffered byte source.
///
/// Invalid UTF-8 is replaced lossily; the vocabulary stores text, not
/// raw bytes.
pub struct TokenReader<R: BufRead> {
    inner: R,
    /// A newline was consumed while ending a token; emit `</s>` next.
    hold_eol: bool,
    scratch: Vec<u8>,
}

/// Outcome of scanning one buffered chunk.
enum Scan {
    Eof,
    NeedMore,
    BareEol,
    TokenDone,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            hold_eol: false,
            scratch: Vec::new(),
        }
    }

    /// Read the next token into `token`. Returns `false` at end of
    /// stream.
    pub fn next_token(&mut self, token: &mut String) -> Result<bool> {
        token.clear();
        if self.hold_eol {
            self.hold_eol = false;
            token.push_str(EOS);
            return Ok(true);
        }
        self.scratch.clear();
        loop {
            let (consumed, scan) = {
                let buf = self.inner.fill_buf()?;
                if buf.is_empty() {
                    (0, Scan::Eof)
                } else {
                    let mut consumed = 0;
                    let mut scan = Scan::NeedMore;
                    for &b in buf {
                        consumed += 1;
                        if is_delimiter(b) {
                            if self.scratch.is_empty() {
                                if b == b'\n' {
                                    scan = Scan::BareEol;
                                    break;
                                }
                                continue;
                            }
                            if b == b'\n' {
                                self.hold_eol = true;
                            }
                            scan = Scan::TokenDone;
                            break;
                        }
                        self.scratch.push(b);
                    }
                    (consumed, scan)
                }
            };
            self.inner.consume(consumed);
            match scan {
                Scan::Eof => {
                    if self.scratch.is_empty() {
                        return Ok(false);
                    }
                    break;
                }
                Scan::BareEol => {
                    token.push_str(EOS);
                    return Ok(true);
                }
                Scan::TokenDone => break,
                Scan::NeedMore => {}
            }
        }
        token.push_str(&String::from_utf8_lossy(&self.scratch));
        Ok(true)
    }

    /// Convert one line into word and label ids.
    ///
    /// Unknown word tokens are skipped, never inserted. Label tokens
    /// append their label-local id. When the configured word-ngram
    /// order is above 1, hashed rows for consecutive-token n-grams are
    /// appended after the unigrams. Returns the number of word tokens
    /// consumed (excluding unknown tokens and n-gram rows).
    pub fn next_line(
        &mut self,
        dict: &Dictionary,
        words: &mut Vec<u32>,
        labels: &mut Vec<u32>,
    ) -> Result<usize> {
        words.clear();
        labels.clear();
        let max_line = dict.config().max_line_size;
        let mut token = String::new();
        let mut hashes: Vec<u32> = Vec::new();
        let mut ntokens = 0usize;

        while self.next_token(&mut token)? {
            let id = dict.get_id(&token);
            let kind = match id {
                Some(i) => dict.kind(i),
                None => dict.kind_of_token(&token),
            };
            ntokens += 1;
            match kind {
                EntryKind::Word => {
                    // The hash participates in word n-grams even when
                    // the unigram itself is out of vocabulary.
                    hashes.push(fnv1a(&token));
                    if let Some(i) = id {
                        words.push(i);
                    }
                }
                EntryKind::Label => {
                    if let Some(i) = id {
                        labels.push(i - dict.nwords());
                    }
                }
            }
            if token == EOS || ntokens >= max_line {
                break;
            }
        }
        let consumed = words.len();
        add_word_ngrams(dict, words, &hashes);
        Ok(consumed)
    }

    /// Convert one line into word ids, applying discard sampling with
    /// the caller-owned random source. Labels and unknown tokens are
    /// skipped. Returns the number of ids appended to `words`.
    pub fn next_line_sampled<G: Rng>(
        &mut self,
        dict: &Dictionary,
        words: &mut Vec<u32>,
        rng: &mut G,
    ) -> Result<usize> {
        words.clear();
        let max_line = dict.config().max_line_size;
        let mut token = String::new();
        let mut ntokens = 0usize;

        while self.next_token(&mut token)? {
            let Some(id) = dict.get_id(&token) else {
                continue;
            };
            ntokens += 1;
            if dict.kind(id) == EntryKind::Word && !dict.discard(id, rng.gen::<f64>()) {
                words.push(id);
            }
            if token == EOS || ntokens >= max_line {
                break;
            }
        }
        Ok(words.len())
    }
}

/// Append hashed rows for consecutive-token n-grams up to the
/// configured order.
fn add_word_ngrams(dict: &Dictionary, words: &mut Vec<u32>, hashes: &[u32]) {
    let order = dict.config().word_ngrams;
    if order <= 1 {
        return;
    }
    for i in 0..hashes.len() {
        let mut h = u64::from(hashes[i]);
        for j in (i + 1)..hashes.len().min(i + order) {
            h = combine(h, hashes[j]);
            if let Some(row) = dict.hashed_row(h) {
                words.push(row);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;
    use std::sync::Arc;
    use subgram_core::DictConfig;

    fn test_config() -> Arc<DictConfig> {
        Arc::new(DictConfig {
            min_count: 1,
            max_vocab_size: 1_000,
            bucket: 100,
            ..Default::default()
        })
    }

    fn read_all(input: &str) -> Vec<String> {
        let mut reader = TokenReader::new(Cursor::new(input.as_bytes().to_vec()));
        let mut token = String::new();
        let mut out = Vec::new();
        while reader.next_token(&mut token).unwrap() {
            out.push(token.clone());
        }
        out
    }

    fn finalized_dict(corpus: &str) -> Dictionary {
        let mut dict = Dictionary::new(test_config()).unwrap();
        let mut reader = TokenReader::new(Cursor::new(corpus.as_bytes().to_vec()));
        let mut token = String::new();
        while reader.next_token(&mut token).unwrap() {
            dict.add(&token);
        }
        dict.threshold(1, 0).unwrap();
        dict.finalize();
        dict
    }

    #[test]
    fn test_tokenization_with_eos() {
        assert_eq!(read_all("the cat\n"), vec!["the", "cat", EOS]);
    }

    #[test]
    fn test_blank_lines_emit_eos() {
        assert_eq!(read_all("a\n\nb"), vec!["a", EOS, EOS, "b"]);
    }

    #[test]
    fn test_mixed_whitespace() {
        assert_eq!(read_all("a\tb\r c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_no_trailing_newline() {
        assert_eq!(read_all("a b"), vec!["a", "b"]);
    }

    #[test]
    fn test_next_line_separates_words_and_labels() {
        let dict = finalized_dict("good movie __label__pos\nbad plot __label__neg\n");
        let mut reader =
            TokenReader::new(Cursor::new(b"good movie __label__pos\n".to_vec()));
        let mut words = Vec::new();
        let mut labels = Vec::new();
        let n = reader.next_line(&dict, &mut words, &mut labels).unwrap();

        // good, movie, </s>
        assert_eq!(n, 3);
        assert_eq!(words.len(), 3);
        assert_eq!(words[0], dict.get_id("good").unwrap());
        assert_eq!(words[1], dict.get_id("movie").unwrap());
        assert_eq!(labels.len(), 1);
        let pos = dict.get_id("__label__pos").unwrap();
        assert_eq!(labels[0], pos - dict.nwords());
    }

    #[test]
    fn test_next_line_skips_unknown_words() {
        let dict = finalized_dict("known\n");
        let mut reader = TokenReader::new(Cursor::new(b"known unknown known\n".to_vec()));
        let mut words = Vec::new();
        let mut labels = Vec::new();
        let n = reader.next_line(&dict, &mut words, &mut labels).unwrap();
        // known, known, </s>; "unknown" is never inserted by lookup.
        assert_eq!(n, 3);
        assert_eq!(dict.get_id("unknown"), None);
    }

    #[test]
    fn test_next_line_stops_at_eos() {
        let dict = finalized_dict("a b\n");
        let mut reader = TokenReader::new(Cursor::new(b"a\nb\n".to_vec()));
        let mut words = Vec::new();
        let mut labels = Vec::new();
        reader.next_line(&dict, &mut words, &mut labels).unwrap();
        assert_eq!(words.len(), 2); // a, </s>
        reader.next_line(&dict, &mut words, &mut labels).unwrap();
        assert_eq!(words[0], dict.get_id("b").unwrap());
    }

    #[test]
    fn test_word_ngrams_appended() {
        let config = Arc::new(DictConfig {
            word_ngrams: 2,
            ..(*test_config()).clone()
        });
        let mut dict = Dictionary::new(config).unwrap();
        for t in ["the", "cat", EOS] {
            dict.add(t);
        }
        dict.threshold(1, 0).unwrap();
        dict.finalize();

        let mut reader = TokenReader::new(Cursor::new(b"the cat\n".to_vec()));
        let mut words = Vec::new();
        let mut labels = Vec::new();
        let n = reader.next_line(&dict, &mut words, &mut labels).unwrap();
        // the, cat, </s> plus two bigram rows (the+cat, cat+</s>); the
        // return value counts only the word tokens.
        assert_eq!(n, 3);
        assert_eq!(words.len(), 5);
        assert!(words[3] >= dict.nwords());
        assert!(words[4] >= dict.nwords());
    }

    #[test]
    fn test_sampled_line_is_reproducible() {
        let dict = finalized_dict(&"the the the the cat\n".repeat(200));
        let mut words_a = Vec::new();
        let mut words_b = Vec::new();

        let mut reader = TokenReader::new(Cursor::new(b"the cat the the\n".to_vec()));
        let mut rng = StdRng::seed_from_u64(42);
        reader
            .next_line_sampled(&dict, &mut words_a, &mut rng)
            .unwrap();

        let mut reader = TokenReader::new(Cursor::new(b"the cat the the\n".to_vec()));
        let mut rng = StdRng::seed_from_u64(42);
        let n = reader
            .next_line_sampled(&dict, &mut words_b, &mut rng)
            .unwrap();

        assert_eq!(words_a, words_b);
        assert_eq!(n, words_b.len());
    }

    #[test]
    fn test_line_cap_truncates() {
        let config = Arc::new(DictConfig {
            max_line_size: 4,
            ..(*test_config()).clone()
        });
        let mut dict = Dictionary::new(config).unwrap();
        for t in ["w", EOS] {
            dict.add(t);
        }
        dict.threshold(1, 0).unwrap();
        dict.finalize();

        let line = "w ".repeat(50) + "\n";
        let mut reader = TokenReader::new(Cursor::new(line.into_bytes()));
        let mut words = Vec::new();
        let mut labels = Vec::new();
        let n = reader.next_line(&dict, &mut words, &mut labels).unwrap();
        assert_eq!(n, 4);
    }
}
