//! Vocabulary storage, lookup and maintenance.
//!
//! The dictionary is an arena of entries indexed by a fixed-capacity
//! open-addressing slot table. An entry's position in the arena is its
//! id; threshold and prune passes renumber ids by rebuilding the arena
//! and the slot table, never by incremental resizing.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use compact_str::CompactString;
use log::debug;

use crate::config::DictConfig;
use crate::entry::{Entry, EntryKind, RowId};
use crate::error::{DictError, Result};
use crate::hash::fnv1a;
use crate::subword::{bracket, for_each_bucket};
use crate::EOS;

/// Sentinel marking an unoccupied slot.
const SLOT_FREE: u32 = u32::MAX;

/// Vocabulary over words and labels with hashed subword support.
pub struct Dictionary {
    config: Arc<DictConfig>,
    /// Open-addressing index: `fnv1a(text) % capacity`, linear probing
    slots: Vec<u32>,
    /// Entry arena; position is id
    entries: Vec<Entry>,
    /// Per-entry retention probability, valid only after finalization
    pdiscard: Vec<f64>,
    nwords: u32,
    nlabels: u32,
    ntokens: u64,
    /// Raw bucket index -> compact bucket index; `Some` once pruned
    pruneidx: Option<AHashMap<u32, u32>>,
}

impl Dictionary {
    /// Create an empty dictionary over the given shared configuration.
    pub fn new(config: Arc<DictConfig>) -> Result<Self> {
        config.validate()?;
        let capacity = config.max_vocab_size;
        Ok(Self {
            config,
            slots: vec![SLOT_FREE; capacity],
            entries: Vec::new(),
            pdiscard: Vec::new(),
            nwords: 0,
            nlabels: 0,
            ntokens: 0,
            pruneidx: None,
        })
    }

    /// Rebuild a dictionary from persisted state, as produced by the
    /// serializer. The slot table, subword lists and discard table are
    /// recomputed; they are not part of the persisted format.
    pub fn from_parts(
        config: Arc<DictConfig>,
        entries: Vec<Entry>,
        ntokens: u64,
        prune_pairs: Option<Vec<(u32, u32)>>,
    ) -> Result<Self> {
        config.validate()?;

        let mut nwords = 0u32;
        let mut nlabels = 0u32;
        for e in &entries {
            match e.kind {
                EntryKind::Word => {
                    if nlabels > 0 {
                        return Err(DictError::Format(
                            "word entry after label region".into(),
                        ));
                    }
                    nwords += 1;
                }
                EntryKind::Label => nlabels += 1,
            }
        }

        // Keep enough headroom for short probe chains even when the
        // configured capacity is smaller than the persisted vocabulary.
        let capacity = config
            .max_vocab_size
            .max((entries.len() as f64 / 0.7).ceil() as usize + 1);

        let mut dict = Self {
            config,
            slots: vec![SLOT_FREE; capacity],
            entries,
            pdiscard: Vec::new(),
            nwords,
            nlabels,
            ntokens,
            pruneidx: prune_pairs.map(|pairs| pairs.into_iter().collect()),
        };
        dict.rebuild_slots()?;
        dict.finalize();
        Ok(dict)
    }

    /// Shared configuration handle.
    pub fn config(&self) -> &Arc<DictConfig> {
        &self.config
    }

    /// Total number of entries (words and labels).
    pub fn size(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Number of word entries.
    pub fn nwords(&self) -> u32 {
        self.nwords
    }

    /// Number of label entries.
    pub fn nlabels(&self) -> u32 {
        self.nlabels
    }

    /// Total tokens consumed via [`Dictionary::add`].
    pub fn ntokens(&self) -> u64 {
        self.ntokens
    }

    /// Whether the one-time prune transition has happened.
    pub fn is_pruned(&self) -> bool {
        self.pruneidx.is_some()
    }

    /// Entry arena in id order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Prune remap pairs (raw bucket index, compact bucket index) in
    /// deterministic order, if pruned.
    pub fn prune_pairs(&self) -> Option<Vec<(u32, u32)>> {
        self.pruneidx.as_ref().map(|map| {
            let mut pairs: Vec<(u32, u32)> = map.iter().map(|(&k, &v)| (k, v)).collect();
            pairs.sort_unstable();
            pairs
        })
    }

    /// Linear-probe for `text`. Returns the slot holding it, or the
    /// first free slot where it would be inserted.
    fn probe(slots: &[u32], entries: &[Entry], text: &str) -> usize {
        let capacity = slots.len();
        let mut h = fnv1a(text) as usize % capacity;
        loop {
            let idx = slots[h];
            if idx == SLOT_FREE || entries[idx as usize].text == text {
                return h;
            }
            h = (h + 1) % capacity;
        }
    }

    /// Record one occurrence of `text`, inserting a new entry on first
    /// sight. The kind is decided by the configured label prefix.
    pub fn add(&mut self, text: &str) {
        self.ntokens += 1;
        let slot = Self::probe(&self.slots, &self.entries, text);
        match self.slots[slot] {
            SLOT_FREE => {
                let kind = self.kind_of_token(text);
                self.slots[slot] = self.entries.len() as u32;
                self.entries.push(Entry::new(CompactString::new(text), kind));
                match kind {
                    EntryKind::Word => self.nwords += 1,
                    EntryKind::Label => self.nlabels += 1,
                }
            }
            idx => self.entries[idx as usize].count += 1,
        }
    }

    /// Kind a token would be assigned, independent of vocabulary state.
    pub fn kind_of_token(&self, text: &str) -> EntryKind {
        if text.starts_with(self.config.label_prefix.as_str()) {
            EntryKind::Label
        } else {
            EntryKind::Word
        }
    }

    /// Resolve a token to its entry id, if present.
    pub fn get_id(&self, text: &str) -> Option<u32> {
        let slot = Self::probe(&self.slots, &self.entries, text);
        match self.slots[slot] {
            SLOT_FREE => None,
            idx => Some(idx),
        }
    }

    /// Kind of the entry with the given id.
    ///
    /// Ids must come from this dictionary's own lookups; an out-of-range
    /// id is a contract violation and panics.
    pub fn kind(&self, id: u32) -> EntryKind {
        self.entries[id as usize].kind
    }

    /// Text of the entry with the given id.
    pub fn word(&self, id: u32) -> &str {
        &self.entries[id as usize].text
    }

    /// Text of the label with the given label-local id (0-based within
    /// the label region).
    pub fn label(&self, label_id: u32) -> Option<&str> {
        self.entries
            .get((self.nwords + label_id) as usize)
            .filter(|e| e.kind == EntryKind::Label)
            .map(|e| e.text.as_str())
    }

    /// Occurrence counts for all entries of `kind`, in id order.
    pub fn counts(&self, kind: EntryKind) -> Vec<u64> {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.count)
            .collect()
    }

    /// Fraction of occupied slots in the table.
    pub fn load_factor(&self) -> f64 {
        self.entries.len() as f64 / self.slots.len() as f64
    }

    /// Drop words with fewer than `min_count` occurrences and labels
    /// with fewer than `min_count_label`, re-sort by kind then
    /// descending count, and renumber all surviving ids.
    ///
    /// Re-running with an unchanged or looser threshold is a no-op
    /// apart from the rebuild itself.
    pub fn threshold(&mut self, min_count: u64, min_count_label: u64) -> Result<()> {
        let before = self.entries.len();
        let mut entries = std::mem::take(&mut self.entries);
        // Stable sort keeps insertion order among equal counts, so ids
        // stay reproducible across runs over the same corpus.
        entries.sort_by(|a, b| {
            a.kind
                .tag()
                .cmp(&b.kind.tag())
                .then_with(|| b.count.cmp(&a.count))
        });
        entries.retain(|e| match e.kind {
            EntryKind::Word => e.count >= min_count,
            EntryKind::Label => e.count >= min_count_label,
        });
        self.entries = entries;

        self.nwords = 0;
        self.nlabels = 0;
        for e in &self.entries {
            match e.kind {
                EntryKind::Word => self.nwords += 1,
                EntryKind::Label => self.nlabels += 1,
            }
        }
        // Renumbering invalidates derived tables until finalization.
        self.pdiscard.clear();
        for e in &mut self.entries {
            e.subwords.clear();
        }
        self.rebuild_slots()?;
        debug!(
            "threshold pass: {} -> {} entries ({} words, {} labels)",
            before,
            self.entries.len(),
            self.nwords,
            self.nlabels
        );
        Ok(())
    }

    fn rebuild_slots(&mut self) -> Result<()> {
        self.slots.fill(SLOT_FREE);
        for i in 0..self.entries.len() {
            let slot = Self::probe(&self.slots, &self.entries, &self.entries[i].text);
            if self.slots[slot] != SLOT_FREE {
                return Err(DictError::Format(format!(
                    "duplicate entry text {:?}",
                    self.entries[i].text
                )));
            }
            self.slots[slot] = i as u32;
        }
        Ok(())
    }

    /// Compute the discard table and per-word subword lists. Must run
    /// after the final threshold pass and before any query traffic.
    pub fn finalize(&mut self) {
        self.init_table_discard();
        self.init_ngrams();
    }

    fn init_table_discard(&mut self) {
        let t = self.config.sample_threshold;
        let ntokens = self.ntokens.max(1) as f64;
        self.pdiscard = self
            .entries
            .iter()
            .map(|e| {
                let f = e.count as f64 / ntokens;
                ((t / f).sqrt() + t / f).min(1.0)
            })
            .collect();
    }

    fn init_ngrams(&mut self) {
        for i in 0..self.entries.len() {
            if self.entries[i].kind != EntryKind::Word {
                self.entries[i].subwords.clear();
                continue;
            }
            // The word's own id leads the list so embedding lookups can
            // fall back to the whole-word vector.
            let mut subwords = vec![i as u32];
            if self.entries[i].text != EOS {
                let bracketed = bracket(&self.entries[i].text);
                self.compute_subwords(&bracketed, &mut subwords);
            }
            self.entries[i].subwords = subwords;
        }
    }

    /// Append the bucket rows of every n-gram of the (bracketed) word,
    /// dropping exact duplicates and pruned-away fragments.
    fn compute_subwords(&self, bracketed: &str, out: &mut Vec<u32>) {
        let c = &self.config;
        for_each_bucket(bracketed, c.minn, c.maxn, c.bucket, |b| {
            if let Some(row) = self.bucket_row(b) {
                if !out.contains(&row) {
                    out.push(row);
                }
            }
        });
    }

    /// Combined-space row for a raw bucket index, honoring the prune
    /// remap. `None` means the fragment was pruned away and contributes
    /// nothing.
    fn bucket_row(&self, raw: u32) -> Option<u32> {
        let compact = match &self.pruneidx {
            None => raw,
            Some(map) => *map.get(&raw)?,
        };
        Some(RowId::Bucket(compact).combined(self.nwords))
    }

    /// Combined-space row for an arbitrary 64-bit hash, folded into the
    /// bucket space. Used for hashed word n-grams.
    pub fn hashed_row(&self, h: u64) -> Option<u32> {
        self.bucket_row((h % u64::from(self.config.bucket)) as u32)
    }

    /// Subword rows of an in-vocabulary word id, own id first.
    ///
    /// Valid only after finalization; out-of-range ids panic.
    pub fn subwords(&self, id: u32) -> &[u32] {
        &self.entries[id as usize].subwords
    }

    /// Subword rows for an arbitrary string. In-vocabulary words lead
    /// with their own id; out-of-vocabulary strings yield bucket rows
    /// only.
    pub fn subwords_of(&self, word: &str) -> Vec<u32> {
        let mut rows = Vec::new();
        if let Some(id) = self.get_id(word) {
            if self.kind(id) == EntryKind::Word {
                rows.push(id);
            }
        }
        if word != EOS {
            let bracketed = bracket(word);
            self.compute_subwords(&bracketed, &mut rows);
        }
        rows
    }

    /// Whether an occurrence of word `id` should be skipped, given a
    /// uniform sample in `[0, 1)`. Labels are never discarded.
    pub fn discard(&self, id: u32, uniform: f64) -> bool {
        if id >= self.nwords {
            return false;
        }
        uniform > self.pdiscard[id as usize]
    }

    /// Remove the given word ids, renumber everything, and switch the
    /// vocabulary permanently into pruned mode.
    ///
    /// Returns the full old-to-new remap over the combined id space:
    /// kept words first, then every n-gram bucket still referenced by a
    /// surviving word, compacted in first-seen order. Bucket rows absent
    /// from the remap were only reachable through removed words and now
    /// contribute nothing. The embedding-matrix consumer uses the remap
    /// to compact its rows.
    pub fn prune(&mut self, ids_to_remove: &[u32]) -> Result<Vec<(u32, u32)>> {
        if self.is_pruned() {
            return Err(DictError::Prune("vocabulary is already pruned".into()));
        }
        let old_nwords = self.nwords;
        let mut remove = AHashSet::with_capacity(ids_to_remove.len());
        for &id in ids_to_remove {
            if id >= old_nwords {
                return Err(DictError::Prune(format!(
                    "id {id} is not a word id (nwords = {old_nwords})"
                )));
            }
            remove.insert(id);
        }

        // New word ids, in surviving order.
        let mut remap = Vec::new();
        let mut new_id = 0u32;
        for old_id in 0..old_nwords {
            if !remove.contains(&old_id) {
                remap.push((old_id, new_id));
                new_id += 1;
            }
        }
        let new_nwords = new_id;

        // Compact the bucket space over fragments surviving words still
        // reference, in first-seen order.
        let mut compact: AHashMap<u32, u32> = AHashMap::new();
        for old_id in 0..old_nwords {
            if remove.contains(&old_id) {
                continue;
            }
            // Position 0 holds the word's own id; the rest are buckets.
            for &row in self.entries[old_id as usize].subwords.iter().skip(1) {
                let raw = match RowId::from_combined(row, old_nwords) {
                    RowId::Bucket(b) => b,
                    // Subword lists hold the own id only at position 0.
                    RowId::Word(_) => continue,
                };
                let next = compact.len() as u32;
                let slot = *compact.entry(raw).or_insert(next);
                if slot == next {
                    remap.push((
                        RowId::Bucket(raw).combined(old_nwords),
                        RowId::Bucket(slot).combined(new_nwords),
                    ));
                }
            }
        }

        let mut kept = Vec::with_capacity(self.entries.len() - remove.len());
        for (i, e) in std::mem::take(&mut self.entries).into_iter().enumerate() {
            let i = i as u32;
            if i >= old_nwords || !remove.contains(&i) {
                kept.push(e);
            }
        }
        self.entries = kept;
        self.nwords = new_nwords;
        self.nlabels = self.entries.len() as u32 - new_nwords;
        self.pruneidx = Some(compact);
        self.rebuild_slots()?;
        // Subword lists and the discard table are regenerated through
        // the remap.
        self.finalize();
        debug!(
            "pruned {} words, kept {} words and {} bucket rows",
            remove.len(),
            new_nwords,
            self.pruneidx.as_ref().map_or(0, |m| m.len())
        );
        Ok(remap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DictConfig;

    fn test_config() -> Arc<DictConfig> {
        Arc::new(DictConfig {
            min_count: 1,
            min_count_label: 0,
            minn: 3,
            maxn: 6,
            bucket: 100,
            max_vocab_size: 1_000,
            ..Default::default()
        })
    }

    fn dict_with(tokens: &[&str]) -> Dictionary {
        let mut dict = Dictionary::new(test_config()).unwrap();
        for t in tokens {
            dict.add(t);
        }
        dict
    }

    #[test]
    fn test_add_assigns_distinct_stable_ids() {
        let dict = dict_with(&["the", "cat", "sat"]);
        let ids = [
            dict.get_id("the").unwrap(),
            dict.get_id("cat").unwrap(),
            dict.get_id("sat").unwrap(),
        ];
        assert_eq!(ids, [0, 1, 2]);
        assert_eq!(dict.get_id("the"), Some(0));
        assert_eq!(dict.word(1), "cat");
        assert_eq!(dict.get_id("dog"), None);
    }

    #[test]
    fn test_repeated_add_increments_count_only() {
        let dict = dict_with(&["the", "the", "the"]);
        assert_eq!(dict.size(), 1);
        assert_eq!(dict.entries()[0].count, 3);
        assert_eq!(dict.ntokens(), 3);
    }

    #[test]
    fn test_collisions_resolved_with_tiny_table() {
        let config = Arc::new(DictConfig {
            max_vocab_size: 8,
            ..(*test_config()).clone()
        });
        let mut dict = Dictionary::new(config).unwrap();
        let words = ["a", "b", "c", "d", "e"];
        for w in words {
            dict.add(w);
        }
        for (i, w) in words.iter().enumerate() {
            assert_eq!(dict.get_id(w), Some(i as u32), "lost {w} to a collision");
        }
    }

    #[test]
    fn test_label_prefix_detection() {
        let dict = dict_with(&["hello", "__label__pos"]);
        assert_eq!(dict.kind(dict.get_id("hello").unwrap()), EntryKind::Word);
        assert_eq!(
            dict.kind(dict.get_id("__label__pos").unwrap()),
            EntryKind::Label
        );
        assert_eq!(dict.nwords(), 1);
        assert_eq!(dict.nlabels(), 1);
    }

    #[test]
    fn test_threshold_drops_rare_words() {
        // "the" x6, "cat" x1, per the reference scenario.
        let mut dict = dict_with(&["the", "the", "the", "the", "the", "cat", "the"]);
        dict.threshold(2, 1).unwrap();
        assert_eq!(dict.nwords(), 1);
        assert_eq!(dict.get_id("cat"), None);
        assert_eq!(dict.get_id("the"), Some(0));
        assert_eq!(dict.entries()[0].count, 6);
    }

    #[test]
    fn test_threshold_sorts_words_before_labels_by_count() {
        let mut dict = dict_with(&[
            "rare",
            "common",
            "common",
            "common",
            "__label__x",
            "__label__x",
            "mid",
            "mid",
        ]);
        dict.threshold(1, 1).unwrap();
        assert_eq!(dict.word(0), "common");
        assert_eq!(dict.word(1), "mid");
        assert_eq!(dict.word(2), "rare");
        assert_eq!(dict.word(3), "__label__x");
        assert_eq!(dict.label(0), Some("__label__x"));
    }

    #[test]
    fn test_threshold_rerun_is_noop() {
        let mut dict = dict_with(&["b", "b", "a", "a", "a", "c"]);
        dict.threshold(2, 1).unwrap();
        let order: Vec<String> = dict.entries().iter().map(|e| e.text.to_string()).collect();
        dict.threshold(2, 1).unwrap();
        let order2: Vec<String> = dict.entries().iter().map(|e| e.text.to_string()).collect();
        assert_eq!(order, order2);
        dict.threshold(1, 1).unwrap();
        let order3: Vec<String> = dict.entries().iter().map(|e| e.text.to_string()).collect();
        assert_eq!(order, order3);
    }

    #[test]
    fn test_empty_vocabulary_is_valid() {
        let mut dict = dict_with(&["a", "b"]);
        dict.threshold(100, 100).unwrap();
        assert_eq!(dict.nwords(), 0);
        assert_eq!(dict.size(), 0);
    }

    #[test]
    fn test_subwords_lead_with_own_id() {
        let mut dict = dict_with(&["cat", "dog"]);
        dict.threshold(1, 0).unwrap();
        dict.finalize();
        for id in 0..dict.nwords() {
            let subwords = dict.subwords(id);
            assert!(!subwords.is_empty());
            assert_eq!(subwords[0], id);
            for &row in &subwords[1..] {
                assert!(row >= dict.nwords());
                assert!(row < dict.nwords() + 100);
            }
        }
    }

    #[test]
    fn test_subwords_deduplicated() {
        // With one bucket every n-gram collides; the list must still
        // hold each row once.
        let config = Arc::new(DictConfig {
            bucket: 1,
            ..(*test_config()).clone()
        });
        let mut dict = Dictionary::new(config).unwrap();
        dict.add("banana");
        dict.finalize();
        let subwords = dict.subwords(0);
        assert_eq!(subwords, &[0, 1]);
    }

    #[test]
    fn test_short_word_keeps_own_id() {
        // "<a>" has no n-gram of length >= 4.
        let config = Arc::new(DictConfig {
            minn: 4,
            maxn: 6,
            ..(*test_config()).clone()
        });
        let mut dict = Dictionary::new(config).unwrap();
        dict.add("a");
        dict.finalize();
        assert_eq!(dict.subwords(0), &[0]);
    }

    #[test]
    fn test_eos_gets_no_ngrams() {
        let mut dict = dict_with(&[EOS, "cat"]);
        dict.finalize();
        let eos_id = dict.get_id(EOS).unwrap();
        assert_eq!(dict.subwords(eos_id), &[eos_id]);
    }

    #[test]
    fn test_oov_subwords_have_no_word_id() {
        let mut dict = dict_with(&["cat"]);
        dict.finalize();
        let rows = dict.subwords_of("dog");
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|&r| r >= dict.nwords()));

        let known = dict.subwords_of("cat");
        assert_eq!(known[0], dict.get_id("cat").unwrap());
    }

    #[test]
    fn test_discard_probability_boundaries() {
        let mut dict = Dictionary::new(test_config()).unwrap();
        // 10_000 tokens total; "rare" at exactly the threshold
        // frequency, "common" far above it.
        for _ in 0..9_999 {
            dict.add("common");
        }
        dict.add("rare");
        dict.threshold(1, 0).unwrap();
        dict.finalize();

        let rare = dict.get_id("rare").unwrap();
        let common = dict.get_id("common").unwrap();
        // f("rare") = 1e-4 = t, so retention is clamped to 1.
        assert!(!dict.discard(rare, 0.999_999));
        // f("common") ~ 1, retention ~ sqrt(1e-4) + 1e-4 ~ 0.0101.
        assert!(dict.discard(common, 0.5));
        assert!(!dict.discard(common, 0.001));
    }

    #[test]
    fn test_discard_never_drops_labels() {
        let mut dict = dict_with(&["w", "w", "__label__x"]);
        dict.threshold(1, 1).unwrap();
        dict.finalize();
        let label = dict.get_id("__label__x").unwrap();
        assert!(!dict.discard(label, 0.999_999));
    }

    #[test]
    fn test_prune_remaps_survivors() {
        let mut dict = dict_with(&["alpha", "beta", "gamma", "__label__x"]);
        dict.threshold(1, 1).unwrap();
        dict.finalize();
        let beta = dict.get_id("beta").unwrap();
        let old_nwords = dict.nwords();

        let remap = dict.prune(&[beta]).unwrap();
        assert!(dict.is_pruned());
        assert_eq!(dict.nwords(), 2);
        assert_eq!(dict.get_id("beta"), None);
        assert_eq!(dict.nlabels(), 1);
        assert_eq!(dict.label(0), Some("__label__x"));

        // Every surviving word resolves through the remap to its new id;
        // renumbered buckets stay in the bucket region.
        for (old, new) in &remap {
            if *old < old_nwords {
                assert!(*new < dict.nwords());
                assert_eq!(dict.get_id(dict.word(*new)), Some(*new));
            } else {
                assert!(*new >= dict.nwords());
            }
        }

        // Subword lists only reference surviving rows.
        for id in 0..dict.nwords() {
            let subwords = dict.subwords(id);
            assert_eq!(subwords[0], id);
            let nbuckets = dict.prune_pairs().unwrap().len() as u32;
            for &row in &subwords[1..] {
                assert!(row >= dict.nwords());
                assert!(row < dict.nwords() + nbuckets);
            }
        }
    }

    #[test]
    fn test_prune_is_one_time() {
        let mut dict = dict_with(&["a", "b"]);
        dict.finalize();
        dict.prune(&[0]).unwrap();
        assert!(dict.prune(&[0]).is_err());
    }

    #[test]
    fn test_prune_rejects_label_ids() {
        let mut dict = dict_with(&["w", "__label__x"]);
        dict.threshold(1, 1).unwrap();
        dict.finalize();
        let label_entry = dict.nwords();
        assert!(dict.prune(&[label_entry]).is_err());
    }

    #[test]
    fn test_oov_lookup_after_prune_skips_dead_buckets() {
        let mut dict = dict_with(&["alpha", "beta"]);
        dict.finalize();
        let beta = dict.get_id("beta").unwrap();
        dict.prune(&[beta]).unwrap();

        // Fragments of "beta" were only reachable through the removed
        // word, so an OOV query built from them contributes nothing
        // beyond buckets shared with "alpha".
        let nbuckets = dict.prune_pairs().unwrap().len() as u32;
        for row in dict.subwords_of("betal") {
            assert!(row >= dict.nwords() && row < dict.nwords() + nbuckets);
        }
    }

    #[test]
    fn test_counts_in_id_order() {
        let mut dict = dict_with(&["b", "a", "a", "__label__x"]);
        dict.threshold(1, 1).unwrap();
        assert_eq!(dict.counts(EntryKind::Word), vec![2, 1]);
        assert_eq!(dict.counts(EntryKind::Label), vec![1]);
    }

    #[test]
    fn test_from_parts_rejects_interleaved_kinds() {
        let entries = vec![
            Entry::new(CompactString::new("__label__x"), EntryKind::Label),
            Entry::new(CompactString::new("w"), EntryKind::Word),
        ];
        assert!(Dictionary::from_parts(test_config(), entries, 2, None).is_err());
    }

    #[test]
    fn test_from_parts_rejects_duplicate_text() {
        let entries = vec![
            Entry::new(CompactString::new("w"), EntryKind::Word),
            Entry::new(CompactString::new("w"), EntryKind::Word),
        ];
        assert!(Dictionary::from_parts(test_config(), entries, 2, None).is_err());
    }
}
