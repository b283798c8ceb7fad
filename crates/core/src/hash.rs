//! Deterministic string hashing.
//!
//! The vocabulary uses 32-bit FNV-1a for every id that ends up inside a
//! serialized model, so that independently built models agree on which
//! bucket a given n-gram lands in. `ahash` is deliberately *not* used
//! here: its per-process seeding would break cross-run reproducibility.

const FNV_SEED: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// 32-bit FNV-1a over the UTF-8 bytes of `text`.
///
/// Each byte is sign-extended through `i8` before the xor, matching the
/// historical behavior of existing model files for non-ASCII input.
#[inline]
pub fn fnv1a(text: &str) -> u32 {
    let mut h = FNV_SEED;
    for &b in text.as_bytes() {
        h ^= b as i8 as i32 as u32;
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// Combine a running word-ngram hash with the next token hash.
///
/// Used by the label-aware line reader to derive bucket rows for
/// consecutive-token n-grams.
#[inline]
pub fn combine(h: u64, next: u32) -> u64 {
    h.wrapping_mul(116_049_371).wrapping_add(u64::from(next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        // Standard FNV-1a 32-bit test vectors.
        assert_eq!(fnv1a(""), 0x811c9dc5);
        assert_eq!(fnv1a("a"), 0xe40c292c);
        assert_eq!(fnv1a("foobar"), 0xbf9cf968);
    }

    #[test]
    fn test_order_sensitive() {
        assert_ne!(fnv1a("ab"), fnv1a("ba"));
    }

    #[test]
    fn test_deterministic_for_multibyte() {
        let a = fnv1a("café");
        let b = fnv1a("café");
        assert_eq!(a, b);
        assert_ne!(a, fnv1a("cafe"));
    }

    #[test]
    fn test_combine_is_order_sensitive() {
        let h1 = combine(combine(1, fnv1a("a")), fnv1a("b"));
        let h2 = combine(combine(1, fnv1a("b")), fnv1a("a"));
        assert_ne!(h1, h2);
    }
}
