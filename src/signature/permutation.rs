//! Keyed permutations of the 32-bit n-gram space.
//!
//! Each slot of a signature is driven by one [`Permutation`]. Every step of
//! [`Permutation::apply`] is invertible, so the mapping is a bijection on
//! `u32`: two distinct n-grams never collide inside the same slot.

use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::debug;
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Seed of the built-in permutation family.
pub const DEFAULT_SEED: u64 = 0x6361_7461_6c6f_6731;

/// Number of slots in the shared default table.
pub const MAX_PERMUTATIONS: usize = 64;

/// Salt separating the add-key derivation from the xor/mul derivation.
const ADD_KEY_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

static DEFAULT_TABLE: Lazy<Arc<PermutationTable>> = Lazy::new(|| {
    debug!(
        "Building default permutation table ({} slots)",
        MAX_PERMUTATIONS
    );
    Arc::new(PermutationTable::with_seed(MAX_PERMUTATIONS, DEFAULT_SEED))
});

/// A single keyed bijection over `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permutation {
    xor_key: u32,
    /// Always odd, so multiplication mod 2^32 stays invertible
    mul_key: u32,
    add_key: u32,
}

impl Permutation {
    /// Derive the permutation for `slot` from `seed`.
    ///
    /// Each 32-bit key is one half of a 64-bit xxh3 digest.
    #[allow(clippy::cast_possible_truncation)]
    pub fn derive(slot: usize, seed: u64) -> Self {
        let slot_bytes = (slot as u64).to_le_bytes();
        let primary = xxh3_64_with_seed(&slot_bytes, seed);
        let secondary = xxh3_64_with_seed(&slot_bytes, seed ^ ADD_KEY_SALT);

        Self {
            xor_key: primary as u32,
            mul_key: ((primary >> 32) as u32) | 1,
            add_key: secondary as u32,
        }
    }

    /// Map an n-gram to its position under this permutation.
    #[inline]
    pub fn apply(&self, gram: u32) -> u32 {
        let mut h = gram ^ self.xor_key;
        h = h.wrapping_mul(self.mul_key);
        h ^= h >> 16;
        h = h.wrapping_mul(0x85eb_ca6b);
        h ^= h >> 13;
        h = h.wrapping_mul(0xc2b2_ae35);
        h ^= h >> 16;
        h.wrapping_add(self.add_key)
    }
}

/// Ordered, immutable family of permutations.
///
/// Slot `i` depends only on `i` and the seed, so a shorter table is always a
/// prefix of a longer one built from the same seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    seed: u64,
    permutations: Vec<Permutation>,
}

impl PermutationTable {
    /// Build `count` permutations from `seed`.
    pub fn with_seed(count: usize, seed: u64) -> Self {
        let permutations = (0..count)
            .map(|slot| Permutation::derive(slot, seed))
            .collect();

        Self { seed, permutations }
    }

    /// The process-wide table built from [`DEFAULT_SEED`].
    ///
    /// Initialised on first use and never mutated afterwards.
    pub fn default_table() -> Arc<PermutationTable> {
        Arc::clone(&*DEFAULT_TABLE)
    }

    /// Seed the table was derived from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.permutations.len()
    }

    /// Whether the table has no slots
    pub fn is_empty(&self) -> bool {
        self.permutations.is_empty()
    }

    /// Permutation at `slot`, if present
    pub fn get(&self, slot: usize) -> Option<&Permutation> {
        self.permutations.get(slot)
    }

    /// Iterate over the permutations in slot order
    pub fn iter(&self) -> std::slice::Iter<'_, Permutation> {
        self.permutations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_derivation_is_stable() {
        let a = PermutationTable::with_seed(16, 42);
        let b = PermutationTable::with_seed(16, 42);
        assert_eq!(a, b);
        assert_eq!(a.seed(), 42);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn test_shorter_table_is_prefix() {
        let short = PermutationTable::with_seed(8, DEFAULT_SEED);
        let full = PermutationTable::default_table();

        for (slot, perm) in short.iter().enumerate() {
            assert_eq!(Some(perm), full.get(slot));
        }
    }

    #[test]
    fn test_seeds_give_distinct_families() {
        let a = PermutationTable::with_seed(4, 1);
        let b = PermutationTable::with_seed(4, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_multiplier_is_odd() {
        for perm in PermutationTable::with_seed(256, 7).iter() {
            assert_eq!(perm.mul_key & 1, 1);
        }
    }

    #[test]
    fn test_apply_is_injective_on_sample() {
        let perm = Permutation::derive(3, DEFAULT_SEED);
        let mut seen = HashSet::new();
        for gram in (0u32..200_000).map(|x| x.wrapping_mul(2_654_435_761)) {
            assert!(seen.insert(perm.apply(gram)), "collision for {gram:#x}");
        }
    }

    #[test]
    fn test_keys_split_digest_halves() {
        let slot_bytes = 5u64.to_le_bytes();
        let primary = xxh3_64_with_seed(&slot_bytes, 99);
        let secondary = xxh3_64_with_seed(&slot_bytes, 99 ^ ADD_KEY_SALT);

        let perm = Permutation::derive(5, 99);
        assert_eq!(u64::from(perm.xor_key), primary & 0xffff_ffff);
        assert_eq!(u64::from(perm.mul_key | 1), (primary >> 32) | 1);
        assert_eq!(u64::from(perm.add_key), secondary & 0xffff_ffff);
    }

    #[test]
    fn test_default_table_is_shared() {
        let a = PermutationTable::default_table();
        let b = PermutationTable::default_table();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.len(), MAX_PERMUTATIONS);
        assert!(!a.is_empty());
    }
}
