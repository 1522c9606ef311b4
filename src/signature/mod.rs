//! Fuzzy min-hash signatures over byte buffers.
//!
//! A buffer is split into overlapping 4-byte n-grams. Each signature slot
//! keeps the minimum of one keyed permutation applied to every n-gram, so
//! buffers sharing most n-grams share most slots.

pub mod comparison;
pub mod engine;
pub mod permutation;
pub mod strong_hash;
pub mod types;

pub use comparison::{count_matches, rank_similar, similarity_grade, SimilarMatch};
pub use engine::{sign, Signer, NGRAM_SIZE};
pub use permutation::{Permutation, PermutationTable, DEFAULT_SEED, MAX_PERMUTATIONS};
pub use strong_hash::{strong_hash, StrongHash};
pub use types::Signature;
