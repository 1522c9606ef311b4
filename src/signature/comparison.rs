//! Position-wise comparison of signatures.
//!
//! Signatures are compared by counting slots that hold the same value. The
//! expected fraction of equal slots approximates the Jaccard similarity of
//! the two buffers' n-gram sets.

use serde::{Deserialize, Serialize};

use crate::signature::types::Signature;

/// One candidate scored against a query signature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarMatch {
    /// Index of the candidate in the input slice
    pub index: usize,
    /// Number of equal slots
    pub matches: usize,
    /// `matches` divided by the signature width
    pub grade: f64,
}

/// Count positions where `a[i] == b[i]` over the common length.
pub fn count_matches(a: &[u32], b: &[u32]) -> usize {
    a.iter().zip(b.iter()).filter(|(x, y)| x == y).count()
}

/// Fraction of equal positions.
///
/// Returns `None` when the widths differ or are zero.
#[allow(clippy::cast_precision_loss)]
pub fn similarity_grade(a: &[u32], b: &[u32]) -> Option<f64> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }

    Some(count_matches(a, b) as f64 / a.len() as f64)
}

/// Rank `candidates` by similarity to `query`, best first.
///
/// Candidates of a different width and candidates sharing no slot are
/// dropped. Ties keep input order. At most `limit` entries are returned.
#[allow(clippy::cast_precision_loss)]
pub fn rank_similar(
    query: &Signature,
    candidates: &[Signature],
    limit: usize,
) -> Vec<SimilarMatch> {
    let mut results: Vec<SimilarMatch> = candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| candidate.len() == query.len())
        .filter_map(|(index, candidate)| {
            let matches = query.matches(candidate);
            (matches > 0).then(|| SimilarMatch {
                index,
                matches,
                grade: matches as f64 / query.len() as f64,
            })
        })
        .collect();

    results.sort_by(|a, b| b.matches.cmp(&a.matches));
    results.truncate(limit);
    results
}
