//! Owned signature value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::signature::comparison::{count_matches, similarity_grade};

/// Fixed-width sequence of per-slot minima for one buffer.
///
/// Position `i` is only comparable with position `i` of another signature
/// produced from the same permutation table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(Vec<u32>);

impl Signature {
    /// Number of slots
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the signature has no slots
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Slot values in order
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Consume into the raw slot values
    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }

    /// Number of positions holding equal values
    pub fn matches(&self, other: &Self) -> usize {
        count_matches(&self.0, &other.0)
    }

    /// Fraction of matching positions, `None` if the widths differ
    pub fn similarity(&self, other: &Self) -> Option<f64> {
        similarity_grade(&self.0, &other.0)
    }
}

impl From<Vec<u32>> for Signature {
    fn from(values: Vec<u32>) -> Self {
        Self(values)
    }
}

impl AsRef<[u32]> for Signature {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

/// Space-separated, zero-padded hex dwords.
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value:08x}")?;
        }
        Ok(())
    }
}
