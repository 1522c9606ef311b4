//! Exact identity digest of a buffer.
//!
//! Fuzzy signatures say "similar"; the strong hash says "identical". The two
//! are usually stored side by side so exact duplicates can be recognised
//! without a slot comparison.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::core::errors::{Catalog1Error, Result};

/// BLAKE3 digest of a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrongHash(blake3::Hash);

impl StrongHash {
    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }
}

/// Hash `data` with BLAKE3.
pub fn strong_hash(data: &[u8]) -> StrongHash {
    StrongHash(blake3::hash(data))
}

impl fmt::Display for StrongHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.to_hex().as_str())
    }
}

impl FromStr for StrongHash {
    type Err = Catalog1Error;

    fn from_str(s: &str) -> Result<Self> {
        blake3::Hash::from_hex(s).map(Self).map_err(|e| {
            Catalog1Error::validation_field(format!("invalid strong hash '{s}': {e}"), "strong_hash")
        })
    }
}

impl Serialize for StrongHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.to_hex().as_str())
    }
}

impl<'de> Deserialize<'de> for StrongHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        hex.parse().map_err(de::Error::custom)
    }
}
