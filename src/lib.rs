//! # catalog1: Fuzzy Signatures for Byte Buffers
//!
//! Computes fixed-width min-hash signatures over arbitrary byte buffers so
//! that two buffers can be compared for similarity without being identical.
//! A handful of changed bytes leaves most signature slots unchanged; buffers
//! built from disjoint n-grams share no slots at all.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      Signer                          │
//! ├──────────────────────────────────────────────────────┤
//! │  Permutations  │  Signature  │  Comparison │  Core   │
//! │                │             │             │         │
//! │ • xxh3 keys    │ • u32 slots │ • matches   │ • Config│
//! │ • bijections   │ • hex view  │ • ranking   │ • Errors│
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog1::signature::{count_matches, sign};
//!
//! let mut a = [0u32; 16];
//! let mut b = [0u32; 16];
//! sign(b"kldfgjlksdmklvcamsdkcjaslkfjalskdjfklasdmklsajflkas", &mut a, 16).unwrap();
//! sign(b"kldfgjlksdmklvcatsdkcjaslkfjalskdjfklasdmklsajflkas", &mut b, 16).unwrap();
//!
//! assert!(count_matches(&a, &b) >= 8);
//! assert!(sign(b"123", &mut a, 16).unwrap_err().is_too_short());
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Configuration and error handling
pub mod core {
    //! Configuration and error types.

    pub mod config;
    pub mod errors;
}

pub mod signature;

pub use crate::core::config::SignerConfig;
pub use crate::core::errors::{Catalog1Error, Result};
pub use crate::signature::{sign, strong_hash, Signature, Signer, StrongHash};
