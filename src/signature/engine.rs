//! Min-hash signing of byte buffers.

use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::config::SignerConfig;
use crate::core::errors::{Catalog1Error, Result};
use crate::signature::permutation::{PermutationTable, DEFAULT_SEED, MAX_PERMUTATIONS};
use crate::signature::types::Signature;

/// Width in bytes of one n-gram; also the minimum signable length.
pub const NGRAM_SIZE: usize = 4;

static SHARED_SIGNER: Lazy<Signer> = Lazy::new(Signer::default);

/// Sign `data` into `output` with the shared default permutation table.
///
/// `output` must hold exactly `num_perms` slots. Fails with
/// [`Catalog1Error::InputTooShort`] when `data` is shorter than
/// [`NGRAM_SIZE`]; `output` is left untouched on any error.
pub fn sign(data: &[u8], output: &mut [u32], num_perms: usize) -> Result<()> {
    if output.len() != num_perms {
        return Err(Catalog1Error::validation_field(
            format!(
                "output holds {} slots but {num_perms} permutations were requested",
                output.len()
            ),
            "output",
        ));
    }

    Signer::shared().sign_into(data, output)
}

/// Computes signatures against a fixed permutation table.
#[derive(Debug, Clone)]
pub struct Signer {
    table: Arc<PermutationTable>,
    num_perms: usize,
}

impl Default for Signer {
    fn default() -> Self {
        Self {
            table: PermutationTable::default_table(),
            num_perms: SignerConfig::default().num_perms,
        }
    }
}

impl Signer {
    /// Create a signer from a validated configuration
    pub fn new(config: &SignerConfig) -> Result<Self> {
        config.validate()?;

        let table = if config.seed == DEFAULT_SEED && config.num_perms <= MAX_PERMUTATIONS {
            PermutationTable::default_table()
        } else {
            Arc::new(PermutationTable::with_seed(config.num_perms, config.seed))
        };

        Ok(Self {
            table,
            num_perms: config.num_perms,
        })
    }

    /// Create a signer over an existing table
    pub fn with_table(table: Arc<PermutationTable>, num_perms: usize) -> Result<Self> {
        if num_perms == 0 || num_perms > table.len() {
            return Err(Catalog1Error::validation_field(
                format!(
                    "num_perms must be between 1 and {}, got {num_perms}",
                    table.len()
                ),
                "num_perms",
            ));
        }

        Ok(Self { table, num_perms })
    }

    /// Process-wide signer with the default configuration
    pub fn shared() -> &'static Signer {
        &SHARED_SIGNER
    }

    /// Number of slots in signatures produced by [`Signer::sign`]
    pub fn num_perms(&self) -> usize {
        self.num_perms
    }

    /// Underlying permutation table
    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    /// Sign `data` into a new [`Signature`] of [`Signer::num_perms`] slots.
    pub fn sign(&self, data: &[u8]) -> Result<Signature> {
        let mut values = vec![0u32; self.num_perms];
        self.sign_into(data, &mut values)?;
        Ok(Signature::from(values))
    }

    /// Sign `data` into `output`, one slot per element.
    ///
    /// The slot count is `output.len()` and may be anything from 1 up to the
    /// table size. `output` is only written once every check has passed.
    pub fn sign_into(&self, data: &[u8], output: &mut [u32]) -> Result<()> {
        if output.is_empty() || output.len() > self.table.len() {
            return Err(Catalog1Error::validation_field(
                format!(
                    "permutation count must be between 1 and {}, got {}",
                    self.table.len(),
                    output.len()
                ),
                "num_perms",
            ));
        }

        if data.len() < NGRAM_SIZE {
            return Err(Catalog1Error::too_short(data.len(), NGRAM_SIZE));
        }

        output.fill(u32::MAX);

        for window in data.windows(NGRAM_SIZE) {
            let gram = u32::from_le_bytes([window[0], window[1], window[2], window[3]]);

            for (slot, perm) in output.iter_mut().zip(self.table.iter()) {
                let value = perm.apply(gram);
                if value < *slot {
                    *slot = value;
                }
            }
        }

        debug!(
            "Signed {} bytes into {} slots ({} n-grams)",
            data.len(),
            output.len(),
            data.len() - NGRAM_SIZE + 1
        );

        Ok(())
    }

    /// Sign many buffers, preserving input order.
    #[cfg(feature = "parallel")]
    pub fn sign_batch<T>(&self, buffers: &[T]) -> Vec<Result<Signature>>
    where
        T: AsRef<[u8]> + Sync,
    {
        buffers
            .par_iter()
            .map(|buffer| self.sign(buffer.as_ref()))
            .collect()
    }

    /// Sign many buffers, preserving input order.
    #[cfg(not(feature = "parallel"))]
    pub fn sign_batch<T>(&self, buffers: &[T]) -> Vec<Result<Signature>>
    where
        T: AsRef<[u8]>,
    {
        buffers
            .iter()
            .map(|buffer| self.sign(buffer.as_ref()))
            .collect()
    }
}
