//! Configuration types for the signature engine.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{Catalog1Error, Result};
use crate::signature::permutation::DEFAULT_SEED;

/// Upper bound on permutations per signature.
pub const MAX_CONFIGURED_PERMUTATIONS: usize = 1024;

/// Signer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignerConfig {
    /// Number of permutation slots per signature
    pub num_perms: usize,

    /// Seed of the permutation family. Signatures are only comparable when
    /// produced with the same seed.
    pub seed: u64,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            num_perms: 16,
            seed: DEFAULT_SEED,
        }
    }
}

impl SignerConfig {
    /// Default configuration with a different permutation count
    pub fn with_num_perms(num_perms: usize) -> Self {
        Self {
            num_perms,
            ..Self::default()
        }
    }

    /// Validate signer configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_perms == 0 {
            return Err(Catalog1Error::validation_field(
                "num_perms must be greater than 0",
                "num_perms",
            ));
        }

        if self.num_perms > MAX_CONFIGURED_PERMUTATIONS {
            return Err(Catalog1Error::validation_field(
                format!(
                    "num_perms must not exceed {MAX_CONFIGURED_PERMUTATIONS}, got {}",
                    self.num_perms
                ),
                "num_perms",
            ));
        }

        Ok(())
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Catalog1Error::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            Catalog1Error::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }
}
