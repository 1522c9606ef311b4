//! Error types for the catalog1 library.
//!
//! Signing has exactly one failure on well-formed arguments: the buffer is
//! shorter than a single n-gram window. Everything else here covers caller
//! contract violations and the configuration/I/O layers around the engine.

use std::io;

use thiserror::Error;

/// Main result type for catalog1 operations.
pub type Result<T> = std::result::Result<T, Catalog1Error>;

/// Error type for all catalog1 operations.
#[derive(Error, Debug)]
pub enum Catalog1Error {
    /// Input buffer holds fewer bytes than one n-gram window
    #[error("Input too short: {length} bytes, at least {required} required")]
    InputTooShort {
        /// Length of the rejected buffer
        length: usize,
        /// Minimum accepted length
        required: usize,
    },

    /// Validation errors for caller-supplied arguments and config values
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or argument that failed validation
        field: Option<String>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
    },

    /// I/O related errors (config files, CLI inputs)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data format involved
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Catalog1Error {
    /// Create a new input-too-short error
    pub fn too_short(length: usize, required: usize) -> Self {
        Self::InputTooShort { length, required }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new validation error with field context
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Whether this is the too-short condition rather than a contract violation
    pub fn is_too_short(&self) -> bool {
        matches!(self, Self::InputTooShort { .. })
    }
}

impl From<io::Error> for Catalog1Error {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for Catalog1Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            data_type: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for Catalog1Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SignerConfig;

    #[test]
    fn test_too_short_display() {
        let err = Catalog1Error::too_short(3, 4);
        assert!(err.is_too_short());
        assert_eq!(
            err.to_string(),
            "Input too short: 3 bytes, at least 4 required"
        );
    }

    #[test]
    fn test_validation_field_error() {
        let err = Catalog1Error::validation_field("must be positive", "num_perms");

        if let Catalog1Error::Validation { message, field } = err {
            assert_eq!(message, "must be positive");
            assert_eq!(field, Some("num_perms".to_string()));
        } else {
            panic!("Expected Validation error");
        }
    }

    #[test]
    fn test_validation_is_not_too_short() {
        assert!(!Catalog1Error::validation("bad").is_too_short());
        assert!(!Catalog1Error::config("bad").is_too_short());
    }

    #[test]
    fn test_missing_config_file_maps_to_io() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yml");

        match SignerConfig::from_yaml_file(&path) {
            Err(Catalog1Error::Io { message, source }) => {
                assert!(message.contains("Failed to read config file"));
                assert!(message.contains("absent.yml"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_config_maps_to_yaml_serialization() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yml");
        std::fs::write(&path, "num_perms: [16\n").unwrap();

        let err = SignerConfig::from_yaml_file(&path).unwrap_err();
        assert!(!err.is_too_short());
        if let Catalog1Error::Serialization { data_type, .. } = err {
            assert_eq!(data_type, Some("YAML".to_string()));
        } else {
            panic!("Expected Serialization error");
        }
    }

    #[test]
    fn test_mistyped_config_field_maps_to_serialization() {
        let yaml_err = serde_yaml::from_str::<SignerConfig>("num_perms: sixteen").unwrap_err();
        let err: Catalog1Error = yaml_err.into();

        assert!(err.to_string().contains("YAML serialization failed"));
        assert!(matches!(err, Catalog1Error::Serialization { .. }));
    }

    #[test]
    fn test_bad_signature_json_maps_to_serialization() {
        let json_err = serde_json::from_str::<crate::signature::Signature>("\"0a0b\"").unwrap_err();
        let err: Catalog1Error = json_err.into();

        if let Catalog1Error::Serialization { data_type, .. } = err {
            assert_eq!(data_type, Some("JSON".to_string()));
        } else {
            panic!("Expected Serialization error");
        }
    }
}
