//! # Errors
//!
//! The single error value produced by a validation pass.
//!
//! Each variant renders as the exact operator-facing message; downstream
//! tooling matches on that text, so the `Display` output must not change.

use std::sync::Arc;

use thiserror::Error;

/// Category of a [`ConfigError`], for callers that branch on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required value is empty or absent
    MissingField,
    /// A value is not a recognized identifier
    InvalidEnum,
    /// Bad version, CIDR block or address
    OutOfRange,
    /// Too few nodes or machines of a kind
    CountConstraint,
    /// A named file does not exist
    FileNotFound,
    /// Key and certificate do not pair
    CryptoMismatch,
    /// A file could not be read
    Io,
    /// The document is not valid YAML for a cluster specification
    Parse,
    /// A built-in pattern failed to compile
    Pattern,
}

/// Sources without `Clone` are shared through [`Arc`], so a rejected
/// [`crate::engine::Validation`] can keep its error and still hand out copies.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// A required value is empty or absent
    #[error("{0}")]
    MissingField(String),

    /// A value is not one of the recognized identifiers
    #[error("{0}")]
    InvalidEnum(String),

    /// A version, CIDR block or address does not have the required syntax or range
    #[error("{0}")]
    OutOfRange(String),

    /// A node or machine count constraint is violated
    #[error("{0}")]
    CountConstraint(String),

    /// A path named by a field does not exist
    #[error("no file found at path: \"{path}\" for field: \"{field}\"")]
    FileNotFound { path: String, field: &'static str },

    /// The sealed secrets private key does not belong to the certificate
    #[error("could not load key and certificate pair")]
    CryptoMismatch { reason: String },

    /// A file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The configuration document is not valid YAML for a cluster specification
    #[error("failed to parse cluster configuration: {0}")]
    Parse(#[source] Arc<serde_yaml::Error>),

    /// A built-in validation pattern failed to compile
    #[error("failed to compile validation pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ConfigError {
    /// `<field> must be specified`
    pub fn must_be_specified(field: &str) -> Self {
        ConfigError::MissingField(format!("{field} must be specified"))
    }

    pub fn file_not_found(path: &str, field: &'static str) -> Self {
        ConfigError::FileNotFound {
            path: path.to_string(),
            field,
        }
    }

    pub fn io(path: &str, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.to_string(),
            source: Arc::new(source),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::MissingField(_) => ErrorKind::MissingField,
            ConfigError::InvalidEnum(_) => ErrorKind::InvalidEnum,
            ConfigError::OutOfRange(_) => ErrorKind::OutOfRange,
            ConfigError::CountConstraint(_) => ErrorKind::CountConstraint,
            ConfigError::FileNotFound { .. } => ErrorKind::FileNotFound,
            ConfigError::CryptoMismatch { .. } => ErrorKind::CryptoMismatch,
            ConfigError::Io { .. } => ErrorKind::Io,
            ConfigError::Parse(_) => ErrorKind::Parse,
            ConfigError::Pattern(_) => ErrorKind::Pattern,
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Parse(Arc::new(e))
    }
}
