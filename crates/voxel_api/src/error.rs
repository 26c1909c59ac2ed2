//! # Error Types
//!
//! Every fallible operation in the API reports one of the enums below.
//! Hosts are free to wrap them, but extensions only ever see these.

/// Errors raised while reading or writing data through keys and values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    /// A bounded value was given something outside its inclusive range
    #[error("Value {value} for key '{key}' is out of bounds [{min}, {max}]")]
    OutOfBounds {
        key: String,
        value: String,
        min: String,
        max: String,
    },
    /// A bounded value was declared with `min > max` or a default outside them
    #[error("Invalid bounds for key '{key}': [{min}, {max}] with default {default}")]
    InvalidBounds {
        key: String,
        default: String,
        min: String,
        max: String,
    },
    /// The key is known but its value cannot be removed
    #[error("Value for key '{0}' cannot be removed")]
    NotRemovable(String),
    /// The container does not know the key at all
    #[error("Unsupported key: {0}")]
    UnsupportedKey(String),
    /// The value offered (or stored) for a key has the wrong type
    #[error("Type mismatch for key '{key}': expected {expected}")]
    TypeMismatch { key: String, expected: &'static str },
}

/// Errors that can occur when creating resource packs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResourcePackError {
    /// A valid resource pack could not be retrieved from the URI
    #[error("Resource pack not found at {uri}: {reason}")]
    NotFound { uri: String, reason: String },
    /// The content hash is not a 40 digit hexadecimal SHA-1 digest
    #[error("Invalid resource pack hash: {0}")]
    InvalidHash(String),
    /// The location could not be parsed as a URI
    #[error("Invalid resource pack URI: {0}")]
    InvalidUri(String),
}

/// Errors produced while loading settings or installing the logger.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// The settings parsed but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    /// A global subscriber was already installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
