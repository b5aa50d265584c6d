//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse config file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A value was syntactically fine but semantically invalid.
    #[error("Validation error in {origin}: {message}")]
    ValidationError { origin: String, message: String },

    /// None of the requested channel names exist.
    #[error("no valid channels specified (available: {available})")]
    UnknownChannels { available: String },

    /// Unrecognised color/hyperlink mode.
    #[error("invalid mode '{value}' (expected auto, always or never)")]
    InvalidMode { value: String },
}
