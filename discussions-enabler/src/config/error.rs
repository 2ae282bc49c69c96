//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the settings file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse settings file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A URL setting could not be parsed.
    #[error("Invalid URL for {field}: '{value}': {source}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// Validation error in settings.
    #[error("Validation error in {field}: {message}")]
    ValidationError { field: &'static str, message: String },
}
