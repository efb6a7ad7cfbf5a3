//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid input or output path.
    #[error("Invalid {field} path: {reason}")]
    InvalidPath {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

/// Well-known field names for `InvalidPath` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The input path field.
    pub const INPUT: &str = "input";
    /// The output path field.
    pub const OUTPUT: &str = "output";
}

impl ConfigError {
    /// Creates an `InvalidPath` error for a path field.
    #[must_use]
    pub fn invalid_path(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            field,
            reason: reason.into(),
        }
    }
}
