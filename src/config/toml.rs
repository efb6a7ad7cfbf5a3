//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Input configuration section
    #[serde(default)]
    pub input: InputSection,

    /// Output configuration section
    #[serde(default)]
    pub output: OutputSection,

    /// Diagnostics configuration section
    #[serde(default)]
    pub diagnostics: DiagnosticsSection,
}

/// Input configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputSection {
    /// Input file path, or "-" for stdin
    pub path: Option<String>,
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output file path, or "-" for stdout
    pub path: Option<String>,

    /// Pretty-print the output JSON
    #[serde(default)]
    pub pretty: bool,
}

/// Diagnostics configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsSection {
    /// Log every translation decision
    #[serde(default)]
    pub enabled: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# GOSC-MAP Configuration File

[input]
# Interface results JSON file, or "-" for stdin (default: "-")
# Accepts either {"results": [...]} or a bare array of results.
# path = "interfaces.json"

[output]
# Adapter mappings JSON file, or "-" for stdout (default: "-")
# path = "mappings.json"

# Pretty-print the output JSON
# pretty = false

[diagnostics]
# Log every translation decision (adapter flags, per-family selection,
# IPv6-only fallback, final state). Use --verbose to see debug events.
# enabled = false
"#
    .to_string()
}
