//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Where to read input from or write output to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoTarget {
    /// Stdin for input, stdout for output.
    Stdio,
    /// A file on disk.
    File(PathBuf),
}

impl IoTarget {
    fn parse(field: &'static str, raw: &Path) -> Result<Self, ConfigError> {
        if raw.as_os_str().is_empty() {
            return Err(ConfigError::invalid_path(field, "must not be empty"));
        }
        if raw.as_os_str() == defaults::STDIO {
            return Ok(Self::Stdio);
        }
        Ok(Self::File(raw.to_path_buf()))
    }
}

impl fmt::Display for IoTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => write!(f, "stdio"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Source of interface results
    pub input: IoTarget,

    /// Destination of adapter mappings
    pub output: IoTarget,

    /// Pretty-print the output JSON
    pub pretty: bool,

    /// Report translation decisions through the tracing sink
    pub diagnostics: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ input: {}, output: {}, pretty: {}, diagnostics: {} }}",
            self.input, self.output, self.pretty, self.diagnostics,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A path is empty
    /// - Input and output name the same file
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let input = Self::resolve_target(
            field::INPUT,
            cli.input.as_deref(),
            toml.and_then(|t| t.input.path.as_deref()),
            defaults::INPUT,
        )?;

        let output = Self::resolve_target(
            field::OUTPUT,
            cli.output.as_deref(),
            toml.and_then(|t| t.output.path.as_deref()),
            defaults::OUTPUT,
        )?;

        if let (IoTarget::File(input_path), IoTarget::File(output_path)) = (&input, &output) {
            if input_path == output_path {
                return Err(ConfigError::invalid_path(
                    field::OUTPUT,
                    format!("'{}' is also the input file", output_path.display()),
                ));
            }
        }

        // Flags only enable
        let pretty = cli.pretty || toml.is_some_and(|t| t.output.pretty);
        let diagnostics = cli.diagnostics || toml.is_some_and(|t| t.diagnostics.enabled);

        Ok(Self {
            input,
            output,
            pretty,
            diagnostics,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_target(
        field: &'static str,
        cli: Option<&Path>,
        toml: Option<&str>,
        default: &str,
    ) -> Result<IoTarget, ConfigError> {
        let raw = cli
            .or_else(|| toml.map(Path::new))
            .unwrap_or_else(|| Path::new(default));

        IoTarget::parse(field, raw)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
