//! Configuration layer for GOSC-MAP.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`], [`IoTarget`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - stdin for input, stdout for output
//!
//! # Boolean Flag Semantics
//!
//! Boolean flags (`--pretty`, `--diagnostics`) use OR semantics:
//! - If set `true` in either CLI or TOML, the result is `true`.
//! - Once set `true` in TOML, CLI cannot override to `false` (flags only enable, not disable).

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{IoTarget, ValidatedConfig, write_default_config};
