//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Path value that selects stdin for input and stdout for output.
pub const STDIO: &str = "-";

/// Default input path (stdin).
pub const INPUT: &str = STDIO;

/// Default output path (stdout).
pub const OUTPUT: &str = STDIO;

/// Default config file name written by `init`.
pub const CONFIG_FILE: &str = "gosc-map.toml";
