//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// GOSC-MAP: guest OS customization adapter mapper
///
/// Reads per-interface network results as JSON and writes the adapter
/// customization records a hypervisor applies inside the guest.
#[derive(Debug, Parser)]
#[command(name = "gosc-map")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Input JSON file with interface results ('-' for stdin)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output file for adapter mappings ('-' for stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,

    /// Log every translation decision
    #[arg(long)]
    pub diagnostics: bool,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for gosc-map
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = super::defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
