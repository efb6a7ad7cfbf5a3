//! Process-level glue for the `gosc-map` binary: exit statuses, stderr
//! hints and the log subscriber.

use gosc_map::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Exit statuses of `gosc-map`.
pub mod exit_code {
    use std::process::ExitCode;

    /// Mappings were written.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Bad arguments or config file; no input was read.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Input could not be read or parsed, a CIDR was malformed, or the
    /// mappings could not be written. Nothing is written in these cases.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Follow-up advice for a configuration error, if there is any.
fn config_hint(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::FileRead { .. } => {
            Some("Run 'gosc-map init' to generate a configuration template.")
        }
        ConfigError::InvalidPath { .. } => {
            Some("Pass '-' for stdin/stdout, and keep input and output files distinct.")
        }
        ConfigError::TomlParse(_) | ConfigError::FileWrite { .. } => None,
    }
}

/// Prints the hint for `error` to stderr.
pub fn print_config_hint(error: &ConfigError) {
    if let Some(hint) = config_hint(error) {
        eprintln!("\n{hint}");
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the level.
///
/// stdout is left to the JSON mappings.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
