//! Application execution logic.
//!
//! Reads interface results, translates them into adapter mappings and
//! writes the mappings out as JSON.

use std::io::{self, Read, Write};
use std::path::Path;

use thiserror::Error;

use gosc_map::config::{IoTarget, ValidatedConfig};
use gosc_map::customization::{self, AddressParseError};
use gosc_map::diagnostics::{DiagnosticSink, TracingSink};
use gosc_map::network::{NetworkInterfaceResult, NetworkInterfaceResults};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to read the input.
    #[error("Failed to read input from {target}: {source}")]
    ReadInput {
        /// Where the input was read from
        target: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The input is not a valid interface results document.
    #[error("Failed to parse input: {0}")]
    ParseInput(#[source] serde_json::Error),

    /// A CIDR in the input could not be parsed.
    #[error("Failed to translate adapters: {0}")]
    Translate(#[from] AddressParseError),

    /// Failed to serialize the mappings.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Failed to write the output.
    #[error("Failed to write output to {target}: {source}")]
    WriteOutput {
        /// Where the output was written to
        target: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Executes one translation.
///
/// This function:
/// 1. Reads the input document from a file or stdin
/// 2. Translates every adapter (with a tracing sink if diagnostics are on)
/// 3. Writes the mappings to a file or stdout
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, a CIDR is
/// malformed, or the output cannot be written.
pub fn execute(config: &ValidatedConfig) -> Result<(), RunError> {
    let input = read_input(&config.input)?;

    let sink: Option<&dyn DiagnosticSink> = if config.diagnostics {
        tracing::debug!("Decision diagnostics enabled");
        Some(&TracingSink)
    } else {
        None
    };

    let output = convert(&input, config.pretty, sink)?;
    write_output(&config.output, &output)
}

/// Parses, translates and serializes in one step.
fn convert(
    input: &str,
    pretty: bool,
    sink: Option<&dyn DiagnosticSink>,
) -> Result<String, RunError> {
    let results = parse_results(input)?;
    tracing::debug!("Read {} interface result(s)", results.len());

    let mappings = customization::translate(&results, sink)?;
    tracing::info!("Translated {} adapter(s)", mappings.len());

    let mut json = if pretty {
        serde_json::to_string_pretty(&mappings)
    } else {
        serde_json::to_string(&mappings)
    }
    .map_err(RunError::Serialize)?;
    json.push('\n');

    Ok(json)
}

/// Parses either `{"results": [...]}` or a bare `[...]` array.
///
/// The shape is picked from the first non-whitespace character so that
/// `serde_json` reports errors against the shape actually given.
fn parse_results(input: &str) -> Result<Vec<NetworkInterfaceResult>, RunError> {
    let document = if input.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<NetworkInterfaceResult>>(input)
            .map(NetworkInterfaceResults::from)
    } else {
        serde_json::from_str::<NetworkInterfaceResults>(input)
    };

    document
        .map(|document| document.results)
        .map_err(RunError::ParseInput)
}

fn read_input(target: &IoTarget) -> Result<String, RunError> {
    let read_error = |source| RunError::ReadInput {
        target: target.to_string(),
        source,
    };

    match target {
        IoTarget::Stdio => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(read_error)?;
            Ok(buffer)
        }
        IoTarget::File(path) => std::fs::read_to_string(path).map_err(read_error),
    }
}

fn write_output(target: &IoTarget, content: &str) -> Result<(), RunError> {
    let write_error = |source| RunError::WriteOutput {
        target: target.to_string(),
        source,
    };

    match target {
        IoTarget::Stdio => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(write_error)
        }
        IoTarget::File(path) => write_file(path, content).map_err(write_error),
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    std::fs::write(path, content)?;
    tracing::debug!("Wrote adapter mappings to {}", path.display());
    Ok(())
}
