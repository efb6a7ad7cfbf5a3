//! Error type for adapter translation.

use thiserror::Error;

use crate::network::CidrError;

/// An `ip_configs` entry whose CIDR could not be parsed.
///
/// Carries enough context to locate the bad entry in the input.
#[derive(Debug, Error)]
#[error("adapter {adapter_index} ({mac_address}): invalid CIDR '{cidr}': {source}")]
pub struct AddressParseError {
    /// Position of the adapter in the input
    pub adapter_index: usize,
    /// MAC address of the adapter
    pub mac_address: String,
    /// The CIDR string as written
    pub cidr: String,
    /// Why it failed to parse
    #[source]
    pub source: CidrError,
}
