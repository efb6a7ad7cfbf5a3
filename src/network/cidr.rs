//! CIDR parsing helpers.
//!
//! Parsing is strict: the prefix length is mandatory and must be plain
//! decimal digits without leading zeros, within the family's width.
//! Network construction and mask derivation are delegated to [`ipnetwork`].

use std::net::{AddrParseError, IpAddr};

use ipnetwork::{IpNetwork, IpNetworkError};
use thiserror::Error;

/// Maximum prefix length of an IPv4 network.
const IPV4_MAX_PREFIX: u8 = 32;

/// Maximum prefix length of an IPv6 network.
const IPV6_MAX_PREFIX: u8 = 128;

/// Reason a CIDR string could not be parsed.
#[derive(Debug, Error)]
pub enum CidrError {
    /// No `/prefix` part was present.
    #[error("missing prefix length")]
    MissingPrefix,

    /// The address part is not a valid IPv4 or IPv6 address.
    #[error("invalid address '{address}': {source}")]
    InvalidAddress {
        /// The address part as written
        address: String,
        /// Underlying parse error
        #[source]
        source: AddrParseError,
    },

    /// The prefix part is not a canonical decimal number.
    #[error("invalid prefix length '{prefix}'")]
    InvalidPrefix {
        /// The prefix part as written
        prefix: String,
    },

    /// The prefix is wider than the address family allows.
    #[error("prefix length '{prefix}' exceeds {max}")]
    PrefixOutOfRange {
        /// The prefix part as written
        prefix: String,
        /// Largest prefix the family allows
        max: u8,
    },

    /// Network construction rejected the address/prefix pair.
    #[error(transparent)]
    Network(#[from] IpNetworkError),
}

/// Parses `address/prefix` into a network that keeps the host address.
///
/// # Errors
///
/// Returns [`CidrError`] if the prefix is missing or malformed, the address
/// does not parse, or the prefix exceeds the family width.
pub fn parse_cidr(cidr: &str) -> Result<IpNetwork, CidrError> {
    let (address_part, prefix_part) = cidr.split_once('/').ok_or(CidrError::MissingPrefix)?;

    let address: IpAddr = address_part
        .parse()
        .map_err(|source| CidrError::InvalidAddress {
            address: address_part.to_string(),
            source,
        })?;

    let digits_only = !prefix_part.is_empty() && prefix_part.bytes().all(|b| b.is_ascii_digit());
    let leading_zero = prefix_part.len() > 1 && prefix_part.starts_with('0');
    if !digits_only || leading_zero {
        return Err(CidrError::InvalidPrefix {
            prefix: prefix_part.to_string(),
        });
    }

    let max = match address {
        IpAddr::V4(_) => IPV4_MAX_PREFIX,
        IpAddr::V6(_) => IPV6_MAX_PREFIX,
    };
    let out_of_range = || CidrError::PrefixOutOfRange {
        prefix: prefix_part.to_string(),
        max,
    };

    // Digits only, so a parse failure can only be overflow.
    let prefix: u8 = prefix_part.parse().map_err(|_| out_of_range())?;
    if prefix > max {
        return Err(out_of_range());
    }

    Ok(IpNetwork::new(address, prefix)?)
}

/// Renders the subnet mask of a network in its own address family.
///
/// An IPv4 network yields dotted-decimal (`255.255.255.0`), an IPv6 network
/// the compressed mask address (`ffff:ffff:ffff:ffff::`).
#[must_use]
pub fn subnet_mask(network: &IpNetwork) -> String {
    network.mask().to_string()
}
