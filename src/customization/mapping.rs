//! Adapter customization records in the shape the hypervisor expects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// IPv4 address assignment for an adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Ipv4Spec {
    /// No IPv4 generator is set.
    Unset,
    /// Address obtained via DHCP.
    Dhcp,
    /// A single fixed address.
    #[serde(rename_all = "camelCase")]
    Fixed {
        /// The address, in canonical textual form.
        address: String,
        /// Subnet mask, dotted-decimal for an IPv4 CIDR (e.g. `255.255.255.0`).
        subnet_mask: String,
        /// Zero or one gateway.
        gateways: Vec<String>,
    },
}

impl Ipv4Spec {
    /// Returns true if no IPv4 generator is set.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl fmt::Display for Ipv4Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "unset"),
            Self::Dhcp => write!(f, "dhcp"),
            Self::Fixed {
                address,
                subnet_mask,
                gateways,
            } => {
                write!(f, "fixed {address} mask {subnet_mask}")?;
                if let Some(gateway) = gateways.first() {
                    write!(f, " via {gateway}")?;
                }
                Ok(())
            }
        }
    }
}

/// A fixed IPv6 address with its prefix length.
///
/// Unlike IPv4, the target schema expresses the IPv6 mask as an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedIpv6 {
    /// The address, in canonical textual form.
    pub address: String,
    /// Prefix length in bits.
    pub prefix_length: u8,
}

impl fmt::Display for FixedIpv6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_length)
    }
}

/// IPv6 address assignment for an adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Ipv6Spec {
    /// No IPv6 specification is set.
    Unset,
    /// A single DHCPv6 generator.
    Dhcp,
    /// One or more fixed addresses.
    Static {
        /// Addresses in input order.
        addresses: Vec<FixedIpv6>,
        /// Gateways in input order.
        gateways: Vec<String>,
    },
}

impl Ipv6Spec {
    /// Returns true if no IPv6 specification is set.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl fmt::Display for Ipv6Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "unset"),
            Self::Dhcp => write!(f, "dhcp"),
            Self::Static {
                addresses,
                gateways,
            } => {
                write!(f, "static [")?;
                for (i, address) in addresses.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{address}")?;
                }
                write!(f, "]")?;
                if !gateways.is_empty() {
                    write!(f, " via {}", gateways.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

/// Customization record for one guest adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterMapping {
    /// MAC address of the adapter, copied from the input.
    pub mac_address: String,
    /// IPv4 assignment.
    pub ipv4: Ipv4Spec,
    /// IPv6 assignment.
    pub ipv6: Ipv6Spec,
    /// DNS servers, copied from the input.
    ///
    /// Only Windows guests honor per-adapter DNS; Linux guests use the
    /// global setting.
    pub dns_servers: Vec<String>,
}
