//! Structured events emitted at translation decision points.

use std::fmt;

use crate::customization::{AdapterMapping, Ipv4Spec, Ipv6Spec};
use crate::network::IpConfig;

/// Severity of an event.
///
/// Ordered from most to least important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A corrective action was taken.
    Info,
    /// A routine decision.
    Debug,
    /// Per-entry detail.
    Trace,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Trace => write!(f, "TRACE"),
        }
    }
}

/// Why the IPv4 assignment came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ipv4Reason {
    /// `dhcp4` was set.
    Dhcp,
    /// `no_ipam` was set; IPv4 is left alone.
    NoIpam,
    /// The IPv4 entry at this index in `ip_configs` was used.
    Static {
        /// Index into the adapter's `ip_configs`.
        config_index: usize,
    },
    /// No IPv4 entry was present.
    NoStaticConfig,
}

impl fmt::Display for Ipv4Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dhcp => write!(f, "dhcp4"),
            Self::NoIpam => write!(f, "no-ipam"),
            Self::Static { config_index } => write!(f, "static(ip_configs[{config_index}])"),
            Self::NoStaticConfig => write!(f, "no-ipv4-config"),
        }
    }
}

/// Why the IPv6 assignment came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ipv6Reason {
    /// `dhcp6` was set.
    Dhcp,
    /// This many IPv6 entries were collected.
    Static {
        /// Number of IPv6 entries.
        count: usize,
    },
    /// No IPv6 entry was present.
    NoStaticConfig,
}

impl fmt::Display for Ipv6Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dhcp => write!(f, "dhcp6"),
            Self::Static { count } => write!(f, "static({count})"),
            Self::NoStaticConfig => write!(f, "no-ipv6-config"),
        }
    }
}

/// A decision point in the per-adapter algorithm.
#[derive(Debug, Clone, Copy)]
pub enum Decision<'a> {
    /// Processing of an adapter began.
    AdapterStarted {
        /// Guest interface name (may be empty).
        name: &'a str,
        /// DHCP4 flag.
        dhcp4: bool,
        /// DHCP6 flag.
        dhcp6: bool,
        /// `NoIPAM` flag.
        no_ipam: bool,
        /// Number of `ip_configs` entries.
        ip_config_count: usize,
    },

    /// One `ip_configs` entry, as received.
    IpConfigSeen {
        /// Index into the adapter's `ip_configs`.
        config_index: usize,
        /// The entry itself.
        config: &'a IpConfig,
    },

    /// The IPv4 family was decided.
    Ipv4Selected {
        /// Why.
        reason: Ipv4Reason,
        /// Result of the selection.
        spec: &'a Ipv4Spec,
    },

    /// The IPv6 family was decided.
    Ipv6Selected {
        /// Why.
        reason: Ipv6Reason,
        /// Result of the selection.
        spec: &'a Ipv6Spec,
    },

    /// The IPv6-only fallback condition was checked.
    FallbackEvaluated {
        /// IPv4 was unset after selection.
        ipv4_unset: bool,
        /// `NoIPAM` flag.
        no_ipam: bool,
        /// IPv6 was set after selection.
        ipv6_set: bool,
        /// DHCP6 flag.
        dhcp6: bool,
        /// The fallback replaced IPv4 with DHCP.
        applied: bool,
    },

    /// Final state of the adapter.
    Completed {
        /// The mapping returned for this adapter.
        mapping: &'a AdapterMapping,
    },
}

impl Decision<'_> {
    /// Stable name of the decision point.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AdapterStarted { .. } => "adapter_started",
            Self::IpConfigSeen { .. } => "ip_config_seen",
            Self::Ipv4Selected { .. } => "ipv4_selected",
            Self::Ipv6Selected { .. } => "ipv6_selected",
            Self::FallbackEvaluated { .. } => "fallback_evaluated",
            Self::Completed { .. } => "completed",
        }
    }
}

/// An event delivered to a [`DiagnosticSink`](super::DiagnosticSink).
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticEvent<'a> {
    /// Position of the adapter in the input.
    pub adapter_index: usize,
    /// MAC address of the adapter.
    pub mac_address: &'a str,
    /// What was decided.
    pub decision: Decision<'a>,
}

impl DiagnosticEvent<'_> {
    /// Severity of this event.
    ///
    /// An applied fallback is `Info`; per-entry detail is `Trace`;
    /// everything else is `Debug`.
    #[must_use]
    pub const fn level(&self) -> Level {
        match self.decision {
            Decision::FallbackEvaluated { applied: true, .. } => Level::Info,
            Decision::IpConfigSeen { .. } => Level::Trace,
            _ => Level::Debug,
        }
    }
}
