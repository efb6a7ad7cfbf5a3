//! Desired per-interface network configuration, as computed upstream.

use serde::{Deserialize, Serialize};

/// A single address assignment on an interface.
///
/// The CIDR carries both the address and its prefix length. An empty
/// `gateway` means the entry has no gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpConfig {
    /// Address in CIDR notation (e.g. `192.168.1.10/24`).
    #[serde(rename = "ipCIDR", alias = "cidr")]
    pub cidr: String,
    /// Whether this entry belongs to the IPv4 family.
    #[serde(rename = "isIPv4")]
    pub is_ipv4: bool,
    /// Gateway address, empty when none.
    #[serde(default)]
    pub gateway: String,
}

impl IpConfig {
    /// Creates an IPv4 entry.
    #[must_use]
    pub fn ipv4(cidr: impl Into<String>, gateway: impl Into<String>) -> Self {
        Self {
            cidr: cidr.into(),
            is_ipv4: true,
            gateway: gateway.into(),
        }
    }

    /// Creates an IPv6 entry.
    #[must_use]
    pub fn ipv6(cidr: impl Into<String>, gateway: impl Into<String>) -> Self {
        Self {
            cidr: cidr.into(),
            is_ipv4: false,
            gateway: gateway.into(),
        }
    }

    /// Returns the gateway, or `None` when the entry has no gateway.
    #[must_use]
    pub fn gateway(&self) -> Option<&str> {
        (!self.gateway.is_empty()).then_some(self.gateway.as_str())
    }
}

/// A static route on an interface.
///
/// Carried on the input for completeness; guest OS customization has no
/// per-adapter route field, so routes are never translated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Destination in CIDR notation.
    pub to: String,
    /// Next hop address.
    pub via: String,
    /// Route metric.
    #[serde(default)]
    pub metric: u32,
}

/// Desired configuration of one guest network adapter.
///
/// # Field semantics
///
/// - `dhcp4` / `dhcp6` request dynamic assignment for that family.
/// - `no_ipam` marks the adapter as intentionally unmanaged for IPv4.
/// - `ip_configs` order matters: the first IPv4 entry wins, all IPv6
///   entries are kept.
/// - `mtu` and `routes` are accepted but not translated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfaceResult {
    /// MAC address identifying the adapter.
    pub mac_address: String,
    /// Interface name inside the guest (e.g. `eth0`).
    #[serde(default)]
    pub name: String,
    /// Use DHCP for IPv4.
    #[serde(default, rename = "dhcp4")]
    pub dhcp4: bool,
    /// Use DHCP for IPv6.
    #[serde(default, rename = "dhcp6")]
    pub dhcp6: bool,
    /// Adapter is excluded from IPv4 address management.
    #[serde(default, rename = "noIPAM")]
    pub no_ipam: bool,
    /// Ordered static address assignments.
    #[serde(default, rename = "ipConfigs")]
    pub ip_configs: Vec<IpConfig>,
    /// DNS servers, in order.
    #[serde(default)]
    pub nameservers: Vec<String>,
    /// Interface MTU.
    #[serde(default)]
    pub mtu: Option<u32>,
    /// Static routes.
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl NetworkInterfaceResult {
    /// Creates a result for the given MAC address with everything else unset.
    #[must_use]
    pub fn new(mac_address: impl Into<String>) -> Self {
        Self {
            mac_address: mac_address.into(),
            ..Self::default()
        }
    }

    /// Sets the guest interface name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the DHCP4 flag.
    #[must_use]
    pub const fn with_dhcp4(mut self, dhcp4: bool) -> Self {
        self.dhcp4 = dhcp4;
        self
    }

    /// Sets the DHCP6 flag.
    #[must_use]
    pub const fn with_dhcp6(mut self, dhcp6: bool) -> Self {
        self.dhcp6 = dhcp6;
        self
    }

    /// Sets the `NoIPAM` flag.
    #[must_use]
    pub const fn with_no_ipam(mut self, no_ipam: bool) -> Self {
        self.no_ipam = no_ipam;
        self
    }

    /// Appends an address assignment.
    #[must_use]
    pub fn with_ip_config(mut self, config: IpConfig) -> Self {
        self.ip_configs.push(config);
        self
    }

    /// Replaces the DNS servers.
    #[must_use]
    pub fn with_nameservers<I, S>(mut self, nameservers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nameservers = nameservers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the MTU.
    #[must_use]
    pub const fn with_mtu(mut self, mtu: u32) -> Self {
        self.mtu = Some(mtu);
        self
    }

    /// Iterates over the IPv4 entries in input order, each paired with its
    /// position in `ip_configs`.
    pub fn ipv4_configs(&self) -> impl Iterator<Item = (usize, &IpConfig)> {
        self.ip_configs.iter().enumerate().filter(|(_, c)| c.is_ipv4)
    }

    /// Iterates over the IPv6 entries in input order, each paired with its
    /// position in `ip_configs`.
    pub fn ipv6_configs(&self) -> impl Iterator<Item = (usize, &IpConfig)> {
        self.ip_configs.iter().enumerate().filter(|(_, c)| !c.is_ipv4)
    }
}

/// The full set of interface results for one machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfaceResults {
    /// One entry per adapter, in adapter order.
    #[serde(default)]
    pub results: Vec<NetworkInterfaceResult>,
}

impl From<Vec<NetworkInterfaceResult>> for NetworkInterfaceResults {
    fn from(results: Vec<NetworkInterfaceResult>) -> Self {
        Self { results }
    }
}
