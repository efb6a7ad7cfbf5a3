//! Translation of interface results into adapter mappings.

use crate::diagnostics::{Decision, DiagnosticEvent, DiagnosticSink, Ipv4Reason, Ipv6Reason};
use crate::network::cidr::{self, CidrError};
use crate::network::{IpConfig, NetworkInterfaceResult};

use super::{AdapterMapping, AddressParseError, FixedIpv6, Ipv4Spec, Ipv6Spec};

/// Translates interface results into adapter mappings, one per result.
///
/// Each adapter is handled independently and in order:
///
/// 1. **IPv4**: `dhcp4` wins, then `no_ipam` leaves IPv4 unset, otherwise the
///    first IPv4 entry becomes a fixed address. Later IPv4 entries are
///    ignored because the target schema holds a single fixed IPv4 address.
/// 2. **IPv6**: `dhcp6` wins, otherwise every IPv6 entry is kept in order.
/// 3. **IPv6-only fallback**: if IPv4 is still unset, the adapter is managed
///    (`no_ipam` is false) and IPv6 is configured, IPv4 becomes DHCP. The
///    customization API rejects an adapter without an IPv4 generator.
///
/// `mtu` and `routes` are not translated.
///
/// The optional `sink` observes each decision point. It never affects the
/// result: `translate(results, None)` and `translate(results, Some(sink))`
/// return the same mappings.
///
/// # Errors
///
/// Returns [`AddressParseError`] for the first CIDR that fails to parse.
/// No mappings are returned in that case, even for adapters that were
/// already processed.
pub fn translate(
    results: &[NetworkInterfaceResult],
    sink: Option<&dyn DiagnosticSink>,
) -> Result<Vec<AdapterMapping>, AddressParseError> {
    results
        .iter()
        .enumerate()
        .map(|(adapter_index, result)| {
            AdapterTranslator {
                adapter_index,
                result,
                sink,
            }
            .run()
        })
        .collect()
}

/// Per-adapter state for one pass of the algorithm.
struct AdapterTranslator<'a> {
    adapter_index: usize,
    result: &'a NetworkInterfaceResult,
    sink: Option<&'a dyn DiagnosticSink>,
}

impl AdapterTranslator<'_> {
    fn run(&self) -> Result<AdapterMapping, AddressParseError> {
        let result = self.result;

        self.emit(Decision::AdapterStarted {
            name: &result.name,
            dhcp4: result.dhcp4,
            dhcp6: result.dhcp6,
            no_ipam: result.no_ipam,
            ip_config_count: result.ip_configs.len(),
        });
        for (config_index, config) in result.ip_configs.iter().enumerate() {
            self.emit(Decision::IpConfigSeen {
                config_index,
                config,
            });
        }

        let (mut ipv4, ipv4_reason) = self.select_ipv4()?;
        self.emit(Decision::Ipv4Selected {
            reason: ipv4_reason,
            spec: &ipv4,
        });

        let (ipv6, ipv6_reason) = self.select_ipv6()?;
        self.emit(Decision::Ipv6Selected {
            reason: ipv6_reason,
            spec: &ipv6,
        });

        let ipv4_unset = ipv4.is_unset();
        let ipv6_set = !ipv6.is_unset();
        let applied = ipv4_unset && !result.no_ipam && (ipv6_set || result.dhcp6);
        self.emit(Decision::FallbackEvaluated {
            ipv4_unset,
            no_ipam: result.no_ipam,
            ipv6_set,
            dhcp6: result.dhcp6,
            applied,
        });
        if applied {
            ipv4 = Ipv4Spec::Dhcp;
        }

        let mapping = AdapterMapping {
            mac_address: result.mac_address.clone(),
            ipv4,
            ipv6,
            dns_servers: result.nameservers.clone(),
        };
        self.emit(Decision::Completed { mapping: &mapping });

        Ok(mapping)
    }

    fn select_ipv4(&self) -> Result<(Ipv4Spec, Ipv4Reason), AddressParseError> {
        if self.result.dhcp4 {
            return Ok((Ipv4Spec::Dhcp, Ipv4Reason::Dhcp));
        }
        if self.result.no_ipam {
            return Ok((Ipv4Spec::Unset, Ipv4Reason::NoIpam));
        }

        let Some((config_index, config)) = self.result.ipv4_configs().next() else {
            return Ok((Ipv4Spec::Unset, Ipv4Reason::NoStaticConfig));
        };

        // The isIPv4 flag picks the slot; the CIDR's own family drives the
        // rendering, so an IPv6 CIDR here gets an IPv6-form mask.
        let network = cidr::parse_cidr(&config.cidr).map_err(|e| self.parse_error(config, e))?;
        let spec = Ipv4Spec::Fixed {
            address: network.ip().to_string(),
            subnet_mask: cidr::subnet_mask(&network),
            gateways: config.gateway().map(str::to_string).into_iter().collect(),
        };

        Ok((spec, Ipv4Reason::Static { config_index }))
    }

    fn select_ipv6(&self) -> Result<(Ipv6Spec, Ipv6Reason), AddressParseError> {
        if self.result.dhcp6 {
            return Ok((Ipv6Spec::Dhcp, Ipv6Reason::Dhcp));
        }

        let mut addresses = Vec::new();
        let mut gateways = Vec::new();
        for (_, config) in self.result.ipv6_configs() {
            let network = cidr::parse_cidr(&config.cidr).map_err(|e| self.parse_error(config, e))?;
            addresses.push(FixedIpv6 {
                address: network.ip().to_string(),
                prefix_length: network.prefix(),
            });
            if let Some(gateway) = config.gateway() {
                gateways.push(gateway.to_string());
            }
        }

        if addresses.is_empty() {
            return Ok((Ipv6Spec::Unset, Ipv6Reason::NoStaticConfig));
        }

        let count = addresses.len();
        Ok((
            Ipv6Spec::Static {
                addresses,
                gateways,
            },
            Ipv6Reason::Static { count },
        ))
    }

    fn emit(&self, decision: Decision<'_>) {
        if let Some(sink) = self.sink {
            sink.record(&DiagnosticEvent {
                adapter_index: self.adapter_index,
                mac_address: &self.result.mac_address,
                decision,
            });
        }
    }

    fn parse_error(&self, config: &IpConfig, source: CidrError) -> AddressParseError {
        AddressParseError {
            adapter_index: self.adapter_index,
            mac_address: self.result.mac_address.clone(),
            cidr: config.cidr.clone(),
            source,
        }
    }
}
