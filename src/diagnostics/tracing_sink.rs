//! Sink that forwards decision events to `tracing`.

use super::{Decision, DiagnosticEvent, DiagnosticSink, Level};

/// Emits a `tracing` event at a level only known at runtime.
macro_rules! event_at {
    ($level:expr, $($fields:tt)+) => {
        match $level {
            Level::Info => tracing::info!($($fields)+),
            Level::Debug => tracing::debug!($($fields)+),
            Level::Trace => tracing::trace!($($fields)+),
        }
    };
}

/// Emits each event as a structured `tracing` event.
///
/// Every event carries `adapter_index`, `mac_address` and `decision`
/// fields, plus keys specific to the decision point. The level follows
/// [`DiagnosticEvent::level`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: &DiagnosticEvent<'_>) {
        let adapter_index = event.adapter_index;
        let mac_address = event.mac_address;
        let decision = event.decision.name();
        let level = event.level();

        match event.decision {
            Decision::AdapterStarted {
                name,
                dhcp4,
                dhcp6,
                no_ipam,
                ip_config_count,
            } => event_at!(
                level,
                adapter_index,
                mac_address,
                decision,
                interface_name = name,
                dhcp4,
                dhcp6,
                no_ipam,
                ip_config_count,
                "Processing adapter"
            ),
            Decision::IpConfigSeen {
                config_index,
                config,
            } => event_at!(
                level,
                adapter_index,
                mac_address,
                decision,
                config_index,
                cidr = %config.cidr,
                is_ipv4 = config.is_ipv4,
                gateway = %config.gateway,
                "IP config"
            ),
            Decision::Ipv4Selected { reason, spec } => event_at!(
                level,
                adapter_index,
                mac_address,
                decision,
                reason = %reason,
                ipv4 = %spec,
                "Selected IPv4 assignment"
            ),
            Decision::Ipv6Selected { reason, spec } => event_at!(
                level,
                adapter_index,
                mac_address,
                decision,
                reason = %reason,
                ipv6 = %spec,
                "Selected IPv6 assignment"
            ),
            Decision::FallbackEvaluated {
                ipv4_unset,
                no_ipam,
                ipv6_set,
                dhcp6,
                applied: true,
            } => event_at!(
                level,
                adapter_index,
                mac_address,
                decision,
                ipv4_unset,
                no_ipam,
                ipv6_set,
                dhcp6,
                "Applied IPv6-only fallback: IPv4 set to DHCP"
            ),
            Decision::FallbackEvaluated {
                ipv4_unset,
                no_ipam,
                ipv6_set,
                dhcp6,
                applied: false,
            } => event_at!(
                level,
                adapter_index,
                mac_address,
                decision,
                ipv4_unset,
                no_ipam,
                ipv6_set,
                dhcp6,
                "IPv6-only fallback not needed"
            ),
            Decision::Completed { mapping } => event_at!(
                level,
                adapter_index,
                mac_address,
                decision,
                ipv4 = %mapping.ipv4,
                ipv6 = %mapping.ipv6,
                dns_servers = ?mapping.dns_servers,
                "Final adapter state"
            ),
        }
    }
}
