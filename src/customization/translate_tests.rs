//! Tests for the adapter translator.

use super::translate::translate;
use super::{AdapterMapping, FixedIpv6, Ipv4Spec, Ipv6Spec};
use crate::diagnostics::test_fixtures::RecordingSink;
use crate::diagnostics::{Level, NoopSink};
use crate::network::{CidrError, IpConfig, NetworkInterfaceResult};

// ============================================================================
// Test Fixtures
// ============================================================================

const MAC: &str = "50:8A:80:9D:28:22";
const IPV4_GATEWAY: &str = "192.168.1.1";
const IPV4_CIDR: &str = "192.168.1.10/24";
const IPV6_GATEWAY: &str = "fd8e:b5a0:f172:123::1";
const IPV6_CIDR: &str = "fd8e:b5a0:f172:123::f/48";
const DNS_SERVER: &str = "9.9.9.9";

fn adapter() -> NetworkInterfaceResult {
    NetworkInterfaceResult::new(MAC)
        .with_name("eth0")
        .with_mtu(1500)
        .with_nameservers([DNS_SERVER])
}

fn dual_stack_static() -> NetworkInterfaceResult {
    adapter()
        .with_ip_config(IpConfig::ipv4(IPV4_CIDR, IPV4_GATEWAY))
        .with_ip_config(IpConfig::ipv6(IPV6_CIDR, IPV6_GATEWAY))
}

fn translate_one(result: NetworkInterfaceResult) -> AdapterMapping {
    let mut mappings = translate(&[result], None).unwrap();
    assert_eq!(mappings.len(), 1);
    mappings.remove(0)
}

fn fixed_v4(address: &str, mask: &str, gateways: &[&str]) -> Ipv4Spec {
    Ipv4Spec::Fixed {
        address: address.to_string(),
        subnet_mask: mask.to_string(),
        gateways: gateways.iter().map(ToString::to_string).collect(),
    }
}

fn static_v6(addresses: &[(&str, u8)], gateways: &[&str]) -> Ipv6Spec {
    Ipv6Spec::Static {
        addresses: addresses
            .iter()
            .map(|(address, prefix_length)| FixedIpv6 {
                address: (*address).to_string(),
                prefix_length: *prefix_length,
            })
            .collect(),
        gateways: gateways.iter().map(ToString::to_string).collect(),
    }
}

// ============================================================================
// Scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn static_dual_stack() {
        let mapping = translate_one(dual_stack_static());

        assert_eq!(mapping.mac_address, MAC);
        assert_eq!(
            mapping.ipv4,
            fixed_v4("192.168.1.10", "255.255.255.0", &[IPV4_GATEWAY])
        );
        assert_eq!(
            mapping.ipv6,
            static_v6(&[("fd8e:b5a0:f172:123::f", 48)], &[IPV6_GATEWAY])
        );
        assert_eq!(mapping.dns_servers, [DNS_SERVER]);
    }

    #[test]
    fn static_dual_stack_without_gateways() {
        let mut result = dual_stack_static();
        result.ip_configs[0].gateway.clear();
        result.ip_configs[1].gateway.clear();

        let mapping = translate_one(result);

        assert_eq!(mapping.ipv4, fixed_v4("192.168.1.10", "255.255.255.0", &[]));
        assert_eq!(mapping.ipv6, static_v6(&[("fd8e:b5a0:f172:123::f", 48)], &[]));
        assert_eq!(mapping.dns_servers, [DNS_SERVER]);
    }

    #[test]
    fn dual_dhcp() {
        let mapping = translate_one(adapter().with_dhcp4(true).with_dhcp6(true));

        assert_eq!(mapping.mac_address, MAC);
        assert_eq!(mapping.ipv4, Ipv4Spec::Dhcp);
        assert_eq!(mapping.ipv6, Ipv6Spec::Dhcp);
    }

    #[test]
    fn unmanaged_adapter_gets_nothing() {
        let mapping = translate_one(NetworkInterfaceResult::new(MAC).with_no_ipam(true));

        assert_eq!(mapping.ipv4, Ipv4Spec::Unset);
        assert_eq!(mapping.ipv6, Ipv6Spec::Unset);
        assert!(mapping.dns_servers.is_empty());
    }

    #[test]
    fn ipv6_only_static_gets_dhcp_placeholder() {
        let mapping = translate_one(
            NetworkInterfaceResult::new(MAC)
                .with_ip_config(IpConfig::ipv6("2001:db8::100/64", "2001:db8::1"))
                .with_nameservers(["2001:4860:4860::8888"]),
        );

        assert_eq!(mapping.ipv4, Ipv4Spec::Dhcp);
        assert_eq!(
            mapping.ipv6,
            static_v6(&[("2001:db8::100", 64)], &["2001:db8::1"])
        );
        assert_eq!(mapping.dns_servers, ["2001:4860:4860::8888"]);
    }

    #[test]
    fn malformed_cidr_fails_whole_call() {
        let result = adapter().with_ip_config(IpConfig::ipv4("not-an-address", ""));

        let err = translate(&[result], None).unwrap_err();

        assert_eq!(err.adapter_index, 0);
        assert_eq!(err.mac_address, MAC);
        assert_eq!(err.cidr, "not-an-address");
        assert!(matches!(err.source, CidrError::MissingPrefix));
    }

    #[test]
    fn ipv4_only_static() {
        let mapping = translate_one(
            adapter().with_ip_config(IpConfig::ipv4("192.168.1.100/24", "192.168.1.1")),
        );

        assert_eq!(
            mapping.ipv4,
            fixed_v4("192.168.1.100", "255.255.255.0", &["192.168.1.1"])
        );
        assert_eq!(mapping.ipv6, Ipv6Spec::Unset);
    }

    #[test]
    fn dhcp4_with_static_ipv6() {
        let mapping = translate_one(
            adapter()
                .with_dhcp4(true)
                .with_ip_config(IpConfig::ipv6("2001:db8::100/64", "2001:db8::1")),
        );

        assert_eq!(mapping.ipv4, Ipv4Spec::Dhcp);
        assert_eq!(
            mapping.ipv6,
            static_v6(&[("2001:db8::100", 64)], &["2001:db8::1"])
        );
    }

    #[test]
    fn static_ipv4_with_dhcp6() {
        let mapping = translate_one(
            adapter()
                .with_dhcp6(true)
                .with_ip_config(IpConfig::ipv4("10.20.30.40/16", "10.20.0.1"))
                .with_ip_config(IpConfig::ipv6("2001:db8::100/64", "2001:db8::1")),
        );

        assert_eq!(
            mapping.ipv4,
            fixed_v4("10.20.30.40", "255.255.0.0", &["10.20.0.1"])
        );
        assert_eq!(mapping.ipv6, Ipv6Spec::Dhcp);
    }

    #[test]
    fn dhcp6_only_gets_dhcp_placeholder() {
        let mapping = translate_one(adapter().with_dhcp6(true));

        assert_eq!(mapping.ipv4, Ipv4Spec::Dhcp);
        assert_eq!(mapping.ipv6, Ipv6Spec::Dhcp);
    }

    #[test]
    fn no_ipam_with_static_ipv6_skips_fallback() {
        let mapping = translate_one(
            adapter()
                .with_no_ipam(true)
                .with_ip_config(IpConfig::ipv6("2001:db8::100/64", "")),
        );

        assert_eq!(mapping.ipv4, Ipv4Spec::Unset);
        assert_eq!(mapping.ipv6, static_v6(&[("2001:db8::100", 64)], &[]));
    }

    #[test]
    fn no_ipam_with_dhcp6_skips_fallback() {
        let mapping = translate_one(adapter().with_no_ipam(true).with_dhcp6(true));

        assert_eq!(mapping.ipv4, Ipv4Spec::Unset);
        assert_eq!(mapping.ipv6, Ipv6Spec::Dhcp);
    }

    #[test]
    fn dhcp4_wins_over_no_ipam() {
        let mapping = translate_one(adapter().with_dhcp4(true).with_no_ipam(true));

        assert_eq!(mapping.ipv4, Ipv4Spec::Dhcp);
    }

    #[test]
    fn no_ipam_ignores_static_ipv4() {
        let mapping = translate_one(
            adapter()
                .with_no_ipam(true)
                .with_ip_config(IpConfig::ipv4(IPV4_CIDR, IPV4_GATEWAY)),
        );

        assert_eq!(mapping.ipv4, Ipv4Spec::Unset);
        assert_eq!(mapping.ipv6, Ipv6Spec::Unset);
    }

    #[test]
    fn nothing_configured_stays_unset() {
        let mapping = translate_one(adapter());

        assert_eq!(mapping.ipv4, Ipv4Spec::Unset);
        assert_eq!(mapping.ipv6, Ipv6Spec::Unset);
    }
}

// ============================================================================
// Selection rules
// ============================================================================

mod selection {
    use super::*;

    #[test]
    fn first_ipv4_entry_wins() {
        let mapping = translate_one(
            adapter()
                .with_ip_config(IpConfig::ipv6("2001:db8::a/64", ""))
                .with_ip_config(IpConfig::ipv4("10.0.0.1/24", "10.0.0.254"))
                .with_ip_config(IpConfig::ipv4("172.16.0.1/12", "172.16.0.254")),
        );

        assert_eq!(
            mapping.ipv4,
            fixed_v4("10.0.0.1", "255.255.255.0", &["10.0.0.254"])
        );
    }

    #[test]
    fn all_ipv6_entries_kept_in_order() {
        let mapping = translate_one(
            adapter()
                .with_ip_config(IpConfig::ipv6("2001:db8::a/64", "2001:db8::1"))
                .with_ip_config(IpConfig::ipv4("10.0.0.1/24", ""))
                .with_ip_config(IpConfig::ipv6("fd00::b/56", ""))
                .with_ip_config(IpConfig::ipv6("fd00:1::c/120", "fd00:1::1")),
        );

        assert_eq!(
            mapping.ipv6,
            static_v6(
                &[("2001:db8::a", 64), ("fd00::b", 56), ("fd00:1::c", 120)],
                &["2001:db8::1", "fd00:1::1"]
            )
        );
    }

    #[test]
    fn addresses_rendered_canonically() {
        let mapping = translate_one(
            adapter()
                .with_ip_config(IpConfig::ipv4("192.168.1.10/24", ""))
                .with_ip_config(IpConfig::ipv6("2001:DB8:0:0:0:0:0:100/64", "")),
        );

        assert_eq!(mapping.ipv4, fixed_v4("192.168.1.10", "255.255.255.0", &[]));
        assert_eq!(mapping.ipv6, static_v6(&[("2001:db8::100", 64)], &[]));
    }

    #[test]
    fn gateways_copied_verbatim() {
        let mapping = translate_one(
            adapter().with_ip_config(IpConfig::ipv6("2001:db8::a/64", "2001:DB8::1")),
        );

        assert_eq!(
            mapping.ipv6,
            static_v6(&[("2001:db8::a", 64)], &["2001:DB8::1"])
        );
    }

    #[test]
    fn ipv4_cidr_flagged_ipv6_joins_ipv6_list() {
        let result = adapter().with_ip_config(IpConfig::ipv6("10.0.0.5/24", ""));

        let mapping = translate_one(result);

        assert_eq!(mapping.ipv6, static_v6(&[("10.0.0.5", 24)], &[]));
        assert_eq!(mapping.ipv4, Ipv4Spec::Dhcp);
    }

    #[test]
    fn ipv6_cidr_flagged_ipv4_gets_ipv6_mask() {
        let result = adapter().with_ip_config(IpConfig::ipv4("2001:db8::5/64", "2001:db8::1"));

        let mapping = translate_one(result);

        assert_eq!(
            mapping.ipv4,
            fixed_v4("2001:db8::5", "ffff:ffff:ffff:ffff::", &["2001:db8::1"])
        );
        assert_eq!(mapping.ipv6, Ipv6Spec::Unset);
    }

    #[test]
    fn host_bits_are_not_masked() {
        let mapping = translate_one(adapter().with_ip_config(IpConfig::ipv4("10.1.2.3/8", "")));

        assert_eq!(mapping.ipv4, fixed_v4("10.1.2.3", "255.0.0.0", &[]));
    }

    #[test]
    fn mtu_and_routes_are_ignored() {
        let mut with_extras = dual_stack_static();
        with_extras.mtu = Some(9000);
        with_extras.routes.push(crate::network::Route {
            to: "10.0.0.0/8".to_string(),
            via: IPV4_GATEWAY.to_string(),
            metric: 100,
        });
        let mut without_extras = dual_stack_static();
        without_extras.mtu = None;

        assert_eq!(translate_one(with_extras), translate_one(without_extras));
    }
}

// ============================================================================
// Errors
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn later_adapter_failure_discards_earlier_results() {
        let good = dual_stack_static();
        let bad = NetworkInterfaceResult::new("00:00:00:00:00:02")
            .with_ip_config(IpConfig::ipv6("2001:db8::1/200", ""));

        let err = translate(&[good.clone(), good, bad], None).unwrap_err();

        assert_eq!(err.adapter_index, 2);
        assert_eq!(err.mac_address, "00:00:00:00:00:02");
        assert_eq!(err.cidr, "2001:db8::1/200");
        assert!(matches!(
            err.source,
            CidrError::PrefixOutOfRange { max: 128, .. }
        ));
    }

    #[test]
    fn first_bad_adapter_is_reported() {
        let bad1 = NetworkInterfaceResult::new("a").with_ip_config(IpConfig::ipv4("x/24", ""));
        let bad2 = NetworkInterfaceResult::new("b").with_ip_config(IpConfig::ipv4("y/24", ""));

        let err = translate(&[bad1, bad2], None).unwrap_err();

        assert_eq!(err.mac_address, "a");
    }

    #[test]
    fn message_names_adapter_and_cidr() {
        let bad = NetworkInterfaceResult::new(MAC).with_ip_config(IpConfig::ipv4("10.0.0.1", ""));

        let err = translate(&[bad], None).unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("adapter 0 ({MAC}): invalid CIDR '10.0.0.1': missing prefix length")
        );
    }

    #[test]
    fn leading_zero_prefix_is_rejected() {
        let bad = adapter().with_ip_config(IpConfig::ipv4("192.168.1.10/024", ""));

        let err = translate(&[bad], None).unwrap_err();

        assert_eq!(err.cidr, "192.168.1.10/024");
        assert!(matches!(
            err.source,
            CidrError::InvalidPrefix { ref prefix } if prefix == "024"
        ));
    }

    #[test]
    fn unused_ipv4_entries_are_not_parsed() {
        let result = adapter()
            .with_ip_config(IpConfig::ipv4("10.0.0.1/24", ""))
            .with_ip_config(IpConfig::ipv4("garbage", ""));

        let mapping = translate_one(result);

        assert_eq!(mapping.ipv4, fixed_v4("10.0.0.1", "255.255.255.0", &[]));
    }

    #[test]
    fn dhcp_skips_parsing_of_that_family() {
        let result = adapter()
            .with_dhcp4(true)
            .with_dhcp6(true)
            .with_ip_config(IpConfig::ipv4("bad-v4", ""))
            .with_ip_config(IpConfig::ipv6("bad-v6", ""));

        let mapping = translate_one(result);

        assert_eq!(mapping.ipv4, Ipv4Spec::Dhcp);
        assert_eq!(mapping.ipv6, Ipv6Spec::Dhcp);
    }

    #[test]
    fn ipv4_parsed_before_ipv6() {
        let result = adapter()
            .with_ip_config(IpConfig::ipv6("bad-v6", ""))
            .with_ip_config(IpConfig::ipv4("bad-v4", ""));

        let err = translate(&[result], None).unwrap_err();

        assert_eq!(err.cidr, "bad-v4");
    }
}

// ============================================================================
// Properties
// ============================================================================

mod properties {
    use super::*;

    fn mixed_batch() -> Vec<NetworkInterfaceResult> {
        vec![
            dual_stack_static(),
            NetworkInterfaceResult::new("00:00:00:00:00:02")
                .with_dhcp4(true)
                .with_dhcp6(true),
            NetworkInterfaceResult::new("00:00:00:00:00:03").with_no_ipam(true),
            NetworkInterfaceResult::new("00:00:00:00:00:04")
                .with_ip_config(IpConfig::ipv6("2001:db8::100/64", "2001:db8::1")),
            NetworkInterfaceResult::new("00:00:00:00:00:05"),
        ]
    }

    #[test]
    fn order_and_count_preserved() {
        let input = mixed_batch();

        let output = translate(&input, None).unwrap();

        assert_eq!(output.len(), input.len());
        for (mapping, result) in output.iter().zip(&input) {
            assert_eq!(mapping.mac_address, result.mac_address);
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(translate(&[], None).unwrap().is_empty());
    }

    #[test]
    fn deterministic() {
        let input = mixed_batch();

        assert_eq!(
            translate(&input, None).unwrap(),
            translate(&input, None).unwrap()
        );
    }

    #[test]
    fn adapters_do_not_interact() {
        let input = mixed_batch();
        let batch = translate(&input, None).unwrap();

        for (i, result) in input.iter().enumerate() {
            assert_eq!(translate_one(result.clone()), batch[i]);
        }
    }

    #[test]
    fn sink_does_not_change_output() {
        let input = mixed_batch();
        let recording = RecordingSink::default();

        let without = translate(&input, None).unwrap();
        let with_recording = translate(&input, Some(&recording)).unwrap();
        let with_noop = translate(&input, Some(&NoopSink)).unwrap();

        assert_eq!(without, with_recording);
        assert_eq!(without, with_noop);
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

mod diagnostics {
    use super::*;

    #[test]
    fn decision_points_in_order() {
        let sink = RecordingSink::default();

        translate(&[dual_stack_static()], Some(&sink)).unwrap();

        assert_eq!(
            sink.decisions(),
            [
                "adapter_started",
                "ip_config_seen",
                "ip_config_seen",
                "ipv4_selected",
                "ipv6_selected",
                "fallback_evaluated",
                "completed",
            ]
        );
    }

    #[test]
    fn events_carry_adapter_identity() {
        let sink = RecordingSink::default();
        let input = [
            NetworkInterfaceResult::new("aa").with_dhcp4(true),
            NetworkInterfaceResult::new("bb").with_dhcp4(true),
        ];

        translate(&input, Some(&sink)).unwrap();

        let second = sink.for_adapter(1);
        assert!(!second.is_empty());
        assert!(second.iter().all(|e| e.mac_address == "bb"));
    }

    #[test]
    fn fallback_applied_is_reported_at_info() {
        let sink = RecordingSink::default();
        let input = [NetworkInterfaceResult::new(MAC).with_dhcp6(true)];

        translate(&input, Some(&sink)).unwrap();

        let fallback = sink
            .events()
            .into_iter()
            .find(|e| e.decision == "fallback_evaluated")
            .unwrap();
        assert_eq!(fallback.fallback_applied, Some(true));
        assert_eq!(fallback.level, Level::Info);
    }

    #[test]
    fn fallback_skipped_for_no_ipam() {
        let sink = RecordingSink::default();
        let input = [NetworkInterfaceResult::new(MAC)
            .with_no_ipam(true)
            .with_dhcp6(true)];

        translate(&input, Some(&sink)).unwrap();

        let fallback = sink
            .events()
            .into_iter()
            .find(|e| e.decision == "fallback_evaluated")
            .unwrap();
        assert_eq!(fallback.fallback_applied, Some(false));
        assert_eq!(fallback.level, Level::Debug);
    }

    #[test]
    fn selection_reasons_recorded() {
        let sink = RecordingSink::default();

        translate(&[dual_stack_static()], Some(&sink)).unwrap();

        let events = sink.events();
        let ipv4 = events.iter().find(|e| e.decision == "ipv4_selected").unwrap();
        let ipv6 = events.iter().find(|e| e.decision == "ipv6_selected").unwrap();
        assert!(ipv4.detail.contains("Static { config_index: 0 }"));
        assert!(ipv6.detail.contains("Static { count: 1 }"));
    }

    #[test]
    fn ipv4_reason_indexes_into_all_configs() {
        let sink = RecordingSink::default();
        let result = adapter()
            .with_ip_config(IpConfig::ipv6(IPV6_CIDR, ""))
            .with_ip_config(IpConfig::ipv4(IPV4_CIDR, ""))
            .with_ip_config(IpConfig::ipv4("10.9.9.9/8", ""));

        translate(&[result], Some(&sink)).unwrap();

        let events = sink.events();
        let ipv4 = events.iter().find(|e| e.decision == "ipv4_selected").unwrap();
        assert!(ipv4.detail.contains("Static { config_index: 1 }"), "{}", ipv4.detail);
    }

    #[test]
    fn failure_stops_events_for_bad_adapter() {
        let sink = RecordingSink::default();
        let bad = NetworkInterfaceResult::new(MAC).with_ip_config(IpConfig::ipv4("bad", ""));

        assert!(translate(&[bad], Some(&sink)).is_err());

        let decisions = sink.decisions();
        assert!(decisions.contains(&"adapter_started"));
        assert!(!decisions.contains(&"completed"));
    }
}
