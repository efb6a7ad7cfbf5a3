//! GOSC-MAP: guest OS customization adapter mapper
//!
//! A library for translating per-interface network results (DHCP flags,
//! static CIDR addresses, gateways, nameservers) into the adapter
//! customization records a hypervisor applies inside a guest.

pub mod config;
pub mod customization;
pub mod diagnostics;
pub mod network;
