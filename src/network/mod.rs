//! Input side of the translation: desired interface configuration.
//!
//! This module provides:
//! - Per-adapter results ([`NetworkInterfaceResult`], [`NetworkInterfaceResults`])
//! - Address assignments and routes ([`IpConfig`], [`Route`])
//! - CIDR parsing helpers ([`cidr`])

pub mod cidr;
mod interface;

pub use cidr::CidrError;
pub use interface::{IpConfig, NetworkInterfaceResult, NetworkInterfaceResults, Route};
