//! Guest OS customization adapter mappings.
//!
//! This module provides:
//! - The per-adapter output record ([`AdapterMapping`])
//! - Per-family assignments ([`Ipv4Spec`], [`Ipv6Spec`], [`FixedIpv6`])
//! - The translator ([`translate`]) and its error ([`AddressParseError`])

mod error;
mod mapping;
mod translate;

#[cfg(test)]
mod translate_tests;

pub use error::AddressParseError;
pub use mapping::{AdapterMapping, FixedIpv6, Ipv4Spec, Ipv6Spec};
pub use translate::translate;
