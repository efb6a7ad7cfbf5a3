//! Observer side channel for translation decisions.
//!
//! The translator reports a fixed set of decision points to an optional
//! [`DiagnosticSink`]. Sinks are write-only: nothing they do can change
//! the computed mappings, and passing no sink is always valid.
//!
//! This module provides:
//! - The sink trait ([`DiagnosticSink`]) and a discarding sink ([`NoopSink`])
//! - A sink that forwards to `tracing` ([`TracingSink`])
//! - The structured events ([`DiagnosticEvent`], [`Decision`], [`Level`])

mod event;
mod tracing_sink;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use event::{Decision, DiagnosticEvent, Ipv4Reason, Ipv6Reason, Level};
pub use tracing_sink::TracingSink;

/// Receives structured translation events.
///
/// # Example
///
/// ```
/// use std::sync::Mutex;
///
/// use gosc_map::diagnostics::{DiagnosticEvent, DiagnosticSink};
///
/// #[derive(Default)]
/// struct CountingSink(Mutex<usize>);
///
/// impl DiagnosticSink for CountingSink {
///     fn record(&self, _event: &DiagnosticEvent<'_>) {
///         *self.0.lock().unwrap() += 1;
///     }
/// }
/// ```
pub trait DiagnosticSink: Send + Sync {
    /// Records one event.
    fn record(&self, event: &DiagnosticEvent<'_>);
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _event: &DiagnosticEvent<'_>) {}
}
