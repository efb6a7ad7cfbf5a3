//! Shared test fixtures for observing translation decisions.

use std::sync::Mutex;

use super::{Decision, DiagnosticEvent, DiagnosticSink, Level};

/// Owned copy of a [`DiagnosticEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    pub adapter_index: usize,
    pub mac_address: String,
    pub decision: &'static str,
    pub level: Level,
    /// `Debug` rendering of the decision payload.
    pub detail: String,
    /// Set only for `fallback_evaluated` events.
    pub fallback_applied: Option<bool>,
}

/// Sink that keeps every event it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Decision names in arrival order.
    pub fn decisions(&self) -> Vec<&'static str> {
        self.events().iter().map(|e| e.decision).collect()
    }

    /// Events for one adapter.
    pub fn for_adapter(&self, adapter_index: usize) -> Vec<RecordedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.adapter_index == adapter_index)
            .collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, event: &DiagnosticEvent<'_>) {
        let fallback_applied = match event.decision {
            Decision::FallbackEvaluated { applied, .. } => Some(applied),
            _ => None,
        };

        self.events.lock().unwrap().push(RecordedEvent {
            adapter_index: event.adapter_index,
            mac_address: event.mac_address.to_string(),
            decision: event.decision.name(),
            level: event.level(),
            detail: format!("{:?}", event.decision),
            fallback_applied,
        });
    }
}
