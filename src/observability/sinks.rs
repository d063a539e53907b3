//! Event sinks that forward roster events to `tracing` or to several sinks.

use crate::domain::{EventSink, RosterEvent};
use std::sync::Arc;

/// Forwards every roster event as a structured `tracing` event.
///
/// Successful mutations are logged at `info`, reported no-ops at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: RosterEvent) {
        let kind = event.kind();
        match &event {
            RosterEvent::Hired { name, id, rank } => {
                tracing::info!(?kind, employee = %name, %id, ?rank, "employee hired");
            }
            RosterEvent::Removed { name, id } => {
                tracing::info!(?kind, employee = %name, %id, "employee removed");
            }
            RosterEvent::Promoted { name, from, to } | RosterEvent::Demoted { name, from, to } => {
                tracing::info!(?kind, employee = %name, ?from, ?to, "rank changed");
            }
            RosterEvent::SuccessionCompleted { outgoing, incoming } => {
                tracing::info!(?kind, %outgoing, %incoming, "presidency transferred");
            }
            RosterEvent::CapacityReached { name, limit } => {
                tracing::debug!(?kind, candidate = %name, limit, "hire refused");
            }
            RosterEvent::NotOnRoster { name, id } => {
                tracing::debug!(?kind, employee = %name, %id, "employee not on roster");
            }
            RosterEvent::AtCeiling { name, rank } | RosterEvent::AtFloor { name, rank } => {
                tracing::debug!(?kind, employee = %name, ?rank, "rank unchanged");
            }
            RosterEvent::NoCompany { actor, operation } => {
                tracing::debug!(?kind, president = %actor, ?operation, "no company assigned");
            }
            RosterEvent::ResignationRejected { president, reason } => {
                tracing::debug!(?kind, %president, ?reason, "resignation refused");
            }
            RosterEvent::PresidentRetired { president, operation } => {
                tracing::debug!(?kind, %president, ?operation, "retired president rejected");
            }
        }
    }
}

/// Broadcasts each event to every inner sink, in order.
#[derive(Default, Clone)]
pub struct FanoutSink {
    sinks: Vec<Arc<dyn EventSink>>,
}

impl FanoutSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl EventSink for FanoutSink {
    fn emit(&self, event: RosterEvent) {
        for sink in &self.sinks {
            sink.emit(event.clone());
        }
    }
}

impl std::fmt::Debug for FanoutSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanoutSink")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Rank, RecordingSink};

    #[test]
    fn fanout_delivers_to_every_sink() {
        let first = Arc::new(RecordingSink::new());
        let second = Arc::new(RecordingSink::new());
        let fanout = FanoutSink::new()
            .with(first.clone())
            .with(Arc::new(TracingSink))
            .with(second.clone());

        let event = RosterEvent::AtCeiling {
            name: "a".into(),
            rank: Rank::Executive,
        };
        fanout.emit(event.clone());

        assert_eq!(fanout.len(), 3);
        assert_eq!(first.events(), vec![event.clone()]);
        assert_eq!(second.events(), vec![event]);
    }

    #[test]
    fn empty_fanout_is_silent() {
        let fanout = FanoutSink::new();
        assert!(fanout.is_empty());
        fanout.emit(RosterEvent::SuccessionCompleted {
            outgoing: "a".into(),
            incoming: "b".into(),
        });
    }
}
