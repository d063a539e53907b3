//! Roster events and the sink port they are emitted through.
//!
//! Every roster operation reports its outcome as a [`RosterEvent`] instead of
//! printing. The domain only knows the [`EventSink`] trait; rendering,
//! logging and journaling live in the `ui` and `observability` layers.

use crate::domain::employee::EmployeeId;
use crate::domain::rank::Rank;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};

/// Roster mutations that require a company and an active president.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    AddEmployee,
    DeleteEmployee,
    PromoteEmployee,
    DemoteEmployee,
    Resign,
}

/// Why a resignation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResignRejection {
    /// Nobody is left on the roster to take over.
    EmptyRoster,
    /// Selection found no candidate although the roster was not empty.
    NoCandidate,
}

/// An observable outcome of a roster operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RosterEvent {
    /// A new employee joined the roster.
    Hired { name: String, id: EmployeeId, rank: Rank },

    /// The roster was full; the candidate was not hired.
    CapacityReached { name: String, limit: usize },

    /// An employee was removed from the roster.
    Removed { name: String, id: EmployeeId },

    /// The employee named in a delete/promote/demote is not on the roster.
    NotOnRoster { name: String, id: EmployeeId },

    Promoted { name: String, from: Rank, to: Rank },

    Demoted { name: String, from: Rank, to: Rank },

    /// Promotion requested at the top rank; nothing changed.
    AtCeiling { name: String, rank: Rank },

    /// Demotion requested at the bottom rank; nothing changed.
    AtFloor { name: String, rank: Rank },

    /// A president without a company attempted a roster operation.
    NoCompany { actor: String, operation: Operation },

    ResignationRejected { president: String, reason: ResignRejection },

    /// The presidency passed from `outgoing` to `incoming`.
    SuccessionCompleted { outgoing: String, incoming: String },

    /// A president who already resigned attempted a roster operation.
    PresidentRetired { president: String, operation: Operation },
}

/// Discriminant of a [`RosterEvent`], for classifying what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Hired,
    CapacityReached,
    Removed,
    NotOnRoster,
    Promoted,
    Demoted,
    AtCeiling,
    AtFloor,
    NoCompany,
    ResignationRejected,
    SuccessionCompleted,
    PresidentRetired,
}

impl RosterEvent {
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Hired { .. } => EventKind::Hired,
            Self::CapacityReached { .. } => EventKind::CapacityReached,
            Self::Removed { .. } => EventKind::Removed,
            Self::NotOnRoster { .. } => EventKind::NotOnRoster,
            Self::Promoted { .. } => EventKind::Promoted,
            Self::Demoted { .. } => EventKind::Demoted,
            Self::AtCeiling { .. } => EventKind::AtCeiling,
            Self::AtFloor { .. } => EventKind::AtFloor,
            Self::NoCompany { .. } => EventKind::NoCompany,
            Self::ResignationRejected { .. } => EventKind::ResignationRejected,
            Self::SuccessionCompleted { .. } => EventKind::SuccessionCompleted,
            Self::PresidentRetired { .. } => EventKind::PresidentRetired,
        }
    }

    /// Whether the operation that produced this event left state unchanged.
    #[must_use]
    pub const fn is_no_op(&self) -> bool {
        !matches!(
            self,
            Self::Hired { .. }
                | Self::Removed { .. }
                | Self::Promoted { .. }
                | Self::Demoted { .. }
                | Self::SuccessionCompleted { .. }
        )
    }
}

/// Receiver for roster events.
///
/// Implementations can be:
/// - `ConsoleSink`: prints the rendered notice
/// - `TracingSink`: structured `tracing` events
/// - `JournalSink`: JSON lines appended to a file
/// - [`NoopSink`]: silent operation
pub trait EventSink: Send + Sync {
    fn emit(&self, event: RosterEvent);
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&self, _event: RosterEvent) {}
}

/// Sink that keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<RosterEvent>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<RosterEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events().iter().map(RosterEvent::kind).collect()
    }

    #[must_use]
    pub fn last(&self) -> Option<RosterEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: RosterEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
