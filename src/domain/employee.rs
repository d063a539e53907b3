//! Employee model: a person holding a rank on the ladder.
//!
//! An employee's compensation is never stored; it is read from
//! [`Rank::compensation`] each time, so it cannot drift from the rank.
//!
//! # Identifiers
//!
//! Every employee gets a 4-digit display id ([`EmployeeId`]) when constructed.
//! The default generator picks it at random with no uniqueness check, so two
//! employees can share an id and id lookups return the first match.
//! Separately, each employee carries a process-unique identity used for
//! equality: two `Employee` values are equal only if one is a clone of the
//! other, regardless of their current rank.

use crate::domain::events::{EventSink, RosterEvent};
use crate::domain::person::{Person, Profile};
use crate::domain::rank::Rank;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lowest display id a generator may produce.
pub const MIN_EMPLOYEE_ID: u16 = 1000;

/// Highest display id a generator may produce.
pub const MAX_EMPLOYEE_ID: u16 = 9999;

static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(1);

/// Four-digit employee display id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Builds an id from a number, clamped into the 4-digit range.
    #[must_use]
    pub fn from_number(value: u16) -> Self {
        Self(value.clamp(MIN_EMPLOYEE_ID, MAX_EMPLOYEE_ID).to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of display ids for newly hired employees.
pub trait IdGenerator {
    fn next_id(&mut self) -> EmployeeId;
}

/// Random ids in `1000..=9999`. Collisions are possible.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> EmployeeId {
        EmployeeId::from_number(rand::random_range(MIN_EMPLOYEE_ID..=MAX_EMPLOYEE_ID))
    }
}

/// Counts up from a starting id, wrapping back to 1000 after 9999.
#[derive(Debug, Clone, Copy)]
pub struct SequentialIdGenerator {
    next: u16,
}

impl SequentialIdGenerator {
    #[must_use]
    pub fn starting_at(first: u16) -> Self {
        Self {
            next: first.clamp(MIN_EMPLOYEE_ID, MAX_EMPLOYEE_ID),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(MIN_EMPLOYEE_ID)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> EmployeeId {
        let id = EmployeeId::from_number(self.next);
        self.next = if self.next >= MAX_EMPLOYEE_ID {
            MIN_EMPLOYEE_ID
        } else {
            self.next + 1
        };
        id
    }
}

/// A member of a company's roster.
///
/// Rank changes go through the company that holds the employee, so the
/// roster and the events it emits stay in step. A detached value cannot be
/// promoted:
///
/// ```compile_fail
/// use company_roster::domain::{Employee, Gender, NoopSink, Profile, Rank};
///
/// let mut employee = Employee::new(Profile::new("佐藤 太郎", Gender::Male, 22), Rank::Junior);
/// employee.promote(&NoopSink);
/// ```
#[derive(Debug, Clone)]
pub struct Employee {
    identity: u64,
    profile: Profile,
    rank: Rank,
    id: EmployeeId,
}

impl Employee {
    /// Creates an employee with a random display id.
    #[must_use]
    pub fn new(profile: Profile, rank: Rank) -> Self {
        Self::with_id(profile, rank, RandomIdGenerator.next_id())
    }

    /// Creates an employee with a caller-chosen display id.
    #[must_use]
    pub fn with_id(profile: Profile, rank: Rank, id: EmployeeId) -> Self {
        Self {
            identity: NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed),
            profile,
            rank,
            id,
        }
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn id(&self) -> &EmployeeId {
        &self.id
    }

    /// Current compensation, derived from the rank.
    #[must_use]
    pub const fn compensation(&self) -> u64 {
        self.rank.compensation()
    }

    /// Moves one rank up.
    ///
    /// Returns the new rank, or `None` (and emits [`RosterEvent::AtCeiling`])
    /// when already at the top. Only the owning [`Company`] calls this, on its
    /// own roster entry; snapshots handed out by lookups stay read-only.
    ///
    /// [`Company`]: crate::domain::Company
    pub(crate) fn promote(&mut self, sink: &dyn EventSink) -> Option<Rank> {
        let from = self.rank;
        let Some(to) = from.next() else {
            sink.emit(RosterEvent::AtCeiling {
                name: self.name().to_string(),
                rank: from,
            });
            return None;
        };

        self.rank = to;
        tracing::debug!(employee = %self.name(), from = ?from, to = ?to, "promoted");
        sink.emit(RosterEvent::Promoted {
            name: self.name().to_string(),
            from,
            to,
        });
        Some(to)
    }

    /// Moves one rank down.
    ///
    /// Returns the new rank, or `None` (and emits [`RosterEvent::AtFloor`])
    /// when already at the bottom.
    pub(crate) fn demote(&mut self, sink: &dyn EventSink) -> Option<Rank> {
        let from = self.rank;
        let Some(to) = from.previous() else {
            sink.emit(RosterEvent::AtFloor {
                name: self.name().to_string(),
                rank: from,
            });
            return None;
        };

        self.rank = to;
        tracing::debug!(employee = %self.name(), from = ?from, to = ?to, "demoted");
        sink.emit(RosterEvent::Demoted {
            name: self.name().to_string(),
            from,
            to,
        });
        Some(to)
    }

    /// Strips the employment, leaving the identity attributes.
    #[must_use]
    pub fn into_profile(self) -> Profile {
        self.profile
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Employee {}

impl Person for Employee {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn describe_self(&self) -> String {
        format!(
            "私の名前は{}です。性別は{}で、年齢は{}歳、役職は{}です。",
            self.name(),
            self.gender(),
            self.age(),
            self.rank
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::{EventKind, RecordingSink};
    use crate::domain::person::Gender;

    fn employee(rank: Rank) -> Employee {
        Employee::new(Profile::new("佐藤 太郎", Gender::Male, 22), rank)
    }

    #[test]
    fn random_ids_are_four_digits() {
        for _ in 0..200 {
            let id = RandomIdGenerator.next_id();
            assert_eq!(id.as_str().len(), 4);
            assert!(id.as_str().chars().all(|c| c.is_ascii_digit()));
            let value: u16 = id.as_str().parse().unwrap();
            assert!((MIN_EMPLOYEE_ID..=MAX_EMPLOYEE_ID).contains(&value));
        }
    }

    #[test]
    fn sequential_ids_wrap_after_9999() {
        let mut ids = SequentialIdGenerator::starting_at(9998);
        assert_eq!(ids.next_id().as_str(), "9998");
        assert_eq!(ids.next_id().as_str(), "9999");
        assert_eq!(ids.next_id().as_str(), "1000");
    }

    #[test]
    fn from_number_clamps_into_range() {
        assert_eq!(EmployeeId::from_number(7).as_str(), "1000");
        assert_eq!(EmployeeId::from_number(12_345).as_str(), "9999");
    }

    #[test]
    fn promote_walks_up_one_rung() {
        let sink = RecordingSink::new();
        let mut e = employee(Rank::Junior);

        assert_eq!(e.promote(&sink), Some(Rank::Lead));
        assert_eq!(e.compensation(), 300_000);
        assert_eq!(
            sink.last(),
            Some(RosterEvent::Promoted {
                name: "佐藤 太郎".into(),
                from: Rank::Junior,
                to: Rank::Lead,
            })
        );
    }

    #[test]
    fn promote_at_ceiling_is_a_reported_no_op() {
        let sink = RecordingSink::new();
        let mut e = employee(Rank::Executive);

        assert_eq!(e.promote(&sink), None);
        assert_eq!(e.rank(), Rank::Executive);
        assert_eq!(e.compensation(), 600_000);
        assert_eq!(sink.kinds(), vec![EventKind::AtCeiling]);
    }

    #[test]
    fn demote_at_floor_is_a_reported_no_op() {
        let sink = RecordingSink::new();
        let mut e = employee(Rank::Junior);

        assert_eq!(e.demote(&sink), None);
        assert_eq!(e.rank(), Rank::Junior);
        assert_eq!(sink.kinds(), vec![EventKind::AtFloor]);
    }

    #[test]
    fn promote_twice_then_demote() {
        let sink = RecordingSink::new();
        let mut e = employee(Rank::Junior);

        e.promote(&sink);
        e.promote(&sink);
        e.demote(&sink);

        assert_eq!(e.rank(), Rank::Lead);
        assert_eq!(
            sink.kinds(),
            vec![EventKind::Promoted, EventKind::Promoted, EventKind::Demoted]
        );
    }

    #[test]
    fn compensation_is_stable_between_reads() {
        for rank in Rank::LADDER {
            let e = employee(rank);
            assert_eq!(e.compensation(), rank.compensation());
            assert_eq!(e.compensation(), e.compensation());
        }
    }

    #[test]
    fn equality_follows_identity_not_attributes() {
        let a = employee(Rank::Lead);
        let twin = Employee::with_id(
            Profile::new("佐藤 太郎", Gender::Male, 22),
            Rank::Lead,
            a.id().clone(),
        );
        let mut snapshot = a.clone();
        snapshot.promote(&crate::domain::NoopSink);

        assert_ne!(a, twin);
        assert_eq!(a, snapshot);
    }

    #[test]
    fn introduction_mentions_rank() {
        let e = employee(Rank::Manager);
        assert_eq!(
            e.describe_self(),
            "私の名前は佐藤 太郎です。性別は男性で、年齢は22歳、役職は課長です。"
        );
    }
}
