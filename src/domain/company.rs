//! Company: the bounded, insertion-ordered roster of employees.
//!
//! The company owns its employees and decides who may join (capacity), who
//! leaves, and who is next in line for the presidency. Every outcome is
//! reported through the company's [`EventSink`]; no operation fails.
//!
//! # Succession selection
//!
//! 1. Empty roster: no candidate.
//! 2. If anyone holds the top rank, the oldest of them.
//! 3. Otherwise the oldest employee overall.
//!
//! Exact age ties go to whoever was hired first.

use crate::domain::employee::{Employee, EmployeeId, IdGenerator, RandomIdGenerator};
use crate::domain::events::{EventSink, RosterEvent};
use crate::domain::person::{Gender, Person, Profile};
use crate::domain::rank::Rank;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Shared handle presidents associate with.
///
/// The model is single-threaded; hosts that share a company across threads
/// must add their own synchronization.
pub type CompanyHandle = Rc<RefCell<Company>>;

pub struct Company {
    employees: Vec<Employee>,
    ids: Box<dyn IdGenerator>,
    sink: Arc<dyn EventSink>,
}

impl Company {
    /// Maximum number of employees on the roster.
    pub const MAX_ROSTER_SIZE: usize = 10;

    /// Creates an empty company that hands out random employee ids.
    #[must_use]
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self::with_id_generator(sink, Box::new(RandomIdGenerator))
    }

    #[must_use]
    pub fn with_id_generator(sink: Arc<dyn EventSink>, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            employees: Vec::new(),
            ids,
            sink,
        }
    }

    #[must_use]
    pub fn into_handle(self) -> CompanyHandle {
        Rc::new(RefCell::new(self))
    }

    /// Employees in hiring order.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    #[must_use]
    pub fn current_size(&self) -> usize {
        self.employees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.employees.len() >= Self::MAX_ROSTER_SIZE
    }

    /// Hires a new employee at the end of the roster.
    ///
    /// Returns the generated id, or `None` when the roster is already full
    /// (a [`RosterEvent::CapacityReached`] is emitted and nothing changes).
    pub fn add_employee(
        &mut self,
        name: impl Into<String>,
        gender: Gender,
        age: u32,
        rank: Rank,
    ) -> Option<EmployeeId> {
        let name = name.into();
        if self.is_full() {
            tracing::debug!(candidate = %name, size = self.employees.len(), "roster full");
            self.sink.emit(RosterEvent::CapacityReached {
                name,
                limit: Self::MAX_ROSTER_SIZE,
            });
            return None;
        }

        let id = self.ids.next_id();
        let employee = Employee::with_id(Profile::new(name, gender, age), rank, id.clone());
        self.sink.emit(RosterEvent::Hired {
            name: employee.name().to_string(),
            id: id.clone(),
            rank,
        });
        self.employees.push(employee);
        Some(id)
    }

    /// Removes `employee` from the roster.
    ///
    /// Returns `false` and emits [`RosterEvent::NotOnRoster`] when the
    /// employee is not (or no longer) on the roster.
    pub fn delete_employee(&mut self, employee: &Employee) -> bool {
        self.take_employee(employee).is_some()
    }

    /// Removes `employee` and hands back the roster entry.
    pub(crate) fn take_employee(&mut self, employee: &Employee) -> Option<Employee> {
        let Some(position) = self.position_of(employee) else {
            self.report_missing(employee);
            return None;
        };

        let removed = self.employees.remove(position);
        self.sink.emit(RosterEvent::Removed {
            name: removed.name().to_string(),
            id: removed.id().clone(),
        });
        Some(removed)
    }

    /// Promotes the roster entry for `employee` one rank.
    ///
    /// Returns the new rank; `None` when already at the top or not on the roster.
    pub fn promote_employee(&mut self, employee: &Employee) -> Option<Rank> {
        let sink = Arc::clone(&self.sink);
        match self.entry_mut(employee) {
            Some(entry) => entry.promote(sink.as_ref()),
            None => {
                self.report_missing(employee);
                None
            }
        }
    }

    /// Demotes the roster entry for `employee` one rank.
    ///
    /// Returns the new rank; `None` when already at the bottom or not on the roster.
    pub fn demote_employee(&mut self, employee: &Employee) -> Option<Rank> {
        let sink = Arc::clone(&self.sink);
        match self.entry_mut(employee) {
            Some(entry) => entry.demote(sink.as_ref()),
            None => {
                self.report_missing(employee);
                None
            }
        }
    }

    /// First employee whose display id matches.
    #[must_use]
    pub fn get_personnel_by_id(&self, id: &str) -> Option<&Employee> {
        let found = self.employees.iter().find(|e| e.id().as_str() == id);
        tracing::debug!(id, found = found.is_some(), "lookup by id");
        found
    }

    /// First employee whose name matches.
    #[must_use]
    pub fn get_personnel_by_name(&self, name: &str) -> Option<&Employee> {
        let found = self.employees.iter().find(|e| e.name() == name);
        tracing::debug!(name, found = found.is_some(), "lookup by name");
        found
    }

    /// Picks the next president from the roster.
    #[must_use]
    pub fn select_succession_candidate(&self) -> Option<&Employee> {
        let _span = tracing::debug_span!("select_succession_candidate",
            roster_size = self.employees.len()
        )
        .entered();

        let executives = self.employees.iter().filter(|e| e.rank().is_top());
        let candidate = oldest(executives).or_else(|| oldest(self.employees.iter()));

        if let Some(candidate) = candidate {
            tracing::debug!(
                candidate = %candidate.name(),
                age = candidate.age(),
                rank = ?candidate.rank(),
                "succession candidate selected"
            );
        }
        candidate
    }

    fn position_of(&self, employee: &Employee) -> Option<usize> {
        self.employees.iter().position(|e| e == employee)
    }

    fn entry_mut(&mut self, employee: &Employee) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| **e == *employee)
    }

    fn report_missing(&self, employee: &Employee) {
        self.sink.emit(RosterEvent::NotOnRoster {
            name: employee.name().to_string(),
            id: employee.id().clone(),
        });
    }
}

/// Oldest employee; the earliest one wins an exact tie.
fn oldest<'a>(employees: impl Iterator<Item = &'a Employee>) -> Option<&'a Employee> {
    employees.fold(None, |best, e| match best {
        Some(b) if b.age() >= e.age() => Some(b),
        _ => Some(e),
    })
}

impl fmt::Debug for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Company")
            .field("employees", &self.employees)
            .finish_non_exhaustive()
    }
}
