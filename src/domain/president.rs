//! President: administers one company's roster and hands the role on.
//!
//! A president is associated with, but does not own, a [`Company`]. All roster
//! work is delegated to that company. Without a company (or after the company
//! has been dropped) mutations are rejected with [`RosterEvent::NoCompany`] and
//! lookups return `None`.
//!
//! # Resignation
//!
//! [`President::resign`] selects a successor from the roster, removes them
//! from it, and returns a new president bound to the same company. The
//! outgoing president is marked retired: later roster mutations through it are
//! rejected with [`RosterEvent::PresidentRetired`]. Lookups stay available.

use crate::domain::company::{Company, CompanyHandle};
use crate::domain::employee::{Employee, EmployeeId};
use crate::domain::events::{EventSink, Operation, ResignRejection, RosterEvent};
use crate::domain::person::{Gender, Person, Profile};
use crate::domain::rank::Rank;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;

pub struct President {
    profile: Profile,
    company: Option<Weak<RefCell<Company>>>,
    retired: bool,
    sink: Arc<dyn EventSink>,
}

impl President {
    /// Fixed compensation of the role, independent of the rank ladder.
    pub const COMPENSATION: u64 = 1_000_000;

    /// Creates a president with no company.
    #[must_use]
    pub fn new(name: impl Into<String>, gender: Gender, age: u32, sink: Arc<dyn EventSink>) -> Self {
        Self::from_profile(Profile::new(name, gender, age), sink)
    }

    #[must_use]
    pub fn from_profile(profile: Profile, sink: Arc<dyn EventSink>) -> Self {
        Self {
            profile,
            company: None,
            retired: false,
            sink,
        }
    }

    #[must_use]
    pub const fn compensation(&self) -> u64 {
        Self::COMPENSATION
    }

    /// Associates this president with `company`, replacing any previous one.
    pub fn assign_company(&mut self, company: &CompanyHandle) {
        tracing::debug!(president = %self.name(), "company assigned");
        self.company = Some(Rc::downgrade(company));
    }

    /// The associated company, if any is still alive.
    #[must_use]
    pub fn company(&self) -> Option<CompanyHandle> {
        self.company.as_ref().and_then(Weak::upgrade)
    }

    /// Whether this president has already handed over the role.
    #[must_use]
    pub const fn is_retired(&self) -> bool {
        self.retired
    }

    pub fn add_employee(
        &self,
        name: impl Into<String>,
        gender: Gender,
        age: u32,
        rank: Rank,
    ) -> Option<EmployeeId> {
        let company = self.administered(Operation::AddEmployee)?;
        let id = company.borrow_mut().add_employee(name, gender, age, rank);
        id
    }

    pub fn delete_employee(&self, employee: &Employee) -> bool {
        let Some(company) = self.administered(Operation::DeleteEmployee) else {
            return false;
        };
        let removed = company.borrow_mut().delete_employee(employee);
        removed
    }

    pub fn promote_employee(&self, employee: &Employee) -> Option<Rank> {
        let company = self.administered(Operation::PromoteEmployee)?;
        let rank = company.borrow_mut().promote_employee(employee);
        rank
    }

    pub fn demote_employee(&self, employee: &Employee) -> Option<Rank> {
        let company = self.administered(Operation::DemoteEmployee)?;
        let rank = company.borrow_mut().demote_employee(employee);
        rank
    }

    /// Snapshot of the first employee with display id `id`.
    ///
    /// The snapshot keeps the employee's identity, so it can be passed back to
    /// [`delete_employee`](Self::delete_employee) and friends.
    #[must_use]
    pub fn get_personnel_by_id(&self, id: &str) -> Option<Employee> {
        let company = self.company()?;
        let found = company.borrow().get_personnel_by_id(id).cloned();
        found
    }

    /// Snapshot of the first employee named `name`.
    #[must_use]
    pub fn get_personnel_by_name(&self, name: &str) -> Option<Employee> {
        let company = self.company()?;
        let found = company.borrow().get_personnel_by_name(name).cloned();
        found
    }

    /// Steps down in favour of the company's succession candidate.
    ///
    /// Returns the new president, bound to the same company, or `None` when
    /// the resignation is refused (no company, empty roster, already retired).
    pub fn resign(&mut self) -> Option<Self> {
        let _span = tracing::debug_span!("resign", president = %self.name()).entered();

        let handle = self.administered(Operation::Resign)?;
        let mut company = handle.borrow_mut();

        if company.is_empty() {
            self.reject_resignation(ResignRejection::EmptyRoster);
            return None;
        }

        let Some(candidate) = company.select_succession_candidate().cloned() else {
            tracing::error!(
                roster_size = company.current_size(),
                "no succession candidate on a non-empty roster"
            );
            self.reject_resignation(ResignRejection::NoCandidate);
            return None;
        };

        let Some(successor) = company.take_employee(&candidate) else {
            tracing::error!(candidate = %candidate.name(), "candidate vanished from roster");
            self.reject_resignation(ResignRejection::NoCandidate);
            return None;
        };
        drop(company);

        let mut successor = Self::from_profile(successor.into_profile(), Arc::clone(&self.sink));
        successor.assign_company(&handle);
        self.retired = true;

        tracing::info!(outgoing = %self.name(), incoming = %successor.name(), "succession completed");
        self.sink.emit(RosterEvent::SuccessionCompleted {
            outgoing: self.name().to_string(),
            incoming: successor.name().to_string(),
        });

        Some(successor)
    }

    /// The company to act on, or `None` after reporting why not.
    fn administered(&self, operation: Operation) -> Option<CompanyHandle> {
        if self.retired {
            self.sink.emit(RosterEvent::PresidentRetired {
                president: self.name().to_string(),
                operation,
            });
            return None;
        }

        let company = self.company();
        if company.is_none() {
            self.sink.emit(RosterEvent::NoCompany {
                actor: self.name().to_string(),
                operation,
            });
        }
        company
    }

    fn reject_resignation(&self, reason: ResignRejection) {
        self.sink.emit(RosterEvent::ResignationRejected {
            president: self.name().to_string(),
            reason,
        });
    }
}

impl Person for President {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn describe_self(&self) -> String {
        format!(
            "私の名前は{}です。性別は{}で、年齢は{}歳、社長です。",
            self.name(),
            self.gender(),
            self.age()
        )
    }
}

impl fmt::Debug for President {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("President")
            .field("profile", &self.profile)
            .field("has_company", &self.company().is_some())
            .field("retired", &self.retired)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::{EventKind, RecordingSink};

    fn setup() -> (President, CompanyHandle, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let company = Company::new(sink.clone()).into_handle();
        let mut president = President::new("倍井 杉蔵", Gender::Male, 88, sink.clone());
        president.assign_company(&company);
        (president, company, sink)
    }

    #[test]
    fn new_president_has_no_company() {
        let president = President::new("p", Gender::Female, 50, Arc::new(RecordingSink::new()));
        assert!(president.company().is_none());
        assert_eq!(president.compensation(), 1_000_000);
        assert!(!president.is_retired());
    }

    #[test]
    fn hiring_without_company_is_rejected() {
        let sink = Arc::new(RecordingSink::new());
        let president = President::new("p", Gender::Male, 60, sink.clone());

        assert_eq!(president.add_employee("a", Gender::Male, 30, Rank::Junior), None);
        assert_eq!(
            sink.events(),
            vec![RosterEvent::NoCompany {
                actor: "p".into(),
                operation: Operation::AddEmployee,
            }]
        );
    }

    #[test]
    fn lookups_without_company_return_none_silently() {
        let sink = Arc::new(RecordingSink::new());
        let president = President::new("p", Gender::Male, 60, sink.clone());

        assert!(president.get_personnel_by_id("1234").is_none());
        assert!(president.get_personnel_by_name("a").is_none());
        assert!(sink.events().is_empty());
    }

    #[test]
    fn delegates_roster_work_to_company() {
        let (president, company, _) = setup();
        let id = president
            .add_employee("佐藤 太郎", Gender::Male, 22, Rank::Junior)
            .unwrap();

        let by_id = president.get_personnel_by_id(id.as_str()).unwrap();
        let by_name = president.get_personnel_by_name("佐藤 太郎").unwrap();
        assert_eq!(by_id, by_name);

        assert_eq!(president.promote_employee(&by_id), Some(Rank::Lead));
        assert_eq!(company.borrow().employees()[0].rank(), Rank::Lead);

        assert!(president.delete_employee(&by_id));
        assert_eq!(company.borrow().current_size(), 0);
    }

    #[test]
    fn dropped_company_reads_as_unbound() {
        let (president, company, sink) = setup();
        drop(company);

        assert!(president.company().is_none());
        assert_eq!(president.add_employee("a", Gender::Male, 30, Rank::Junior), None);
        assert_eq!(sink.kinds(), vec![EventKind::NoCompany]);
    }

    #[test]
    fn resign_with_empty_roster_is_refused() {
        let (mut president, company, sink) = setup();

        assert!(president.resign().is_none());
        assert!(!president.is_retired());
        assert!(Rc::ptr_eq(&president.company().unwrap(), &company));
        assert_eq!(
            sink.last(),
            Some(RosterEvent::ResignationRejected {
                president: "倍井 杉蔵".into(),
                reason: ResignRejection::EmptyRoster,
            })
        );
    }

    #[test]
    fn resign_without_company_is_refused() {
        let sink = Arc::new(RecordingSink::new());
        let mut president = President::new("p", Gender::Male, 60, sink.clone());

        assert!(president.resign().is_none());
        assert_eq!(sink.kinds(), vec![EventKind::NoCompany]);
    }

    #[test]
    fn resign_hands_over_to_oldest_executive() {
        let (mut president, company, sink) = setup();
        president.add_employee("佐藤 太郎", Gender::Male, 22, Rank::Junior);
        president.add_employee("鈴木 二郎", Gender::Male, 44, Rank::Executive);
        president.add_employee("渡辺 五郎", Gender::Male, 60, Rank::Junior);
        sink.clear();

        let successor = president.resign().unwrap();

        assert_eq!(successor.name(), "鈴木 二郎");
        assert_eq!(successor.age(), 44);
        assert_eq!(successor.compensation(), President::COMPENSATION);
        assert!(Rc::ptr_eq(&successor.company().unwrap(), &company));
        assert_eq!(company.borrow().current_size(), 2);
        assert!(company.borrow().get_personnel_by_name("鈴木 二郎").is_none());
        assert_eq!(
            sink.kinds(),
            vec![EventKind::Removed, EventKind::SuccessionCompleted]
        );
        assert_eq!(
            sink.last(),
            Some(RosterEvent::SuccessionCompleted {
                outgoing: "倍井 杉蔵".into(),
                incoming: "鈴木 二郎".into(),
            })
        );
    }

    #[test]
    fn resign_with_single_employee_empties_roster() {
        let (mut president, company, _) = setup();
        president.add_employee("only", Gender::Female, 30, Rank::Lead);

        let successor = president.resign().unwrap();
        assert_eq!(successor.name(), "only");
        assert!(company.borrow().is_empty());
    }

    #[test]
    fn retired_president_cannot_administer_roster() {
        let (mut president, company, sink) = setup();
        president.add_employee("a", Gender::Male, 30, Rank::Executive);
        president.add_employee("b", Gender::Male, 40, Rank::Junior);
        let successor = president.resign().unwrap();
        assert!(president.is_retired());
        sink.clear();

        assert_eq!(president.add_employee("c", Gender::Male, 20, Rank::Junior), None);
        let b = president.get_personnel_by_name("b").unwrap();
        assert!(!president.delete_employee(&b));
        assert!(president.resign().is_none());
        assert_eq!(company.borrow().current_size(), 1);
        assert_eq!(
            sink.kinds(),
            vec![
                EventKind::PresidentRetired,
                EventKind::PresidentRetired,
                EventKind::PresidentRetired,
            ]
        );

        assert!(successor.delete_employee(&b));
        assert!(company.borrow().is_empty());
    }

    #[test]
    fn introduction_states_the_role() {
        let (president, _, _) = setup();
        assert_eq!(
            president.describe_self(),
            "私の名前は倍井 杉蔵です。性別は男性で、年齢は88歳、社長です。"
        );
    }
}
