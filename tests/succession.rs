//! End-to-end succession through the public API.

use company_roster::domain::{
    Company, CompanyHandle, EventKind, Gender, Person, President, Rank, RecordingSink,
    ResignRejection, RosterEvent,
};
use std::rc::Rc;
use std::sync::Arc;

fn founded() -> (CompanyHandle, President, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let company = Company::new(sink.clone()).into_handle();
    let mut president = President::new("倍井 杉蔵", Gender::Male, 88, sink.clone());
    president.assign_company(&company);
    (company, president, sink)
}

#[test]
fn executive_takes_over_and_leaves_the_roster() {
    let (company, mut president, sink) = founded();
    president.add_employee("佐藤 太郎", Gender::Male, 22, Rank::Junior);
    president.add_employee("鈴木 二郎", Gender::Male, 44, Rank::Executive);
    president.add_employee("高橋 三郎", Gender::Male, 33, Rank::Lead);
    let before = company.borrow().current_size();

    let successor = president.resign().expect("roster has an executive");

    assert_eq!(successor.name(), "鈴木 二郎");
    assert_eq!(successor.age(), 44);
    assert_eq!(successor.compensation(), President::COMPENSATION);
    assert_eq!(company.borrow().current_size(), before - 1);
    assert!(company
        .borrow()
        .employees()
        .iter()
        .all(|e| e.name() != "鈴木 二郎"));
    assert!(Rc::ptr_eq(&successor.company().unwrap(), &company));
    assert_eq!(
        sink.last(),
        Some(RosterEvent::SuccessionCompleted {
            outgoing: "倍井 杉蔵".into(),
            incoming: "鈴木 二郎".into(),
        })
    );
}

#[test]
fn oldest_executive_beats_older_junior() {
    let (company, mut president, _) = founded();
    president.add_employee("A", Gender::Female, 40, Rank::Executive);
    president.add_employee("B", Gender::Male, 50, Rank::Executive);
    president.add_employee("C", Gender::Other, 60, Rank::Junior);

    assert_eq!(
        company.borrow().select_succession_candidate().map(|e| e.name().to_string()),
        Some("B".to_string())
    );
    assert_eq!(president.resign().unwrap().name(), "B");
}

#[test]
fn without_executives_the_oldest_employee_is_chosen() {
    let (company, _president, _) = founded();
    {
        let mut c = company.borrow_mut();
        c.add_employee("A", Gender::Male, 40, Rank::Junior);
        c.add_employee("B", Gender::Male, 35, Rank::Lead);
        c.add_employee("C", Gender::Female, 50, Rank::Manager);
    }

    let c = company.borrow();
    assert_eq!(c.select_succession_candidate().unwrap().name(), "C");
}

#[test]
fn empty_roster_refuses_resignation() {
    let (company, mut president, sink) = founded();

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

    // still in charge
    assert!(president
        .add_employee("x", Gender::Male, 30, Rank::Junior)
        .is_some());
}

#[test]
fn presidency_can_pass_down_a_chain() {
    let (company, mut first, sink) = founded();
    first.add_employee("second", Gender::Female, 50, Rank::Executive);
    first.add_employee("third", Gender::Male, 45, Rank::Executive);
    first.add_employee("staff", Gender::Male, 30, Rank::Junior);

    let mut second = first.resign().unwrap();
    let third = second.resign().unwrap();

    assert_eq!(second.name(), "second");
    assert_eq!(third.name(), "third");
    assert_eq!(company.borrow().current_size(), 1);
    assert_eq!(company.borrow().employees()[0].name(), "staff");

    // the retired presidents keep read access but cannot change the roster
    assert!(first.get_personnel_by_name("staff").is_some());
    assert!(second
        .add_employee("late", Gender::Male, 20, Rank::Junior)
        .is_none());
    assert_eq!(sink.kinds().last(), Some(&EventKind::PresidentRetired));
    assert_eq!(company.borrow().current_size(), 1);
}

#[test]
fn president_without_company_reports_each_attempt() {
    let sink = Arc::new(RecordingSink::new());
    let mut president = President::new("solo", Gender::Other, 50, sink.clone());

    assert!(president
        .add_employee("x", Gender::Male, 30, Rank::Junior)
        .is_none());
    assert!(president.resign().is_none());
    assert!(president.get_personnel_by_name("x").is_none());

    assert_eq!(sink.kinds(), vec![EventKind::NoCompany, EventKind::NoCompany]);
}

#[test]
fn looked_up_employee_is_promoted_on_the_roster() {
    let (company, president, sink) = founded();
    president.add_employee("太郎", Gender::Male, 22, Rank::Junior);

    let found = president.get_personnel_by_name("太郎").unwrap();
    assert_eq!(president.promote_employee(&found), Some(Rank::Lead));

    // the lookup is a snapshot; the roster entry is what changed
    assert_eq!(found.rank(), Rank::Junior);
    assert_eq!(company.borrow().employees()[0].rank(), Rank::Lead);
    assert_eq!(
        president.get_personnel_by_name("太郎").unwrap().rank(),
        Rank::Lead
    );

    let found = president.get_personnel_by_id(found.id().as_str()).unwrap();
    assert_eq!(president.demote_employee(&found), Some(Rank::Junior));
    assert_eq!(company.borrow().employees()[0].rank(), Rank::Junior);
    assert_eq!(
        sink.kinds(),
        vec![EventKind::Hired, EventKind::Promoted, EventKind::Demoted]
    );
}
