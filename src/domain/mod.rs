//! Domain layer: the personnel model and its rules.
//!
//! Nothing in here prints, logs to a console, or touches the filesystem.
//! Outcomes are reported through the [`EventSink`] port.
//!
//! # Organization
//!
//! - [`rank`]: the rank ladder and its compensation table
//! - [`person`]: identity attributes and the [`Person`] capability
//! - [`employee`]: employees, display ids, promotion and demotion
//! - [`company`]: the bounded roster and succession selection
//! - [`president`]: roster administration and the resignation protocol
//! - [`events`]: roster events and sinks
//! - [`error`]: error type for the ambient layers
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use company_roster::domain::{Company, Gender, Person, President, Rank, RecordingSink};
//!
//! let sink = Arc::new(RecordingSink::new());
//! let company = Company::new(sink.clone()).into_handle();
//!
//! let mut president = President::new("倍井 杉蔵", Gender::Male, 88, sink.clone());
//! president.assign_company(&company);
//! president.add_employee("鈴木 二郎", Gender::Male, 44, Rank::Executive);
//! president.add_employee("佐藤 太郎", Gender::Male, 22, Rank::Junior);
//!
//! let successor = president.resign().expect("roster is not empty");
//! assert_eq!(successor.name(), "鈴木 二郎");
//! assert_eq!(company.borrow().current_size(), 1);
//! ```

pub mod company;
pub mod employee;
pub mod error;
pub mod events;
pub mod person;
pub mod president;
pub mod rank;

pub use company::{Company, CompanyHandle};
pub use employee::{Employee, EmployeeId, IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use error::{Result, RosterError};
pub use events::{
    EventKind, EventSink, NoopSink, Operation, RecordingSink, ResignRejection, RosterEvent,
};
pub use person::{Gender, Person, Profile};
pub use president::President;
pub use rank::Rank;
