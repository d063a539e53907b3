//! Command handling.
//!
//! [`handle_command`] applies one [`Command`] to the [`AppState`] through the
//! serving president and returns the [`Action`]s the runtime should perform.
//! Roster notices (hired, promoted, ...) are not part of the returned actions;
//! they reach the user through the event sink the company was built with.

use crate::app::{Action, AppState};
use crate::domain::{Gender, Person, Rank};

/// Requests the runtime can make of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Hire a new employee.
    Hire {
        name: String,
        gender: Gender,
        age: u32,
        rank: Rank,
    },
    /// Remove the first employee with this name.
    Dismiss { name: String },
    /// Remove whoever was hired first.
    DismissEarliestHire,
    Promote { name: String },
    Demote { name: String },
    /// Look an employee up by name and report their id.
    Lookup { name: String },
    /// Look an employee up by display id.
    LookupId { id: String },
    /// Print the named employee's self-introduction.
    Introduce { name: String },
    IntroducePresident,
    /// Report who would succeed the president right now.
    ShowCandidate,
    /// Resign the serving president in favour of the succession candidate.
    Resign,
    ShowRoster,
}

impl Command {
    #[must_use]
    pub fn hire(name: impl Into<String>, gender: Gender, age: u32, rank: Rank) -> Self {
        Self::Hire {
            name: name.into(),
            gender,
            age,
            rank,
        }
    }
}

/// Applies `command` and returns the resulting output actions.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use company_roster::app::{handle_command, Action, AppState, Command};
/// use company_roster::domain::{Company, Gender, NoopSink, President, Rank};
/// use company_roster::ui::Theme;
///
/// let company = Company::new(Arc::new(NoopSink)).into_handle();
/// let president = President::new("倍井 杉蔵", Gender::Male, 88, Arc::new(NoopSink));
/// let mut state = AppState::new(company, president, Theme::default(), false);
///
/// handle_command(&mut state, &Command::hire("周 八郎", Gender::Male, 21, Rank::Executive));
/// let actions = handle_command(&mut state, &Command::ShowCandidate);
/// assert_eq!(
///     actions,
///     vec![Action::Print("次期社長候補: 周 八郎さん（年齢: 21歳、役職: 役員）".to_string())]
/// );
/// ```
pub fn handle_command(state: &mut AppState, command: &Command) -> Vec<Action> {
    let _span = tracing::debug_span!("handle_command", ?command).entered();

    match command {
        Command::Hire {
            name,
            gender,
            age,
            rank,
        } => {
            state.president.add_employee(name.as_str(), *gender, *age, *rank);
            vec![]
        }

        Command::Dismiss { name } => match state.president.get_personnel_by_name(name) {
            Some(employee) => {
                state.president.delete_employee(&employee);
                vec![]
            }
            None => vec![not_found(name)],
        },

        Command::DismissEarliestHire => {
            let first = state.company.borrow().employees().first().cloned();
            match first {
                Some(employee) => {
                    state.president.delete_employee(&employee);
                    vec![]
                }
                None => vec![Action::print("社員がいません。")],
            }
        }

        Command::Promote { name } => match state.president.get_personnel_by_name(name) {
            Some(employee) => {
                state.president.promote_employee(&employee);
                vec![]
            }
            None => vec![not_found(name)],
        },

        Command::Demote { name } => match state.president.get_personnel_by_name(name) {
            Some(employee) => {
                state.president.demote_employee(&employee);
                vec![]
            }
            None => vec![not_found(name)],
        },

        Command::Lookup { name } => match state.president.get_personnel_by_name(name) {
            Some(employee) => vec![Action::Print(format!(
                "名前検索: {name}さんが見つかりました（ID: {}）",
                employee.id()
            ))],
            None => vec![not_found(name)],
        },

        Command::LookupId { id } => match state.president.get_personnel_by_id(id) {
            Some(employee) => vec![Action::Print(format!(
                "ID検索: {id}は{}さんです",
                employee.name()
            ))],
            None => vec![Action::Print(format!("ID {id}の社員は見つかりません。"))],
        },

        Command::Introduce { name } => match state.president.get_personnel_by_name(name) {
            Some(employee) => vec![Action::Print(employee.describe_self())],
            None => vec![not_found(name)],
        },

        Command::IntroducePresident => vec![Action::Print(state.president.describe_self())],

        Command::ShowCandidate => {
            let line = state
                .company
                .borrow()
                .select_succession_candidate()
                .map(|candidate| {
                    format!(
                        "次期社長候補: {}さん（年齢: {}歳、役職: {}）",
                        candidate.name(),
                        candidate.age(),
                        candidate.rank()
                    )
                });
            vec![Action::Print(
                line.unwrap_or_else(|| "次期社長候補はいません。".to_string()),
            )]
        }

        Command::Resign => match state.president.resign() {
            Some(successor) => {
                state.install_successor(successor);
                let size = state.company.borrow().current_size();
                vec![
                    Action::print("新社長の就任:"),
                    Action::Print(state.president.describe_self()),
                    Action::Print(format!("現在の社員数: {size}名")),
                ]
            }
            None => vec![],
        },

        Command::ShowRoster => vec![Action::RenderRoster],
    }
}

fn not_found(name: &str) -> Action {
    Action::Print(format!("{name}さんは見つかりません。"))
}
