//! Application state: the company and whoever currently runs it.

use crate::domain::{CompanyHandle, Person, President};
use crate::ui::{render_roster, Theme};

/// The session the command handler operates on.
///
/// Holds the shared company and the serving president. When a resignation
/// succeeds the handler replaces `president` with the successor and records
/// the outgoing name in `former_presidents`.
#[derive(Debug)]
pub struct AppState {
    pub company: CompanyHandle,
    pub president: President,
    pub former_presidents: Vec<String>,
    pub theme: Theme,
    /// Whether rendered output carries ANSI colours.
    pub color: bool,
}

impl AppState {
    /// Binds `president` to `company` and starts a session.
    #[must_use]
    pub fn new(company: CompanyHandle, mut president: President, theme: Theme, color: bool) -> Self {
        president.assign_company(&company);
        Self {
            company,
            president,
            former_presidents: Vec::new(),
            theme,
            color,
        }
    }

    /// Replaces the serving president with `successor`.
    pub fn install_successor(&mut self, successor: President) {
        let outgoing = std::mem::replace(&mut self.president, successor);
        tracing::debug!(outgoing = %outgoing.name(), incoming = %self.president.name(), "president replaced");
        self.former_presidents.push(outgoing.name().to_string());
    }

    /// The roster table as it stands now.
    #[must_use]
    pub fn roster_view(&self) -> String {
        render_roster(self.company.borrow().employees(), &self.theme, self.color)
    }
}
