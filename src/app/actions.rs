//! Side effects produced by the command handler.
//!
//! The handler never writes to the terminal itself; it returns a list of
//! actions and the runtime (`main.rs`) performs them in order.

/// Output to be produced by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print one line of text.
    Print(String),

    /// Render the current roster table.
    RenderRoster,
}

impl Action {
    pub(crate) fn print(text: impl Into<String>) -> Self {
        Self::Print(text.into())
    }
}
