//! Application layer: commands in, actions out.
//!
//! ```text
//! Command → handle_command → President / Company → RosterEvents → EventSink
//!                 │
//!                 └──────────▶ Vec<Action> → runtime (print, render roster)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: output side effects for the runtime
//! - [`handler`]: the command set and its dispatcher
//! - [`state`]: the session holding the company and the serving president

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_command, Command};
pub use state::AppState;
