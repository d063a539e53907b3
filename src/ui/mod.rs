//! Text rendering for the roster and its events.
//!
//! # Modules
//!
//! - [`theme`]: colour schemes and ANSI escape sequences
//! - [`roster_table`]: the employee table
//! - [`notice`]: one-line notices for roster events and the console sink

pub mod notice;
pub mod roster_table;
pub mod theme;

pub use notice::{render_event, ConsoleSink};
pub use roster_table::render_roster;
pub use theme::Theme;
