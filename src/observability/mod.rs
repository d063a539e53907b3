//! Logging and event journaling around the roster model.
//!
//! The domain reports outcomes through [`EventSink`](crate::domain::EventSink);
//! this module provides the sinks that turn them into log records and a
//! durable journal, plus the subscriber setup for `tracing`.
//!
//! ```text
//! Company / President ──emit──▶ FanoutSink ─┬─▶ TracingSink ─▶ tracing-subscriber ─▶ stderr
//!                                           ├─▶ JournalSink ─▶ RotatingFile ─▶ events.jsonl
//!                                           └─▶ ConsoleSink (ui) ─▶ stdout
//! ```
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`sinks`]: `TracingSink` and `FanoutSink`
//! - [`journal`]: JSON-lines event journal
//! - `file_writer`: rotating line writer backing the journal

mod file_writer;
pub mod init;
pub mod journal;
pub mod sinks;

pub use file_writer::RotatingFile;
pub use init::init_tracing;
pub use journal::JournalSink;
pub use sinks::{FanoutSink, TracingSink};
