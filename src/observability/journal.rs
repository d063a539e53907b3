//! JSON-lines journal of roster events.
//!
//! Each event becomes one line:
//!
//! ```text
//! {"timestamp":"2026-10-18T09:12:44.120Z","event":{"kind":"hired","name":"佐藤 太郎","id":"4821","rank":"junior"}}
//! ```

use super::file_writer::RotatingFile;
use crate::domain::{EventSink, Result, RosterError, RosterEvent};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct JournalEntry<'a> {
    timestamp: String,
    event: &'a RosterEvent,
}

/// Event sink appending to a rotating JSON-lines file.
#[derive(Debug)]
pub struct JournalSink {
    file: RotatingFile,
}

impl JournalSink {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: RotatingFile::new(path),
        }
    }

    /// Writes one event.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Journal`] if the line cannot be serialized or written.
    pub fn record(&self, event: &RosterEvent) -> Result<()> {
        let entry = JournalEntry {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            event,
        };
        let line = serde_json::to_string(&entry)
            .map_err(|e| RosterError::Journal(format!("failed to serialize event: {e}")))?;
        self.file.write_line(&line).map_err(|e| {
            RosterError::Journal(format!("failed to write {}: {e}", self.file.path().display()))
        })
    }
}

impl EventSink for JournalSink {
    fn emit(&self, event: RosterEvent) {
        if let Err(e) = self.record(&event) {
            tracing::warn!(error = %e, kind = ?event.kind(), "dropping journal entry");
        }
    }
}
