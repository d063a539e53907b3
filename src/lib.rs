//! Company roster: a small personnel domain model.
//!
//! The crate models a company holding a bounded roster of employees, a
//! president who administers that roster, and the rules for moving employees
//! up and down a fixed rank ladder and for handing the presidency on.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Demo runtime (main.rs)                             │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Command dispatching                              │
//! │  - Serving-president bookkeeping                    │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────┐                     ┌─────────────────┐
//! │ UI Layer      │                     │ Observability   │
//! │ (ui/)         │                     │ (observability/)│
//! │ - Roster table│                     │ - tracing setup │
//! │ - Notices     │                     │ - Event journal │
//! │ - Theming     │                     │ - Fan-out sink  │
//! └───────────────┘                     └─────────────────┘
//!         │                                      │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Rank ladder, Person, Employee                    │
//! │  - Company roster and succession selection          │
//! │  - President and the resignation protocol           │
//! │  - RosterEvent / EventSink port                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The domain never prints. Every outcome, including every refused or no-op
//! operation, is emitted as a [`RosterEvent`] through an injected
//! [`EventSink`]; the UI and observability layers provide the sinks.
//!
//! # Configuration
//!
//! The demo binary takes `key=value` arguments:
//!
//! ```text
//! company-roster trace_level=debug theme=catppuccin-latte color=false journal=~/roster.jsonl
//! ```
//!
//! # Example
//!
//! ```rust
//! use company_roster::{initialize, Config};
//! use company_roster::app::{handle_command, Command};
//! use company_roster::domain::{Gender, Profile, Rank};
//!
//! let config = Config { color: false, ..Default::default() };
//! let mut state = initialize(&config, Profile::new("倍井 杉蔵", Gender::Male, 88));
//!
//! handle_command(&mut state, &Command::hire("鈴木 二郎", Gender::Male, 44, Rank::Executive));
//! handle_command(&mut state, &Command::Resign);
//! assert_eq!(state.former_presidents, vec!["倍井 杉蔵".to_string()]);
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_command, Action, AppState, Command};
pub use domain::{
    Company, Employee, EventKind, EventSink, Gender, Person, President, Rank, Result, RosterError,
    RosterEvent,
};
pub use ui::Theme;

use crate::domain::Profile;
use crate::observability::{FanoutSink, JournalSink, TracingSink};
use crate::ui::ConsoleSink;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Filter directive for tracing (`trace`, `debug`, `info`, ...).
    /// Default: `"info"`. `RUST_LOG` overrides it.
    pub trace_level: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Where to append the JSON-lines event journal. `None` disables it.
    pub journal_path: Option<PathBuf>,

    /// Whether console output uses ANSI colours. Default: `true`
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_level: None,
            theme_name: None,
            theme_file: None,
            journal_path: None,
            color: true,
        }
    }
}

impl Config {
    /// Builds a configuration from string key/value pairs.
    ///
    /// Recognized keys: `trace_level`, `theme`, `theme_file`, `journal`
    /// (a path, or `default` for the platform data directory), `color`.
    /// Unknown keys are ignored and unparsable values keep their defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use company_roster::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("color".to_string(), "no".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert!(!config.color);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| map.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let journal_path = non_empty("journal").map(|value| match value {
            "default" => infrastructure::default_journal_path(),
            path => infrastructure::expand_tilde(path),
        });

        let color = non_empty("color")
            .and_then(parse_flag)
            .unwrap_or(defaults.color);

        Self {
            trace_level: non_empty("trace_level").map(String::from),
            theme_name: non_empty("theme").map(String::from),
            theme_file: non_empty("theme_file").map(String::from),
            journal_path,
            color,
        }
    }

    /// Parses `key=value` command-line arguments.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Config`] for an argument without `=` or with an
    /// empty key.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for arg in args {
            let arg = arg.as_ref();
            let (key, value) = arg
                .split_once('=')
                .filter(|(key, _)| !key.trim().is_empty())
                .ok_or_else(|| RosterError::Config(format!("expected key=value, got `{arg}`")))?;
            map.insert(key.trim().to_string(), value.to_string());
        }
        Ok(Self::from_map(&map))
    }

    /// Resolves the theme: file, then built-in name, then the default.
    ///
    /// Failures fall back to the default theme and are logged.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Builds the event sink the configuration asks for.
///
/// Events always go to the console and to `tracing`; the journal is added
/// when `journal_path` is set.
#[must_use]
pub fn build_sink(config: &Config, theme: &Theme) -> Arc<dyn EventSink> {
    let console = if config.color {
        ConsoleSink::themed(theme.clone())
    } else {
        ConsoleSink::plain()
    };

    let mut sink = FanoutSink::new()
        .with(Arc::new(console))
        .with(Arc::new(TracingSink));

    if let Some(path) = &config.journal_path {
        tracing::debug!(journal = %path.display(), "journaling roster events");
        sink = sink.with(Arc::new(JournalSink::new(path.clone())));
    }

    Arc::new(sink)
}

/// Starts a session: an empty company run by a president built from `founder`.
pub fn initialize(config: &Config, founder: Profile) -> AppState {
    tracing::debug!(founder = %founder.name(), "initializing company");

    let theme = config.load_theme();
    let sink = build_sink(config, &theme);
    let company = Company::new(Arc::clone(&sink)).into_handle();
    let president = President::from_profile(founder, sink);

    AppState::new(company, president, theme, config.color)
}
