//! Path helpers for locating the journal and user theme files.

use std::env;
use std::path::PathBuf;

/// Directory name used under the platform data directory.
const APP_DIR: &str = "company-roster";

/// Returns the data directory for journal files.
///
/// Resolves to `$XDG_DATA_HOME/company-roster` when `XDG_DATA_HOME` is set,
/// otherwise `~/.local/share/company-roster`, falling back to a relative
/// `.company-roster` directory when no home directory is known.
#[must_use]
pub fn data_dir() -> PathBuf {
    data_dir_from(env::var_os("XDG_DATA_HOME").map(PathBuf::from), home_dir())
}

fn data_dir_from(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    match (xdg_data_home.filter(|p| p.is_absolute()), home) {
        (Some(xdg), _) => xdg.join(APP_DIR),
        (None, Some(home)) => home.join(".local").join("share").join(APP_DIR),
        (None, None) => PathBuf::from(format!(".{APP_DIR}")),
    }
}

/// Default location of the event journal.
#[must_use]
pub fn default_journal_path() -> PathBuf {
    data_dir().join("events.jsonl")
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, or when no home directory is known, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use company_roster::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, home_dir())
}

fn expand_tilde_with(path: &str, home: Option<PathBuf>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}
