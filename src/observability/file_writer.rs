//! Append-only line writer with size-based rotation.
//!
//! When the file grows past its size limit it is renamed to
//! `<file name>.<unix millis>` and a fresh file is started. Only the newest
//! `max_backups` rotated files are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Default rotation threshold (10 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of rotated files to keep.
pub const DEFAULT_MAX_BACKUPS: usize = 3;

pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// The file is opened lazily on the first write.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            max_bytes: DEFAULT_MAX_BYTES,
            max_backups: DEFAULT_MAX_BACKUPS,
            handle: Mutex::new(None),
        }
    }

    #[must_use]
    pub const fn with_limits(mut self, max_bytes: u64, max_backups: usize) -> Self {
        self.max_bytes = max_bytes;
        self.max_backups = max_backups;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Fails when rotation, opening, or writing the file fails.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self.handle.lock().unwrap_or_else(PoisonError::into_inner);

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            *handle = Some(file);
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "journal file unavailable"))?;
        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().timestamp_millis();
        let mut backup = self.path.clone().into_os_string();
        backup.push(format!(".{stamp}"));

        if self.path.exists() {
            fs::rename(&self.path, PathBuf::from(backup))?;
        }
        self.prune_backups()
    }

    /// Deletes rotated files beyond the retention limit, oldest first.
    fn prune_backups(&self) -> io::Result<()> {
        let (Some(dir), Some(file_name)) = (
            self.path.parent(),
            self.path.file_name().and_then(|n| n.to_str()),
        ) else {
            return Ok(());
        };
        let dir = if dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            dir
        };
        let prefix = format!("{file_name}.");

        let mut backups: Vec<(i64, PathBuf)> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name();
                let stamp = name.to_str()?.strip_prefix(&prefix)?.parse::<i64>().ok()?;
                Some((stamp, entry.path()))
            })
            .collect();

        backups.sort_by(|a, b| b.0.cmp(&a.0));
        for (_, stale) in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
