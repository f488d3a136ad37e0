//! Shared log file handle
//!
//! Every [`Logger`](crate::Logger) writes through a [`LogFile`]. Loggers that
//! hold clones of the same handle share one open file, one directory and
//! file-name template, and one resolved path. The first logger to find the
//! handle closed opens it; the others reuse whatever is open.
//!
//! [`LogFile::global`] is the process-wide handle used by
//! [`Logger::new`](crate::Logger::new). Tests and embedders that want the
//! ownership spelled out pass their own handle to the builder instead.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::error::{LogError, LogResult};

/// State behind a shared handle
#[derive(Debug, Default)]
struct FileState {
    file: Option<File>,
    directory: String,
    file_name: String,
    full_path: PathBuf,
}

impl FileState {
    fn open_at_path(&mut self) -> LogResult<()> {
        if self.full_path.as_os_str().is_empty() {
            return Err(LogError::NoPath);
        }

        if let Some(parent) = self.full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| LogError::CreateDirectory {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.full_path)
            .map_err(|source| LogError::Open {
                path: self.full_path.clone(),
                source,
            })?;

        self.file = Some(file);
        Ok(())
    }
}

/// Reference-counted handle to the file loggers append to
#[derive(Debug, Clone, Default)]
pub struct LogFile {
    state: Arc<Mutex<FileState>>,
}

/// Process-wide handle
static GLOBAL: Lazy<LogFile> = Lazy::new(LogFile::new);

impl LogFile {
    /// Create a new, closed handle with no path
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide handle shared by every `Logger::new`
    pub fn global() -> Self {
        GLOBAL.clone()
    }

    /// Whether two handles refer to the same underlying file state
    pub fn same_handle(&self, other: &LogFile) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().file.is_some()
    }

    /// Last resolved path (empty before the first open)
    pub fn path(&self) -> PathBuf {
        self.state.lock().full_path.clone()
    }

    /// Directory template the current path was resolved from
    pub fn directory(&self) -> String {
        self.state.lock().directory.clone()
    }

    /// File-name template the current path was resolved from
    pub fn file_name(&self) -> String {
        self.state.lock().file_name.clone()
    }

    /// Close any open file, record the new templates and resolved path, then
    /// open `resolved` for appending, creating missing parent directories.
    ///
    /// The templates and path are stored even when opening fails, so that a
    /// later [`ensure_open`](Self::ensure_open) retries the same location.
    pub fn open(&self, directory: &str, file_name: &str, resolved: impl AsRef<Path>) -> LogResult<()> {
        let mut state = self.state.lock();
        state.file = None;
        state.directory = directory.to_string();
        state.file_name = file_name.to_string();
        state.full_path = resolved.as_ref().to_path_buf();
        state.open_at_path()
    }

    /// Reopen the last resolved path if the file is closed
    pub fn ensure_open(&self) -> LogResult<()> {
        let mut state = self.state.lock();
        if state.file.is_some() {
            return Ok(());
        }
        state.open_at_path()
    }

    /// Append `text` as-is, reopening first if needed, and flush
    pub fn append(&self, text: &str) -> LogResult<()> {
        let mut state = self.state.lock();
        if state.file.is_none() {
            state.open_at_path()?;
        }

        let path = state.full_path.clone();
        let result = match state.file.as_mut() {
            Some(file) => file.write_all(text.as_bytes()).and_then(|_| file.flush()),
            None => return Err(LogError::NoPath),
        };

        result.map_err(|source| {
            // Drop the handle so the next write starts from a fresh open
            state.file = None;
            LogError::Write { path, source }
        })
    }

    /// Close the file; the templates and resolved path are kept
    pub fn close(&self) {
        self.state.lock().file = None;
    }
}
