//! Error types for the write path
//!
//! None of these reach callers of [`Logger`](crate::Logger); they are
//! reported to [`Diagnostics`](crate::Diagnostics) and then dropped.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while opening or writing the log file
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed to create log directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write log file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No log file path has been resolved")]
    NoPath,
}

impl LogError {
    /// Path the failed operation was working on, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::CreateDirectory { path, .. } | Self::Open { path, .. } | Self::Write { path, .. } => {
                Some(path)
            }
            Self::NoPath => None,
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;
