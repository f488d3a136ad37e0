//! shush logs
//!
//! A small file logger with two verbosity levels and user-defined line
//! templates. Lines are built from `{name}` templates (see `shush-format`)
//! and appended to a single log file shared by every logger that holds the
//! same [`LogFile`] handle.
//!
//! ```no_run
//! use shush_logs::{Logger, LoggerConfig, LogLevel};
//!
//! let config = LoggerConfig::new("demo")
//!     .with_level(LogLevel::Log)
//!     .with_directory("var/log/")
//!     .with_variable("host", "alpha");
//!
//! let mut logger = Logger::from_config(config);
//! logger.set_log_prefix("{date} {time} [{host}] ");
//! logger.log("service started");
//! logger.dbg("not written: level is Log");
//! ```
//!
//! Logging never fails the caller. I/O problems are passed to a
//! [`Diagnostics`] hook (silent by default) and the write is dropped.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod file;
pub mod level;
mod logger;

pub use config::{LoggerConfig, Templates, GREETING};
pub use diagnostics::{
    ConsoleDiagnostics, DiagnosticEvent, Diagnostics, NoOpDiagnostics, RecordingDiagnostics,
    SharedDiagnostics,
};
pub use error::{LogError, LogResult};
pub use file::LogFile;
pub use level::LogLevel;
pub use logger::{Logger, LoggerBuilder};

// Re-export the template engine types that appear in the public API
pub use shush_format::{Clock, FixedClock, SystemClock, Variables};
