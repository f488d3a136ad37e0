//! The templated file logger

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use shush_format::{Clock, Formatter, SharedClock, Variables};

use crate::config::{LoggerConfig, Templates, GREETING};
use crate::diagnostics::{NoOpDiagnostics, SharedDiagnostics};
use crate::error::LogResult;
use crate::file::LogFile;
use crate::level::LogLevel;

const VAR_PROJECT_NAME: &str = "project_name";
const VAR_LOG: &str = "LOG";
const VAR_PREFIX: &str = "prefix";
const VAR_SUFFIX: &str = "suffix";

/// Appends templated lines to a shared log file
///
/// Each write stores the message under `{LOG}` and the level's prefix and
/// suffix under `{prefix}` / `{suffix}`, then expands the line template
/// twice against the variable mapping. The second pass resolves placeholders
/// that the first pass pulled in from variable values, such as `{date}`
/// inside the default prefix. Nothing deeper than that is expanded.
///
/// No operation returns an error. I/O failures go to the configured
/// [`Diagnostics`](crate::Diagnostics) and the call becomes a no-op; the next
/// write tries to reopen the file.
///
/// Dropping a logger closes the shared file. Any other logger holding the
/// same [`LogFile`] reopens it at the same path on its next write.
///
/// # Example
///
/// ```no_run
/// use shush_logs::Logger;
///
/// // Appends to logs/demo-<date>.log
/// let mut logger = Logger::new("demo");
/// logger.log("hello");
/// logger.dbg("only written at the debug level");
/// ```
pub struct Logger {
    variables: Variables,
    level: LogLevel,
    templates: Templates,
    file: LogFile,
    formatter: Formatter,
    diagnostics: SharedDiagnostics,
}

/// Builder for a [`Logger`] with an explicit file handle, clock or diagnostics
pub struct LoggerBuilder {
    config: LoggerConfig,
    file: Option<LogFile>,
    clock: Option<SharedClock>,
    diagnostics: Option<SharedDiagnostics>,
}

impl LoggerBuilder {
    /// Write through `file` instead of the process-wide handle
    pub fn file(mut self, file: LogFile) -> Self {
        self.file = Some(file);
        self
    }

    /// Read `{date}` and `{time}` from `clock`
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Report absorbed failures to `diagnostics`
    pub fn diagnostics(mut self, diagnostics: SharedDiagnostics) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Build the logger, opening the file if the handle is closed, and write the greeting
    pub fn build(self) -> Logger {
        let LoggerConfig {
            project_name,
            level,
            directory,
            file_name,
            mut variables,
            templates,
        } = self.config;

        variables.insert(VAR_PROJECT_NAME.to_string(), project_name);

        let formatter = match self.clock {
            Some(clock) => Formatter::with_clock(clock),
            None => Formatter::system(),
        };

        let mut logger = Logger {
            variables,
            level,
            templates,
            file: self.file.unwrap_or_else(LogFile::global),
            formatter,
            diagnostics: self
                .diagnostics
                .unwrap_or_else(|| Arc::new(NoOpDiagnostics::new())),
        };

        if !logger.file.is_open() {
            logger.open_file(&directory, &file_name);
        }
        logger.log(GREETING);
        logger
    }
}

impl Logger {
    /// Create a logger with default settings on the process-wide file
    pub fn new(project_name: impl Into<String>) -> Self {
        Self::from_config(LoggerConfig::new(project_name))
    }

    /// Create a logger from `config` on the process-wide file
    pub fn from_config(config: LoggerConfig) -> Self {
        Self::builder(config).build()
    }

    pub fn builder(config: LoggerConfig) -> LoggerBuilder {
        LoggerBuilder {
            config,
            file: None,
            clock: None,
            diagnostics: None,
        }
    }

    /// Change the file-name template, reopen the file at the new path and write the greeting
    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        let file_name = file_name.into();
        let directory = self.file.directory();
        self.open_file(&directory, &file_name);
        self.log(GREETING);
    }

    /// Change the directory template, reopen the file at the new path and write the greeting
    pub fn set_directory(&mut self, directory: impl Into<String>) {
        let directory = directory.into();
        let file_name = self.file.file_name();
        self.open_file(&directory, &file_name);
        self.log(GREETING);
    }

    /// Set the level from its number; values other than 0 and 1 are ignored
    pub fn set_log_level(&mut self, level: i32) {
        match LogLevel::from_raw(level) {
            Some(level) => self.level = level,
            None => self
                .diagnostics
                .warn(&format!("ignored log level {}, expected 0 or 1", level)),
        }
    }

    pub fn set_log_prefix(&mut self, prefix: impl Into<String>) {
        self.templates.log_prefix = prefix.into();
    }

    pub fn set_log_suffix(&mut self, suffix: impl Into<String>) {
        self.templates.log_suffix = suffix.into();
    }

    pub fn set_dbg_prefix(&mut self, prefix: impl Into<String>) {
        self.templates.dbg_prefix = prefix.into();
    }

    pub fn set_dbg_suffix(&mut self, suffix: impl Into<String>) {
        self.templates.dbg_suffix = suffix.into();
    }

    /// Replace the master line template.
    ///
    /// Besides every variable, it can use `{prefix}`, `{LOG}` and `{suffix}`.
    /// Remember the trailing `\n` lives in the suffix.
    pub fn set_line_template(&mut self, template: impl Into<String>) {
        self.templates.line = template.into();
    }

    /// Add or replace a substitution variable
    pub fn set_variable(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Write a line at the basic level; always written
    pub fn log(&mut self, message: impl Into<String>) {
        self.variables.insert(VAR_LOG.to_string(), message.into());
        self.write(LogLevel::Log);
    }

    /// Write a line at the debug level; does nothing unless the level is `Debug`
    pub fn dbg(&mut self, message: impl Into<String>) {
        if self.level == LogLevel::Debug {
            self.variables.insert(VAR_LOG.to_string(), message.into());
            self.write(LogLevel::Debug);
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn variable(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// The shared handle this logger writes through
    pub fn file(&self) -> &LogFile {
        &self.file
    }

    /// Resolved path of the shared file
    pub fn path(&self) -> PathBuf {
        self.file.path()
    }

    fn open_file(&mut self, directory: &str, file_name: &str) {
        let template = format!("{}{}", directory, file_name);
        let resolved = self.formatter.expand(&template, &self.variables);
        let result = self.file.open(directory, file_name, resolved);
        self.report(result);
    }

    // The log arm keys on the kind of call, the debug arm on the configured
    // level. `dbg` only reaches here at the debug level, so both agree today.
    fn update_fixes(&mut self, call: LogLevel) {
        let (prefix, suffix) = if call == LogLevel::Log {
            (&self.templates.log_prefix, &self.templates.log_suffix)
        } else if self.level == LogLevel::Debug {
            (&self.templates.dbg_prefix, &self.templates.dbg_suffix)
        } else {
            return;
        };
        self.variables.insert(VAR_PREFIX.to_string(), prefix.clone());
        self.variables.insert(VAR_SUFFIX.to_string(), suffix.clone());
    }

    fn render(&self) -> String {
        let first = self.formatter.expand(&self.templates.line, &self.variables);
        self.formatter.expand(&first, &self.variables)
    }

    fn write(&mut self, call: LogLevel) {
        self.update_fixes(call);
        let line = self.render();
        let result = self.file.append(&line);
        self.report(result);
    }

    fn report(&self, result: LogResult<()>) {
        if let Err(err) = result {
            self.diagnostics.error(&err);
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.file.close();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("variables", &self.variables)
            .field("templates", &self.templates)
            .field("file", &self.file)
            .finish()
    }
}

/// Format arguments and write them with [`Logger::log`]
#[macro_export]
macro_rules! log_line {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log(format!($($arg)*))
    };
}

/// Format arguments and write them with [`Logger::dbg`]
#[macro_export]
macro_rules! dbg_line {
    ($logger:expr, $($arg:tt)*) => {
        $logger.dbg(format!($($arg)*))
    };
}
