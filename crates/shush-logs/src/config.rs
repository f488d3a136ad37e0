//! Logger configuration
//!
//! `LoggerConfig` holds everything needed to construct a [`Logger`](crate::Logger).
//! It derives serde traits so a host application can embed it in its own
//! configuration; missing fields fall back to the defaults below.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::level::LogLevel;

pub const DEFAULT_DIRECTORY: &str = "logs/";
pub const DEFAULT_FILE_NAME: &str = "{project_name}-{date}.log";
pub const DEFAULT_LINE_TEMPLATE: &str = "{prefix}{LOG}{suffix}";
pub const DEFAULT_LOG_PREFIX: &str = "{date} | LOG: ";
pub const DEFAULT_LOG_SUFFIX: &str = "\n";
pub const DEFAULT_DBG_PREFIX: &str = "{date} | DBG: ";
pub const DEFAULT_DBG_SUFFIX: &str = "\n";

/// Line written whenever the log file is (re)opened by a logger
pub const GREETING: &str = "STARTED LOGGING {project-name}";

/// Environment variable overriding the level (`0`, `1`, `log`, `debug`)
pub const ENV_LEVEL: &str = "SHUSH_LOG_LEVEL";
/// Environment variable overriding the directory template
pub const ENV_DIRECTORY: &str = "SHUSH_LOG_DIR";
/// Environment variable overriding the file-name template
pub const ENV_FILE_NAME: &str = "SHUSH_LOG_FILE";

/// Templates that shape each written line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Templates {
    /// Master line template; sees `{prefix}`, `{LOG}`, `{suffix}` and all variables
    pub line: String,
    pub log_prefix: String,
    pub log_suffix: String,
    pub dbg_prefix: String,
    pub dbg_suffix: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            line: DEFAULT_LINE_TEMPLATE.to_string(),
            log_prefix: DEFAULT_LOG_PREFIX.to_string(),
            log_suffix: DEFAULT_LOG_SUFFIX.to_string(),
            dbg_prefix: DEFAULT_DBG_PREFIX.to_string(),
            dbg_suffix: DEFAULT_DBG_SUFFIX.to_string(),
        }
    }
}

/// Construction parameters for a logger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub project_name: String,

    #[serde(default)]
    pub level: LogLevel,

    /// Directory template, joined to `file_name` by plain concatenation
    #[serde(default = "default_directory")]
    pub directory: String,

    /// File-name template
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Extra substitution variables
    #[serde(default)]
    pub variables: HashMap<String, String>,

    #[serde(default)]
    pub templates: Templates,
}

fn default_directory() -> String {
    DEFAULT_DIRECTORY.to_string()
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl LoggerConfig {
    /// Create a config with default settings for `project_name`
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            level: LogLevel::default(),
            directory: default_directory(),
            file_name: default_file_name(),
            variables: HashMap::new(),
            templates: Templates::default(),
        }
    }

    /// Create a config for `project_name` with environment overrides applied
    pub fn from_env(project_name: impl Into<String>) -> Self {
        Self::new(project_name).with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by environment variable name.
    ///
    /// Unparseable levels are ignored, empty values are treated as unset.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(level) = lookup(ENV_LEVEL).and_then(|v| v.parse().ok()) {
            self.level = level;
        }
        if let Some(directory) = lookup(ENV_DIRECTORY) {
            self.directory = directory;
        }
        if let Some(file_name) = lookup(ENV_FILE_NAME) {
            self.file_name = file_name;
        }
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_variables(mut self, variables: HashMap<String, String>) -> Self {
        self.variables = variables;
        self
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn with_templates(mut self, templates: Templates) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_line_template(mut self, line: impl Into<String>) -> Self {
        self.templates.line = line.into();
        self
    }
}
