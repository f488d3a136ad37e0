//! Console diagnostics implementation

use super::traits::Diagnostics;
use crate::error::LogError;

/// Diagnostics printed to stderr
#[derive(Debug, Clone)]
pub struct ConsoleDiagnostics {
    prefix: String,
}

impl Default for ConsoleDiagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleDiagnostics {
    /// Create console diagnostics with the default prefix
    pub fn new() -> Self {
        Self {
            prefix: "[shush-logs]".to_string(),
        }
    }

    /// Create console diagnostics with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn render_warn(&self, message: &str) -> String {
        format!("{} WARN: {}", self.prefix, message)
    }

    fn render_error(&self, error: &LogError) -> String {
        format!("{} ERROR: {}", self.prefix, error)
    }
}

impl Diagnostics for ConsoleDiagnostics {
    fn warn(&self, message: &str) {
        eprintln!("{}", self.render_warn(message));
    }

    fn error(&self, error: &LogError) {
        eprintln!("{}", self.render_error(error));
    }
}
