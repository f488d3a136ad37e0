//! No-op diagnostics implementation

use super::traits::Diagnostics;
use crate::error::LogError;

/// Diagnostics that discard every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpDiagnostics;

impl NoOpDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl Diagnostics for NoOpDiagnostics {
    fn warn(&self, _message: &str) {}
    fn error(&self, _error: &LogError) {}
}
