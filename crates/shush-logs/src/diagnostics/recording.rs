//! In-memory diagnostics for tests

use parking_lot::Mutex;

use super::traits::Diagnostics;
use crate::error::LogError;

/// A single recorded diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    Warn(String),
    /// Rendered error message
    Error(String),
}

/// Diagnostics that keep every event in memory
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use shush_logs::{Diagnostics, RecordingDiagnostics};
///
/// let recorder = Arc::new(RecordingDiagnostics::new());
/// recorder.warn("something odd");
/// assert_eq!(recorder.warnings(), vec!["something odd".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in the order they were reported
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                DiagnosticEvent::Warn(message) => Some(message.clone()),
                DiagnosticEvent::Error(_) => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                DiagnosticEvent::Error(message) => Some(message.clone()),
                DiagnosticEvent::Warn(_) => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, message: &str) {
        self.events.lock().push(DiagnosticEvent::Warn(message.to_string()));
    }

    fn error(&self, error: &LogError) {
        self.events.lock().push(DiagnosticEvent::Error(error.to_string()));
    }
}
