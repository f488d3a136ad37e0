//! Diagnostics trait definition

use std::sync::Arc;

use crate::error::LogError;

/// Observer for problems the logger absorbs instead of surfacing
///
/// Implementations:
/// - `NoOpDiagnostics`: Drops everything (the default)
/// - `ConsoleDiagnostics`: Prints to stderr
/// - `RecordingDiagnostics`: Keeps events in memory for tests
pub trait Diagnostics: Send + Sync {
    /// A request was ignored or produced a questionable result
    fn warn(&self, message: &str);

    /// An I/O operation on the log file failed
    fn error(&self, error: &LogError);
}

/// Type alias for an Arc-wrapped diagnostics hook
pub type SharedDiagnostics = Arc<dyn Diagnostics>;
