//! Diagnostics hooks for failures the logger swallows

mod traits;
mod noop;
mod console;
mod recording;

pub use traits::{Diagnostics, SharedDiagnostics};
pub use noop::NoOpDiagnostics;
pub use console::ConsoleDiagnostics;
pub use recording::{DiagnosticEvent, RecordingDiagnostics};
