//! Placeholder expansion
//!
//! Rules:
//! - `{key}` is replaced with `vars[key]` when the mapping has it.
//! - Otherwise the built-ins `{date}` and `{time}` come from the clock.
//!   A mapping entry with the same name shadows the built-in.
//! - Any other `{key}` is left in the output exactly as written, so the
//!   output of [`Formatter::expand`] is always safe to expand again.
//! - A `{` without a closing `}` before the next `{` is literal text.
//!
//! Expansion is a single pass: text produced by a substitution is not
//! rescanned. Callers that want nested placeholders resolved expand again.

use std::collections::HashMap;
use std::sync::Arc;

use crate::clock::{Clock, SharedClock, SystemClock};

/// Variable mapping used for substitution
pub type Variables = HashMap<String, String>;

/// chrono format of the `{date}` built-in
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// chrono format of the `{time}` built-in
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Expands `{name}` templates against a variable mapping
#[derive(Clone)]
pub struct Formatter {
    clock: SharedClock,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Debug for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Formatter")
            .field("now", &self.clock.now())
            .finish()
    }
}

impl Formatter {
    /// Create a formatter reading built-ins from `clock`
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    /// Create a formatter from an already shared clock
    pub fn with_clock(clock: SharedClock) -> Self {
        Self { clock }
    }

    /// Create a formatter using local wall time
    pub fn system() -> Self {
        Self::new(SystemClock)
    }

    /// Expand every placeholder in `template` once.
    pub fn expand(&self, template: &str, vars: &Variables) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            match closing_brace(after) {
                Some(close) => {
                    let key = &after[..close];
                    match self.lookup(key, vars) {
                        Some(value) => out.push_str(&value),
                        None => {
                            out.push('{');
                            out.push_str(key);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }

    fn lookup(&self, key: &str, vars: &Variables) -> Option<String> {
        if let Some(value) = vars.get(key) {
            return Some(value.clone());
        }
        match key {
            "date" => Some(self.clock.now().format(DATE_FORMAT).to_string()),
            "time" => Some(self.clock.now().format(TIME_FORMAT).to_string()),
            _ => None,
        }
    }
}

/// Index of the `}` closing a placeholder body, if the body is well formed.
fn closing_brace(body: &str) -> Option<usize> {
    let end = body.find(|c: char| c == '{' || c == '}')?;
    (body.as_bytes()[end] == b'}').then_some(end)
}

/// Expand `template` using local wall time for the built-ins
pub fn format_string(template: &str, vars: &Variables) -> String {
    Formatter::system().expand(template, vars)
}
