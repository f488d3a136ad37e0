//! shush format
//!
//! Named-placeholder string templates. A template is plain text with `{name}`
//! placeholders that are resolved against a [`Variables`] mapping:
//!
//! ```
//! use shush_format::{Formatter, FixedClock, Variables};
//!
//! let clock = FixedClock::from_ymd_hms(2024, 3, 5, 14, 7, 9);
//! let formatter = Formatter::new(clock);
//!
//! let mut vars = Variables::new();
//! vars.insert("project_name".to_string(), "demo".to_string());
//!
//! assert_eq!(
//!     formatter.expand("{project_name}-{date}.log", &vars),
//!     "demo-2024-03-05.log",
//! );
//! // Unknown placeholders are kept as written
//! assert_eq!(formatter.expand("{missing}", &vars), "{missing}");
//! ```

pub mod clock;
pub mod template;

pub use clock::{Clock, FixedClock, SharedClock, SystemClock};
pub use template::{format_string, Formatter, Variables, DATE_FORMAT, TIME_FORMAT};
