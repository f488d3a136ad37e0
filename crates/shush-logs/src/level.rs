//! Verbosity levels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Logger verbosity
///
/// - `Log` (0): only `log` calls are written.
/// - `Debug` (1): `log` and `dbg` calls are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Log = 0,
    #[default]
    Debug = 1,
}

impl LogLevel {
    /// Map a raw level number to a level, `None` outside `0..=1`
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(LogLevel::Log),
            1 => Some(LogLevel::Debug),
            _ => None,
        }
    }

    pub fn as_raw(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for LogLevel {
    type Error = i32;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or(raw)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Log => write!(f, "LOG"),
            LogLevel::Debug => write!(f, "DBG"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "log" => Ok(LogLevel::Log),
            "1" | "debug" | "dbg" => Ok(LogLevel::Debug),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}
