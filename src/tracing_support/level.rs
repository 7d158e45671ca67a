//! Log levels understood by the message logger.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity threshold for a [`MessageLogger`](super::MessageLogger).
///
/// Levels are ordered from most to least verbose. Only [`LogLevel::Trace`]
/// turns on call tracing in the mock clients.
///
/// ```rust
/// use g2_sdk_mock::LogLevel;
///
/// let level: LogLevel = "trace".parse().unwrap();
/// assert_eq!(level, LogLevel::Trace);
/// assert_eq!(level.to_string(), "TRACE");
/// assert!(LogLevel::Trace < LogLevel::Info);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Call tracing and everything below.
    Trace,
    /// Debug diagnostics.
    Debug,
    /// Informational messages (default).
    #[default]
    Info,
    /// Warnings.
    Warn,
    /// Errors.
    Error,
    /// Fatal errors.
    Fatal,
    /// Panics.
    Panic,
}

impl LogLevel {
    /// All levels, most verbose first.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Panic,
    ];

    /// Returns the upper-case level name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Panic => "PANIC",
        }
    }

    /// Returns `true` if this level enables call tracing.
    #[inline]
    pub fn is_trace(&self) -> bool {
        matches!(self, LogLevel::Trace)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0}")]
pub struct ParseLogLevelError(String);

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLogLevelError(s.to_string()))
    }
}
