//! Logger that records trace output in memory.

use parking_lot::{Mutex, RwLock};
use serde_json::Value;

use crate::tracing_support::{LogLevel, MessageLogger};

/// One record captured by [`RecordingLogger`].
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Trace code.
    pub code: u32,
    /// Details passed with the record.
    pub details: Vec<Value>,
}

/// [`MessageLogger`] that keeps every record for later assertions.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<LogRecord>>,
    level: RwLock<LogLevel>,
}

impl RecordingLogger {
    /// Creates an empty recorder at the default level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every record, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Returns the codes of every record, oldest first.
    pub fn codes(&self) -> Vec<u32> {
        self.records.lock().iter().map(|record| record.code).collect()
    }

    /// Discards all records.
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl MessageLogger for RecordingLogger {
    fn log(&self, code: u32, details: &[Value]) {
        self.records.lock().push(LogRecord { code, details: details.to_vec() });
    }

    fn set_log_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    fn log_level(&self) -> LogLevel {
        *self.level.read()
    }
}
