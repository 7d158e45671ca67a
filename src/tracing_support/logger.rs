//! Message logger capability and its `tracing` implementation.

use parking_lot::RwLock;
use serde_json::Value;

use super::LogLevel;

/// Logger capability consumed by the mock clients.
///
/// Records are keyed by a numeric code. Trace-entry and trace-exit codes are
/// fixed per operation, and `details` carries the call arguments, results,
/// error and elapsed time as JSON values.
///
/// Implementations must not fail: logging is best-effort and never surfaces to
/// the caller of a client operation.
pub trait MessageLogger: Send + Sync {
    /// Emits one record.
    fn log(&self, code: u32, details: &[Value]);

    /// Changes the severity threshold.
    fn set_log_level(&self, level: LogLevel);

    /// Returns the current severity threshold.
    fn log_level(&self) -> LogLevel;
}

/// [`MessageLogger`] that emits `tracing` events.
///
/// Each record becomes a `TRACE` event on the `g2_sdk_mock` target with the
/// product id, the code, a composed message id (`{product:04}{code:04}`) and
/// the details rendered as a JSON array.
#[derive(Debug)]
pub struct TracingLogger {
    product_id: u32,
    level: RwLock<LogLevel>,
}

impl TracingLogger {
    /// Creates a logger for the given product id.
    pub fn new(product_id: u32, level: LogLevel) -> Self {
        Self { product_id, level: RwLock::new(level) }
    }

    /// Returns the product id stamped on every record.
    pub fn product_id(&self) -> u32 {
        self.product_id
    }

    /// Formats the message id for a code.
    pub fn message_id(&self, code: u32) -> String {
        format!("{:04}{:04}", self.product_id, code)
    }
}

impl MessageLogger for TracingLogger {
    fn log(&self, code: u32, details: &[Value]) {
        let details = Value::Array(details.to_vec());
        tracing::trace!(
            target: "g2_sdk_mock",
            product_id = self.product_id,
            code,
            message_id = %self.message_id(code),
            details = %details
        );
    }

    fn set_log_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    fn log_level(&self) -> LogLevel {
        *self.level.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_id_is_zero_padded() {
        let logger = TracingLogger::new(6004, LogLevel::Info);
        assert_eq!(logger.message_id(1), "60040001");
        assert_eq!(logger.message_id(162), "60040162");
    }

    #[test]
    fn test_set_log_level() {
        let logger = TracingLogger::new(6002, LogLevel::Info);
        assert_eq!(logger.log_level(), LogLevel::Info);
        logger.set_log_level(LogLevel::Trace);
        assert_eq!(logger.log_level(), LogLevel::Trace);
    }

    #[test]
    fn test_log_without_subscriber_is_harmless() {
        let logger = TracingLogger::new(6006, LogLevel::Trace);
        logger.log(3, &[Value::from("arg"), Value::Null]);
    }
}
