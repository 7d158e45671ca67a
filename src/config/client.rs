//! Per-client configuration.

use crate::tracing_support::LogLevel;

/// SDK identifier reported by `get_sdk_id` unless overridden.
pub const DEFAULT_SDK_ID: &str = "mock";

/// Configuration shared by every mock client.
///
/// ## Default Values
///
/// - `log_level`: `Info` (tracing off)
/// - `subject_id`: the capability group's product id
/// - `sdk_id`: `"mock"`
///
/// ## Example
///
/// ```rust
/// use g2_sdk_mock::{ClientConfig, LogLevel};
///
/// let config = ClientConfig::builder()
///     .log_level(LogLevel::Trace)
///     .subject_id(9999)
///     .build();
///
/// assert!(config.log_level.is_trace());
/// assert_eq!(config.subject_id, Some(9999));
/// assert_eq!(config.sdk_id, "mock");
/// ```
#[derive(Debug, Clone, bon::Builder)]
pub struct ClientConfig {
    /// Initial log level. `Trace` enables call tracing from the first call.
    #[builder(default)]
    pub log_level: LogLevel,

    /// Subject id stamped on notifications, replacing the product id.
    pub subject_id: Option<u32>,

    /// Value returned by `get_sdk_id`.
    #[builder(into, default = DEFAULT_SDK_ID.to_string())]
    pub sdk_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ClientConfig {
    /// Creates a configuration with tracing enabled from the start.
    pub fn tracing() -> Self {
        Self::builder().log_level(LogLevel::Trace).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.subject_id, None);
        assert_eq!(config.sdk_id, DEFAULT_SDK_ID);
    }

    #[test]
    fn test_tracing_preset() {
        assert!(ClientConfig::tracing().log_level.is_trace());
    }

    #[test]
    fn test_sdk_id_override() {
        let config = ClientConfig::builder().sdk_id("fixture").build();
        assert_eq!(config.sdk_id, "fixture");
    }
}
