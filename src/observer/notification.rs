//! Structured notification messages.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;

const RESERVED_KEYS: [&str; 4] = ["subjectId", "messageId", "messageTime", "error"];

/// One notification published to observers.
///
/// On the wire every value is a JSON string, including the numeric ids and
/// the timestamp. Operation-specific details are flattened into the same
/// object.
///
/// ```rust
/// use g2_sdk_mock::Notification;
///
/// let message = r#"{"subjectId":"6004","messageId":"8035","messageTime":"1700000000000000000","entityID":"1"}"#;
/// let notification = Notification::parse(message).unwrap();
/// assert_eq!(notification.subject_id, 6004);
/// assert_eq!(notification.message_id, 8035);
/// assert_eq!(notification.detail("entityID"), Some("1"));
/// assert!(notification.error.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Identifies the capability group that sent the message.
    #[serde(rename = "subjectId", with = "string_number")]
    pub subject_id: u32,

    /// Identifies the operation that was called.
    #[serde(rename = "messageId", with = "string_number")]
    pub message_id: u32,

    /// Nanoseconds since the Unix epoch at which the message was built.
    #[serde(rename = "messageTime", with = "string_number")]
    pub message_time: i64,

    /// Error text, present only when the call failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Operation-specific context.
    #[serde(flatten)]
    pub details: BTreeMap<String, String>,
}

impl Notification {
    /// Builds a notification stamped with the current time.
    ///
    /// Detail keys that collide with the injected fields are dropped.
    pub fn new(
        subject_id: u32,
        message_id: u32,
        error: Option<String>,
        mut details: BTreeMap<String, String>,
    ) -> Self {
        details.retain(|key, _| !RESERVED_KEYS.contains(&key.as_str()));
        Self {
            subject_id,
            message_id,
            message_time: Utc::now().timestamp_nanos_opt().unwrap_or_default(),
            error,
            details,
        }
    }

    /// Decodes a message received by an observer.
    pub fn parse(message: &str) -> Result<Self> {
        Ok(serde_json::from_str(message)?)
    }

    /// Encodes the notification as a JSON object string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns the message timestamp.
    pub fn time(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.message_time)
    }

    /// Returns one detail value.
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }
}

/// Serializes numbers as decimal strings.
mod string_number {
    use super::*;

    pub(super) fn serialize<T, S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub(super) fn deserialize<'de, T, D>(deserializer: D) -> std::result::Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
