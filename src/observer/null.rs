//! Observer that discards notifications.

use async_trait::async_trait;

use super::Observer;
use crate::types::Context;

/// Observer that logs each message at debug level and drops it.
#[derive(Debug, Clone)]
pub struct NullObserver {
    id: String,
}

impl NullObserver {
    /// Creates a null observer with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Default for NullObserver {
    fn default() -> Self {
        Self::new("null")
    }
}

#[async_trait]
impl Observer for NullObserver {
    fn observer_id(&self, _ctx: &Context) -> String {
        self.id.clone()
    }

    async fn update_observer(&self, _ctx: &Context, message: String) {
        tracing::debug!(target: "g2_sdk_mock", observer_id = %self.id, %message, "notification dropped");
    }
}
