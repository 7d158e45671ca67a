//! Observer that forwards messages into a channel.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::observer::{Notification, Observer};
use crate::types::Context;

/// Observer that sends every message it receives into an unbounded channel.
///
/// ```rust
/// use g2_sdk_mock::testing::ChannelObserver;
/// use g2_sdk_mock::{Context, Observer};
///
/// let (observer, _messages) = ChannelObserver::with_id("observer-1");
/// assert_eq!(observer.observer_id(&Context::new()), "observer-1");
/// ```
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    id: String,
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelObserver {
    /// Creates an observer with a random UUID id and its receiving end.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        Self::with_id(uuid::Uuid::new_v4().to_string())
    }

    /// Creates an observer with the given id and its receiving end.
    pub fn with_id(id: impl Into<String>) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { id: id.into(), sender }, receiver)
    }

    /// Returns the observer id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Receives the next message and decodes it.
    ///
    /// Returns `None` once every sender is gone or a message fails to decode.
    pub async fn next_notification(
        receiver: &mut mpsc::UnboundedReceiver<String>,
    ) -> Option<Notification> {
        let message = receiver.recv().await?;
        Notification::parse(&message).ok()
    }
}

#[async_trait]
impl Observer for ChannelObserver {
    fn observer_id(&self, _ctx: &Context) -> String {
        self.id.clone()
    }

    async fn update_observer(&self, _ctx: &Context, message: String) {
        // The receiver may already be gone; delivery is best-effort.
        let _ = self.sender.send(message);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_unique_ids() {
        let (first, _) = ChannelObserver::new();
        let (second, _) = ChannelObserver::new();
        assert_ne!(first.id(), second.id());
        assert!(uuid::Uuid::parse_str(first.id()).is_ok());
    }

    #[tokio::test]
    async fn test_forwards_and_decodes() {
        let (observer, mut receiver) = ChannelObserver::with_id("o");
        let message = r#"{"subjectId":"6006","messageId":"8006","messageTime":"0"}"#;
        observer.update_observer(&Context::new(), message.to_string()).await;

        let notification = ChannelObserver::next_notification(&mut receiver).await.unwrap();
        assert_eq!(notification.message_id, 8006);
    }

    #[tokio::test]
    async fn test_send_after_receiver_dropped_is_ignored() {
        let (observer, receiver) = ChannelObserver::with_id("o");
        drop(receiver);
        observer.update_observer(&Context::new(), "{}".to_string()).await;
    }
}
