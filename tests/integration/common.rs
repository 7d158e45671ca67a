//! Common test harness for the mock client integration tests.

use std::sync::{Arc, Once};
use std::time::Duration;

use g2_sdk_mock::Notification;
use g2_sdk_mock::testing::ChannelObserver;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::EnvFilter;

/// Upper bound for a single expected notification to arrive.
pub const RECEIVE_TIMEOUT: Duration = Duration::from_secs(2);

/// How long to wait before concluding that no further message is coming.
pub const QUIET_PERIOD: Duration = Duration::from_millis(100);

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber filtered by `RUST_LOG`, once per process.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Creates a channel observer with a fixed id.
pub fn observer(id: &str) -> (Arc<ChannelObserver>, UnboundedReceiver<String>) {
    let (observer, messages) = ChannelObserver::with_id(id);
    (Arc::new(observer), messages)
}

/// Receives exactly `count` notifications, sorted by message id.
pub async fn collect(messages: &mut UnboundedReceiver<String>, count: usize) -> Vec<Notification> {
    let mut received = Vec::with_capacity(count);
    for _ in 0..count {
        let notification =
            tokio::time::timeout(RECEIVE_TIMEOUT, ChannelObserver::next_notification(messages))
                .await
                .expect("notification should arrive before the timeout")
                .expect("notification should decode");
        received.push(notification);
    }
    received.sort_by_key(|notification| notification.message_id);
    received
}

/// Receives one notification.
pub async fn next(messages: &mut UnboundedReceiver<String>) -> Notification {
    collect(messages, 1).await.remove(0)
}

/// Asserts that no further message arrives within [`QUIET_PERIOD`].
pub async fn assert_quiet(messages: &mut UnboundedReceiver<String>) {
    let extra = tokio::time::timeout(QUIET_PERIOD, messages.recv()).await;
    assert!(extra.is_err(), "unexpected notification: {:?}", extra);
}

/// Returns the message ids of `notifications`, in order.
pub fn message_ids(notifications: &[Notification]) -> Vec<u32> {
    notifications.iter().map(|notification| notification.message_id).collect()
}
