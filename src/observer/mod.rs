//! Observer notifications for client operations.
//!
//! Observers register with a client and receive one JSON message per client
//! call. Each message carries the capability group's subject id, the
//! operation's fixed message id, a nanosecond timestamp, an optional error and
//! a few operation-specific details:
//!
//! ```json
//! {"subjectId":"6002","messageId":"8001","messageTime":"1700000000000000000","configComments":"comment"}
//! ```
//!
//! Delivery is fire-and-forget: the client call returns before observers are
//! notified, observers are notified concurrently, and messages from
//! successive calls may arrive out of order. Use [`Notification::parse`] to
//! decode a message.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use g2_sdk_mock::prelude::*;
//! use g2_sdk_mock::testing::ChannelObserver;
//!
//! let (observer, mut messages) = ChannelObserver::new();
//! let config_mgr = MockConfigMgr::new();
//! config_mgr.register_observer(&Context::new(), Arc::new(observer)).await?;
//!
//! config_mgr.add_config(&Context::new(), "{}", "comment").await?;
//! let message = messages.recv().await.unwrap();
//! println!("{:?}", Notification::parse(&message)?);
//! ```

mod dispatch;
mod notification;
mod null;
mod registry;

use async_trait::async_trait;

pub use notification::Notification;
pub use null::NullObserver;
pub use registry::ObserverRegistry;

pub(crate) use dispatch::spawn_detached;

use crate::types::Context;

/// A listener for client notifications.
///
/// Observers are identified by [`observer_id`](Observer::observer_id);
/// registering two observers with the same id keeps only the first.
///
/// ## Object Safety
///
/// This trait is object-safe; clients hold observers as `Arc<dyn Observer>`.
#[async_trait]
pub trait Observer: Send + Sync {
    /// Returns the identifier used for registration and removal.
    fn observer_id(&self, ctx: &Context) -> String;

    /// Receives one serialized notification.
    async fn update_observer(&self, ctx: &Context, message: String);
}
