//! Testing utilities for code that uses the mock clients.
//!
//! - [`ChannelObserver`]: An observer that forwards every message into a channel
//! - [`RecordingLogger`]: A logger that keeps every trace record in memory
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use g2_sdk_mock::prelude::*;
//! use g2_sdk_mock::testing::{ChannelObserver, RecordingLogger};
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
//! # runtime.block_on(async {
//! let logger = Arc::new(RecordingLogger::new());
//! let product = MockProduct::with_config(ClientConfig::tracing()).with_logger(logger.clone());
//! let (observer, mut messages) = ChannelObserver::new();
//! let ctx = Context::new();
//!
//! product.register_observer(&ctx, Arc::new(observer)).await.unwrap();
//! product.version(&ctx).await.unwrap();
//!
//! assert!(logger.codes().contains(&19));
//! assert!(messages.recv().await.is_some());
//! # });
//! ```

mod channel_observer;
mod recording_logger;

pub use channel_observer::ChannelObserver;
pub use recording_logger::{LogRecord, RecordingLogger};
