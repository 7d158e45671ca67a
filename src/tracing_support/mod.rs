//! Trace logging for mock client calls.
//!
//! Every client operation can emit a trace-entry and a trace-exit record
//! through a [`MessageLogger`]. Tracing is switched on by setting the log level
//! to [`LogLevel::Trace`], either through [`ClientConfig`](crate::ClientConfig)
//! or at runtime with `set_log_level`.
//!
//! The default logger, [`TracingLogger`], forwards records to the `tracing`
//! ecosystem:
//!
//! ```rust,ignore
//! tracing_subscriber::fmt().with_max_level(tracing::Level::TRACE).init();
//!
//! let engine = MockEngine::with_config(
//!     ClientConfig::builder().log_level(LogLevel::Trace).build(),
//! );
//! engine.get_active_config_id(&Context::new()).await?;
//! // TRACE g2_sdk_mock: product_id=6004 code=69 message_id="60040069" details=[]
//! // TRACE g2_sdk_mock: product_id=6004 code=70 message_id="60040070" details=[0,null,"1.2µs"]
//! ```

mod level;
mod logger;

pub use level::{LogLevel, ParseLogLevelError};
pub use logger::{MessageLogger, TracingLogger};
