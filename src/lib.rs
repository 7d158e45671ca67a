//! # G2 SDK Mock
//!
//! Mock clients for the G2 entity-resolution SDK. Each capability group has a
//! trait and a mock implementing it with canned results, so code written
//! against the trait can be tested without a real engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use g2_sdk_mock::prelude::*;
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
//! # runtime.block_on(async {
//! let engine = MockEngine::new();
//! engine.configure(|results| results.get_active_config_id = 42);
//!
//! let ctx = Context::new();
//! assert_eq!(engine.get_active_config_id(&ctx).await.unwrap(), 42);
//! # });
//! ```
//!
//! ## Key Concepts
//!
//! - **Capability groups**: [`G2ConfigMgr`], [`G2Engine`] and [`G2Product`],
//!   mocked by [`MockConfigMgr`], [`MockEngine`] and [`MockProduct`]
//! - **Canned results**: each mock returns fields of its results struct
//!   verbatim and never fails
//! - **Observers**: registered [`Observer`]s receive one JSON [`Notification`]
//!   per call, asynchronously and in no particular order
//! - **Tracing**: at [`LogLevel::Trace`] every call emits an entry and an exit
//!   record through its [`MessageLogger`]

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Shared machinery
pub mod client;
pub mod config;
pub mod error;
pub mod observer;
pub mod tracing_support;
pub mod types;

// Capability groups
pub mod configmgr;
pub mod engine;
pub mod product;

// Testing utilities
pub mod testing;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use client::Operation;
pub use config::ClientConfig;
pub use error::{Error, ErrorKind};
pub use observer::{Notification, NullObserver, Observer, ObserverRegistry};
pub use tracing_support::{LogLevel, MessageLogger, TracingLogger};
pub use types::{Context, ExportHandle};

// Re-export capability groups
pub use configmgr::{ConfigMgrResults, G2ConfigMgr, MockConfigMgr};
pub use engine::{EngineResults, G2Engine, MockEngine};
pub use product::{G2Product, MockProduct, ProductResults};
