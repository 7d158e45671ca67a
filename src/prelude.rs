//! Prelude module for convenient imports.
//!
//! ```rust
//! use g2_sdk_mock::prelude::*;
//! ```
//!
//! This provides access to:
//! - The capability traits and their mocks
//! - Canned result types
//! - Configuration, context and error types
//! - The observer and logging interfaces

pub use crate::{
    config::ClientConfig,
    configmgr::{ConfigMgrResults, G2ConfigMgr, MockConfigMgr},
    engine::{EngineResults, G2Engine, MockEngine},
    error::{Error, ErrorKind, Result},
    observer::{Notification, NullObserver, Observer},
    product::{G2Product, MockProduct, ProductResults},
    tracing_support::{LogLevel, MessageLogger},
    types::{Context, ExportHandle},
};
