//! Configuration manager capability group.
//!
//! Manages the configuration documents stored in the repository and which of
//! them is the default. [`G2ConfigMgr`] is the capability interface;
//! [`MockConfigMgr`] implements it with canned results.

mod mock;

use std::sync::Arc;

use async_trait::async_trait;

pub use mock::{ConfigMgrResults, MockConfigMgr};

use crate::error::Result;
use crate::observer::Observer;
use crate::tracing_support::LogLevel;
use crate::types::Context;

/// Product id of the configuration manager; the default notification subject id.
pub const PRODUCT_ID: u32 = 6002;

/// Fixed identifiers of every configuration manager operation.
pub mod operations {
    use crate::client::Operation;

    /// `add_config`
    pub const ADD_CONFIG: Operation = Operation::new("AddConfig", 8001, 1, 2);
    /// `destroy`
    pub const DESTROY: Operation = Operation::new("Destroy", 8002, 5, 6);
    /// `get_config`
    pub const GET_CONFIG: Operation = Operation::new("GetConfig", 8003, 7, 8);
    /// `get_config_list`
    pub const GET_CONFIG_LIST: Operation = Operation::new("GetConfigList", 8004, 9, 10);
    /// `get_default_config_id`
    pub const GET_DEFAULT_CONFIG_ID: Operation =
        Operation::new("GetDefaultConfigID", 8005, 11, 12);
    /// `init`
    pub const INIT: Operation = Operation::new("Init", 8006, 17, 18);
    /// `replace_default_config_id`
    pub const REPLACE_DEFAULT_CONFIG_ID: Operation =
        Operation::new("ReplaceDefaultConfigID", 8007, 19, 20);
    /// `set_default_config_id`
    pub const SET_DEFAULT_CONFIG_ID: Operation =
        Operation::new("SetDefaultConfigID", 8008, 21, 22);
    /// `register_observer`
    pub const REGISTER_OBSERVER: Operation = Operation::new("RegisterObserver", 8009, 25, 26);
    /// `get_sdk_id`
    pub const GET_SDK_ID: Operation = Operation::new("GetSdkId", 8010, 29, 30);
    /// `set_log_level`
    pub const SET_LOG_LEVEL: Operation = Operation::new("SetLogLevel", 8011, 23, 24);
    /// `unregister_observer`
    pub const UNREGISTER_OBSERVER: Operation =
        Operation::new("UnregisterObserver", 8012, 27, 28);

    /// Every operation of the group.
    pub const ALL: [Operation; 12] = [
        ADD_CONFIG,
        DESTROY,
        GET_CONFIG,
        GET_CONFIG_LIST,
        GET_DEFAULT_CONFIG_ID,
        INIT,
        REPLACE_DEFAULT_CONFIG_ID,
        SET_DEFAULT_CONFIG_ID,
        REGISTER_OBSERVER,
        GET_SDK_ID,
        SET_LOG_LEVEL,
        UNREGISTER_OBSERVER,
    ];
}

/// Configuration manager operations.
///
/// ## Object Safety
///
/// This trait is object-safe, so code under test can take
/// `&dyn G2ConfigMgr` and receive either a real client or [`MockConfigMgr`].
#[async_trait]
pub trait G2ConfigMgr: Send + Sync {
    /// Adds a configuration document and returns its configuration id.
    async fn add_config(&self, ctx: &Context, config_str: &str, config_comments: &str)
    -> Result<i64>;

    /// Releases the client. Call after all other calls are complete.
    async fn destroy(&self, ctx: &Context) -> Result<()>;

    /// Returns the configuration document with the given id.
    async fn get_config(&self, ctx: &Context, config_id: i64) -> Result<String>;

    /// Returns a JSON document listing the stored configurations.
    async fn get_config_list(&self, ctx: &Context) -> Result<String>;

    /// Returns the id of the default configuration.
    async fn get_default_config_id(&self, ctx: &Context) -> Result<i64>;

    /// Returns the identifier of this SDK implementation.
    async fn get_sdk_id(&self, ctx: &Context) -> Result<String>;

    /// Initializes the client. Call before any other call.
    async fn init(
        &self,
        ctx: &Context,
        module_name: &str,
        ini_params: &str,
        verbose_logging: i64,
    ) -> Result<()>;

    /// Adds an observer to the set notified on every call.
    async fn register_observer(&self, ctx: &Context, observer: Arc<dyn Observer>) -> Result<()>;

    /// Replaces the default configuration id if it still equals `old_config_id`.
    async fn replace_default_config_id(
        &self,
        ctx: &Context,
        old_config_id: i64,
        new_config_id: i64,
    ) -> Result<()>;

    /// Sets the default configuration id.
    async fn set_default_config_id(&self, ctx: &Context, config_id: i64) -> Result<()>;

    /// Sets the log level; `Trace` enables call tracing.
    async fn set_log_level(&self, ctx: &Context, level: LogLevel) -> Result<()>;

    /// Removes an observer.
    async fn unregister_observer(&self, ctx: &Context, observer: Arc<dyn Observer>)
    -> Result<()>;
}
