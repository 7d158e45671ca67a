//! Mock configuration manager.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::json;

use super::{G2ConfigMgr, PRODUCT_ID, operations};
use crate::client::{ClientInner, Details, details};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::observer::Observer;
use crate::tracing_support::{LogLevel, MessageLogger};
use crate::types::Context;

/// Canned results returned by [`MockConfigMgr`], one per data-returning operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMgrResults {
    /// Returned by `add_config`.
    pub add_config: i64,
    /// Returned by `get_config`.
    pub get_config: String,
    /// Returned by `get_config_list`.
    pub get_config_list: String,
    /// Returned by `get_default_config_id`.
    pub get_default_config_id: i64,
}

/// A mock configuration manager.
///
/// Every operation returns the matching field of [`ConfigMgrResults`]
/// verbatim and never fails. Calls are traced when the log level is `Trace`
/// and announced to registered observers.
///
/// ## Example
///
/// ```rust
/// use g2_sdk_mock::prelude::*;
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
/// # runtime.block_on(async {
/// let config_mgr = MockConfigMgr::new().with_results(ConfigMgrResults {
///     get_default_config_id: 42,
///     ..Default::default()
/// });
///
/// let ctx = Context::new();
/// assert_eq!(config_mgr.get_default_config_id(&ctx).await.unwrap(), 42);
///
/// config_mgr.configure(|results| results.get_config = "{}".to_string());
/// assert_eq!(config_mgr.get_config(&ctx, 42).await.unwrap(), "{}");
/// # });
/// ```
pub struct MockConfigMgr {
    inner: ClientInner,
    results: RwLock<ConfigMgrResults>,
}

impl MockConfigMgr {
    /// Creates a mock with default configuration and empty results.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a mock with the given configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            inner: ClientInner::new(PRODUCT_ID, config),
            results: RwLock::new(ConfigMgrResults::default()),
        }
    }

    /// Uses `logger` for trace records instead of the default `tracing` logger.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn MessageLogger>) -> Self {
        self.inner.install_logger(logger);
        self
    }

    /// Replaces all canned results.
    #[must_use]
    pub fn with_results(self, results: ConfigMgrResults) -> Self {
        *self.results.write() = results;
        self
    }

    /// Updates canned results between calls.
    pub fn configure(&self, update: impl FnOnce(&mut ConfigMgrResults)) {
        update(&mut self.results.write());
    }

    /// Returns a copy of the canned results.
    pub fn results(&self) -> ConfigMgrResults {
        self.results.read().clone()
    }

    /// Returns `true` if at least one observer is registered.
    pub fn has_observers(&self) -> bool {
        self.inner.has_observers()
    }

    /// Returns the ids of the registered observers, sorted.
    pub fn observer_ids(&self) -> Vec<String> {
        self.inner.observer_ids()
    }

    /// Returns `true` if calls are being traced.
    pub fn is_tracing(&self) -> bool {
        self.inner.is_tracing()
    }

    /// Returns the logger's current level.
    pub fn log_level(&self) -> LogLevel {
        self.inner.log_level()
    }

    /// Returns the subject id stamped on notifications.
    pub fn subject_id(&self) -> u32 {
        self.inner.subject_id()
    }
}

impl Default for MockConfigMgr {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl G2ConfigMgr for MockConfigMgr {
    async fn add_config(
        &self,
        ctx: &Context,
        config_str: &str,
        config_comments: &str,
    ) -> Result<i64> {
        self.inner.respond(
            ctx,
            operations::ADD_CONFIG,
            vec![json!(config_str), json!(config_comments)],
            details([("configComments", config_comments.to_string())]),
            || self.results.read().add_config,
        )
    }

    async fn destroy(&self, ctx: &Context) -> Result<()> {
        self.inner.acknowledge(ctx, operations::DESTROY, Vec::new(), Details::new())
    }

    async fn get_config(&self, ctx: &Context, config_id: i64) -> Result<String> {
        self.inner.respond(ctx, operations::GET_CONFIG, vec![json!(config_id)], Details::new(), || {
            self.results.read().get_config.clone()
        })
    }

    async fn get_config_list(&self, ctx: &Context) -> Result<String> {
        self.inner.respond(ctx, operations::GET_CONFIG_LIST, Vec::new(), Details::new(), || {
            self.results.read().get_config_list.clone()
        })
    }

    async fn get_default_config_id(&self, ctx: &Context) -> Result<i64> {
        self.inner.respond(
            ctx,
            operations::GET_DEFAULT_CONFIG_ID,
            Vec::new(),
            Details::new(),
            || self.results.read().get_default_config_id,
        )
    }

    async fn get_sdk_id(&self, ctx: &Context) -> Result<String> {
        self.inner.respond(ctx, operations::GET_SDK_ID, Vec::new(), Details::new(), || {
            self.inner.sdk_id().to_string()
        })
    }

    async fn init(
        &self,
        ctx: &Context,
        module_name: &str,
        ini_params: &str,
        verbose_logging: i64,
    ) -> Result<()> {
        self.inner.acknowledge(
            ctx,
            operations::INIT,
            vec![json!(module_name), json!(ini_params), json!(verbose_logging)],
            details([
                ("iniParams", ini_params.to_string()),
                ("moduleName", module_name.to_string()),
                ("verboseLogging", verbose_logging.to_string()),
            ]),
        )
    }

    async fn register_observer(&self, ctx: &Context, observer: Arc<dyn Observer>) -> Result<()> {
        self.inner.register_observer(ctx, operations::REGISTER_OBSERVER, observer)
    }

    async fn replace_default_config_id(
        &self,
        ctx: &Context,
        old_config_id: i64,
        new_config_id: i64,
    ) -> Result<()> {
        self.inner.acknowledge(
            ctx,
            operations::REPLACE_DEFAULT_CONFIG_ID,
            vec![json!(old_config_id), json!(new_config_id)],
            details([("newConfigID", new_config_id.to_string())]),
        )
    }

    async fn set_default_config_id(&self, ctx: &Context, config_id: i64) -> Result<()> {
        self.inner.acknowledge(
            ctx,
            operations::SET_DEFAULT_CONFIG_ID,
            vec![json!(config_id)],
            details([("configID", config_id.to_string())]),
        )
    }

    async fn set_log_level(&self, ctx: &Context, level: LogLevel) -> Result<()> {
        self.inner.set_log_level(ctx, operations::SET_LOG_LEVEL, level)
    }

    async fn unregister_observer(
        &self,
        ctx: &Context,
        observer: Arc<dyn Observer>,
    ) -> Result<()> {
        self.inner.unregister_observer(ctx, operations::UNREGISTER_OBSERVER, observer)
    }
}
