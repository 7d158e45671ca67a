use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::json;

use super::{G2Product, PRODUCT_ID, operations};
use crate::client::{ClientInner, Details, details};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::observer::Observer;
use crate::tracing_support::{LogLevel, MessageLogger};
use crate::types::Context;

/// Canned results returned by [`MockProduct`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductResults {
    /// Returned by `license`.
    pub license: String,
    /// Returned by `validate_license_file`.
    pub validate_license_file: String,
    /// Returned by `validate_license_string_base64`.
    pub validate_license_string_base64: String,
    /// Returned by `version`.
    pub version: String,
}

/// A mock product client returning [`ProductResults`] verbatim.
pub struct MockProduct {
    inner: ClientInner,
    results: RwLock<ProductResults>,
}

impl MockProduct {
    /// Creates a mock with default configuration and empty results.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a mock with the given configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            inner: ClientInner::new(PRODUCT_ID, config),
            results: RwLock::new(ProductResults::default()),
        }
    }

    /// Uses `logger` for trace records.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn MessageLogger>) -> Self {
        self.inner.install_logger(logger);
        self
    }

    /// Replaces all canned results.
    #[must_use]
    pub fn with_results(self, results: ProductResults) -> Self {
        *self.results.write() = results;
        self
    }

    /// Updates canned results between calls.
    pub fn configure(&self, update: impl FnOnce(&mut ProductResults)) {
        update(&mut self.results.write());
    }

    /// Returns a copy of the canned results.
    pub fn results(&self) -> ProductResults {
        self.results.read().clone()
    }

    /// Returns `true` if at least one observer is registered.
    pub fn has_observers(&self) -> bool {
        self.inner.has_observers()
    }

    /// Returns the registered observer ids, sorted.
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

impl Default for MockProduct {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl G2Product for MockProduct {
    async fn destroy(&self, ctx: &Context) -> Result<()> {
        self.inner.acknowledge(ctx, operations::DESTROY, Vec::new(), Details::new())
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

    async fn license(&self, ctx: &Context) -> Result<String> {
        self.inner.respond(ctx, operations::LICENSE, Vec::new(), Details::new(), || {
            self.results.read().license.clone()
        })
    }

    async fn register_observer(&self, ctx: &Context, observer: Arc<dyn Observer>) -> Result<()> {
        self.inner.register_observer(ctx, operations::REGISTER_OBSERVER, observer)
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

    async fn validate_license_file(
        &self,
        ctx: &Context,
        license_file_path: &str,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::VALIDATE_LICENSE_FILE,
            vec![json!(license_file_path)],
            Details::new(),
            || self.results.read().validate_license_file.clone(),
        )
    }

    async fn validate_license_string_base64(
        &self,
        ctx: &Context,
        license_string: &str,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::VALIDATE_LICENSE_STRING_BASE64,
            vec![json!(license_string)],
            Details::new(),
            || self.results.read().validate_license_string_base64.clone(),
        )
    }

    async fn version(&self, ctx: &Context) -> Result<String> {
        self.inner.respond(ctx, operations::VERSION, Vec::new(), Details::new(), || {
            self.results.read().version.clone()
        })
    }
}
