//! Product capability group: license and version queries.

mod mock;

use std::sync::Arc;

use async_trait::async_trait;

pub use mock::{MockProduct, ProductResults};

use crate::error::Result;
use crate::observer::Observer;
use crate::tracing_support::LogLevel;
use crate::types::Context;

/// Product id of the product group; the default notification subject id.
pub const PRODUCT_ID: u32 = 6006;

/// Fixed identifiers of every product operation.
pub mod operations {
    #![allow(missing_docs)]

    use crate::client::Operation;

    pub const DESTROY: Operation = Operation::new("Destroy", 8001, 3, 4);
    pub const INIT: Operation = Operation::new("Init", 8002, 9, 10);
    pub const LICENSE: Operation = Operation::new("License", 8003, 11, 12);
    pub const VALIDATE_LICENSE_FILE: Operation =
        Operation::new("ValidateLicenseFile", 8004, 15, 16);
    pub const VALIDATE_LICENSE_STRING_BASE64: Operation =
        Operation::new("ValidateLicenseStringBase64", 8005, 17, 18);
    pub const VERSION: Operation = Operation::new("Version", 8006, 19, 20);
    pub const GET_SDK_ID: Operation = Operation::new("GetSdkId", 8007, 25, 26);
    pub const REGISTER_OBSERVER: Operation = Operation::new("RegisterObserver", 8008, 21, 22);
    pub const SET_LOG_LEVEL: Operation = Operation::new("SetLogLevel", 8009, 13, 14);
    pub const UNREGISTER_OBSERVER: Operation =
        Operation::new("UnregisterObserver", 8010, 23, 24);

    /// Every operation of the group.
    pub const ALL: [Operation; 10] = [
        DESTROY,
        INIT,
        LICENSE,
        VALIDATE_LICENSE_FILE,
        VALIDATE_LICENSE_STRING_BASE64,
        VERSION,
        GET_SDK_ID,
        REGISTER_OBSERVER,
        SET_LOG_LEVEL,
        UNREGISTER_OBSERVER,
    ];
}

/// Product operations.
#[async_trait]
pub trait G2Product: Send + Sync {
    /// Releases the client.
    async fn destroy(&self, ctx: &Context) -> Result<()>;

    /// Returns the identifier of this SDK implementation.
    async fn get_sdk_id(&self, ctx: &Context) -> Result<String>;

    /// Initializes the client.
    async fn init(
        &self,
        ctx: &Context,
        module_name: &str,
        ini_params: &str,
        verbose_logging: i64,
    ) -> Result<()>;

    /// Returns a JSON document describing the installed license.
    async fn license(&self, ctx: &Context) -> Result<String>;

    /// Adds an observer to the set notified on every call.
    async fn register_observer(&self, ctx: &Context, observer: Arc<dyn Observer>) -> Result<()>;

    /// Sets the log level; `Trace` enables call tracing.
    async fn set_log_level(&self, ctx: &Context, level: LogLevel) -> Result<()>;

    /// Removes an observer.
    async fn unregister_observer(&self, ctx: &Context, observer: Arc<dyn Observer>)
    -> Result<()>;

    /// Validates the license file at `license_file_path`.
    async fn validate_license_file(&self, ctx: &Context, license_file_path: &str)
    -> Result<String>;

    /// Validates a Base-64 encoded license.
    async fn validate_license_string_base64(
        &self,
        ctx: &Context,
        license_string: &str,
    ) -> Result<String>;

    /// Returns a JSON document describing the engine version.
    async fn version(&self, ctx: &Context) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_ids_are_unique() {
        crate::client::assert_unique(&operations::ALL);
        assert!(operations::ALL.iter().all(|op| (8001..=8010).contains(&op.event_id())));
    }
}
