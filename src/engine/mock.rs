//! Mock entity resolution engine.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::json;

use super::{G2Engine, PRODUCT_ID, operations};
use crate::client::{ClientInner, Details, details};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::observer::Observer;
use crate::tracing_support::{LogLevel, MessageLogger};
use crate::types::{Context, ExportHandle};

/// Canned results returned by [`MockEngine`].
///
/// There is one field per data-returning operation. Operations returning two
/// values read two fields, suffixed by what each value holds. Defaults are
/// the zero values: empty strings, `0` and the `0` export handle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineResults {
    /// Returned by `add_record_with_info`.
    pub add_record_with_info: String,
    /// Affected entities returned by `add_record_with_info_with_returned_record_id`.
    pub add_record_with_info_with_returned_record_id_with_info: String,
    /// Record id returned by `add_record_with_info_with_returned_record_id`.
    pub add_record_with_info_with_returned_record_id_record_id: String,
    /// Returned by `add_record_with_returned_record_id`.
    pub add_record_with_returned_record_id: String,
    /// Returned by `check_record`.
    pub check_record: String,
    /// Returned by `count_redo_records`.
    pub count_redo_records: i64,
    /// Returned by `delete_record_with_info`.
    pub delete_record_with_info: String,
    /// Returned by `export_config`.
    pub export_config: String,
    /// First value returned by `export_config_and_config_id`: the configuration document.
    pub export_config_and_config_id_config: String,
    /// Second value returned by `export_config_and_config_id`: the configuration id.
    pub export_config_and_config_id_config_id: i64,
    /// Returned by `export_csv_entity_report`.
    pub export_csv_entity_report: ExportHandle,
    /// Returned by `export_json_entity_report`.
    pub export_json_entity_report: ExportHandle,
    /// Returned by `fetch_next`.
    pub fetch_next: String,
    /// Returned by `find_interesting_entities_by_entity_id`.
    pub find_interesting_entities_by_entity_id: String,
    /// Returned by `find_interesting_entities_by_record_id`.
    pub find_interesting_entities_by_record_id: String,
    /// Returned by `find_network_by_entity_id`.
    pub find_network_by_entity_id: String,
    /// Returned by `find_network_by_entity_id_v2`.
    pub find_network_by_entity_id_v2: String,
    /// Returned by `find_network_by_record_id`.
    pub find_network_by_record_id: String,
    /// Returned by `find_network_by_record_id_v2`.
    pub find_network_by_record_id_v2: String,
    /// Returned by `find_path_by_entity_id`.
    pub find_path_by_entity_id: String,
    /// Returned by `find_path_by_entity_id_v2`.
    pub find_path_by_entity_id_v2: String,
    /// Returned by `find_path_by_record_id`.
    pub find_path_by_record_id: String,
    /// Returned by `find_path_by_record_id_v2`.
    pub find_path_by_record_id_v2: String,
    /// Returned by `find_path_excluding_by_entity_id`.
    pub find_path_excluding_by_entity_id: String,
    /// Returned by `find_path_excluding_by_entity_id_v2`.
    pub find_path_excluding_by_entity_id_v2: String,
    /// Returned by `find_path_excluding_by_record_id`.
    pub find_path_excluding_by_record_id: String,
    /// Returned by `find_path_excluding_by_record_id_v2`.
    pub find_path_excluding_by_record_id_v2: String,
    /// Returned by `find_path_including_source_by_entity_id`.
    pub find_path_including_source_by_entity_id: String,
    /// Returned by `find_path_including_source_by_entity_id_v2`.
    pub find_path_including_source_by_entity_id_v2: String,
    /// Returned by `find_path_including_source_by_record_id`.
    pub find_path_including_source_by_record_id: String,
    /// Returned by `find_path_including_source_by_record_id_v2`.
    pub find_path_including_source_by_record_id_v2: String,
    /// Returned by `get_active_config_id`.
    pub get_active_config_id: i64,
    /// Returned by `get_entity_by_entity_id`.
    pub get_entity_by_entity_id: String,
    /// Returned by `get_entity_by_entity_id_v2`.
    pub get_entity_by_entity_id_v2: String,
    /// Returned by `get_entity_by_record_id`.
    pub get_entity_by_record_id: String,
    /// Returned by `get_entity_by_record_id_v2`.
    pub get_entity_by_record_id_v2: String,
    /// Returned by `get_record`.
    pub get_record: String,
    /// Returned by `get_record_v2`.
    pub get_record_v2: String,
    /// Returned by `get_redo_record`.
    pub get_redo_record: String,
    /// Returned by `get_repository_last_modified_time`.
    pub get_repository_last_modified_time: i64,
    /// Returned by `get_virtual_entity_by_record_id`.
    pub get_virtual_entity_by_record_id: String,
    /// Returned by `get_virtual_entity_by_record_id_v2`.
    pub get_virtual_entity_by_record_id_v2: String,
    /// Returned by `how_entity_by_entity_id`.
    pub how_entity_by_entity_id: String,
    /// Returned by `how_entity_by_entity_id_v2`.
    pub how_entity_by_entity_id_v2: String,
    /// Returned by `process_redo_record`.
    pub process_redo_record: String,
    /// First value returned by `process_redo_record_with_info`: the redo record.
    pub process_redo_record_with_info_record: String,
    /// Second value returned by `process_redo_record_with_info`: the affected entities.
    pub process_redo_record_with_info_with_info: String,
    /// Returned by `process_with_info`.
    pub process_with_info: String,
    /// Returned by `process_with_response`.
    pub process_with_response: String,
    /// Returned by `process_with_response_resize`.
    pub process_with_response_resize: String,
    /// Returned by `reevaluate_entity_with_info`.
    pub reevaluate_entity_with_info: String,
    /// Returned by `reevaluate_record_with_info`.
    pub reevaluate_record_with_info: String,
    /// Returned by `replace_record_with_info`.
    pub replace_record_with_info: String,
    /// Returned by `search_by_attributes`.
    pub search_by_attributes: String,
    /// Returned by `search_by_attributes_v2`.
    pub search_by_attributes_v2: String,
    /// Returned by `stats`.
    pub stats: String,
    /// Returned by `why_entities`.
    pub why_entities: String,
    /// Returned by `why_entities_v2`.
    pub why_entities_v2: String,
    /// Returned by `why_entity_by_entity_id`.
    pub why_entity_by_entity_id: String,
    /// Returned by `why_entity_by_entity_id_v2`.
    pub why_entity_by_entity_id_v2: String,
    /// Returned by `why_entity_by_record_id`.
    pub why_entity_by_record_id: String,
    /// Returned by `why_entity_by_record_id_v2`.
    pub why_entity_by_record_id_v2: String,
    /// Returned by `why_records`.
    pub why_records: String,
    /// Returned by `why_records_v2`.
    pub why_records_v2: String,
}

/// A mock entity resolution engine.
///
/// Every operation returns its canned value from [`EngineResults`] and never
/// fails. Side-effect operations (`add_record`, `purge_repository`, ...) only
/// trace and notify.
///
/// ## Example
///
/// ```rust
/// use g2_sdk_mock::prelude::*;
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
/// # runtime.block_on(async {
/// let engine: Box<dyn G2Engine> = Box::new(MockEngine::new().with_results(EngineResults {
///     get_active_config_id: 42,
///     ..Default::default()
/// }));
///
/// let ctx = Context::new();
/// assert_eq!(engine.get_active_config_id(&ctx).await.unwrap(), 42);
/// engine.add_record(&ctx, "CUSTOMERS", "1001", "{}", "load-1").await.unwrap();
/// # });
/// ```
pub struct MockEngine {
    inner: ClientInner,
    results: RwLock<EngineResults>,
}

impl MockEngine {
    /// Creates a mock with default configuration and empty results.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a mock with the given configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            inner: ClientInner::new(PRODUCT_ID, config),
            results: RwLock::new(EngineResults::default()),
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
    pub fn with_results(self, results: EngineResults) -> Self {
        *self.results.write() = results;
        self
    }

    /// Updates canned results between calls.
    pub fn configure(&self, update: impl FnOnce(&mut EngineResults)) {
        update(&mut self.results.write());
    }

    /// Returns a copy of the canned results.
    pub fn results(&self) -> EngineResults {
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

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl G2Engine for MockEngine {
    async fn add_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        json_data: &str,
        load_id: &str,
    ) -> Result<()> {
        self.inner.acknowledge(
            ctx,
            operations::ADD_RECORD,
            vec![json!(data_source_code), json!(record_id), json!(json_data), json!(load_id)],
            details([
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("loadID", load_id.to_string()),
            ]),
        )
    }

    async fn add_record_with_info(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        json_data: &str,
        load_id: &str,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::ADD_RECORD_WITH_INFO,
            vec![
                json!(data_source_code),
                json!(record_id),
                json!(json_data),
                json!(load_id),
                json!(flags),
            ],
            details([
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("loadID", load_id.to_string()),
            ]),
            || self.results.read().add_record_with_info.clone(),
        )
    }

    async fn add_record_with_info_with_returned_record_id(
        &self,
        ctx: &Context,
        data_source_code: &str,
        json_data: &str,
        load_id: &str,
        flags: i64,
    ) -> Result<(String, String)> {
        let operation = operations::ADD_RECORD_WITH_INFO_WITH_RETURNED_RECORD_ID;
        let call = self.inner.enter(
            operation,
            vec![json!(data_source_code), json!(json_data), json!(load_id), json!(flags)],
        );
        let (with_info, record_id) = {
            let results = self.results.read();
            (
                results.add_record_with_info_with_returned_record_id_with_info.clone(),
                results.add_record_with_info_with_returned_record_id_record_id.clone(),
            )
        };
        self.inner.notify(
            ctx,
            operation,
            None,
            details([
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.clone()),
                ("loadID", load_id.to_string()),
            ]),
        );
        call.exit(vec![json!(with_info), json!(record_id)], None);
        Ok((with_info, record_id))
    }

    async fn add_record_with_returned_record_id(
        &self,
        ctx: &Context,
        data_source_code: &str,
        json_data: &str,
        load_id: &str,
    ) -> Result<String> {
        let record_id = self.results.read().add_record_with_returned_record_id.clone();
        self.inner.respond(
            ctx,
            operations::ADD_RECORD_WITH_RETURNED_RECORD_ID,
            vec![json!(data_source_code), json!(json_data), json!(load_id)],
            details([
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.clone()),
                ("loadID", load_id.to_string()),
            ]),
            || record_id,
        )
    }

    async fn check_record(
        &self,
        ctx: &Context,
        record: &str,
        record_query_list: &str,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::CHECK_RECORD,
            vec![json!(record), json!(record_query_list)],
            Details::new(),
            || self.results.read().check_record.clone(),
        )
    }

    async fn close_export(&self, ctx: &Context, response_handle: ExportHandle) -> Result<()> {
        self.inner.acknowledge(
            ctx,
            operations::CLOSE_EXPORT,
            vec![json!(response_handle)],
            Details::new(),
        )
    }

    async fn count_redo_records(&self, ctx: &Context) -> Result<i64> {
        self.inner.respond(
            ctx,
            operations::COUNT_REDO_RECORDS,
            Vec::new(),
            Details::new(),
            || self.results.read().count_redo_records,
        )
    }

    async fn delete_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        load_id: &str,
    ) -> Result<()> {
        self.inner.acknowledge(
            ctx,
            operations::DELETE_RECORD,
            vec![json!(data_source_code), json!(record_id), json!(load_id)],
            details([
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("loadID", load_id.to_string()),
            ]),
        )
    }

    async fn delete_record_with_info(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        load_id: &str,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::DELETE_RECORD_WITH_INFO,
            vec![json!(data_source_code), json!(record_id), json!(load_id), json!(flags)],
            details([
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("loadID", load_id.to_string()),
            ]),
            || self.results.read().delete_record_with_info.clone(),
        )
    }

    async fn destroy(&self, ctx: &Context) -> Result<()> {
        self.inner.acknowledge(ctx, operations::DESTROY, Vec::new(), Details::new())
    }

    async fn export_config(&self, ctx: &Context) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::EXPORT_CONFIG,
            Vec::new(),
            Details::new(),
            || self.results.read().export_config.clone(),
        )
    }

    async fn export_config_and_config_id(&self, ctx: &Context) -> Result<(String, i64)> {
        let operation = operations::EXPORT_CONFIG_AND_CONFIG_ID;
        let call = self.inner.enter(operation, Vec::new());
        let (config, config_id) = {
            let results = self.results.read();
            (
                results.export_config_and_config_id_config.clone(),
                results.export_config_and_config_id_config_id,
            )
        };
        self.inner.notify(ctx, operation, None, details([("configID", config_id.to_string())]));
        call.exit(vec![json!(config), json!(config_id)], None);
        Ok((config, config_id))
    }

    async fn export_csv_entity_report(
        &self,
        ctx: &Context,
        csv_column_list: &str,
        flags: i64,
    ) -> Result<ExportHandle> {
        self.inner.respond(
            ctx,
            operations::EXPORT_CSV_ENTITY_REPORT,
            vec![json!(csv_column_list), json!(flags)],
            Details::new(),
            || self.results.read().export_csv_entity_report,
        )
    }

    async fn export_json_entity_report(&self, ctx: &Context, flags: i64) -> Result<ExportHandle> {
        self.inner.respond(
            ctx,
            operations::EXPORT_JSON_ENTITY_REPORT,
            vec![json!(flags)],
            Details::new(),
            || self.results.read().export_json_entity_report,
        )
    }

    async fn fetch_next(&self, ctx: &Context, response_handle: ExportHandle) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FETCH_NEXT,
            vec![json!(response_handle)],
            Details::new(),
            || self.results.read().fetch_next.clone(),
        )
    }

    async fn find_interesting_entities_by_entity_id(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_INTERESTING_ENTITIES_BY_ENTITY_ID,
            vec![json!(entity_id), json!(flags)],
            details([("entityID", entity_id.to_string())]),
            || self.results.read().find_interesting_entities_by_entity_id.clone(),
        )
    }

    async fn find_interesting_entities_by_record_id(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_INTERESTING_ENTITIES_BY_RECORD_ID,
            vec![json!(data_source_code), json!(record_id), json!(flags)],
            details([
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
            ]),
            || self.results.read().find_interesting_entities_by_record_id.clone(),
        )
    }

    async fn find_network_by_entity_id(
        &self,
        ctx: &Context,
        entity_list: &str,
        max_degree: i64,
        build_out_degree: i64,
        max_entities: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_NETWORK_BY_ENTITY_ID,
            vec![
                json!(entity_list),
                json!(max_degree),
                json!(build_out_degree),
                json!(max_entities),
            ],
            details([("entityList", entity_list.to_string())]),
            || self.results.read().find_network_by_entity_id.clone(),
        )
    }

    async fn find_network_by_entity_id_v2(
        &self,
        ctx: &Context,
        entity_list: &str,
        max_degree: i64,
        build_out_degree: i64,
        max_entities: i64,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_NETWORK_BY_ENTITY_ID_V2,
            vec![
                json!(entity_list),
                json!(max_degree),
                json!(build_out_degree),
                json!(max_entities),
                json!(flags),
            ],
            details([("entityList", entity_list.to_string())]),
            || self.results.read().find_network_by_entity_id_v2.clone(),
        )
    }

    async fn find_network_by_record_id(
        &self,
        ctx: &Context,
        record_list: &str,
        max_degree: i64,
        build_out_degree: i64,
        max_entities: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_NETWORK_BY_RECORD_ID,
            vec![
                json!(record_list),
                json!(max_degree),
                json!(build_out_degree),
                json!(max_entities),
            ],
            details([("recordList", record_list.to_string())]),
            || self.results.read().find_network_by_record_id.clone(),
        )
    }

    async fn find_network_by_record_id_v2(
        &self,
        ctx: &Context,
        record_list: &str,
        max_degree: i64,
        build_out_degree: i64,
        max_entities: i64,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_NETWORK_BY_RECORD_ID_V2,
            vec![
                json!(record_list),
                json!(max_degree),
                json!(build_out_degree),
                json!(max_entities),
                json!(flags),
            ],
            details([("recordList", record_list.to_string())]),
            || self.results.read().find_network_by_record_id_v2.clone(),
        )
    }

    async fn find_path_by_entity_id(
        &self,
        ctx: &Context,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_PATH_BY_ENTITY_ID,
            vec![json!(entity_id1), json!(entity_id2), json!(max_degree)],
            details([("entityID1", entity_id1.to_string()), ("entityID2", entity_id2.to_string())]),
            || self.results.read().find_path_by_entity_id.clone(),
        )
    }

    async fn find_path_by_entity_id_v2(
        &self,
        ctx: &Context,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_PATH_BY_ENTITY_ID_V2,
            vec![json!(entity_id1), json!(entity_id2), json!(max_degree), json!(flags)],
            details([("entityID1", entity_id1.to_string()), ("entityID2", entity_id2.to_string())]),
            || self.results.read().find_path_by_entity_id_v2.clone(),
        )
    }

    async fn find_path_by_record_id(
        &self,
        ctx: &Context,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        max_degree: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_PATH_BY_RECORD_ID,
            vec![
                json!(data_source_code1),
                json!(record_id1),
                json!(data_source_code2),
                json!(record_id2),
                json!(max_degree),
            ],
            details([
                ("dataSourceCode1", data_source_code1.to_string()),
                ("recordID1", record_id1.to_string()),
                ("dataSourceCode2", data_source_code2.to_string()),
                ("recordID2", record_id2.to_string()),
            ]),
            || self.results.read().find_path_by_record_id.clone(),
        )
    }

    async fn find_path_by_record_id_v2(
        &self,
        ctx: &Context,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        max_degree: i64,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_PATH_BY_RECORD_ID_V2,
            vec![
                json!(data_source_code1),
                json!(record_id1),
                json!(data_source_code2),
                json!(record_id2),
                json!(max_degree),
                json!(flags),
            ],
            details([
                ("dataSourceCode1", data_source_code1.to_string()),
                ("recordID1", record_id1.to_string()),
                ("dataSourceCode2", data_source_code2.to_string()),
                ("recordID2", record_id2.to_string()),
            ]),
            || self.results.read().find_path_by_record_id_v2.clone(),
        )
    }

    async fn find_path_excluding_by_entity_id(
        &self,
        ctx: &Context,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
        excluded_entities: &str,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_PATH_EXCLUDING_BY_ENTITY_ID,
            vec![json!(entity_id1), json!(entity_id2), json!(max_degree), json!(excluded_entities)],
            details([("entityID1", entity_id1.to_string()), ("entityID2", entity_id2.to_string())]),
            || self.results.read().find_path_excluding_by_entity_id.clone(),
        )
    }

    async fn find_path_excluding_by_entity_id_v2(
        &self,
        ctx: &Context,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
        excluded_entities: &str,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_PATH_EXCLUDING_BY_ENTITY_ID_V2,
            vec![
                json!(entity_id1),
                json!(entity_id2),
                json!(max_degree),
                json!(excluded_entities),
                json!(flags),
            ],
            details([("entityID1", entity_id1.to_string()), ("entityID2", entity_id2.to_string())]),
            || self.results.read().find_path_excluding_by_entity_id_v2.clone(),
        )
    }

    async fn find_path_excluding_by_record_id(
        &self,
        ctx: &Context,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        max_degree: i64,
        excluded_records: &str,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_PATH_EXCLUDING_BY_RECORD_ID,
            vec![
                json!(data_source_code1),
                json!(record_id1),
                json!(data_source_code2),
                json!(record_id2),
                json!(max_degree),
                json!(excluded_records),
            ],
            details([
                ("dataSourceCode1", data_source_code1.to_string()),
                ("recordID1", record_id1.to_string()),
                ("dataSourceCode2", data_source_code2.to_string()),
                ("recordID2", record_id2.to_string()),
            ]),
            || self.results.read().find_path_excluding_by_record_id.clone(),
        )
    }

    async fn find_path_excluding_by_record_id_v2(
        &self,
        ctx: &Context,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        max_degree: i64,
        excluded_records: &str,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_PATH_EXCLUDING_BY_RECORD_ID_V2,
            vec![
                json!(data_source_code1),
                json!(record_id1),
                json!(data_source_code2),
                json!(record_id2),
                json!(max_degree),
                json!(excluded_records),
                json!(flags),
            ],
            details([
                ("dataSourceCode1", data_source_code1.to_string()),
                ("recordID1", record_id1.to_string()),
                ("dataSourceCode2", data_source_code2.to_string()),
                ("recordID2", record_id2.to_string()),
            ]),
            || self.results.read().find_path_excluding_by_record_id_v2.clone(),
        )
    }

    async fn find_path_including_source_by_entity_id(
        &self,
        ctx: &Context,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
        excluded_entities: &str,
        required_dsrcs: &str,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_PATH_INCLUDING_SOURCE_BY_ENTITY_ID,
            vec![
                json!(entity_id1),
                json!(entity_id2),
                json!(max_degree),
                json!(excluded_entities),
                json!(required_dsrcs),
            ],
            details([("entityID1", entity_id1.to_string()), ("entityID2", entity_id2.to_string())]),
            || self.results.read().find_path_including_source_by_entity_id.clone(),
        )
    }

    async fn find_path_including_source_by_entity_id_v2(
        &self,
        ctx: &Context,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
        excluded_entities: &str,
        required_dsrcs: &str,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_PATH_INCLUDING_SOURCE_BY_ENTITY_ID_V2,
            vec![
                json!(entity_id1),
                json!(entity_id2),
                json!(max_degree),
                json!(excluded_entities),
                json!(required_dsrcs),
                json!(flags),
            ],
            details([("entityID1", entity_id1.to_string()), ("entityID2", entity_id2.to_string())]),
            || self.results.read().find_path_including_source_by_entity_id_v2.clone(),
        )
    }

    async fn find_path_including_source_by_record_id(
        &self,
        ctx: &Context,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        max_degree: i64,
        excluded_records: &str,
        required_dsrcs: &str,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_PATH_INCLUDING_SOURCE_BY_RECORD_ID,
            vec![
                json!(data_source_code1),
                json!(record_id1),
                json!(data_source_code2),
                json!(record_id2),
                json!(max_degree),
                json!(excluded_records),
                json!(required_dsrcs),
            ],
            details([
                ("dataSourceCode1", data_source_code1.to_string()),
                ("recordID1", record_id1.to_string()),
                ("dataSourceCode2", data_source_code2.to_string()),
                ("recordID2", record_id2.to_string()),
            ]),
            || self.results.read().find_path_including_source_by_record_id.clone(),
        )
    }

    async fn find_path_including_source_by_record_id_v2(
        &self,
        ctx: &Context,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        max_degree: i64,
        excluded_records: &str,
        required_dsrcs: &str,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::FIND_PATH_INCLUDING_SOURCE_BY_RECORD_ID_V2,
            vec![
                json!(data_source_code1),
                json!(record_id1),
                json!(data_source_code2),
                json!(record_id2),
                json!(max_degree),
                json!(excluded_records),
                json!(required_dsrcs),
                json!(flags),
            ],
            details([
                ("dataSourceCode1", data_source_code1.to_string()),
                ("recordID1", record_id1.to_string()),
                ("dataSourceCode2", data_source_code2.to_string()),
                ("recordID2", record_id2.to_string()),
            ]),
            || self.results.read().find_path_including_source_by_record_id_v2.clone(),
        )
    }

    async fn get_active_config_id(&self, ctx: &Context) -> Result<i64> {
        self.inner.respond(
            ctx,
            operations::GET_ACTIVE_CONFIG_ID,
            Vec::new(),
            Details::new(),
            || self.results.read().get_active_config_id,
        )
    }

    async fn get_entity_by_entity_id(&self, ctx: &Context, entity_id: i64) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::GET_ENTITY_BY_ENTITY_ID,
            vec![json!(entity_id)],
            details([("entityID", entity_id.to_string())]),
            || self.results.read().get_entity_by_entity_id.clone(),
        )
    }

    async fn get_entity_by_entity_id_v2(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::GET_ENTITY_BY_ENTITY_ID_V2,
            vec![json!(entity_id), json!(flags)],
            details([("entityID", entity_id.to_string())]),
            || self.results.read().get_entity_by_entity_id_v2.clone(),
        )
    }

    async fn get_entity_by_record_id(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::GET_ENTITY_BY_RECORD_ID,
            vec![json!(data_source_code), json!(record_id)],
            details([
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
            ]),
            || self.results.read().get_entity_by_record_id.clone(),
        )
    }

    async fn get_entity_by_record_id_v2(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::GET_ENTITY_BY_RECORD_ID_V2,
            vec![json!(data_source_code), json!(record_id), json!(flags)],
            details([
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
            ]),
            || self.results.read().get_entity_by_record_id_v2.clone(),
        )
    }

    async fn get_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::GET_RECORD,
            vec![json!(data_source_code), json!(record_id)],
            details([
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
            ]),
            || self.results.read().get_record.clone(),
        )
    }

    async fn get_record_v2(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::GET_RECORD_V2,
            vec![json!(data_source_code), json!(record_id), json!(flags)],
            details([
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
            ]),
            || self.results.read().get_record_v2.clone(),
        )
    }

    async fn get_redo_record(&self, ctx: &Context) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::GET_REDO_RECORD,
            Vec::new(),
            Details::new(),
            || self.results.read().get_redo_record.clone(),
        )
    }

    async fn get_repository_last_modified_time(&self, ctx: &Context) -> Result<i64> {
        self.inner.respond(
            ctx,
            operations::GET_REPOSITORY_LAST_MODIFIED_TIME,
            Vec::new(),
            Details::new(),
            || self.results.read().get_repository_last_modified_time,
        )
    }

    async fn get_sdk_id(&self, ctx: &Context) -> Result<String> {
        self.inner.respond(ctx, operations::GET_SDK_ID, Vec::new(), Details::new(), || {
            self.inner.sdk_id().to_string()
        })
    }

    async fn get_virtual_entity_by_record_id(
        &self,
        ctx: &Context,
        record_list: &str,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::GET_VIRTUAL_ENTITY_BY_RECORD_ID,
            vec![json!(record_list)],
            details([("recordList", record_list.to_string())]),
            || self.results.read().get_virtual_entity_by_record_id.clone(),
        )
    }

    async fn get_virtual_entity_by_record_id_v2(
        &self,
        ctx: &Context,
        record_list: &str,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::GET_VIRTUAL_ENTITY_BY_RECORD_ID_V2,
            vec![json!(record_list), json!(flags)],
            details([("recordList", record_list.to_string())]),
            || self.results.read().get_virtual_entity_by_record_id_v2.clone(),
        )
    }

    async fn how_entity_by_entity_id(&self, ctx: &Context, entity_id: i64) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::HOW_ENTITY_BY_ENTITY_ID,
            vec![json!(entity_id)],
            details([("entityID", entity_id.to_string())]),
            || self.results.read().how_entity_by_entity_id.clone(),
        )
    }

    async fn how_entity_by_entity_id_v2(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::HOW_ENTITY_BY_ENTITY_ID_V2,
            vec![json!(entity_id), json!(flags)],
            details([("entityID", entity_id.to_string())]),
            || self.results.read().how_entity_by_entity_id_v2.clone(),
        )
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

    async fn init_with_config_id(
        &self,
        ctx: &Context,
        module_name: &str,
        ini_params: &str,
        init_config_id: i64,
        verbose_logging: i64,
    ) -> Result<()> {
        self.inner.acknowledge(
            ctx,
            operations::INIT_WITH_CONFIG_ID,
            vec![
                json!(module_name),
                json!(ini_params),
                json!(init_config_id),
                json!(verbose_logging),
            ],
            details([
                ("iniParams", ini_params.to_string()),
                ("initConfigID", init_config_id.to_string()),
                ("moduleName", module_name.to_string()),
                ("verboseLogging", verbose_logging.to_string()),
            ]),
        )
    }

    async fn prime_engine(&self, ctx: &Context) -> Result<()> {
        self.inner.acknowledge(ctx, operations::PRIME_ENGINE, Vec::new(), Details::new())
    }

    async fn process(&self, ctx: &Context, record: &str) -> Result<()> {
        self.inner.acknowledge(ctx, operations::PROCESS, vec![json!(record)], Details::new())
    }

    async fn process_redo_record(&self, ctx: &Context) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::PROCESS_REDO_RECORD,
            Vec::new(),
            Details::new(),
            || self.results.read().process_redo_record.clone(),
        )
    }

    async fn process_redo_record_with_info(
        &self,
        ctx: &Context,
        flags: i64,
    ) -> Result<(String, String)> {
        let operation = operations::PROCESS_REDO_RECORD_WITH_INFO;
        let call = self.inner.enter(operation, vec![json!(flags)]);
        self.inner.notify(ctx, operation, None, Details::new());
        let (record, with_info) = {
            let results = self.results.read();
            (
                results.process_redo_record_with_info_record.clone(),
                results.process_redo_record_with_info_with_info.clone(),
            )
        };
        call.exit(vec![json!(record), json!(with_info)], None);
        Ok((record, with_info))
    }

    async fn process_with_info(&self, ctx: &Context, record: &str, flags: i64) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::PROCESS_WITH_INFO,
            vec![json!(record), json!(flags)],
            Details::new(),
            || self.results.read().process_with_info.clone(),
        )
    }

    async fn process_with_response(&self, ctx: &Context, record: &str) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::PROCESS_WITH_RESPONSE,
            vec![json!(record)],
            Details::new(),
            || self.results.read().process_with_response.clone(),
        )
    }

    async fn process_with_response_resize(&self, ctx: &Context, record: &str) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::PROCESS_WITH_RESPONSE_RESIZE,
            vec![json!(record)],
            Details::new(),
            || self.results.read().process_with_response_resize.clone(),
        )
    }

    async fn purge_repository(&self, ctx: &Context) -> Result<()> {
        self.inner.acknowledge(ctx, operations::PURGE_REPOSITORY, Vec::new(), Details::new())
    }

    async fn reevaluate_entity(&self, ctx: &Context, entity_id: i64, flags: i64) -> Result<()> {
        self.inner.acknowledge(
            ctx,
            operations::REEVALUATE_ENTITY,
            vec![json!(entity_id), json!(flags)],
            details([("entityID", entity_id.to_string())]),
        )
    }

    async fn reevaluate_entity_with_info(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::REEVALUATE_ENTITY_WITH_INFO,
            vec![json!(entity_id), json!(flags)],
            details([("entityID", entity_id.to_string())]),
            || self.results.read().reevaluate_entity_with_info.clone(),
        )
    }

    async fn reevaluate_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<()> {
        self.inner.acknowledge(
            ctx,
            operations::REEVALUATE_RECORD,
            vec![json!(data_source_code), json!(record_id), json!(flags)],
            details([
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
            ]),
        )
    }

    async fn reevaluate_record_with_info(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::REEVALUATE_RECORD_WITH_INFO,
            vec![json!(data_source_code), json!(record_id), json!(flags)],
            details([
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
            ]),
            || self.results.read().reevaluate_record_with_info.clone(),
        )
    }

    async fn register_observer(&self, ctx: &Context, observer: Arc<dyn Observer>) -> Result<()> {
        self.inner.register_observer(ctx, operations::REGISTER_OBSERVER, observer)
    }

    async fn reinit(&self, ctx: &Context, init_config_id: i64) -> Result<()> {
        self.inner.acknowledge(
            ctx,
            operations::REINIT,
            vec![json!(init_config_id)],
            details([("initConfigID", init_config_id.to_string())]),
        )
    }

    async fn replace_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        json_data: &str,
        load_id: &str,
    ) -> Result<()> {
        self.inner.acknowledge(
            ctx,
            operations::REPLACE_RECORD,
            vec![json!(data_source_code), json!(record_id), json!(json_data), json!(load_id)],
            details([
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("loadID", load_id.to_string()),
            ]),
        )
    }

    async fn replace_record_with_info(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        json_data: &str,
        load_id: &str,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::REPLACE_RECORD_WITH_INFO,
            vec![
                json!(data_source_code),
                json!(record_id),
                json!(json_data),
                json!(load_id),
                json!(flags),
            ],
            details([
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("loadID", load_id.to_string()),
            ]),
            || self.results.read().replace_record_with_info.clone(),
        )
    }

    async fn search_by_attributes(&self, ctx: &Context, json_data: &str) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::SEARCH_BY_ATTRIBUTES,
            vec![json!(json_data)],
            Details::new(),
            || self.results.read().search_by_attributes.clone(),
        )
    }

    async fn search_by_attributes_v2(
        &self,
        ctx: &Context,
        json_data: &str,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::SEARCH_BY_ATTRIBUTES_V2,
            vec![json!(json_data), json!(flags)],
            Details::new(),
            || self.results.read().search_by_attributes_v2.clone(),
        )
    }

    async fn set_log_level(&self, ctx: &Context, level: LogLevel) -> Result<()> {
        self.inner.set_log_level(ctx, operations::SET_LOG_LEVEL, level)
    }

    async fn stats(&self, ctx: &Context) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::STATS,
            Vec::new(),
            Details::new(),
            || self.results.read().stats.clone(),
        )
    }

    async fn unregister_observer(&self, ctx: &Context, observer: Arc<dyn Observer>) -> Result<()> {
        self.inner.unregister_observer(ctx, operations::UNREGISTER_OBSERVER, observer)
    }

    async fn why_entities(
        &self,
        ctx: &Context,
        entity_id1: i64,
        entity_id2: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::WHY_ENTITIES,
            vec![json!(entity_id1), json!(entity_id2)],
            details([("entityID1", entity_id1.to_string()), ("entityID2", entity_id2.to_string())]),
            || self.results.read().why_entities.clone(),
        )
    }

    async fn why_entities_v2(
        &self,
        ctx: &Context,
        entity_id1: i64,
        entity_id2: i64,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::WHY_ENTITIES_V2,
            vec![json!(entity_id1), json!(entity_id2), json!(flags)],
            details([("entityID1", entity_id1.to_string()), ("entityID2", entity_id2.to_string())]),
            || self.results.read().why_entities_v2.clone(),
        )
    }

    async fn why_entity_by_entity_id(&self, ctx: &Context, entity_id: i64) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::WHY_ENTITY_BY_ENTITY_ID,
            vec![json!(entity_id)],
            details([("entityID", entity_id.to_string())]),
            || self.results.read().why_entity_by_entity_id.clone(),
        )
    }

    async fn why_entity_by_entity_id_v2(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::WHY_ENTITY_BY_ENTITY_ID_V2,
            vec![json!(entity_id), json!(flags)],
            details([("entityID", entity_id.to_string())]),
            || self.results.read().why_entity_by_entity_id_v2.clone(),
        )
    }

    async fn why_entity_by_record_id(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::WHY_ENTITY_BY_RECORD_ID,
            vec![json!(data_source_code), json!(record_id)],
            details([
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
            ]),
            || self.results.read().why_entity_by_record_id.clone(),
        )
    }

    async fn why_entity_by_record_id_v2(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::WHY_ENTITY_BY_RECORD_ID_V2,
            vec![json!(data_source_code), json!(record_id), json!(flags)],
            details([
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
            ]),
            || self.results.read().why_entity_by_record_id_v2.clone(),
        )
    }

    async fn why_records(
        &self,
        ctx: &Context,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::WHY_RECORDS,
            vec![
                json!(data_source_code1),
                json!(record_id1),
                json!(data_source_code2),
                json!(record_id2),
            ],
            details([
                ("dataSourceCode1", data_source_code1.to_string()),
                ("recordID1", record_id1.to_string()),
                ("dataSourceCode2", data_source_code2.to_string()),
                ("recordID2", record_id2.to_string()),
            ]),
            || self.results.read().why_records.clone(),
        )
    }

    async fn why_records_v2(
        &self,
        ctx: &Context,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        flags: i64,
    ) -> Result<String> {
        self.inner.respond(
            ctx,
            operations::WHY_RECORDS_V2,
            vec![
                json!(data_source_code1),
                json!(record_id1),
                json!(data_source_code2),
                json!(record_id2),
                json!(flags),
            ],
            details([
                ("dataSourceCode1", data_source_code1.to_string()),
                ("recordID1", record_id1.to_string()),
                ("dataSourceCode2", data_source_code2.to_string()),
                ("recordID2", record_id2.to_string()),
            ]),
            || self.results.read().why_records_v2.clone(),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::observer::Notification;
    use crate::testing::{ChannelObserver, RecordingLogger};

    async fn next(messages: &mut tokio::sync::mpsc::UnboundedReceiver<String>) -> Notification {
        let message = tokio::time::timeout(Duration::from_secs(1), messages.recv())
            .await
            .unwrap()
            .unwrap();
        Notification::parse(&message).unwrap()
    }

    #[tokio::test]
    async fn test_defaults_are_zero_values() {
        let engine = MockEngine::new();
        let ctx = Context::new();
        assert_eq!(engine.get_active_config_id(&ctx).await.unwrap(), 0);
        assert_eq!(engine.count_redo_records(&ctx).await.unwrap(), 0);
        assert_eq!(engine.stats(&ctx).await.unwrap(), "");
        let handle = engine.export_json_entity_report(&ctx, 0).await.unwrap();
        assert_eq!(handle, ExportHandle::default());
        assert_eq!(engine.export_config_and_config_id(&ctx).await.unwrap(), (String::new(), 0));
        assert_eq!(engine.get_sdk_id(&ctx).await.unwrap(), "mock");
    }

    #[tokio::test]
    async fn test_two_value_operations() {
        let engine = MockEngine::new();
        engine.configure(|r| {
            r.add_record_with_info_with_returned_record_id_with_info = "{\"AFFECTED\":1}".into();
            r.add_record_with_info_with_returned_record_id_record_id = "R-7".into();
            r.export_config_and_config_id_config = "{\"G2_CONFIG\":{}}".into();
            r.export_config_and_config_id_config_id = 42;
            r.process_redo_record_with_info_record = "{\"REDO\":1}".into();
            r.process_redo_record_with_info_with_info = "{\"AFFECTED\":2}".into();
        });
        let ctx = Context::new();

        let (info, record_id) = engine
            .add_record_with_info_with_returned_record_id(&ctx, "CUSTOMERS", "{}", "load", 0)
            .await
            .unwrap();
        assert_eq!((info.as_str(), record_id.as_str()), ("{\"AFFECTED\":1}", "R-7"));

        let (config, config_id) = engine.export_config_and_config_id(&ctx).await.unwrap();
        assert_eq!((config.as_str(), config_id), ("{\"G2_CONFIG\":{}}", 42));

        let (record, info) = engine.process_redo_record_with_info(&ctx, 0).await.unwrap();
        assert_eq!((record.as_str(), info.as_str()), ("{\"REDO\":1}", "{\"AFFECTED\":2}"));
    }

    #[tokio::test]
    async fn test_export_cursor() {
        let engine = MockEngine::new();
        engine.configure(|r| {
            r.export_csv_entity_report = ExportHandle::new(0xbeef);
            r.fetch_next = "RESOLVED_ENTITY_ID,RECORD_ID\n1,1001\n".into();
        });
        let ctx = Context::new();

        let handle = engine.export_csv_entity_report(&ctx, "*", 0).await.unwrap();
        assert_eq!(handle.get(), 0xbeef);
        let chunk = engine.fetch_next(&ctx, handle).await.unwrap();
        assert_eq!(chunk, "RESOLVED_ENTITY_ID,RECORD_ID\n1,1001\n");
        engine.close_export(&ctx, handle).await.unwrap();
    }

    #[tokio::test]
    async fn test_returned_record_id_is_reported_to_observers() {
        let engine = MockEngine::new();
        engine.configure(|r| r.add_record_with_returned_record_id = "R-1".into());
        let ctx = Context::new();
        let (observer, mut messages) = ChannelObserver::with_id("watcher");
        engine.register_observer(&ctx, Arc::new(observer)).await.unwrap();
        assert_eq!(next(&mut messages).await.message_id, 8076);

        let record_id = engine
            .add_record_with_returned_record_id(&ctx, "CUSTOMERS", "{}", "load-1")
            .await
            .unwrap();
        assert_eq!(record_id, "R-1");

        let notification = next(&mut messages).await;
        assert_eq!(notification.subject_id, PRODUCT_ID);
        assert_eq!(notification.message_id, 8004);
        assert_eq!(notification.detail("dataSourceCode"), Some("CUSTOMERS"));
        assert_eq!(notification.detail("recordID"), Some("R-1"));
        assert_eq!(notification.detail("loadID"), Some("load-1"));
    }

    #[tokio::test]
    async fn test_export_config_and_config_id_reports_config_id() {
        let engine = MockEngine::new();
        engine.configure(|r| r.export_config_and_config_id_config_id = 42);
        let ctx = Context::new();
        let (observer, mut messages) = ChannelObserver::with_id("watcher");
        engine.register_observer(&ctx, Arc::new(observer)).await.unwrap();
        next(&mut messages).await;

        engine.export_config_and_config_id(&ctx).await.unwrap();

        let notification = next(&mut messages).await;
        assert_eq!(notification.message_id, 8012);
        assert_eq!(notification.detail("configID"), Some("42"));
    }

    #[tokio::test]
    async fn test_two_value_trace_lists_each_result() {
        let logger = Arc::new(RecordingLogger::new());
        let engine = MockEngine::with_config(ClientConfig::tracing()).with_logger(logger.clone());
        engine.configure(|r| {
            r.process_redo_record_with_info_record = "redo".into();
            r.process_redo_record_with_info_with_info = "info".into();
        });

        engine.process_redo_record_with_info(&Context::new(), 8).await.unwrap();

        let records = logger.records();
        assert_eq!(logger.codes(), vec![109, 110]);
        assert_eq!(records[0].details, vec![json!(8)]);
        assert_eq!(
            &records[1].details[..4],
            &[json!(8), json!("redo"), json!("info"), json!(null)]
        );
        assert_eq!(records[1].details.len(), 5);
    }

    #[tokio::test]
    async fn test_find_network_traces_all_limits() {
        let logger = Arc::new(RecordingLogger::new());
        let engine = MockEngine::with_config(ClientConfig::tracing()).with_logger(logger.clone());

        engine.find_network_by_entity_id(&Context::new(), "[1,2]", 3, 1, 10).await.unwrap();

        let expected = vec![json!("[1,2]"), json!(3), json!(1), json!(10)];
        assert_eq!(logger.records()[0].details, expected);
    }
}
