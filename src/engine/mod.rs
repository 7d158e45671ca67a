//! Entity resolution engine capability group.
//!
//! [`G2Engine`] covers record ingestion, entity queries, path and network
//! searches, explanations, redo processing and report export. [`MockEngine`]
//! implements every operation with canned results from [`EngineResults`].
//!
//! Operations with a `_v2` suffix take an extra `flags` argument selecting
//! the response content; `_with_info` variants also return the entities
//! affected by the change.

mod mock;

use std::sync::Arc;

use async_trait::async_trait;

pub use mock::{EngineResults, MockEngine};

use crate::error::Result;
use crate::observer::Observer;
use crate::tracing_support::LogLevel;
use crate::types::{Context, ExportHandle};

/// Product id of the engine; the default notification subject id.
pub const PRODUCT_ID: u32 = 6004;

/// Fixed identifiers of every engine operation.
pub mod operations {
    #![allow(missing_docs)]

    use crate::client::Operation;

    pub const ADD_RECORD: Operation = Operation::new("AddRecord", 8001, 1, 2);
    pub const ADD_RECORD_WITH_INFO: Operation = Operation::new("AddRecordWithInfo", 8002, 3, 4);
    pub const ADD_RECORD_WITH_INFO_WITH_RETURNED_RECORD_ID: Operation =
        Operation::new("AddRecordWithInfoWithReturnedRecordID", 8003, 5, 6);
    pub const ADD_RECORD_WITH_RETURNED_RECORD_ID: Operation =
        Operation::new("AddRecordWithReturnedRecordID", 8004, 7, 8);
    pub const CHECK_RECORD: Operation = Operation::new("CheckRecord", 8005, 9, 10);
    pub const CLOSE_EXPORT: Operation = Operation::new("CloseExport", 8006, 13, 14);
    pub const COUNT_REDO_RECORDS: Operation = Operation::new("CountRedoRecords", 8007, 15, 16);
    pub const DELETE_RECORD: Operation = Operation::new("DeleteRecord", 8008, 17, 18);
    pub const DELETE_RECORD_WITH_INFO: Operation =
        Operation::new("DeleteRecordWithInfo", 8009, 19, 20);
    pub const DESTROY: Operation = Operation::new("Destroy", 8010, 21, 22);
    pub const EXPORT_CONFIG: Operation = Operation::new("ExportConfig", 8011, 25, 26);
    pub const EXPORT_CONFIG_AND_CONFIG_ID: Operation =
        Operation::new("ExportConfigAndConfigID", 8012, 23, 24);
    pub const EXPORT_CSV_ENTITY_REPORT: Operation =
        Operation::new("ExportCSVEntityReport", 8013, 27, 28);
    pub const EXPORT_JSON_ENTITY_REPORT: Operation =
        Operation::new("ExportJSONEntityReport", 8014, 29, 30);
    pub const FETCH_NEXT: Operation = Operation::new("FetchNext", 8015, 31, 32);
    pub const FIND_INTERESTING_ENTITIES_BY_ENTITY_ID: Operation =
        Operation::new("FindInterestingEntitiesByEntityID", 8016, 33, 34);
    pub const FIND_INTERESTING_ENTITIES_BY_RECORD_ID: Operation =
        Operation::new("FindInterestingEntitiesByRecordID", 8017, 35, 36);
    pub const FIND_NETWORK_BY_ENTITY_ID: Operation =
        Operation::new("FindNetworkByEntityID", 8018, 37, 38);
    pub const FIND_NETWORK_BY_ENTITY_ID_V2: Operation =
        Operation::new("FindNetworkByEntityID_V2", 8019, 39, 40);
    pub const FIND_NETWORK_BY_RECORD_ID: Operation =
        Operation::new("FindNetworkByRecordID", 8020, 41, 42);
    pub const FIND_NETWORK_BY_RECORD_ID_V2: Operation =
        Operation::new("FindNetworkByRecordID_V2", 8021, 43, 44);
    pub const FIND_PATH_BY_ENTITY_ID: Operation =
        Operation::new("FindPathByEntityID", 8022, 45, 46);
    pub const FIND_PATH_BY_ENTITY_ID_V2: Operation =
        Operation::new("FindPathByEntityID_V2", 8023, 47, 48);
    pub const FIND_PATH_BY_RECORD_ID: Operation =
        Operation::new("FindPathByRecordID", 8024, 49, 50);
    pub const FIND_PATH_BY_RECORD_ID_V2: Operation =
        Operation::new("FindPathByRecordID_V2", 8025, 51, 52);
    pub const FIND_PATH_EXCLUDING_BY_ENTITY_ID: Operation =
        Operation::new("FindPathExcludingByEntityID", 8026, 53, 54);
    pub const FIND_PATH_EXCLUDING_BY_ENTITY_ID_V2: Operation =
        Operation::new("FindPathExcludingByEntityID_V2", 8027, 55, 56);
    pub const FIND_PATH_EXCLUDING_BY_RECORD_ID: Operation =
        Operation::new("FindPathExcludingByRecordID", 8028, 57, 58);
    pub const FIND_PATH_EXCLUDING_BY_RECORD_ID_V2: Operation =
        Operation::new("FindPathExcludingByRecordID_V2", 8029, 59, 60);
    pub const FIND_PATH_INCLUDING_SOURCE_BY_ENTITY_ID: Operation =
        Operation::new("FindPathIncludingSourceByEntityID", 8030, 61, 62);
    pub const FIND_PATH_INCLUDING_SOURCE_BY_ENTITY_ID_V2: Operation =
        Operation::new("FindPathIncludingSourceByEntityID_V2", 8031, 63, 64);
    pub const FIND_PATH_INCLUDING_SOURCE_BY_RECORD_ID: Operation =
        Operation::new("FindPathIncludingSourceByRecordID", 8032, 65, 66);
    pub const FIND_PATH_INCLUDING_SOURCE_BY_RECORD_ID_V2: Operation =
        Operation::new("FindPathIncludingSourceByRecordID_V2", 8033, 67, 68);
    pub const GET_ACTIVE_CONFIG_ID: Operation = Operation::new("GetActiveConfigID", 8034, 69, 70);
    pub const GET_ENTITY_BY_ENTITY_ID: Operation =
        Operation::new("GetEntityByEntityID", 8035, 71, 72);
    pub const GET_ENTITY_BY_ENTITY_ID_V2: Operation =
        Operation::new("GetEntityByEntityID_V2", 8036, 73, 74);
    pub const GET_ENTITY_BY_RECORD_ID: Operation =
        Operation::new("GetEntityByRecordID", 8037, 75, 76);
    pub const GET_ENTITY_BY_RECORD_ID_V2: Operation =
        Operation::new("GetEntityByRecordID_V2", 8038, 77, 78);
    pub const GET_RECORD: Operation = Operation::new("GetRecord", 8039, 83, 84);
    pub const GET_RECORD_V2: Operation = Operation::new("GetRecord_V2", 8040, 85, 86);
    pub const GET_REDO_RECORD: Operation = Operation::new("GetRedoRecord", 8041, 87, 88);
    pub const GET_REPOSITORY_LAST_MODIFIED_TIME: Operation =
        Operation::new("GetRepositoryLastModifiedTime", 8042, 89, 90);
    pub const GET_SDK_ID: Operation = Operation::new("GetSdkId", 8075, 161, 162);
    pub const GET_VIRTUAL_ENTITY_BY_RECORD_ID: Operation =
        Operation::new("GetVirtualEntityByRecordID", 8043, 91, 92);
    pub const GET_VIRTUAL_ENTITY_BY_RECORD_ID_V2: Operation =
        Operation::new("GetVirtualEntityByRecordID_V2", 8044, 93, 94);
    pub const HOW_ENTITY_BY_ENTITY_ID: Operation =
        Operation::new("HowEntityByEntityID", 8045, 95, 96);
    pub const HOW_ENTITY_BY_ENTITY_ID_V2: Operation =
        Operation::new("HowEntityByEntityID_V2", 8046, 97, 98);
    pub const INIT: Operation = Operation::new("Init", 8047, 99, 100);
    pub const INIT_WITH_CONFIG_ID: Operation = Operation::new("InitWithConfigID", 8048, 101, 102);
    pub const PRIME_ENGINE: Operation = Operation::new("PrimeEngine", 8049, 103, 104);
    pub const PROCESS: Operation = Operation::new("Process", 8050, 105, 106);
    pub const PROCESS_REDO_RECORD: Operation = Operation::new("ProcessRedoRecord", 8051, 107, 108);
    pub const PROCESS_REDO_RECORD_WITH_INFO: Operation =
        Operation::new("ProcessRedoRecordWithInfo", 8052, 109, 110);
    pub const PROCESS_WITH_INFO: Operation = Operation::new("ProcessWithInfo", 8053, 111, 112);
    pub const PROCESS_WITH_RESPONSE: Operation =
        Operation::new("ProcessWithResponse", 8054, 113, 114);
    pub const PROCESS_WITH_RESPONSE_RESIZE: Operation =
        Operation::new("ProcessWithResponseResize", 8055, 115, 116);
    pub const PURGE_REPOSITORY: Operation = Operation::new("PurgeRepository", 8056, 117, 118);
    pub const REEVALUATE_ENTITY: Operation = Operation::new("ReevaluateEntity", 8057, 119, 120);
    pub const REEVALUATE_ENTITY_WITH_INFO: Operation =
        Operation::new("ReevaluateEntityWithInfo", 8058, 121, 122);
    pub const REEVALUATE_RECORD: Operation = Operation::new("ReevaluateRecord", 8059, 123, 124);
    pub const REEVALUATE_RECORD_WITH_INFO: Operation =
        Operation::new("ReevaluateRecordWithInfo", 8060, 125, 126);
    pub const REGISTER_OBSERVER: Operation = Operation::new("RegisterObserver", 8076, 157, 158);
    pub const REINIT: Operation = Operation::new("Reinit", 8061, 127, 128);
    pub const REPLACE_RECORD: Operation = Operation::new("ReplaceRecord", 8062, 129, 130);
    pub const REPLACE_RECORD_WITH_INFO: Operation =
        Operation::new("ReplaceRecordWithInfo", 8063, 131, 132);
    pub const SEARCH_BY_ATTRIBUTES: Operation =
        Operation::new("SearchByAttributes", 8064, 133, 134);
    pub const SEARCH_BY_ATTRIBUTES_V2: Operation =
        Operation::new("SearchByAttributes_V2", 8065, 135, 136);
    pub const SET_LOG_LEVEL: Operation = Operation::new("SetLogLevel", 8077, 137, 138);
    pub const STATS: Operation = Operation::new("Stats", 8066, 139, 140);
    pub const UNREGISTER_OBSERVER: Operation = Operation::new("UnregisterObserver", 8078, 159, 160);
    pub const WHY_ENTITIES: Operation = Operation::new("WhyEntities", 8067, 141, 142);
    pub const WHY_ENTITIES_V2: Operation = Operation::new("WhyEntities_V2", 8068, 143, 144);
    pub const WHY_ENTITY_BY_ENTITY_ID: Operation =
        Operation::new("WhyEntityByEntityID", 8069, 145, 146);
    pub const WHY_ENTITY_BY_ENTITY_ID_V2: Operation =
        Operation::new("WhyEntityByEntityID_V2", 8070, 147, 148);
    pub const WHY_ENTITY_BY_RECORD_ID: Operation =
        Operation::new("WhyEntityByRecordID", 8071, 149, 150);
    pub const WHY_ENTITY_BY_RECORD_ID_V2: Operation =
        Operation::new("WhyEntityByRecordID_V2", 8072, 151, 152);
    pub const WHY_RECORDS: Operation = Operation::new("WhyRecords", 8073, 153, 154);
    pub const WHY_RECORDS_V2: Operation = Operation::new("WhyRecords_V2", 8074, 155, 156);

    /// Every operation of the group.
    pub const ALL: [Operation; 78] = [
        ADD_RECORD,
        ADD_RECORD_WITH_INFO,
        ADD_RECORD_WITH_INFO_WITH_RETURNED_RECORD_ID,
        ADD_RECORD_WITH_RETURNED_RECORD_ID,
        CHECK_RECORD,
        CLOSE_EXPORT,
        COUNT_REDO_RECORDS,
        DELETE_RECORD,
        DELETE_RECORD_WITH_INFO,
        DESTROY,
        EXPORT_CONFIG,
        EXPORT_CONFIG_AND_CONFIG_ID,
        EXPORT_CSV_ENTITY_REPORT,
        EXPORT_JSON_ENTITY_REPORT,
        FETCH_NEXT,
        FIND_INTERESTING_ENTITIES_BY_ENTITY_ID,
        FIND_INTERESTING_ENTITIES_BY_RECORD_ID,
        FIND_NETWORK_BY_ENTITY_ID,
        FIND_NETWORK_BY_ENTITY_ID_V2,
        FIND_NETWORK_BY_RECORD_ID,
        FIND_NETWORK_BY_RECORD_ID_V2,
        FIND_PATH_BY_ENTITY_ID,
        FIND_PATH_BY_ENTITY_ID_V2,
        FIND_PATH_BY_RECORD_ID,
        FIND_PATH_BY_RECORD_ID_V2,
        FIND_PATH_EXCLUDING_BY_ENTITY_ID,
        FIND_PATH_EXCLUDING_BY_ENTITY_ID_V2,
        FIND_PATH_EXCLUDING_BY_RECORD_ID,
        FIND_PATH_EXCLUDING_BY_RECORD_ID_V2,
        FIND_PATH_INCLUDING_SOURCE_BY_ENTITY_ID,
        FIND_PATH_INCLUDING_SOURCE_BY_ENTITY_ID_V2,
        FIND_PATH_INCLUDING_SOURCE_BY_RECORD_ID,
        FIND_PATH_INCLUDING_SOURCE_BY_RECORD_ID_V2,
        GET_ACTIVE_CONFIG_ID,
        GET_ENTITY_BY_ENTITY_ID,
        GET_ENTITY_BY_ENTITY_ID_V2,
        GET_ENTITY_BY_RECORD_ID,
        GET_ENTITY_BY_RECORD_ID_V2,
        GET_RECORD,
        GET_RECORD_V2,
        GET_REDO_RECORD,
        GET_REPOSITORY_LAST_MODIFIED_TIME,
        GET_SDK_ID,
        GET_VIRTUAL_ENTITY_BY_RECORD_ID,
        GET_VIRTUAL_ENTITY_BY_RECORD_ID_V2,
        HOW_ENTITY_BY_ENTITY_ID,
        HOW_ENTITY_BY_ENTITY_ID_V2,
        INIT,
        INIT_WITH_CONFIG_ID,
        PRIME_ENGINE,
        PROCESS,
        PROCESS_REDO_RECORD,
        PROCESS_REDO_RECORD_WITH_INFO,
        PROCESS_WITH_INFO,
        PROCESS_WITH_RESPONSE,
        PROCESS_WITH_RESPONSE_RESIZE,
        PURGE_REPOSITORY,
        REEVALUATE_ENTITY,
        REEVALUATE_ENTITY_WITH_INFO,
        REEVALUATE_RECORD,
        REEVALUATE_RECORD_WITH_INFO,
        REGISTER_OBSERVER,
        REINIT,
        REPLACE_RECORD,
        REPLACE_RECORD_WITH_INFO,
        SEARCH_BY_ATTRIBUTES,
        SEARCH_BY_ATTRIBUTES_V2,
        SET_LOG_LEVEL,
        STATS,
        UNREGISTER_OBSERVER,
        WHY_ENTITIES,
        WHY_ENTITIES_V2,
        WHY_ENTITY_BY_ENTITY_ID,
        WHY_ENTITY_BY_ENTITY_ID_V2,
        WHY_ENTITY_BY_RECORD_ID,
        WHY_ENTITY_BY_RECORD_ID_V2,
        WHY_RECORDS,
        WHY_RECORDS_V2,
    ];
}

/// Entity resolution engine operations.
///
/// Entity ids and flags are `i64`; records, queries and responses are JSON
/// documents passed as strings.
///
/// ## Object Safety
///
/// This trait is object-safe: `Box<dyn G2Engine>` and `Arc<dyn G2Engine>`
/// work, so code under test can accept either a real engine or [`MockEngine`].
#[async_trait]
pub trait G2Engine: Send + Sync {
    /// Adds a record.
    async fn add_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        json_data: &str,
        load_id: &str,
    ) -> Result<()>;

    /// Adds a record and returns the affected entities.
    async fn add_record_with_info(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        json_data: &str,
        load_id: &str,
        flags: i64,
    ) -> Result<String>;

    /// Adds a record with a generated record id; returns the affected entities and the record id.
    async fn add_record_with_info_with_returned_record_id(
        &self,
        ctx: &Context,
        data_source_code: &str,
        json_data: &str,
        load_id: &str,
        flags: i64,
    ) -> Result<(String, String)>;

    /// Adds a record with a generated record id and returns the record id.
    async fn add_record_with_returned_record_id(
        &self,
        ctx: &Context,
        data_source_code: &str,
        json_data: &str,
        load_id: &str,
    ) -> Result<String>;

    /// Compares a record against the records in `record_query_list`.
    async fn check_record(
        &self,
        ctx: &Context,
        record: &str,
        record_query_list: &str,
    ) -> Result<String>;

    /// Closes an export cursor.
    async fn close_export(&self, ctx: &Context, response_handle: ExportHandle) -> Result<()>;

    /// Returns the number of pending redo records.
    async fn count_redo_records(&self, ctx: &Context) -> Result<i64>;

    /// Deletes a record.
    async fn delete_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        load_id: &str,
    ) -> Result<()>;

    /// Deletes a record and returns the affected entities.
    async fn delete_record_with_info(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        load_id: &str,
        flags: i64,
    ) -> Result<String>;

    /// Releases the client.
    async fn destroy(&self, ctx: &Context) -> Result<()>;

    /// Returns the active configuration document.
    async fn export_config(&self, ctx: &Context) -> Result<String>;

    /// Returns the active configuration document and its id.
    async fn export_config_and_config_id(&self, ctx: &Context) -> Result<(String, i64)>;

    /// Opens a CSV entity report export.
    async fn export_csv_entity_report(
        &self,
        ctx: &Context,
        csv_column_list: &str,
        flags: i64,
    ) -> Result<ExportHandle>;

    /// Opens a JSON entity report export.
    async fn export_json_entity_report(&self, ctx: &Context, flags: i64) -> Result<ExportHandle>;

    /// Returns the next chunk of an export.
    async fn fetch_next(&self, ctx: &Context, response_handle: ExportHandle) -> Result<String>;

    /// Returns entities of interest related to an entity.
    async fn find_interesting_entities_by_entity_id(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String>;

    /// Returns entities of interest related to the entity of a record.
    async fn find_interesting_entities_by_record_id(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String>;

    /// Finds the network of entities around `entity_list`.
    async fn find_network_by_entity_id(
        &self,
        ctx: &Context,
        entity_list: &str,
        max_degree: i64,
        build_out_degree: i64,
        max_entities: i64,
    ) -> Result<String>;

    /// Like [`G2Engine::find_network_by_entity_id`], with `flags` selecting the response content.
    async fn find_network_by_entity_id_v2(
        &self,
        ctx: &Context,
        entity_list: &str,
        max_degree: i64,
        build_out_degree: i64,
        max_entities: i64,
        flags: i64,
    ) -> Result<String>;

    /// Finds the network of entities around the records in `record_list`.
    async fn find_network_by_record_id(
        &self,
        ctx: &Context,
        record_list: &str,
        max_degree: i64,
        build_out_degree: i64,
        max_entities: i64,
    ) -> Result<String>;

    /// Like [`G2Engine::find_network_by_record_id`], with `flags` selecting the response content.
    async fn find_network_by_record_id_v2(
        &self,
        ctx: &Context,
        record_list: &str,
        max_degree: i64,
        build_out_degree: i64,
        max_entities: i64,
        flags: i64,
    ) -> Result<String>;

    /// Finds a relationship path between two entities.
    async fn find_path_by_entity_id(
        &self,
        ctx: &Context,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
    ) -> Result<String>;

    /// Like [`G2Engine::find_path_by_entity_id`], with `flags` selecting the response content.
    async fn find_path_by_entity_id_v2(
        &self,
        ctx: &Context,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
        flags: i64,
    ) -> Result<String>;

    /// Finds a relationship path between the entities of two records.
    async fn find_path_by_record_id(
        &self,
        ctx: &Context,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        max_degree: i64,
    ) -> Result<String>;

    /// Like [`G2Engine::find_path_by_record_id`], with `flags` selecting the response content.
    async fn find_path_by_record_id_v2(
        &self,
        ctx: &Context,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        max_degree: i64,
        flags: i64,
    ) -> Result<String>;

    /// Finds a path that avoids `excluded_entities`.
    async fn find_path_excluding_by_entity_id(
        &self,
        ctx: &Context,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
        excluded_entities: &str,
    ) -> Result<String>;

    /// Like [`G2Engine::find_path_excluding_by_entity_id`], with `flags` selecting the response content.
    async fn find_path_excluding_by_entity_id_v2(
        &self,
        ctx: &Context,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
        excluded_entities: &str,
        flags: i64,
    ) -> Result<String>;

    /// Finds a path that avoids `excluded_records`.
    async fn find_path_excluding_by_record_id(
        &self,
        ctx: &Context,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        max_degree: i64,
        excluded_records: &str,
    ) -> Result<String>;

    /// Like [`G2Engine::find_path_excluding_by_record_id`], with `flags` selecting the response content.
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
    ) -> Result<String>;

    /// Finds a path that includes one of `required_dsrcs`.
    async fn find_path_including_source_by_entity_id(
        &self,
        ctx: &Context,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
        excluded_entities: &str,
        required_dsrcs: &str,
    ) -> Result<String>;

    /// Like [`G2Engine::find_path_including_source_by_entity_id`], with `flags` selecting the response content.
    async fn find_path_including_source_by_entity_id_v2(
        &self,
        ctx: &Context,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
        excluded_entities: &str,
        required_dsrcs: &str,
        flags: i64,
    ) -> Result<String>;

    /// Finds a path between the entities of two records that includes one of `required_dsrcs`.
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
    ) -> Result<String>;

    /// Like [`G2Engine::find_path_including_source_by_record_id`], with `flags` selecting the response content.
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
    ) -> Result<String>;

    /// Returns the id of the configuration the engine runs with.
    async fn get_active_config_id(&self, ctx: &Context) -> Result<i64>;

    /// Returns an entity.
    async fn get_entity_by_entity_id(&self, ctx: &Context, entity_id: i64) -> Result<String>;

    /// Like [`G2Engine::get_entity_by_entity_id`], with `flags` selecting the response content.
    async fn get_entity_by_entity_id_v2(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String>;

    /// Returns the entity containing a record.
    async fn get_entity_by_record_id(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
    ) -> Result<String>;

    /// Like [`G2Engine::get_entity_by_record_id`], with `flags` selecting the response content.
    async fn get_entity_by_record_id_v2(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String>;

    /// Returns a record.
    async fn get_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
    ) -> Result<String>;

    /// Like [`G2Engine::get_record`], with `flags` selecting the response content.
    async fn get_record_v2(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String>;

    /// Returns the next redo record.
    async fn get_redo_record(&self, ctx: &Context) -> Result<String>;

    /// Returns the last modification time of the repository.
    async fn get_repository_last_modified_time(&self, ctx: &Context) -> Result<i64>;

    /// Returns the identifier of this SDK implementation.
    async fn get_sdk_id(&self, ctx: &Context) -> Result<String>;

    /// Returns the entity the records in `record_list` would form.
    async fn get_virtual_entity_by_record_id(
        &self,
        ctx: &Context,
        record_list: &str,
    ) -> Result<String>;

    /// Like [`G2Engine::get_virtual_entity_by_record_id`], with `flags` selecting the response content.
    async fn get_virtual_entity_by_record_id_v2(
        &self,
        ctx: &Context,
        record_list: &str,
        flags: i64,
    ) -> Result<String>;

    /// Explains how an entity was resolved.
    async fn how_entity_by_entity_id(&self, ctx: &Context, entity_id: i64) -> Result<String>;

    /// Like [`G2Engine::how_entity_by_entity_id`], with `flags` selecting the response content.
    async fn how_entity_by_entity_id_v2(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String>;

    /// Initializes the client.
    async fn init(
        &self,
        ctx: &Context,
        module_name: &str,
        ini_params: &str,
        verbose_logging: i64,
    ) -> Result<()>;

    /// Initializes the client with an explicit configuration id.
    async fn init_with_config_id(
        &self,
        ctx: &Context,
        module_name: &str,
        ini_params: &str,
        init_config_id: i64,
        verbose_logging: i64,
    ) -> Result<()>;

    /// Loads engine resources ahead of the first call.
    async fn prime_engine(&self, ctx: &Context) -> Result<()>;

    /// Processes a redo record.
    async fn process(&self, ctx: &Context, record: &str) -> Result<()>;

    /// Processes the next redo record and returns it.
    async fn process_redo_record(&self, ctx: &Context) -> Result<String>;

    /// Processes the next redo record; returns it and the affected entities.
    async fn process_redo_record_with_info(
        &self,
        ctx: &Context,
        flags: i64,
    ) -> Result<(String, String)>;

    /// Processes a redo record and returns the affected entities.
    async fn process_with_info(&self, ctx: &Context, record: &str, flags: i64) -> Result<String>;

    /// Processes a redo record and returns the engine response.
    async fn process_with_response(&self, ctx: &Context, record: &str) -> Result<String>;

    /// Like [`G2Engine::process_with_response`], growing the response buffer as needed.
    async fn process_with_response_resize(&self, ctx: &Context, record: &str) -> Result<String>;

    /// Removes every record from the repository.
    async fn purge_repository(&self, ctx: &Context) -> Result<()>;

    /// Re-resolves an entity.
    async fn reevaluate_entity(&self, ctx: &Context, entity_id: i64, flags: i64) -> Result<()>;

    /// Re-resolves an entity and returns the affected entities.
    async fn reevaluate_entity_with_info(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String>;

    /// Re-resolves a record.
    async fn reevaluate_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<()>;

    /// Re-resolves a record and returns the affected entities.
    async fn reevaluate_record_with_info(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String>;

    /// Adds an observer to the set notified on every call.
    async fn register_observer(&self, ctx: &Context, observer: Arc<dyn Observer>) -> Result<()>;

    /// Switches the engine to another configuration.
    async fn reinit(&self, ctx: &Context, init_config_id: i64) -> Result<()>;

    /// Replaces a record.
    async fn replace_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        json_data: &str,
        load_id: &str,
    ) -> Result<()>;

    /// Replaces a record and returns the affected entities.
    async fn replace_record_with_info(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        json_data: &str,
        load_id: &str,
        flags: i64,
    ) -> Result<String>;

    /// Searches for entities matching the attributes in `json_data`.
    async fn search_by_attributes(&self, ctx: &Context, json_data: &str) -> Result<String>;

    /// Like [`G2Engine::search_by_attributes`], with `flags` selecting the response content.
    async fn search_by_attributes_v2(
        &self,
        ctx: &Context,
        json_data: &str,
        flags: i64,
    ) -> Result<String>;

    /// Sets the log level; `Trace` enables call tracing.
    async fn set_log_level(&self, ctx: &Context, level: LogLevel) -> Result<()>;

    /// Returns engine workload statistics.
    async fn stats(&self, ctx: &Context) -> Result<String>;

    /// Removes an observer.
    async fn unregister_observer(&self, ctx: &Context, observer: Arc<dyn Observer>) -> Result<()>;

    /// Explains why two entities are or are not resolved together.
    async fn why_entities(&self, ctx: &Context, entity_id1: i64, entity_id2: i64) -> Result<String>;

    /// Like [`G2Engine::why_entities`], with `flags` selecting the response content.
    async fn why_entities_v2(
        &self,
        ctx: &Context,
        entity_id1: i64,
        entity_id2: i64,
        flags: i64,
    ) -> Result<String>;

    /// Explains why the records of an entity resolved together.
    async fn why_entity_by_entity_id(&self, ctx: &Context, entity_id: i64) -> Result<String>;

    /// Like [`G2Engine::why_entity_by_entity_id`], with `flags` selecting the response content.
    async fn why_entity_by_entity_id_v2(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String>;

    /// Explains why the records of the entity containing a record resolved together.
    async fn why_entity_by_record_id(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
    ) -> Result<String>;

    /// Like [`G2Engine::why_entity_by_record_id`], with `flags` selecting the response content.
    async fn why_entity_by_record_id_v2(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String>;

    /// Explains why two records are or are not resolved together.
    async fn why_records(
        &self,
        ctx: &Context,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
    ) -> Result<String>;

    /// Like [`G2Engine::why_records`], with `flags` selecting the response content.
    async fn why_records_v2(
        &self,
        ctx: &Context,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        flags: i64,
    ) -> Result<String>;
}
