//! Engine integration tests.

use std::sync::Arc;

use g2_sdk_mock::prelude::*;
use g2_sdk_mock::testing::{ChannelObserver, RecordingLogger};
use serde_json::json;

use crate::common::{assert_quiet, collect, init_tracing, message_ids, next, observer};

#[tokio::test]
async fn test_active_config_id_through_trait_object() {
    let engine: Box<dyn G2Engine> = Box::new(MockEngine::new().with_results(EngineResults {
        get_active_config_id: 42,
        ..Default::default()
    }));

    let config_id = engine
        .get_active_config_id(&Context::new())
        .await
        .expect("get_active_config_id should succeed");

    assert_eq!(config_id, 42);
}

#[tokio::test]
async fn test_canned_documents_are_returned_verbatim() {
    let engine = MockEngine::new();
    let entity = r#"{"RESOLVED_ENTITY":{"ENTITY_ID":1}}"#;
    engine.configure(|r| {
        r.get_entity_by_entity_id = entity.to_string();
        r.get_entity_by_record_id_v2 = entity.to_string();
        r.search_by_attributes = r#"{"RESOLVED_ENTITIES":[]}"#.to_string();
        r.why_records_v2 = r#"{"WHY_RESULTS":[]}"#.to_string();
        r.stats = r#"{"workload":{}}"#.to_string();
        r.get_repository_last_modified_time = 1_700_000_000_000;
    });
    let ctx = Context::new();

    assert_eq!(engine.get_entity_by_entity_id(&ctx, 1).await.expect("lookup"), entity);
    assert_eq!(
        engine.get_entity_by_record_id_v2(&ctx, "CUSTOMERS", "1001", 0).await.expect("lookup"),
        entity
    );
    assert_eq!(
        engine.search_by_attributes(&ctx, r#"{"NAME_FULL":"Robert Smith"}"#).await.expect("search"),
        r#"{"RESOLVED_ENTITIES":[]}"#
    );
    assert_eq!(
        engine.why_records_v2(&ctx, "CUSTOMERS", "1001", "CUSTOMERS", "1002", 0).await.expect("why"),
        r#"{"WHY_RESULTS":[]}"#
    );
    assert_eq!(engine.stats(&ctx).await.expect("stats"), r#"{"workload":{}}"#);
    assert_eq!(
        engine.get_repository_last_modified_time(&ctx).await.expect("modified time"),
        1_700_000_000_000
    );
}

#[tokio::test]
async fn test_record_operations_notify_with_record_details() {
    let ctx = Context::new();
    let engine = MockEngine::new();
    let (watcher, mut messages) = observer("watcher");
    engine.register_observer(&ctx, watcher).await.expect("register should succeed");
    assert_eq!(next(&mut messages).await.message_id, 8076);

    engine.add_record(&ctx, "CUSTOMERS", "1001", "{}", "load-1").await.expect("add_record");
    engine.delete_record(&ctx, "CUSTOMERS", "1002", "load-1").await.expect("delete_record");

    let received = collect(&mut messages, 2).await;
    assert_eq!(message_ids(&received), vec![8001, 8008]);
    for notification in &received {
        assert_eq!(notification.subject_id, 6004);
        assert_eq!(notification.detail("dataSourceCode"), Some("CUSTOMERS"));
        assert_eq!(notification.detail("loadID"), Some("load-1"));
        assert!(notification.detail("jsonData").is_none());
    }
    assert_eq!(received[0].detail("recordID"), Some("1001"));
    assert_eq!(received[1].detail("recordID"), Some("1002"));
    assert_quiet(&mut messages).await;
}

#[tokio::test]
async fn test_entity_and_lifecycle_details() {
    let ctx = Context::new();
    let engine = MockEngine::new();
    let (watcher, mut messages) = observer("watcher");
    engine.register_observer(&ctx, watcher).await.expect("register should succeed");
    next(&mut messages).await;

    engine.init_with_config_id(&ctx, "engine-test", "{}", 9, 1).await.expect("init");
    engine.find_path_by_entity_id(&ctx, 1, 2, 3).await.expect("find path");
    engine.reinit(&ctx, 10).await.expect("reinit");
    engine.find_network_by_record_id(&ctx, "[]", 1, 1, 10).await.expect("find network");

    let received = collect(&mut messages, 4).await;
    assert_eq!(message_ids(&received), vec![8020, 8022, 8048, 8061]);
    assert_eq!(received[0].detail("recordList"), Some("[]"));
    assert_eq!(received[1].detail("entityID1"), Some("1"));
    assert_eq!(received[1].detail("entityID2"), Some("2"));
    assert_eq!(received[2].detail("moduleName"), Some("engine-test"));
    assert_eq!(received[2].detail("iniParams"), Some("{}"));
    assert_eq!(received[2].detail("initConfigID"), Some("9"));
    assert_eq!(received[2].detail("verboseLogging"), Some("1"));
    assert_eq!(received[3].detail("initConfigID"), Some("10"));
}

#[tokio::test]
async fn test_set_log_level_enables_tracing() {
    let ctx = Context::new();
    let logger = Arc::new(RecordingLogger::new());
    let engine = MockEngine::new().with_logger(logger.clone());
    let (watcher, mut messages) = observer("watcher");
    engine.register_observer(&ctx, watcher).await.expect("register should succeed");
    next(&mut messages).await;

    engine.get_active_config_id(&ctx).await.expect("untraced call");
    engine.set_log_level(&ctx, LogLevel::Trace).await.expect("set_log_level");
    engine.get_active_config_id(&ctx).await.expect("traced call");

    assert!(engine.is_tracing());
    assert_eq!(logger.codes(), vec![138, 69, 70]);
    let exit = &logger.records()[2];
    assert_eq!(&exit.details[..2], &[json!(0), json!(null)]);

    let received = collect(&mut messages, 3).await;
    assert_eq!(message_ids(&received), vec![8034, 8034, 8077]);
    assert_eq!(received[2].detail("logLevel"), Some("TRACE"));

    engine.set_log_level(&ctx, LogLevel::Info).await.expect("set_log_level");
    engine.get_active_config_id(&ctx).await.expect("untraced call");
    assert!(!engine.is_tracing());
    assert_eq!(logger.codes(), vec![138, 69, 70, 137]);
}

#[tokio::test]
async fn test_default_logger_emits_tracing_events() {
    init_tracing();
    let engine = MockEngine::with_config(ClientConfig::tracing());

    engine.prime_engine(&Context::new()).await.expect("prime_engine");
    engine.purge_repository(&Context::new()).await.expect("purge_repository");

    assert_eq!(engine.log_level(), LogLevel::Trace);
}

#[tokio::test]
async fn test_subject_id_override() {
    let ctx = Context::new();
    let engine = MockEngine::with_config(ClientConfig::builder().subject_id(9999).build());
    let (watcher, mut messages) = observer("watcher");
    engine.register_observer(&ctx, watcher).await.expect("register should succeed");

    let registered = next(&mut messages).await;
    assert_eq!(registered.subject_id, 9999);
    assert_eq!(registered.detail("observerID"), Some("watcher"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_each_notify_once() {
    const CALLS: usize = 50;
    let ctx = Context::new();
    let engine = Arc::new(MockEngine::new());
    let (watcher, mut messages) = observer("watcher");
    engine.register_observer(&ctx, watcher).await.expect("register should succeed");
    next(&mut messages).await;

    let tasks: Vec<_> = (0..CALLS)
        .map(|i| {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move {
                engine.get_entity_by_entity_id(&Context::new(), i as i64).await
            })
        })
        .collect();
    for task in tasks {
        task.await.expect("task should not panic").expect("lookup should succeed");
    }

    let received = collect(&mut messages, CALLS).await;
    assert!(received.iter().all(|notification| notification.message_id == 8035));
    let mut entity_ids: Vec<i64> = received
        .iter()
        .filter_map(|notification| notification.detail("entityID")?.parse().ok())
        .collect();
    entity_ids.sort();
    assert_eq!(entity_ids, (0..CALLS as i64).collect::<Vec<_>>());
    assert_quiet(&mut messages).await;
}

#[test]
fn test_notifications_are_delivered_without_a_runtime() {
    let engine = MockEngine::new();
    let ctx = Context::new();
    let (watcher, mut messages) = ChannelObserver::with_id("watcher");

    futures::executor::block_on(async {
        engine.register_observer(&ctx, Arc::new(watcher)).await.expect("register");
        engine.destroy(&ctx).await.expect("destroy");
    });

    let mut ids = vec![
        messages.blocking_recv().expect("first notification"),
        messages.blocking_recv().expect("second notification"),
    ]
    .iter()
    .map(|message| Notification::parse(message).expect("decode").message_id)
    .collect::<Vec<_>>();
    ids.sort();
    assert_eq!(ids, vec![8010, 8076]);
}
