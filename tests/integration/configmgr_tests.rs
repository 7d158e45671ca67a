//! Configuration manager integration tests.

use std::sync::Arc;

use g2_sdk_mock::prelude::*;
use g2_sdk_mock::testing::RecordingLogger;

use crate::common::{assert_quiet, collect, message_ids, next, observer};

fn client(results: ConfigMgrResults) -> Arc<dyn G2ConfigMgr> {
    Arc::new(MockConfigMgr::new().with_results(results))
}

#[tokio::test]
async fn test_get_default_config_id_returns_canned_value() {
    let config_mgr = client(ConfigMgrResults { get_default_config_id: 42, ..Default::default() });

    let config_id = config_mgr
        .get_default_config_id(&Context::new())
        .await
        .expect("get_default_config_id should succeed");

    assert_eq!(config_id, 42);
}

#[tokio::test]
async fn test_add_config_notifies_observer() {
    let ctx = Context::new();
    let config_mgr = client(ConfigMgrResults { add_config: 7, ..Default::default() });
    let (watcher, mut messages) = observer("watcher");
    config_mgr.register_observer(&ctx, watcher).await.expect("register should succeed");
    assert_eq!(next(&mut messages).await.message_id, 8009);

    let config_id = config_mgr
        .add_config(&ctx, "{\"G2_CONFIG\":{}}", "initial load")
        .await
        .expect("add_config should succeed");
    assert_eq!(config_id, 7);

    let notification = next(&mut messages).await;
    assert_eq!(notification.subject_id, 6002);
    assert_eq!(notification.message_id, 8001);
    assert_eq!(notification.error, None);
    assert_eq!(notification.detail("configComments"), Some("initial load"));
    assert!(notification.message_time > 0);
    assert_quiet(&mut messages).await;
}

#[tokio::test]
async fn test_observer_lifecycle() {
    let ctx = Context::new();
    let mock = Arc::new(MockConfigMgr::new());
    let config_mgr: Arc<dyn G2ConfigMgr> = mock.clone();
    let (watcher, mut messages) = observer("watcher");

    config_mgr.register_observer(&ctx, watcher.clone()).await.expect("register should succeed");
    config_mgr.register_observer(&ctx, watcher.clone()).await.expect("re-register should succeed");
    assert!(mock.has_observers());
    assert_eq!(mock.observer_ids(), vec!["watcher".to_string()]);
    assert_eq!(message_ids(&collect(&mut messages, 2).await), vec![8009, 8009]);

    config_mgr.unregister_observer(&ctx, watcher.clone()).await.expect("unregister should succeed");
    assert!(!mock.has_observers());
    let goodbye = next(&mut messages).await;
    assert_eq!(goodbye.message_id, 8012);
    assert_eq!(goodbye.detail("observerID"), Some("watcher"));

    config_mgr
        .unregister_observer(&ctx, watcher)
        .await
        .expect("unregistering an unknown observer should succeed");
    config_mgr.get_config_list(&ctx).await.expect("get_config_list should succeed");
    assert!(!mock.has_observers());
    assert_quiet(&mut messages).await;
}

#[tokio::test]
async fn test_every_observer_is_notified_once() {
    let ctx = Context::new();
    let config_mgr = client(ConfigMgrResults::default());
    let (first, mut first_messages) = observer("first");
    let (second, mut second_messages) = observer("second");
    config_mgr.register_observer(&ctx, first).await.expect("register should succeed");
    config_mgr.register_observer(&ctx, second).await.expect("register should succeed");

    config_mgr.set_default_config_id(&ctx, 11).await.expect("set should succeed");
    config_mgr.replace_default_config_id(&ctx, 11, 12).await.expect("replace should succeed");

    // "first" also saw the registration of "second".
    let first_seen = collect(&mut first_messages, 4).await;
    assert_eq!(message_ids(&first_seen), vec![8007, 8008, 8009, 8009]);
    assert_eq!(first_seen[0].detail("newConfigID"), Some("12"));
    assert_eq!(first_seen[1].detail("configID"), Some("11"));

    let second_seen = collect(&mut second_messages, 3).await;
    assert_eq!(message_ids(&second_seen), vec![8007, 8008, 8009]);
    assert_quiet(&mut first_messages).await;
    assert_quiet(&mut second_messages).await;
}

#[tokio::test]
async fn test_tracing_disabled_produces_no_records() {
    let logger = Arc::new(RecordingLogger::new());
    let config_mgr = MockConfigMgr::new().with_logger(logger.clone());
    let ctx = Context::new();

    config_mgr.init(&ctx, "test", "{}", 0).await.expect("init should succeed");
    config_mgr.get_config(&ctx, 1).await.expect("get_config should succeed");
    config_mgr.destroy(&ctx).await.expect("destroy should succeed");

    assert!(logger.records().is_empty());
}

#[tokio::test]
async fn test_sdk_id() {
    let config_mgr = client(ConfigMgrResults::default());
    let sdk_id = config_mgr.get_sdk_id(&Context::new()).await.expect("get_sdk_id should succeed");
    assert_eq!(sdk_id, "mock");
}
