//! Product integration tests.

use std::sync::Arc;

use g2_sdk_mock::prelude::*;
use g2_sdk_mock::testing::RecordingLogger;
use serde_json::json;

use crate::common::{assert_quiet, collect, message_ids, observer};

fn fixture() -> ProductResults {
    ProductResults {
        license: r#"{"customer":"Acme","contract":"N/A"}"#.to_string(),
        validate_license_file: "license file is valid".to_string(),
        validate_license_string_base64: "license string is valid".to_string(),
        version: r#"{"PRODUCT_NAME":"G2","VERSION":"3.5.0"}"#.to_string(),
    }
}

#[tokio::test]
async fn test_canned_results_through_trait_object() {
    let product: Arc<dyn G2Product> = Arc::new(MockProduct::new().with_results(fixture()));
    let ctx = Context::new();

    assert_eq!(product.license(&ctx).await.expect("license"), fixture().license);
    assert_eq!(
        product.validate_license_file(&ctx, "/opt/g2/g2.lic").await.expect("validate file"),
        "license file is valid"
    );
    assert_eq!(
        product.validate_license_string_base64(&ctx, "AQAB").await.expect("validate string"),
        "license string is valid"
    );
    assert_eq!(product.version(&ctx).await.expect("version"), fixture().version);
    assert_eq!(product.get_sdk_id(&ctx).await.expect("sdk id"), "mock");
}

#[tokio::test]
async fn test_defaults_are_empty() {
    let product = MockProduct::new();
    let ctx = Context::new();
    assert_eq!(product.license(&ctx).await.expect("license"), "");
    assert_eq!(product.version(&ctx).await.expect("version"), "");
}

#[tokio::test]
async fn test_notifications_carry_product_subject_id() {
    let ctx = Context::new();
    let product = MockProduct::new().with_results(fixture());
    let (watcher, mut messages) = observer("watcher");
    product.register_observer(&ctx, watcher.clone()).await.expect("register");

    product.init(&ctx, "product-test", "{}", 0).await.expect("init");
    product.version(&ctx).await.expect("version");
    product.unregister_observer(&ctx, watcher).await.expect("unregister");

    let received = collect(&mut messages, 4).await;
    assert_eq!(message_ids(&received), vec![8002, 8006, 8008, 8010]);
    assert!(received.iter().all(|notification| notification.subject_id == 6006));
    assert_eq!(received[0].detail("moduleName"), Some("product-test"));
    assert_eq!(received[0].detail("verboseLogging"), Some("0"));
    assert!(!product.has_observers());

    product.destroy(&ctx).await.expect("destroy");
    assert_quiet(&mut messages).await;
}

#[tokio::test]
async fn test_trace_records_for_every_call() {
    let logger = Arc::new(RecordingLogger::new());
    let product = MockProduct::with_config(ClientConfig::tracing())
        .with_logger(logger.clone())
        .with_results(fixture());
    let ctx = Context::new();

    product.license(&ctx).await.expect("license");
    product.validate_license_string_base64(&ctx, "AQAB").await.expect("validate");
    product.destroy(&ctx).await.expect("destroy");

    assert_eq!(logger.codes(), vec![11, 12, 17, 18, 3, 4]);
    let records = logger.records();
    assert_eq!(records[0].details, Vec::<serde_json::Value>::new());
    assert_eq!(
        &records[3].details[..3],
        &[json!("AQAB"), json!("license string is valid"), json!(null)]
    );
    // destroy exit: error slot and elapsed time only.
    assert_eq!(records[5].details.len(), 2);
}

#[tokio::test]
async fn test_unregister_without_registration_is_a_no_op() {
    let ctx = Context::new();
    let product = MockProduct::new();
    let (watcher, mut messages) = observer("never-registered");

    product.unregister_observer(&ctx, watcher).await.expect("unregister should succeed");

    assert!(!product.has_observers());
    assert_quiet(&mut messages).await;
}
