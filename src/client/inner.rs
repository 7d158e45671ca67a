//! Internal client implementation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use parking_lot::RwLock;
use serde::Serialize;
use serde_json::{Value, json};

use super::Operation;
use crate::Error;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::observer::{Notification, Observer, ObserverRegistry};
use crate::tracing_support::{LogLevel, MessageLogger, TracingLogger};
use crate::types::Context;

/// Operation-specific notification fields.
pub(crate) type Details = BTreeMap<String, String>;

/// Builds [`Details`] from key/value pairs.
pub(crate) fn details<const N: usize>(pairs: [(&str, String); N]) -> Details {
    pairs.into_iter().map(|(key, value)| (key.to_string(), value)).collect()
}

/// State and call decorator shared by every mock client.
pub(crate) struct ClientInner {
    product_id: u32,
    subject_id: u32,
    sdk_id: String,
    initial_level: LogLevel,

    /// Gates trace-entry and trace-exit records.
    tracing: AtomicBool,

    /// Created on first use unless injected.
    logger: OnceLock<Arc<dyn MessageLogger>>,

    /// `None` whenever no observer is registered.
    observers: RwLock<Option<Arc<ObserverRegistry>>>,
}

impl ClientInner {
    pub(crate) fn new(product_id: u32, config: ClientConfig) -> Self {
        Self {
            product_id,
            subject_id: config.subject_id.unwrap_or(product_id),
            sdk_id: config.sdk_id,
            initial_level: config.log_level,
            tracing: AtomicBool::new(config.log_level.is_trace()),
            logger: OnceLock::new(),
            observers: RwLock::new(None),
        }
    }

    /// Replaces the lazily created logger with `logger`.
    pub(crate) fn install_logger(&mut self, logger: Arc<dyn MessageLogger>) {
        logger.set_log_level(self.initial_level);
        self.logger = OnceLock::from(logger);
    }

    pub(crate) fn logger(&self) -> &Arc<dyn MessageLogger> {
        self.logger.get_or_init(|| Arc::new(TracingLogger::new(self.product_id, self.initial_level)))
    }

    pub(crate) fn subject_id(&self) -> u32 {
        self.subject_id
    }

    pub(crate) fn sdk_id(&self) -> &str {
        &self.sdk_id
    }

    pub(crate) fn is_tracing(&self) -> bool {
        self.tracing.load(Ordering::Relaxed)
    }

    pub(crate) fn log_level(&self) -> LogLevel {
        self.logger().log_level()
    }

    pub(crate) fn has_observers(&self) -> bool {
        self.observers.read().as_ref().is_some_and(|registry| registry.has_observers())
    }

    pub(crate) fn observer_ids(&self) -> Vec<String> {
        self.observers.read().as_ref().map(|registry| registry.observer_ids()).unwrap_or_default()
    }

    /// Starts a call: takes the start time and emits the trace-entry record.
    pub(crate) fn enter(&self, operation: Operation, args: Vec<Value>) -> Call<'_> {
        let started = Instant::now();
        if self.is_tracing() {
            self.logger().log(operation.entry_code(), &args);
        }
        Call { inner: self, operation, args, started }
    }

    /// Notifies the observers registered right now, if any.
    ///
    /// Recipients are fixed before this returns; delivery to each of them
    /// runs on its own detached task.
    pub(crate) fn notify(
        &self,
        ctx: &Context,
        operation: Operation,
        error: Option<&Error>,
        details: Details,
    ) {
        let Some(registry) = self.observers.read().clone() else {
            return;
        };
        let error = error.map(ToString::to_string);
        let notification = Notification::new(self.subject_id, operation.event_id(), error, details);
        publish(&registry, ctx, &notification);
    }

    /// Runs a data-returning operation whose result is read by `fetch`.
    pub(crate) fn respond<T, F>(
        &self,
        ctx: &Context,
        operation: Operation,
        args: Vec<Value>,
        details: Details,
        fetch: F,
    ) -> Result<T>
    where
        T: Serialize,
        F: FnOnce() -> T,
    {
        let call = self.enter(operation, args);
        self.notify(ctx, operation, None, details);
        let result = fetch();
        call.exit(vec![json!(result)], None);
        Ok(result)
    }

    /// Runs an operation that returns no data.
    pub(crate) fn acknowledge(
        &self,
        ctx: &Context,
        operation: Operation,
        args: Vec<Value>,
        details: Details,
    ) -> Result<()> {
        let call = self.enter(operation, args);
        self.notify(ctx, operation, None, details);
        call.exit(Vec::new(), None);
        Ok(())
    }

    /// Adds an observer, creating the registry on first use.
    pub(crate) fn register_observer(
        &self,
        ctx: &Context,
        operation: Operation,
        observer: Arc<dyn Observer>,
    ) -> Result<()> {
        let observer_id = observer.observer_id(ctx);
        let call = self.enter(operation, vec![json!(observer_id)]);
        let result = {
            let mut guard = self.observers.write();
            let registry = guard.get_or_insert_with(Default::default);
            let result = registry.register_observer(ctx, observer);
            let emptied = !registry.has_observers();
            if emptied {
                *guard = None;
            }
            result
        };
        self.notify(ctx, operation, result.as_ref().err(), details([("observerID", observer_id)]));
        call.exit(Vec::new(), result.as_ref().err());
        result
    }

    /// Removes an observer, dropping the registry once it is empty.
    ///
    /// The departing observer is still a member when the notification is
    /// handed to the registry, so it receives its own unregister message.
    /// Without a registry this is a no-op.
    pub(crate) fn unregister_observer(
        &self,
        ctx: &Context,
        operation: Operation,
        observer: Arc<dyn Observer>,
    ) -> Result<()> {
        let observer_id = observer.observer_id(ctx);
        let call = self.enter(operation, vec![json!(observer_id)]);
        let result = {
            let mut guard = self.observers.write();
            let (result, emptied) = match guard.as_ref() {
                Some(registry) => {
                    let notification = Notification::new(
                        self.subject_id,
                        operation.event_id(),
                        None,
                        details([("observerID", observer_id)]),
                    );
                    publish(registry, ctx, &notification);
                    let result = registry.unregister_observer(ctx, observer.as_ref());
                    (result, !registry.has_observers())
                }
                None => (Ok(()), false),
            };
            if emptied {
                *guard = None;
            }
            result
        };
        call.exit(Vec::new(), result.as_ref().err());
        result
    }

    /// Sets the logger's level; tracing is on exactly when the level is `Trace`.
    pub(crate) fn set_log_level(
        &self,
        ctx: &Context,
        operation: Operation,
        level: LogLevel,
    ) -> Result<()> {
        let call = self.enter(operation, vec![json!(level)]);
        let logger = self.logger();
        logger.set_log_level(level);
        self.tracing.store(logger.log_level().is_trace(), Ordering::Relaxed);
        self.notify(ctx, operation, None, details([("logLevel", level.to_string())]));
        call.exit(Vec::new(), None);
        Ok(())
    }
}

/// Encodes `notification` and hands it to the registry.
fn publish(registry: &ObserverRegistry, ctx: &Context, notification: &Notification) {
    match notification.to_json() {
        Ok(message) => registry.notify_observers(ctx, message),
        Err(err) => tracing::error!(
            target: "g2_sdk_mock",
            message_id = notification.message_id,
            error = %err,
            "failed to encode notification"
        ),
    }
}

/// An operation in progress. Finish it with [`Call::exit`].
#[must_use = "a call must be finished with `exit`"]
pub(crate) struct Call<'a> {
    inner: &'a ClientInner,
    operation: Operation,
    args: Vec<Value>,
    started: Instant,
}

impl Call<'_> {
    /// Emits the trace-exit record: arguments, results, error, elapsed time.
    pub(crate) fn exit(self, results: Vec<Value>, error: Option<&Error>) {
        if !self.inner.is_tracing() {
            return;
        }
        let elapsed = self.started.elapsed();
        let mut record = self.args;
        record.extend(results);
        record.push(error.map_or(Value::Null, |err| Value::String(err.to_string())));
        record.push(Value::String(format!("{:?}", elapsed)));
        self.inner.logger().log(self.operation.exit_code(), &record);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::ErrorKind;
    use crate::observer::NullObserver;
    use crate::testing::{ChannelObserver, RecordingLogger};

    const OP: Operation = Operation::new("Probe", 8100, 41, 42);
    const REGISTER: Operation = Operation::new("RegisterObserver", 8101, 43, 44);
    const UNREGISTER: Operation = Operation::new("UnregisterObserver", 8102, 45, 46);
    const SET_LOG_LEVEL: Operation = Operation::new("SetLogLevel", 8103, 47, 48);

    fn traced(logger: &Arc<RecordingLogger>) -> ClientInner {
        let mut inner = ClientInner::new(6000, ClientConfig::tracing());
        inner.install_logger(logger.clone());
        inner
    }

    #[test]
    fn test_respond_returns_fetched_value_and_traces() {
        let logger = Arc::new(RecordingLogger::new());
        let inner = traced(&logger);

        let value = inner
            .respond(&Context::new(), OP, vec![json!("arg")], Details::new(), || 42_i64)
            .unwrap();

        assert_eq!(value, 42);
        let records = logger.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code, 41);
        assert_eq!(records[0].details, vec![json!("arg")]);
        assert_eq!(records[1].code, 42);
        assert_eq!(&records[1].details[..3], &[json!("arg"), json!(42), Value::Null]);
        assert!(records[1].details[3].is_string());
    }

    #[test]
    fn test_no_trace_when_disabled() {
        let logger = Arc::new(RecordingLogger::new());
        let mut inner = ClientInner::new(6000, ClientConfig::default());
        inner.install_logger(logger.clone());

        inner.acknowledge(&Context::new(), OP, vec![json!(1)], Details::new()).unwrap();

        assert!(logger.records().is_empty());
    }

    #[test]
    fn test_logger_is_created_lazily_per_instance() {
        let first = ClientInner::new(6000, ClientConfig::default());
        let second = ClientInner::new(6000, ClientConfig::default());
        first.logger().set_log_level(LogLevel::Warn);
        assert_eq!(first.log_level(), LogLevel::Warn);
        assert_eq!(second.log_level(), LogLevel::Info);
    }

    #[test]
    fn test_subject_id_defaults_to_product_id() {
        let inner = ClientInner::new(6004, ClientConfig::default());
        assert_eq!(inner.subject_id(), 6004);
        let inner = ClientInner::new(6004, ClientConfig::builder().subject_id(1).build());
        assert_eq!(inner.subject_id(), 1);
        assert_eq!(inner.product_id, 6004);
    }

    #[test]
    fn test_set_log_level_toggles_tracing() {
        let logger = Arc::new(RecordingLogger::new());
        let mut inner = ClientInner::new(6000, ClientConfig::default());
        inner.install_logger(logger.clone());
        let ctx = Context::new();

        inner.set_log_level(&ctx, SET_LOG_LEVEL, LogLevel::Trace).unwrap();
        assert!(inner.is_tracing());
        // Entry was not traced (tracing was off), exit was.
        assert_eq!(logger.codes(), vec![48]);

        inner.set_log_level(&ctx, SET_LOG_LEVEL, LogLevel::Debug).unwrap();
        assert!(!inner.is_tracing());
        assert_eq!(logger.codes(), vec![48, 47]);
    }

    #[tokio::test]
    async fn test_registry_lifecycle() {
        let ctx = Context::new();
        let inner = ClientInner::new(6000, ClientConfig::default());
        let observer: Arc<dyn Observer> = Arc::new(NullObserver::new("o1"));
        assert!(!inner.has_observers());

        inner.register_observer(&ctx, REGISTER, observer.clone()).unwrap();
        inner.register_observer(&ctx, REGISTER, observer.clone()).unwrap();
        assert!(inner.has_observers());
        assert_eq!(inner.observer_ids(), vec!["o1".to_string()]);

        inner.unregister_observer(&ctx, UNREGISTER, observer.clone()).unwrap();
        assert!(!inner.has_observers());
        assert!(inner.observers.read().is_none());

        inner.unregister_observer(&ctx, UNREGISTER, observer).unwrap();
        assert!(!inner.has_observers());
    }

    #[test]
    fn test_failed_registration_leaves_no_registry() {
        let inner = ClientInner::new(6000, ClientConfig::default());
        let err = inner
            .register_observer(&Context::new(), REGISTER, Arc::new(NullObserver::new("")))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(inner.observers.read().is_none());
    }

    #[tokio::test]
    async fn test_notification_carries_ids_and_details() {
        let ctx = Context::new();
        let inner = ClientInner::new(6000, ClientConfig::default());
        let (observer, mut messages) = ChannelObserver::with_id("o1");
        inner.register_observer(&ctx, REGISTER, Arc::new(observer)).unwrap();

        let registered = tokio::time::timeout(Duration::from_secs(1), messages.recv())
            .await
            .unwrap()
            .unwrap();
        let registered = Notification::parse(&registered).unwrap();
        assert_eq!(registered.message_id, 8101);
        assert_eq!(registered.detail("observerID"), Some("o1"));

        inner
            .acknowledge(&ctx, OP, Vec::new(), details([("key", "value".to_string())]))
            .unwrap();
        let message = tokio::time::timeout(Duration::from_secs(1), messages.recv())
            .await
            .unwrap()
            .unwrap();
        let notification = Notification::parse(&message).unwrap();
        assert_eq!(notification.subject_id, 6000);
        assert_eq!(notification.message_id, 8100);
        assert_eq!(notification.detail("key"), Some("value"));
    }

    #[tokio::test]
    async fn test_departing_observer_receives_unregister_message() {
        let ctx = Context::new();
        let inner = ClientInner::new(6000, ClientConfig::default());
        let (observer, mut messages) = ChannelObserver::with_id("o1");
        let observer: Arc<dyn Observer> = Arc::new(observer);
        inner.register_observer(&ctx, REGISTER, observer.clone()).unwrap();
        inner.unregister_observer(&ctx, UNREGISTER, observer).unwrap();

        let mut ids = Vec::new();
        for _ in 0..2 {
            let message = tokio::time::timeout(Duration::from_secs(1), messages.recv())
                .await
                .unwrap()
                .unwrap();
            ids.push(Notification::parse(&message).unwrap().message_id);
        }
        ids.sort();
        assert_eq!(ids, vec![8101, 8102]);
    }
}
