//! Registry of observers attached to one client.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{Observer, spawn_detached};
use crate::Error;
use crate::error::Result;
use crate::types::Context;

/// The set of observers registered with a client.
///
/// Membership is keyed by observer id, so registering the same id twice keeps
/// a single entry. Iteration order is unspecified.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use g2_sdk_mock::{Context, NullObserver, ObserverRegistry};
///
/// let ctx = Context::new();
/// let registry = ObserverRegistry::new();
/// let observer = Arc::new(NullObserver::new("observer-1"));
///
/// registry.register_observer(&ctx, observer.clone()).unwrap();
/// registry.register_observer(&ctx, observer.clone()).unwrap();
/// assert_eq!(registry.len(), 1);
///
/// registry.unregister_observer(&ctx, observer.as_ref()).unwrap();
/// assert!(!registry.has_observers());
/// ```
#[derive(Default)]
pub struct ObserverRegistry {
    observers: RwLock<HashMap<String, Arc<dyn Observer>>>,
}

impl ObserverRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an observer unless one with the same id is already present.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// if the observer id is empty.
    pub fn register_observer(&self, ctx: &Context, observer: Arc<dyn Observer>) -> Result<()> {
        let id = observer.observer_id(ctx);
        if id.is_empty() {
            return Err(Error::invalid_argument("observer id cannot be empty"));
        }
        self.observers.write().entry(id).or_insert(observer);
        Ok(())
    }

    /// Removes the observer with the same id. Unknown observers are ignored.
    pub fn unregister_observer(&self, ctx: &Context, observer: &dyn Observer) -> Result<()> {
        self.observers.write().remove(&observer.observer_id(ctx));
        Ok(())
    }

    /// Returns `true` if at least one observer is registered.
    pub fn has_observers(&self) -> bool {
        !self.observers.read().is_empty()
    }

    /// Returns the number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.read().len()
    }

    /// Returns `true` if no observer is registered.
    pub fn is_empty(&self) -> bool {
        self.observers.read().is_empty()
    }

    /// Returns `true` if an observer with this id is registered.
    pub fn contains(&self, observer_id: &str) -> bool {
        self.observers.read().contains_key(observer_id)
    }

    /// Returns the registered observer ids, sorted.
    pub fn observer_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.observers.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Publishes `message` to every registered observer.
    ///
    /// The current members are captured before this returns; each one is then
    /// notified on its own detached task.
    pub fn notify_observers(&self, ctx: &Context, message: String) {
        let observers: Vec<Arc<dyn Observer>> = self.observers.read().values().cloned().collect();
        for observer in observers {
            let ctx = ctx.clone();
            let message = message.clone();
            spawn_detached(async move {
                observer.update_observer(&ctx, message).await;
            });
        }
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry").field("observers", &self.observer_ids()).finish()
    }
}
