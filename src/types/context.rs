//! Call context passed as the first argument of every client operation.

use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

/// Lifecycle context for a client call.
///
/// Mirrors the context argument of the real SDK clients. A context carries a
/// cancellation token and an optional deadline, and is cheap to clone so it can
/// travel into notification tasks.
///
/// The mock clients accept a context on every operation but never consult it:
/// their work is a constant-time fetch of a canned value, so there is nothing
/// to cancel or time out.
///
/// ## Example
///
/// ```rust
/// use g2_sdk_mock::Context;
/// use std::time::Duration;
///
/// let ctx = Context::background().with_timeout(Duration::from_secs(5));
/// assert!(ctx.deadline().is_some());
/// assert!(!ctx.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancellation: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// Creates an empty context with no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias for [`Context::new`], named after the usual root context.
    pub fn background() -> Self {
        Self::new()
    }

    /// Sets an absolute deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets a deadline relative to now.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Uses an existing cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Creates a child context that is cancelled together with this one.
    pub fn child(&self) -> Self {
        Self { cancellation: self.cancellation.child_token(), deadline: self.deadline }
    }

    /// Returns the deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the cancellation token.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Cancels this context and all of its children.
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    /// Returns `true` once the context has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_has_no_deadline() {
        let ctx = Context::background();
        assert!(ctx.deadline().is_none());
        assert!(!ctx.is_cancelled());
    }

    #[test]
    fn test_with_timeout_sets_future_deadline() {
        let before = Instant::now();
        let ctx = Context::new().with_timeout(Duration::from_secs(1));
        assert!(ctx.deadline().is_some_and(|d| d > before));
    }

    #[test]
    fn test_cancel_propagates_to_child() {
        let parent = Context::new();
        let child = parent.child();
        parent.cancel();
        assert!(parent.is_cancelled());
        assert!(child.is_cancelled());
    }

    #[test]
    fn test_child_cancel_does_not_affect_parent() {
        let parent = Context::new();
        let child = parent.child();
        child.cancel();
        assert!(child.is_cancelled());
        assert!(!parent.is_cancelled());
    }
}
