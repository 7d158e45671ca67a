//! Detached task spawning for notification delivery.

use std::future::Future;

use tokio::runtime::Handle;

/// Runs `future` without waiting for it.
///
/// Uses the current tokio runtime when there is one. Outside a runtime the
/// future is driven to completion on a short-lived thread instead, so clients
/// can still be called from plain synchronous tests.
pub(crate) fn spawn_detached<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    match Handle::try_current() {
        Ok(handle) => {
            handle.spawn(future);
        }
        Err(_) => {
            let spawned = std::thread::Builder::new()
                .name("g2-notify".to_string())
                .spawn(move || futures::executor::block_on(future));
            if let Err(err) = spawned {
                tracing::error!(target: "g2_sdk_mock", error = %err, "failed to spawn notification thread");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_spawns_on_runtime() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        spawn_detached(async move {
            let _ = tx.send(7);
        });
        let value = tokio::time::timeout(Duration::from_secs(1), rx).await.unwrap().unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_spawns_without_runtime() {
        let (tx, rx) = std::sync::mpsc::channel();
        spawn_detached(async move {
            let _ = tx.send(11);
        });
        assert_eq!(rx.recv_timeout(Duration::from_secs(1)).unwrap(), 11);
    }
}
