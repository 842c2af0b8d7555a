//! Lazily established, replaceable handle to the daemon.

use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::api::Connector;
use crate::error::ClientError;

/// Exclusive owner of the control channel for a session.
///
/// The channel is opened on first use and dropped with [`invalidate`] when a
/// call fails at the transport level. Callers acquire before every call and
/// never keep a client across calls.
///
/// [`invalidate`]: ServiceHandle::invalidate
pub struct ServiceHandle<C: Connector> {
    connector: C,
    slot: Mutex<Option<C::Client>>,
}

impl<C: Connector> ServiceHandle<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            slot: Mutex::new(None),
        }
    }

    /// Return the established client, connecting first if needed.
    ///
    /// Establishing the channel is bounded by `timeout`. Concurrent callers
    /// wait for a single connection attempt rather than racing their own.
    pub async fn acquire(&self, timeout: Duration) -> Result<C::Client, ClientError> {
        let mut slot = self.slot.lock().await;

        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        let client = match tokio::time::timeout(timeout, self.connector.connect()).await {
            Ok(Ok(client)) => client,
            Ok(Err(e)) => {
                warn!(endpoint = %self.connector.endpoint(), error = %e, "Failed to reach daemon");
                return Err(e);
            }
            Err(_) => {
                warn!(endpoint = %self.connector.endpoint(), ?timeout, "Timed out reaching daemon");
                return Err(ClientError::Timeout(timeout));
            }
        };

        info!(endpoint = %self.connector.endpoint(), "Daemon handle established");
        *slot = Some(client.clone());
        Ok(client)
    }

    /// Drop the cached client so the next [`acquire`] reconnects.
    ///
    /// [`acquire`]: ServiceHandle::acquire
    pub async fn invalidate(&self) {
        if self.slot.lock().await.take().is_some() {
            debug!(endpoint = %self.connector.endpoint(), "Dropped daemon handle");
        }
    }

    #[cfg(test)]
    async fn is_established(&self) -> bool {
        self.slot.lock().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::api::{DaemonApi, LoginOutcome, StatusReport};

    #[derive(Clone)]
    struct NullDaemon;

    #[async_trait]
    impl DaemonApi for NullDaemon {
        async fn status(&mut self) -> Result<StatusReport, ClientError> {
            Ok(StatusReport::new("Idle"))
        }
        async fn login(&mut self) -> Result<LoginOutcome, ClientError> {
            Ok(LoginOutcome::LoggedIn)
        }
        async fn wait_sso_login(&mut self, _user_code: &str) -> Result<(), ClientError> {
            Ok(())
        }
        async fn up(&mut self) -> Result<(), ClientError> {
            Ok(())
        }
        async fn down(&mut self) -> Result<(), ClientError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingConnector {
        attempts: Arc<AtomicU32>,
        refuse: AtomicBool,
        hang: bool,
    }

    #[async_trait]
    impl Connector for CountingConnector {
        type Client = NullDaemon;

        async fn connect(&self) -> Result<NullDaemon, ClientError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            if self.hang {
                std::future::pending::<()>().await;
            }
            if self.refuse.load(Ordering::SeqCst) {
                return Err(ClientError::Connection("refused".to_string()));
            }
            Ok(NullDaemon)
        }

        fn endpoint(&self) -> &str {
            "test://daemon"
        }
    }

    const TIMEOUT: Duration = Duration::from_secs(3);

    #[tokio::test]
    async fn test_acquire_reuses_established_client() {
        let connector = CountingConnector::default();
        let attempts = connector.attempts.clone();
        let handle = ServiceHandle::new(connector);

        handle.acquire(TIMEOUT).await.unwrap();
        handle.acquire(TIMEOUT).await.unwrap();

        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert!(handle.is_established().await);
    }

    #[tokio::test]
    async fn test_invalidate_forces_reconnect() {
        let connector = CountingConnector::default();
        let attempts = connector.attempts.clone();
        let handle = ServiceHandle::new(connector);

        handle.acquire(TIMEOUT).await.unwrap();
        handle.invalidate().await;
        assert!(!handle.is_established().await);

        handle.acquire(TIMEOUT).await.unwrap();
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_connect_leaves_slot_empty() {
        let connector = CountingConnector::default();
        connector.refuse.store(true, Ordering::SeqCst);
        let handle = ServiceHandle::new(connector);

        let err = handle.acquire(TIMEOUT).await.err().unwrap();
        assert!(matches!(err, ClientError::Connection(_)));
        assert!(!handle.is_established().await);

        // The next attempt is independent of the failed one.
        handle.connector.refuse.store(false, Ordering::SeqCst);
        assert!(handle.acquire(TIMEOUT).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_is_bounded_by_timeout() {
        let connector = CountingConnector {
            hang: true,
            ..Default::default()
        };
        let handle = ServiceHandle::new(connector);

        let err = handle.acquire(TIMEOUT).await.err().unwrap();
        assert!(matches!(err, ClientError::Timeout(t) if t == TIMEOUT));
    }
}
