//! In-memory daemon for controller tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use meshlink_client::{ClientError, Connector, DaemonApi, LoginOutcome, StatusReport};
use meshlink_core::ConnectionState;

use crate::config::ControllerConfig;
use crate::controller::StatusController;

#[derive(Default)]
struct FakeState {
    status: String,
    calls: Vec<&'static str>,
    failing: HashMap<&'static str, tonic::Code>,
    hanging: HashSet<&'static str>,
    held: HashMap<&'static str, Arc<Notify>>,
    sso_code: Option<String>,
    sso_codes: Vec<String>,
}

/// Daemon double that records calls and follows `Up`/`Down`.
#[derive(Clone, Default)]
pub struct FakeDaemon {
    state: Arc<Mutex<FakeState>>,
}

impl FakeDaemon {
    pub fn new(initial: ConnectionState) -> Self {
        let daemon = Self::default();
        daemon.set_status(initial.as_str());
        daemon
    }

    pub fn set_status(&self, status: &str) {
        self.lock().status = status.to_string();
    }

    /// Make `op` fail with a non-transport gRPC error.
    pub fn fail(&self, op: &'static str) {
        self.lock().failing.insert(op, tonic::Code::Internal);
    }

    /// Make `op` fail as if the channel had broken.
    pub fn fail_transport(&self, op: &'static str) {
        self.lock().failing.insert(op, tonic::Code::Unavailable);
    }

    /// Let `op` succeed again.
    pub fn recover(&self, op: &'static str) {
        self.lock().failing.remove(op);
    }

    /// Make `op` never complete.
    pub fn hang(&self, op: &'static str) {
        self.lock().hanging.insert(op);
    }

    /// Make `op` wait until the returned notify is signalled.
    pub fn hold(&self, op: &'static str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.lock().held.insert(op, notify.clone());
        notify
    }

    /// Make `Login` ask for an SSO step with `user_code`.
    pub fn require_sso(&self, user_code: &str) {
        self.lock().sso_code = Some(user_code.to_string());
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.lock().calls.clone()
    }

    pub fn count(&self, op: &str) -> usize {
        self.lock().calls.iter().filter(|c| **c == op).count()
    }

    pub fn sso_codes(&self) -> Vec<String> {
        self.lock().sso_codes.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    async fn enter(&self, op: &'static str) -> Result<(), ClientError> {
        let (failing, hanging, held) = {
            let mut state = self.lock();
            state.calls.push(op);
            (
                state.failing.get(op).copied(),
                state.hanging.contains(op),
                state.held.get(op).cloned(),
            )
        };

        if hanging {
            std::future::pending::<()>().await;
        }
        if let Some(notify) = held {
            notify.notified().await;
        }
        if let Some(code) = failing {
            return Err(ClientError::Grpc(tonic::Status::new(
                code,
                format!("{op} rejected"),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl DaemonApi for FakeDaemon {
    async fn status(&mut self) -> Result<StatusReport, ClientError> {
        self.enter("status").await?;
        let status = self.lock().status.clone();
        Ok(StatusReport {
            status,
            daemon_version: "test".to_string(),
        })
    }

    async fn login(&mut self) -> Result<LoginOutcome, ClientError> {
        self.enter("login").await?;
        let sso_code = self.lock().sso_code.clone();
        match sso_code {
            None => Ok(LoginOutcome::LoggedIn),
            Some(user_code) => Ok(LoginOutcome::SsoRequired {
                verification_uri: "https://login.example.com/device".to_string(),
                verification_uri_complete: format!(
                    "https://login.example.com/device?user_code={user_code}"
                ),
                user_code,
            }),
        }
    }

    async fn wait_sso_login(&mut self, user_code: &str) -> Result<(), ClientError> {
        self.enter("wait_sso_login").await?;
        let mut state = self.lock();
        state.sso_codes.push(user_code.to_string());
        state.sso_code = None;
        Ok(())
    }

    async fn up(&mut self) -> Result<(), ClientError> {
        self.enter("up").await?;
        self.set_status(ConnectionState::Connected.as_str());
        Ok(())
    }

    async fn down(&mut self) -> Result<(), ClientError> {
        self.enter("down").await?;
        self.set_status(ConnectionState::Idle.as_str());
        Ok(())
    }
}

/// Connector handing out clones of one [`FakeDaemon`].
#[derive(Clone)]
pub struct FakeConnector {
    daemon: FakeDaemon,
    refusing: Arc<AtomicBool>,
    connects: Arc<AtomicU32>,
}

impl FakeConnector {
    pub fn new(daemon: &FakeDaemon) -> Self {
        Self {
            daemon: daemon.clone(),
            refusing: Arc::new(AtomicBool::new(false)),
            connects: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Refuse (or accept again) new connections.
    pub fn refuse(&self, refuse: bool) {
        self.refusing.store(refuse, Ordering::SeqCst);
    }

    pub fn connects(&self) -> u32 {
        self.connects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Connector for FakeConnector {
    type Client = FakeDaemon;

    async fn connect(&self) -> Result<FakeDaemon, ClientError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        if self.refusing.load(Ordering::SeqCst) {
            return Err(ClientError::Connection("connection refused".to_string()));
        }
        Ok(self.daemon.clone())
    }

    fn endpoint(&self) -> &str {
        "fake://daemon"
    }
}

/// Controller wired to `daemon` with default timings.
pub fn fake_controller(
    daemon: &FakeDaemon,
) -> (Arc<StatusController<FakeConnector>>, FakeConnector) {
    let connector = FakeConnector::new(daemon);
    let controller = StatusController::new(connector.clone(), ControllerConfig::default());
    (controller, connector)
}
