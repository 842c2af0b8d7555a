//! Control-channel abstraction.
//!
//! The controller only talks to the daemon through these traits, so it can
//! be driven by the gRPC client in production and by an in-memory fake in
//! tests.

use async_trait::async_trait;

use meshlink_core::{ConnectionState, CoreError};

use crate::error::ClientError;

/// Result of a `Status` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Raw status string as sent by the daemon.
    pub status: String,

    /// Daemon version, empty if the daemon does not report one.
    pub daemon_version: String,
}

impl StatusReport {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            daemon_version: String::new(),
        }
    }

    /// Parse the raw status.
    pub fn state(&self) -> Result<ConnectionState, CoreError> {
        self.status.parse()
    }
}

/// Result of a `Login` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The daemon is authenticated.
    LoggedIn,

    /// The user has to complete an SSO login in a browser.
    SsoRequired {
        user_code: String,
        verification_uri: String,
        verification_uri_complete: String,
    },
}

/// Calls available on an established control channel.
///
/// Implementations are cheap to clone; every clone talks to the same daemon.
#[async_trait]
pub trait DaemonApi: Clone + Send + Sync + 'static {
    /// Read the daemon's current connection status.
    async fn status(&mut self) -> Result<StatusReport, ClientError>;

    /// Log in with stored credentials, or start an SSO login.
    async fn login(&mut self) -> Result<LoginOutcome, ClientError>;

    /// Wait for the SSO login identified by `user_code` to complete.
    async fn wait_sso_login(&mut self, user_code: &str) -> Result<(), ClientError>;

    /// Bring the connection up.
    async fn up(&mut self) -> Result<(), ClientError>;

    /// Tear the connection down.
    async fn down(&mut self) -> Result<(), ClientError>;
}

/// Establishes control channels.
#[async_trait]
pub trait Connector: Send + Sync + 'static {
    type Client: DaemonApi;

    /// Open a new channel to the daemon.
    async fn connect(&self) -> Result<Self::Client, ClientError>;

    /// Human-readable address, for logs.
    fn endpoint(&self) -> &str;
}
