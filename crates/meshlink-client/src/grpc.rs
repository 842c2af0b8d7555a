//! gRPC implementation of the control channel.

use std::time::Duration;

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

use meshlink_core::ConnectionState;
use meshlink_proto::pb::{
    DownRequest, LoginRequest, StatusRequest, UpRequest, WaitSsoLoginRequest,
};
use meshlink_proto::DaemonServiceClient;

use crate::api::{Connector, DaemonApi, LoginOutcome, StatusReport};
use crate::error::ClientError;

/// Opens gRPC channels to the daemon.
#[derive(Debug, Clone)]
pub struct GrpcConnector {
    endpoint: String,
    connect_timeout: Duration,
    hostname: String,
}

impl GrpcConnector {
    /// Create a connector.
    ///
    /// # Arguments
    /// * `endpoint` - The daemon's gRPC endpoint (e.g., "http://127.0.0.1:41731")
    /// * `connect_timeout` - Deadline for opening the channel
    ///
    /// No per-request deadline is set on the channel; callers bound each
    /// call themselves, since `WaitSSOLogin` legitimately outlives the
    /// connect deadline.
    pub fn new(endpoint: impl Into<String>, connect_timeout: Duration) -> Self {
        let hostname = std::env::var("HOSTNAME").unwrap_or_default();
        Self {
            endpoint: endpoint.into(),
            connect_timeout,
            hostname,
        }
    }
}

#[async_trait]
impl Connector for GrpcConnector {
    type Client = GrpcDaemon;

    async fn connect(&self) -> Result<GrpcDaemon, ClientError> {
        info!(endpoint = %self.endpoint, "Connecting to daemon");

        let channel = Endpoint::from_shared(self.endpoint.clone())
            .map_err(|e| ClientError::InvalidEndpoint(e.to_string()))?
            .connect_timeout(self.connect_timeout)
            .connect()
            .await
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        Ok(GrpcDaemon {
            inner: DaemonServiceClient::new(channel),
            hostname: self.hostname.clone(),
        })
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Client for the daemon's `DaemonService`.
#[derive(Debug, Clone)]
pub struct GrpcDaemon {
    inner: DaemonServiceClient<Channel>,
    hostname: String,
}

#[async_trait]
impl DaemonApi for GrpcDaemon {
    async fn status(&mut self) -> Result<StatusReport, ClientError> {
        let response = self.inner.status(StatusRequest {}).await?.into_inner();
        debug!(
            status = %response.status,
            known = ConnectionState::try_from(&response).is_ok(),
            "Daemon status"
        );
        Ok(StatusReport {
            status: response.status,
            daemon_version: response.daemon_version,
        })
    }

    async fn login(&mut self) -> Result<LoginOutcome, ClientError> {
        let request = LoginRequest {
            setup_key: String::new(),
            management_url: String::new(),
            hostname: self.hostname.clone(),
        };
        let response = self.inner.login(request).await?.into_inner();

        if !response.needs_sso_login {
            return Ok(LoginOutcome::LoggedIn);
        }

        Ok(LoginOutcome::SsoRequired {
            user_code: response.user_code,
            verification_uri: response.verification_uri,
            verification_uri_complete: response.verification_uri_complete,
        })
    }

    async fn wait_sso_login(&mut self, user_code: &str) -> Result<(), ClientError> {
        let request = WaitSsoLoginRequest {
            user_code: user_code.to_string(),
            hostname: self.hostname.clone(),
        };
        self.inner.wait_sso_login(request).await?;
        Ok(())
    }

    async fn up(&mut self) -> Result<(), ClientError> {
        self.inner.up(UpRequest {}).await?;
        Ok(())
    }

    async fn down(&mut self) -> Result<(), ClientError> {
        self.inner.down(DownRequest {}).await?;
        Ok(())
    }
}
