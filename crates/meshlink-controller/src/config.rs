//! Controller configuration.

use std::time::Duration;

/// Controller configuration.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Daemon gRPC endpoint.
    pub endpoint: String,

    /// Interval between status polls.
    pub poll_interval: Duration,

    /// Deadline for establishing the handle and for every RPC.
    pub fail_timeout: Duration,

    /// Deadline for the user to finish an SSO login in the browser.
    pub sso_wait_timeout: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:41731".to_string(),
            poll_interval: Duration::from_secs(10),
            fail_timeout: Duration::from_secs(3),
            sso_wait_timeout: Duration::from_secs(300),
        }
    }
}
