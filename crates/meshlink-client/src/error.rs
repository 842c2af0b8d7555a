//! Error types for the daemon client.

use std::time::Duration;

use thiserror::Error;
use tonic::Code;

/// Errors that can occur when talking to the daemon.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The endpoint string is not a valid URI.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Failed to establish connection.
    #[error("connection failed: {0}")]
    Connection(String),

    /// gRPC error from the daemon.
    #[error("gRPC error: {0}")]
    Grpc(#[from] tonic::Status),

    /// The call did not complete within the caller's timeout.
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

impl ClientError {
    /// Returns true if the failure means the cached handle is no longer usable.
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Connection(_) | Self::Timeout(_) => true,
            Self::Grpc(status) => matches!(status.code(), Code::Unavailable | Code::Unknown),
            Self::InvalidEndpoint(_) => false,
        }
    }
}
