//! Controller errors.

use thiserror::Error;

use meshlink_client::ClientError;

/// Errors returned by controller operations.
///
/// A redundant action is not an error; see
/// [`ActionOutcome::AlreadySatisfied`](crate::ActionOutcome::AlreadySatisfied).
#[derive(Debug, Error)]
pub enum ControlError {
    /// The daemon could not be reached.
    #[error("daemon unavailable: {0}")]
    HandleUnavailable(#[source] ClientError),

    /// The call reached the daemon but failed or timed out.
    #[error("{op} failed: {source}")]
    Rpc {
        op: &'static str,
        #[source]
        source: ClientError,
    },

    /// The daemon rejected the login step.
    #[error("login failed: {0}")]
    LoginFailed(#[source] ClientError),

    /// The session was closed while the call was outstanding.
    #[error("session closed")]
    Cancelled,
}

impl ControlError {
    /// Re-tag a failed login RPC as a login failure.
    pub(crate) fn into_login_failure(self) -> Self {
        match self {
            Self::Rpc { source, .. } => Self::LoginFailed(source),
            other => other,
        }
    }
}
