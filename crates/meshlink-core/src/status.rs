//! Connection status reported by the daemon.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Connection state of the daemon.
///
/// The daemon owns the authoritative value; clients only ever hold a cached
/// copy from the last successful `Status` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionState {
    /// The daemon has no valid credentials yet.
    NeedsLogin,
    /// The last login attempt was rejected.
    LoginFailed,
    /// Logged in but not connected.
    Idle,
    /// A connection is being established.
    Connecting,
    /// The tunnel is up.
    Connected,
}

impl ConnectionState {
    /// All states, in the order the daemon documents them.
    pub const ALL: [ConnectionState; 5] = [
        Self::NeedsLogin,
        Self::LoginFailed,
        Self::Idle,
        Self::Connecting,
        Self::Connected,
    ];

    /// Wire representation used by the daemon's `Status` response.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NeedsLogin => "NeedsLogin",
            Self::LoginFailed => "LoginFailed",
            Self::Idle => "Idle",
            Self::Connecting => "Connecting",
            Self::Connected => "Connected",
        }
    }

    /// Returns true if a disconnect request has something to tear down.
    ///
    /// Note that this is wider than the check used before connecting, which
    /// only treats `Connected` as already satisfied.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Connected | Self::Connecting)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
    }
}
