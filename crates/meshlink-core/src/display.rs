//! What the front-end shows for a given connection state.
//!
//! [`DisplayState::for_state`] is the only place label and button text are
//! decided. Pending labels and action notices are overlays on top of it.

use crate::status::ConnectionState;

/// Label and action-button state rendered by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    /// Status label.
    pub label: &'static str,

    /// Text of the single action button.
    pub action_button_text: &'static str,

    /// Whether the action button accepts clicks.
    pub action_button_enabled: bool,
}

impl Default for DisplayState {
    /// Display before the daemon has been reached once.
    fn default() -> Self {
        Self {
            label: "",
            action_button_text: "Connect",
            action_button_enabled: true,
        }
    }
}

impl DisplayState {
    /// Map a confirmed connection state to its display.
    pub fn for_state(state: ConnectionState) -> Self {
        let (label, action_button_text, action_button_enabled) = match state {
            ConnectionState::Connected => ("Connected", "Disconnect", true),
            ConnectionState::Connecting => ("Connecting...", "Connecting...", false),
            ConnectionState::Idle => ("Disconnected", "Connect", true),
            ConnectionState::LoginFailed => ("Login failed", "Connect", true),
            ConnectionState::NeedsLogin => ("Need to login", "Connect", true),
        };

        Self {
            label,
            action_button_text,
            action_button_enabled,
        }
    }

    /// Optimistic display while `action` is in flight.
    ///
    /// Button text is left alone; only the label and the enabled flag change.
    pub fn with_pending(self, action: Action) -> Self {
        Self {
            label: action.pending_label(),
            action_button_enabled: false,
            ..self
        }
    }

    /// Display with an action notice replacing the status label.
    pub fn with_notice(self, notice: Notice) -> Self {
        Self {
            label: notice.label(),
            ..self
        }
    }
}

/// A user-triggered transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Connect,
    Disconnect,
}

impl Action {
    /// Action the button dispatches given the last observed state.
    ///
    /// Only a confirmed `Connected` dispatches a disconnect; anything else,
    /// including no observation at all, dispatches a connect.
    pub fn for_state(state: Option<ConnectionState>) -> Self {
        match state {
            Some(ConnectionState::Connected) => Self::Disconnect,
            _ => Self::Connect,
        }
    }

    /// Label shown while the action's RPC is outstanding.
    pub fn pending_label(&self) -> &'static str {
        match self {
            Self::Connect => "Connecting...",
            Self::Disconnect => "Disconnecting...",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Disconnect => "disconnect",
        }
    }
}

/// Terminal outcome of an action, shown in place of the status label until
/// the next poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    /// Connecting failed after the pending label was shown.
    ConnectFailed,
    /// Disconnecting failed, or the daemon could not be reached to try.
    DisconnectFailed,
    /// Disconnect was requested while nothing was up.
    AlreadyDisconnected,
}

impl Notice {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ConnectFailed => "Connect failed.",
            Self::DisconnectFailed => "Disconnect failed.",
            // Shown when a disconnect found nothing up.
            Self::AlreadyDisconnected => "Already connected.",
        }
    }
}
