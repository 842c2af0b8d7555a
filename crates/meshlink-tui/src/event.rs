//! Event types for communication between the backend and the UI thread.

use meshlink_controller::ControllerView;

/// Events sent from the backend to the UI thread.
#[derive(Debug)]
pub enum UiEvent {
    /// The controller published a new view.
    ViewUpdated(ControllerView),

    /// A connect or disconnect failed.
    ActionFailed(String),

    /// The backend has shut down.
    Quit,
}

/// Commands sent from the UI thread to the backend.
#[derive(Debug)]
pub enum BackendCommand {
    /// The action button was pressed.
    ActionClicked,

    /// Run a reconciliation pass now.
    Refresh,

    /// The window is closing.
    Quit,
}
