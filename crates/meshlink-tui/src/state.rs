//! UI state for rendering.

use meshlink_controller::ControllerView;

/// Snapshot of data for rendering (no async, no locks).
#[derive(Debug, Default)]
pub struct UiState {
    /// Latest view published by the controller.
    pub view: ControllerView,

    /// Last action error, shown until the next click.
    pub last_error: Option<String>,

    /// Set once the user closes the window.
    pub should_quit: bool,
}

impl UiState {
    /// Whether a click should be forwarded at all.
    pub fn can_click(&self) -> bool {
        self.view.display.action_button_enabled
    }
}
