//! Application state and main event loop.

use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use crate::event::{BackendCommand, UiEvent};
use crate::state::UiState;
use crate::ui;

/// Main application with UI state and channel handles.
pub struct App {
    /// Current UI state snapshot for rendering.
    state: UiState,

    /// Receiver for events from the backend.
    ui_rx: mpsc::Receiver<UiEvent>,

    /// Sender for commands to the backend.
    cmd_tx: mpsc::Sender<BackendCommand>,
}

impl App {
    pub fn new(ui_rx: mpsc::Receiver<UiEvent>, cmd_tx: mpsc::Sender<BackendCommand>) -> Self {
        Self {
            state: UiState::default(),
            ui_rx,
            cmd_tx,
        }
    }

    /// Run the main event loop.
    ///
    /// This runs on the main thread and handles:
    /// - Drawing the UI
    /// - Processing keyboard input
    /// - Receiving views from the backend
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> std::io::Result<()> {
        loop {
            terminal.draw(|frame| ui::render(frame, &self.state))?;

            // Poll terminal events (non-blocking with short timeout)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key.code) {
                        break;
                    }
                }
            }

            while let Ok(event) = self.ui_rx.try_recv() {
                self.apply_event(event);
            }

            if self.state.should_quit {
                break;
            }
        }

        // Closing the window ends the session
        let _ = self.cmd_tx.blocking_send(BackendCommand::Quit);

        Ok(())
    }

    fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::ViewUpdated(view) => {
                self.state.view = view;
            }
            UiEvent::ActionFailed(msg) => {
                self.state.last_error = Some(msg);
            }
            UiEvent::Quit => {
                self.state.should_quit = true;
            }
        }
    }

    /// Handle a key press.
    ///
    /// Returns true if the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                return true;
            }

            KeyCode::Enter | KeyCode::Char(' ') => {
                // A disabled button swallows the click
                if self.state.can_click() {
                    self.state.last_error = None;
                    let _ = self.cmd_tx.blocking_send(BackendCommand::ActionClicked);
                }
            }

            KeyCode::Char('r') => {
                let _ = self.cmd_tx.blocking_send(BackendCommand::Refresh);
            }

            _ => {}
        }
        false
    }
}
