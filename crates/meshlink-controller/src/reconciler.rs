//! Single writer of the displayed connection state.

use tokio::sync::{mpsc, oneshot, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use meshlink_client::StatusReport;
use meshlink_core::{Action, ConnectionState, DisplayState, Notice};

/// Browser step of an SSO login, shown to the user until it completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsoPrompt {
    pub verification_uri: String,
    pub user_code: String,
}

/// Everything the front-end renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerView {
    /// Last successfully observed state, `None` until the daemon answers once.
    pub state: Option<ConnectionState>,

    /// Label and button, derived from `state` plus any overlay.
    pub display: DisplayState,

    /// Version string reported alongside the last status.
    pub daemon_version: String,

    /// Pending SSO step, if a login is waiting on the user.
    pub sso_prompt: Option<SsoPrompt>,
}

/// Messages into the reconciler.
#[derive(Debug)]
pub enum DisplayUpdate {
    /// A reconciliation pass read this status. Clears any overlay.
    Observed(StatusReport),

    /// An action started; show its pending label.
    Pending(Action),

    /// An action reached a terminal outcome worth showing now.
    Notice(Notice),

    /// An action finished. Re-derive from the fresh status (if one could be
    /// read) and keep the action's notice on top until the next poll.
    Settled {
        report: Option<StatusReport>,
        notice: Option<Notice>,
    },

    /// Show or clear the SSO prompt.
    SsoPrompt(Option<SsoPrompt>),

    /// Reply with the view once every earlier update has been applied.
    Flush(oneshot::Sender<ControllerView>),
}

/// Maps daemon status to [`ControllerView`].
#[derive(Debug, Default)]
pub struct Reconciler {
    view: ControllerView,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ControllerView {
        &self.view
    }

    /// Apply one update. Returns true if the view changed.
    pub fn apply(&mut self, update: DisplayUpdate) -> bool {
        let before = self.view.clone();

        match update {
            DisplayUpdate::Observed(report) => {
                if self.observe(&report) {
                    self.view.display = self.base_display();
                }
            }
            DisplayUpdate::Pending(action) => {
                self.view.display = self.view.display.with_pending(action);
            }
            DisplayUpdate::Notice(notice) => {
                self.view.display = self.view.display.with_notice(notice);
            }
            DisplayUpdate::Settled { report, notice } => {
                if let Some(report) = report {
                    self.observe(&report);
                }
                let display = self.base_display();
                self.view.display = match notice {
                    Some(notice) => display.with_notice(notice),
                    None => display,
                };
            }
            DisplayUpdate::SsoPrompt(prompt) => {
                self.view.sso_prompt = prompt;
            }
            DisplayUpdate::Flush(reply) => {
                let _ = reply.send(self.view.clone());
            }
        }

        self.view != before
    }

    /// Record a status report. Unrecognized statuses are ignored.
    fn observe(&mut self, report: &StatusReport) -> bool {
        match report.state() {
            Ok(state) => {
                self.view.state = Some(state);
                self.view.daemon_version = report.daemon_version.clone();
                true
            }
            Err(e) => {
                warn!(error = %e, "Ignoring daemon status");
                false
            }
        }
    }

    fn base_display(&self) -> DisplayState {
        self.view
            .state
            .map(DisplayState::for_state)
            .unwrap_or_default()
    }

    /// Consume updates until the session ends or every producer is gone,
    /// publishing each change to `view_tx`.
    pub async fn run(
        mut self,
        mut updates: mpsc::UnboundedReceiver<DisplayUpdate>,
        view_tx: watch::Sender<ControllerView>,
        session: CancellationToken,
    ) {
        loop {
            let update = tokio::select! {
                biased;
                _ = session.cancelled() => break,
                update = updates.recv() => match update {
                    Some(update) => update,
                    None => break,
                },
            };

            if self.apply(update) {
                debug!(
                    state = ?self.view.state,
                    label = self.view.display.label,
                    "Display updated"
                );
                view_tx.send_replace(self.view.clone());
            }
        }

        debug!("Reconciler stopped");
    }
}
