//! The controller shared by the poller, actions and the front-end.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use meshlink_client::{ClientError, Connector, DaemonApi, GrpcConnector, ServiceHandle, StatusReport};
use meshlink_core::{Action, Notice};

use crate::config::ControllerConfig;
use crate::error::ControlError;
use crate::poller;
use crate::reconciler::{ControllerView, DisplayUpdate, Reconciler};

/// Successful result of a button click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The mutating call was made and accepted.
    Completed(Action),

    /// The daemon was already where the action would have taken it.
    AlreadySatisfied(Action),

    /// Nothing was dispatched: the button is disabled or another action is
    /// still in flight.
    Ignored,
}

/// Connection state controller for one display session.
pub struct StatusController<C: Connector> {
    config: ControllerConfig,
    handle: ServiceHandle<C>,
    updates: mpsc::UnboundedSender<DisplayUpdate>,
    view_rx: watch::Receiver<ControllerView>,
    session: CancellationToken,
    /// Held for the duration of an action; a second click finds it locked.
    action_gate: Mutex<()>,
    closed: AtomicBool,
    poller: StdMutex<Option<JoinHandle<()>>>,
}

impl StatusController<GrpcConnector> {
    /// Controller talking gRPC to `config.endpoint`.
    pub fn grpc(config: ControllerConfig) -> Arc<Self> {
        let connector = GrpcConnector::new(config.endpoint.clone(), config.fail_timeout);
        Self::new(connector, config)
    }
}

impl<C: Connector> StatusController<C> {
    /// Create the controller and start its reconciler.
    ///
    /// Must be called from within a tokio runtime. No RPC is made until the
    /// poller is started or the front-end asks for something.
    pub fn new(connector: C, config: ControllerConfig) -> Arc<Self> {
        let (updates, updates_rx) = mpsc::unbounded_channel();
        let (view_tx, view_rx) = watch::channel(ControllerView::default());
        let session = CancellationToken::new();

        tokio::spawn(Reconciler::new().run(updates_rx, view_tx, session.clone()));

        Arc::new(Self {
            config,
            handle: ServiceHandle::new(connector),
            updates,
            view_rx,
            session,
            action_gate: Mutex::new(()),
            closed: AtomicBool::new(false),
            poller: StdMutex::new(None),
        })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub(crate) fn session(&self) -> &CancellationToken {
        &self.session
    }

    /// Start polling. Called when the display surface becomes visible;
    /// later calls are no-ops.
    pub fn start_polling(self: &Arc<Self>) {
        let Ok(mut slot) = self.poller.lock() else {
            return;
        };
        if slot.is_some() || self.session.is_cancelled() {
            return;
        }

        info!(interval = ?self.config.poll_interval, "Starting status poller");
        *slot = Some(poller::spawn(self));
    }

    /// Receiver that sees every published view.
    pub fn subscribe(&self) -> watch::Receiver<ControllerView> {
        self.view_rx.clone()
    }

    /// The view after every update queued so far has been applied.
    pub async fn view(&self) -> ControllerView {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self.updates.send(DisplayUpdate::Flush(reply_tx)).is_ok() {
            if let Ok(view) = reply_rx.await {
                return view;
            }
        }
        // Reconciler is gone; the last published view is final.
        self.view_rx.borrow().clone()
    }

    /// Run a reconciliation pass and return the resulting view.
    ///
    /// Failures are logged; the display keeps its last good state.
    pub async fn refresh_display(&self) -> ControllerView {
        if let Err(e) = self.reconcile().await {
            warn!(error = %e, "Failed to refresh status");
        }
        self.view().await
    }

    /// Read the daemon's status and hand it to the reconciler.
    pub async fn reconcile(&self) -> Result<(), ControlError> {
        let report = self.read_status().await?;
        self.publish(DisplayUpdate::Observed(report));
        Ok(())
    }

    /// Handle a click on the action button.
    ///
    /// Dispatch is decided by the last observed state, never by the button
    /// text. Whatever happens, a reconciliation pass runs before returning.
    pub async fn on_action_clicked(&self) -> Result<ActionOutcome, ControlError> {
        if self.session.is_cancelled() {
            return Err(ControlError::Cancelled);
        }

        let Ok(_gate) = self.action_gate.try_lock() else {
            debug!("Action already in flight, ignoring click");
            return Ok(ActionOutcome::Ignored);
        };

        let view = self.view().await;
        if !view.display.action_button_enabled {
            debug!(label = view.display.label, "Action button disabled, ignoring click");
            return Ok(ActionOutcome::Ignored);
        }

        let action = Action::for_state(view.state);
        info!(action = action.name(), state = ?view.state, "Action requested");
        self.publish(DisplayUpdate::Pending(action));

        let result = match action {
            Action::Connect => self.connect().await,
            Action::Disconnect => self.disconnect().await,
        };

        let notice = match (&result, action) {
            (Ok(ActionOutcome::AlreadySatisfied(_)), Action::Disconnect) => {
                Some(Notice::AlreadyDisconnected)
            }
            (
                Err(ControlError::HandleUnavailable(_) | ControlError::Rpc { .. }),
                Action::Connect,
            ) => Some(Notice::ConnectFailed),
            (
                Err(ControlError::HandleUnavailable(_) | ControlError::Rpc { .. }),
                Action::Disconnect,
            ) => Some(Notice::DisconnectFailed),
            _ => None,
        };

        let report = match self.read_status().await {
            Ok(report) => Some(report),
            Err(e) => {
                debug!(error = %e, "No fresh status after action");
                None
            }
        };
        self.publish(DisplayUpdate::Settled { report, notice });

        match &result {
            Ok(outcome) => info!(action = action.name(), ?outcome, "Action finished"),
            Err(e) => error!(action = action.name(), error = %e, "Action failed"),
        }
        result
    }

    /// Tear down the session: stop the poller, unblock in-flight calls and
    /// stop the reconciler. Only the first call has any effect.
    pub async fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }

        info!("Closing status session");
        self.session.cancel();

        let poller = self.poller.lock().ok().and_then(|mut slot| slot.take());
        if let Some(poller) = poller {
            let _ = poller.await;
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub(crate) fn publish(&self, update: DisplayUpdate) {
        if self.updates.send(update).is_err() {
            debug!("Reconciler stopped, dropping display update");
        }
    }

    pub(crate) async fn read_status(&self) -> Result<StatusReport, ControlError> {
        let mut client = self.acquire().await?;
        self.call("status", client.status()).await
    }

    /// Acquire the daemon handle, bounded by the fail timeout and the session.
    pub(crate) async fn acquire(&self) -> Result<C::Client, ControlError> {
        tokio::select! {
            biased;
            _ = self.session.cancelled() => Err(ControlError::Cancelled),
            result = self.handle.acquire(self.config.fail_timeout) => {
                result.map_err(ControlError::HandleUnavailable)
            }
        }
    }

    /// Run one RPC under the fail timeout.
    pub(crate) async fn call<T>(
        &self,
        op: &'static str,
        fut: impl Future<Output = Result<T, ClientError>>,
    ) -> Result<T, ControlError> {
        self.call_with(op, self.config.fail_timeout, fut).await
    }

    /// Run one RPC under `timeout`, aborting if the session closes.
    ///
    /// Transport failures drop the cached handle so the next call
    /// reconnects. There is no retry.
    pub(crate) async fn call_with<T>(
        &self,
        op: &'static str,
        timeout: Duration,
        fut: impl Future<Output = Result<T, ClientError>>,
    ) -> Result<T, ControlError> {
        let result = tokio::select! {
            biased;
            _ = self.session.cancelled() => return Err(ControlError::Cancelled),
            result = tokio::time::timeout(timeout, fut) => {
                result.unwrap_or(Err(ClientError::Timeout(timeout)))
            }
        };

        match result {
            Ok(value) => Ok(value),
            Err(source) => {
                if source.is_transport() {
                    self.handle.invalidate().await;
                }
                Err(ControlError::Rpc { op, source })
            }
        }
    }
}
