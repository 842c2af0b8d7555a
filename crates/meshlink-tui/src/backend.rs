//! Background runtime driving the status controller.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use meshlink_controller::{ControllerConfig, StatusController};

use crate::event::{BackendCommand, UiEvent};

/// Run the controller until the UI asks to quit.
///
/// This function runs in a separate thread with its own tokio runtime. It
/// forwards every published view to the UI thread via `ui_tx` and executes
/// commands arriving on `cmd_rx`.
pub async fn run_backend(
    config: ControllerConfig,
    ui_tx: mpsc::Sender<UiEvent>,
    mut cmd_rx: mpsc::Receiver<BackendCommand>,
) {
    info!(endpoint = %config.endpoint, "Starting status backend");

    let controller = StatusController::grpc(config);

    // Forward published views to the UI thread
    let forwarder = {
        let mut views = controller.subscribe();
        let ui_tx = ui_tx.clone();
        tokio::spawn(async move {
            while views.changed().await.is_ok() {
                let view = views.borrow_and_update().clone();
                if ui_tx.send(UiEvent::ViewUpdated(view)).await.is_err() {
                    break;
                }
            }
        })
    };

    // The window is visible from here on
    controller.start_polling();

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            BackendCommand::ActionClicked => {
                let controller = Arc::clone(&controller);
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    if let Err(e) = controller.on_action_clicked().await {
                        let _ = ui_tx.send(UiEvent::ActionFailed(e.to_string())).await;
                    }
                });
            }
            BackendCommand::Refresh => {
                debug!("Manual refresh");
                let controller = Arc::clone(&controller);
                tokio::spawn(async move {
                    controller.refresh_display().await;
                });
            }
            BackendCommand::Quit => {
                info!("Received quit command, shutting down backend");
                break;
            }
        }
    }

    controller.close().await;
    forwarder.abort();
    let _ = ui_tx.send(UiEvent::Quit).await;

    info!("Backend shutdown complete");
}
