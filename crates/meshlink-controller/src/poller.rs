//! Periodic status polling.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use meshlink_client::Connector;

use crate::controller::StatusController;
use crate::error::ControlError;

/// Spawn the poller for `controller`.
///
/// The first pass runs immediately. Each pass finishes before the next tick
/// is scheduled, and a failed pass is only logged; the next tick is the
/// retry. The task ends when the session is cancelled or the controller is
/// dropped.
pub(crate) fn spawn<C: Connector>(controller: &Arc<StatusController<C>>) -> JoinHandle<()> {
    let controller_ref = Arc::downgrade(controller);
    let session = controller.session().clone();
    let period = controller.config().poll_interval;

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = session.cancelled() => break,
                _ = ticker.tick() => {}
            }

            let Some(controller) = controller_ref.upgrade() else {
                break;
            };

            debug!("Status poll");
            match controller.reconcile().await {
                Ok(()) => {}
                Err(ControlError::Cancelled) => break,
                Err(e) => warn!(error = %e, "Status poll failed"),
            }
        }

        debug!("Status poller stopped");
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use meshlink_core::ConnectionState;

    use crate::testing::{fake_controller, FakeDaemon};

    #[tokio::test(start_paused = true)]
    async fn test_polls_on_interval() {
        let daemon = FakeDaemon::new(ConnectionState::Idle);
        let (controller, _connector) = fake_controller(&daemon);

        controller.start_polling();
        tokio::time::sleep(Duration::from_secs(25)).await;

        // Ticks at 0s, 10s and 20s.
        assert_eq!(daemon.count("status"), 3);
        assert_eq!(controller.view().await.display.label, "Disconnected");

        controller.close().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_picks_up_daemon_changes() {
        let daemon = FakeDaemon::new(ConnectionState::Idle);
        let (controller, _connector) = fake_controller(&daemon);

        controller.start_polling();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(controller.view().await.state, Some(ConnectionState::Idle));

        // Someone else brought the connection up.
        daemon.set_status("Connected");
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(controller.view().await.display.label, "Connected");

        controller.close().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_poll_is_retried_on_next_tick() {
        let daemon = FakeDaemon::new(ConnectionState::Connected);
        let (controller, connector) = fake_controller(&daemon);
        connector.refuse(true);

        controller.start_polling();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(controller.view().await.state, None);

        connector.refuse(false);
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(controller.view().await.state, Some(ConnectionState::Connected));

        controller.close().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_stops_polling() {
        let daemon = FakeDaemon::new(ConnectionState::Idle);
        let (controller, _connector) = fake_controller(&daemon);

        controller.start_polling();
        tokio::time::sleep(Duration::from_secs(1)).await;
        controller.close().await;

        let polled = daemon.count("status");
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(daemon.count("status"), polled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_polling_twice_runs_one_poller() {
        let daemon = FakeDaemon::new(ConnectionState::Idle);
        let (controller, _connector) = fake_controller(&daemon);

        controller.start_polling();
        controller.start_polling();
        tokio::time::sleep(Duration::from_secs(15)).await;

        assert_eq!(daemon.count("status"), 2);
        controller.close().await;
    }
}
