//! Connect and disconnect flows.

use tracing::{info, warn};

use meshlink_client::{Connector, DaemonApi, LoginOutcome};
use meshlink_core::{Action, ConnectionState, Notice};

use crate::controller::{ActionOutcome, StatusController};
use crate::error::ControlError;
use crate::reconciler::{DisplayUpdate, SsoPrompt};

impl<C: Connector> StatusController<C> {
    pub(crate) async fn connect(&self) -> Result<ActionOutcome, ControlError> {
        let mut client = self.acquire().await?;

        self.login(&mut client).await?;

        let report = self.call("status", client.status()).await?;
        if report.state().ok() == Some(ConnectionState::Connected) {
            warn!("Already connected");
            return Ok(ActionOutcome::AlreadySatisfied(Action::Connect));
        }

        self.call("up", client.up()).await?;
        info!("Daemon accepted up request");
        Ok(ActionOutcome::Completed(Action::Connect))
    }

    pub(crate) async fn disconnect(&self) -> Result<ActionOutcome, ControlError> {
        let mut client = match self.acquire().await {
            Ok(client) => client,
            Err(e) => {
                // Nothing will confirm anything from here; say so right away.
                self.fail_disconnect(&e);
                return Err(e);
            }
        };

        let report = match self.call("status", client.status()).await {
            Ok(report) => report,
            Err(e) => {
                self.fail_disconnect(&e);
                return Err(e);
            }
        };

        // Unlike connect, an in-progress connection counts as something to
        // tear down.
        let active = report.state().map(|s| s.is_active()).unwrap_or(false);
        if !active {
            self.publish(DisplayUpdate::Notice(Notice::AlreadyDisconnected));
            warn!(status = %report.status, "Already down");
            return Ok(ActionOutcome::AlreadySatisfied(Action::Disconnect));
        }

        if let Err(e) = self.call("down", client.down()).await {
            self.fail_disconnect(&e);
            return Err(e);
        }

        info!("Daemon accepted down request");
        Ok(ActionOutcome::Completed(Action::Disconnect))
    }

    fn fail_disconnect(&self, error: &ControlError) {
        if !matches!(error, ControlError::Cancelled) {
            self.publish(DisplayUpdate::Notice(Notice::DisconnectFailed));
        }
    }

    /// Log in before connecting, walking the user through SSO if the daemon
    /// asks for it.
    async fn login(&self, client: &mut C::Client) -> Result<(), ControlError> {
        let outcome = self
            .call("login", client.login())
            .await
            .map_err(ControlError::into_login_failure)?;

        let (user_code, verification_uri) = match outcome {
            LoginOutcome::LoggedIn => return Ok(()),
            LoginOutcome::SsoRequired {
                user_code,
                verification_uri,
                verification_uri_complete,
            } => {
                let uri = if verification_uri_complete.is_empty() {
                    verification_uri
                } else {
                    verification_uri_complete
                };
                (user_code, uri)
            }
        };

        info!(uri = %verification_uri, "SSO login required");
        self.publish(DisplayUpdate::SsoPrompt(Some(SsoPrompt {
            verification_uri,
            user_code: user_code.clone(),
        })));

        let result = self
            .call_with(
                "wait_sso_login",
                self.config().sso_wait_timeout,
                client.wait_sso_login(&user_code),
            )
            .await
            .map_err(ControlError::into_login_failure);

        self.publish(DisplayUpdate::SsoPrompt(None));
        result
    }
}
