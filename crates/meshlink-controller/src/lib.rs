//! Connection state controller for the meshlink front-end.
//!
//! Three parts share one [`StatusController`]:
//! - the status poller, which runs a reconciliation pass on a fixed interval
//! - the reconciler, the single consumer of display updates and the only
//!   writer of what the front-end shows
//! - the action controller, which drives connect and disconnect
//!
//! Both the poller and actions are producers into the reconciler's update
//! channel, so concurrent updates resolve as last-write-wins.

mod actions;
pub mod config;
pub mod controller;
pub mod error;
pub mod poller;
pub mod reconciler;

#[cfg(test)]
mod testing;

pub use config::ControllerConfig;
pub use controller::{ActionOutcome, StatusController};
pub use error::ControlError;
pub use reconciler::{ControllerView, DisplayUpdate, Reconciler, SsoPrompt};
