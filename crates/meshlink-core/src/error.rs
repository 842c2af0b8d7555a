//! Core domain errors.

use thiserror::Error;

/// Core domain errors for meshlink.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The daemon reported a status string this client does not know.
    #[error("Unrecognized connection status: {0:?}")]
    UnknownStatus(String),
}
