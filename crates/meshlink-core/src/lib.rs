//! Meshlink Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - Network/gRPC
//! - Runtime specifics
//!
//! It defines the connection states reported by the daemon and the single
//! mapping from those states to what the front-end displays.

pub mod display;
pub mod error;
pub mod status;

// Re-export commonly used types
pub use display::{Action, DisplayState, Notice};
pub use error::CoreError;
pub use status::ConnectionState;
