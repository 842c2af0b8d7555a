//! Client library for the meshlink daemon.
//!
//! Provides the control-channel abstraction used by the front-end, a gRPC
//! implementation of it, and the lazily established [`ServiceHandle`].

pub mod api;
pub mod error;
pub mod grpc;
pub mod handle;

pub use api::{Connector, DaemonApi, LoginOutcome, StatusReport};
pub use error::ClientError;
pub use grpc::{GrpcConnector, GrpcDaemon};
pub use handle::ServiceHandle;
