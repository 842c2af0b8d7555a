//! Generated gRPC code and converters for the daemon control channel.
//!
//! This crate contains:
//! - Generated protobuf message types
//! - Generated gRPC client stub
//! - Converters between proto types and domain types
//!
//! The generated code under `src/gen` is checked in. Rebuild with
//! `--features regen` after editing `proto/daemon/v1/daemon.proto`.

pub mod convert;

/// Generated protobuf types and services.
pub mod pb {
    // The path matches the proto package: daemon.v1
    include!("gen/daemon.v1.rs");
}

// Re-export commonly used types
pub use pb::daemon_service_client::DaemonServiceClient;
