//! Converters between proto types and domain types.

use crate::pb;
use meshlink_core::{ConnectionState, CoreError};

// ============================================================================
// ConnectionState conversions
// ============================================================================

impl TryFrom<&pb::StatusResponse> for ConnectionState {
    type Error = CoreError;

    fn try_from(response: &pb::StatusResponse) -> Result<Self, Self::Error> {
        response.status.parse()
    }
}
