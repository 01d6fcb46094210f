//! Turning a raw HTTP status and body into the client's result type.

use crate::error::ClientError;

/// Success is decided by the status alone: any 2xx is accepted whatever its
/// body holds, anything else becomes [`ClientError::Status`] carrying the
/// API's `detail` when the body has one.
pub fn check_status(status: u16, body: &str) -> Result<(), ClientError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ClientError::from_status(status, body))
    }
}
