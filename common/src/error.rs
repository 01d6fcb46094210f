//! Error types shared by the API client and the form layer.
//!
//! Every failure ends up in front of the user as a toast; nothing here is
//! fatal. `ClientError` covers the remote side (transport, status, decoding)
//! and wraps `ValidationError` for input rejected before any request is sent.

use thiserror::Error;

use crate::requests::ErrorBody;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ClientError {
    /// Builds a `Status` error from a non-2xx response body, picking up the
    /// API's `{"detail": "..."}` message when there is one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::message);
        ClientError::Status { status, detail }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Input rejected client-side. No request is issued for these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Credits must be a whole number, got \"{0}\"")]
    InvalidCredits(String),

    #[error("Please select both student and course")]
    MissingSelection,
}
