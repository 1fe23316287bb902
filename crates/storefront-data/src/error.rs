//! Outbound request failures.

use thiserror::Error;

/// Why an outbound request produced no usable body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never got a response.
    #[error("request not delivered: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not the expected JSON.
    #[error("undecodable response body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}
