//! Raw responses from the transport.

use serde::de::DeserializeOwned;

use crate::FetchError;

/// Longest body excerpt kept in a status error.
const ERROR_BODY_LIMIT: usize = 256;

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// A response carrying `value` serialized as JSON.
    pub fn json_body(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string().into_bytes())
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Pass 2xx responses through; turn anything else into [`FetchError::Status`]
    /// carrying the start of the body.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }
        let body: String = String::from_utf8_lossy(&self.body)
            .chars()
            .take(ERROR_BODY_LIMIT)
            .collect();
        Err(FetchError::Status {
            status: self.status,
            body,
        })
    }
}
