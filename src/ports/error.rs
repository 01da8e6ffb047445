//! Errors crossing the backend boundary.

use thiserror::Error;

/// Errors that can occur while talking to the backend.
///
/// All of these are surfaced to the user as a transient notification;
/// nothing here triggers an automatic retry, and the caller's
/// in-progress state is preserved so a manual retry needs no re-entry.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// Connection-level failure before any response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// The request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Non-2xx HTTP response.
    #[error("Backend returned status {code}: {body}")]
    Status { code: u16, body: String },

    /// 2xx response whose envelope reported `success: false`.
    #[error("Backend rejected the request: {0}")]
    Backend(String),

    /// The response body did not match the expected shape.
    #[error("Failed to decode backend response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        GatewayError::Network(message.into())
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        GatewayError::Decode(message.into())
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout { timeout_secs: 0 }
        } else if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else if err.is_connect() {
            GatewayError::Network(format!("Connection failed: {}", err))
        } else {
            GatewayError::Network(err.to_string())
        }
    }
}
