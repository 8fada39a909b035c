//! Error type shared by every API call.

use thiserror::Error;

/// Failure of a single request/response cycle against the backend.
///
/// There is deliberately no deeper taxonomy: call sites log the error and show
/// its `Display` text in an inline alert, nothing more.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { code: u16, message: String },

    /// The request never completed (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected schema.
    #[error("unexpected response from server: {0}")]
    Decode(String),

    /// Authorization failed and the one refresh-and-retry cycle is spent.
    #[error("your session has expired, please sign in again")]
    Unauthorized,

    /// Rejected client-side before any network call was made.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Short human-readable text for inline alerts.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
