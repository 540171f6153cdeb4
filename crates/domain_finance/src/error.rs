//! Errors surfaced by the collaborator ports
//!
//! Both collaborators (the remote billing provider and the local expense
//! store) report failures through one unified error type, so the HTTP
//! boundary can map them uniformly.

use thiserror::Error;

/// Error type all port implementations report
#[derive(Debug, Error)]
pub enum PortError {
    /// The provider answered with an error status; the body is kept for
    /// the error response and diagnosis logs
    #[error("Upstream error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    /// The provider could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// The provider answered 2xx but the payload did not match the
    /// expected shape
    #[error("Malformed upstream payload: {0}")]
    Decode(String),

    /// The local expense store failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PortError {
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        PortError::Decode(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        PortError::Storage(message.into())
    }

    /// The upstream detail attached to error responses, when there is one
    pub fn upstream_detail(&self) -> Option<String> {
        match self {
            PortError::Upstream { status, body } => Some(format!("status {status}: {body}")),
            _ => None,
        }
    }
}
