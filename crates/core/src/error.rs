//! Client error model.
//!
//! Two failure families cross crate boundaries: transport failures (network
//! or non-2xx responses) and credential rejections. Local validation is not
//! an error type — it is a pure report owned by the editor.

use thiserror::Error;

/// A failed call to the backend.
///
/// `status` is `None` for network/parse failures that never produced an HTTP
/// status. `message` is the body's `error` field when the server provided
/// one, else a generic `HTTP {status}` string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub status: Option<u16>,
    pub message: String,
}

impl TransportError {
    /// Failure before any HTTP status was received (DNS, refused, parse).
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Non-2xx response with an extracted or generated message.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn is_http(&self) -> bool {
        self.status.is_some()
    }
}

/// Credential rejection from the login endpoint.
///
/// The message is surfaced verbatim to the login form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<TransportError> for AuthError {
    fn from(err: TransportError) -> Self {
        Self {
            message: err.message,
        }
    }
}
