//! Failed request attempt, as handed to retry policies.

use thiserror::Error;

/// Transport-level failure category (no HTTP response was received).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Connect or read timed out.
    Timeout,
    /// Connection refused/reset, DNS failure, etc.
    Connection,
    /// Anything else the transport reported.
    Other,
}

/// Error returned by a single request attempt (HTTP error or transport failure).
#[derive(Debug, Error)]
pub enum RequestError {
    /// The server answered with a non-success status.
    #[error("HTTP {0}")]
    Http(u16),
    /// No HTTP response at all.
    #[error("transport ({kind:?}): {message}")]
    Transport { kind: TransportKind, message: String },
}

impl RequestError {
    pub fn transport(kind: TransportKind, message: impl Into<String>) -> Self {
        RequestError::Transport {
            kind,
            message: message.into(),
        }
    }

    /// HTTP status of the failed attempt; `None` for transport failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RequestError::Http(code) => Some(*code),
            RequestError::Transport { .. } => None,
        }
    }
}
