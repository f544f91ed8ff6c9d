//! Classify HTTP status codes and transport failures into retry error kinds.

use super::error::{RequestError, TransportKind};

/// High-level classification of an error for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation timed out (connect/read).
    Timeout,
    /// Server asked us to slow down (e.g. 429, 503).
    Throttled,
    /// Network-level failure (connection reset, DNS, etc.).
    Connection,
    /// HTTP status that is retryable but not strictly throttling (5xx).
    Http5xx(u16),
    /// Any other error (typically not retried).
    Other,
}

impl ErrorKind {
    pub fn is_retryable(self) -> bool {
        !matches!(self, ErrorKind::Other)
    }
}

/// Classify an HTTP status code for retry decisions.
pub fn classify_http_status(code: u16) -> ErrorKind {
    match code {
        429 | 503 => ErrorKind::Throttled,
        500..=599 => ErrorKind::Http5xx(code),
        _ => ErrorKind::Other,
    }
}

/// Classify a transport failure for retry decisions.
pub fn classify_transport(kind: TransportKind) -> ErrorKind {
    match kind {
        TransportKind::Timeout => ErrorKind::Timeout,
        TransportKind::Connection => ErrorKind::Connection,
        TransportKind::Other => ErrorKind::Other,
    }
}

/// Classify a request error (HTTP or transport) into an ErrorKind.
pub fn classify(e: &RequestError) -> ErrorKind {
    match e {
        RequestError::Http(code) => classify_http_status(*code),
        RequestError::Transport { kind, .. } => classify_transport(*kind),
    }
}
