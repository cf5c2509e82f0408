//! Transport-layer error types.
//!
//! These are the only errors that end the server loop.

use crewsync_types::DiagnosticError;
use thiserror::Error;

/// Errors from the stdio transport layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to read from stdin.
    #[error("read error: {0}")]
    Read(String),
    /// Failed to write to stdout.
    #[error("write error: {0}")]
    Write(String),
}

impl DiagnosticError for TransportError {
    fn hint(&self) -> Option<String> {
        match self {
            TransportError::Read(_) => Some("stdin was closed or became unreadable".into()),
            TransportError::Write(_) => Some("the host process closed stdout".into()),
        }
    }

    fn fix(&self) -> Option<String> {
        match self {
            TransportError::Read(_) => {
                Some("run the server with stdin attached to the host process".into())
            }
            TransportError::Write(_) => {
                Some("keep the server's stdout open until it exits".into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_have_hints() {
        assert!(TransportError::Read("x".into()).hint().is_some());
        assert!(TransportError::Write("x".into()).fix().is_some());
    }
}
