//! Domain error shared by every layer that answers a request.

use std::fmt;

/// What went wrong, independent of the layer that noticed it.
///
/// The dispatcher picks a JSON-RPC error code from this alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No tool or member by that name.
    NotFound,
    /// Arguments were present but unusable.
    InvalidInput,
    /// The name is already taken.
    Conflict,
    /// The roster is full.
    CapacityExceeded,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::Conflict => "conflict",
            ErrorKind::CapacityExceeded => "capacity_exceeded",
        }
    }
}

/// A request-level failure: a kind plus the text sent back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewError {
    pub kind: ErrorKind,
    /// Sent verbatim as the JSON-RPC error message.
    pub message: String,
}

impl CrewError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for CrewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.kind.as_str())
    }
}

impl std::error::Error for CrewError {}

/// Transforms technical errors into user-actionable diagnostics.
///
/// Implementors provide optional `hint` (cause explanation) and `fix`
/// (concrete remediation step) for each error variant.
pub trait DiagnosticError {
    /// A human-readable explanation of the likely cause.
    fn hint(&self) -> Option<String> {
        None
    }
    /// A concrete fix the user can apply (e.g. a config change).
    fn fix(&self) -> Option<String> {
        None
    }
}
