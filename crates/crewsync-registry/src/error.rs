//! Registry error types.

use crewsync_types::{CrewError, ErrorKind};
use thiserror::Error;

/// Errors returned by registry operations and tool handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No tool with this name is registered.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },
    /// The roster already holds `max` members.
    #[error("Cannot add {name}: crew size limit ({max}) reached")]
    CapacityExceeded { name: String, max: usize },
    /// A tool with this name already exists.
    #[error("Cannot add {name}: a tool with that name already exists")]
    Conflict { name: String },
    /// Tool names must be non-empty.
    #[error("tool name must not be empty")]
    EmptyName,
    /// The arguments could not be interpreted by the handler.
    #[error("invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },
}

impl From<RegistryError> for CrewError {
    fn from(e: RegistryError) -> Self {
        let kind = match &e {
            RegistryError::UnknownTool { .. } => ErrorKind::NotFound,
            RegistryError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            RegistryError::Conflict { .. } => ErrorKind::Conflict,
            RegistryError::EmptyName | RegistryError::InvalidArguments { .. } => {
                ErrorKind::InvalidInput
            }
        };
        CrewError::new(kind, e.to_string())
    }
}
