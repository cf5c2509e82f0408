//! Tool descriptors and handler kinds.

use crewsync_types::ToolArgument;

/// Advertised shape of a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// Unique, case-sensitive tool name.
    pub name: String,
    /// MCP description.
    pub description: String,
    /// Declared arguments, rendered as the tool's input schema.
    pub arguments: Vec<ToolArgument>,
}

/// What runs when a tool is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolHandler {
    /// Synchronize a subset of the crew on a task.
    SyncCrew,
    /// Add a member to the roster (and a tool for them).
    AddCrewMember,
    /// Describe the roster.
    ListCrew,
    /// Acknowledge the input text.
    Echo,
    /// Fixed-text tool created for a crew member.
    Member { role: String },
}

/// A descriptor paired with its handler.
#[derive(Debug, Clone)]
pub(crate) struct RegisteredTool {
    pub(crate) descriptor: ToolDescriptor,
    pub(crate) handler: ToolHandler,
}
