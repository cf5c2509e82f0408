//! Built-in tools.
//!
//! Each handler is a free function over the roster (or the registry, for
//! tools that mutate it), keeping `ToolRegistry` itself to storage and
//! routing.

mod crew;
mod echo;
mod sync;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crewsync_types::{Priority, ToolArgument};

use crate::error::RegistryError;
use crate::tool::{RegisteredTool, ToolDescriptor, ToolHandler};

pub(crate) use crew::{add_crew_member, list_crew, member};
pub(crate) use echo::echo;
pub(crate) use sync::sync_crew;

pub(crate) const SYNC_CREW: &str = "sync_crew";
pub(crate) const ADD_CREW_MEMBER: &str = "add_crew_member";
pub(crate) const LIST_CREW: &str = "list_crew";
pub(crate) const ECHO: &str = "echo";

/// Built-in tool table, in advertised order.
///
/// `crew` and `max_crew_size` only feed the `sync_crew` description; the
/// descriptors are fixed once built.
pub(crate) fn descriptors(crew: &[String], max_crew_size: usize) -> Vec<RegisteredTool> {
    vec![
        RegisteredTool {
            descriptor: ToolDescriptor {
                name: SYNC_CREW.to_string(),
                description:
                    "Synchronize multiple crew members for collaborative problem solving"
                        .to_string(),
                arguments: vec![
                    ToolArgument::string("task", "Task description for the crew collaboration")
                        .required(),
                    ToolArgument::string_array(
                        "crew_members",
                        format!(
                            "Crew members to involve (max {max_crew_size}). Available: {}",
                            crew.join(", ")
                        ),
                    )
                    .with_max_items(max_crew_size),
                    ToolArgument::string("priority", "Task priority level")
                        .one_of(Priority::ALL.iter().map(Priority::as_str)),
                ],
            },
            handler: ToolHandler::SyncCrew,
        },
        RegisteredTool {
            descriptor: ToolDescriptor {
                name: ADD_CREW_MEMBER.to_string(),
                description: "Dynamically add a new crew member with specific role".to_string(),
                arguments: vec![
                    ToolArgument::string("name", "Name of the new crew member").required(),
                    ToolArgument::string("role", "Role and expertise description").required(),
                ],
            },
            handler: ToolHandler::AddCrewMember,
        },
        RegisteredTool {
            descriptor: ToolDescriptor {
                name: LIST_CREW.to_string(),
                description: "List all available crew members and their roles".to_string(),
                arguments: Vec::new(),
            },
            handler: ToolHandler::ListCrew,
        },
        RegisteredTool {
            descriptor: ToolDescriptor {
                name: ECHO.to_string(),
                description: "Echo back the input text (for testing)".to_string(),
                arguments: vec![ToolArgument::string("text", "Text to echo back").required()],
            },
            handler: ToolHandler::Echo,
        },
    ]
}

/// Deserializes tool arguments, treating `null` as `{}`.
pub(crate) fn parse_args<T: DeserializeOwned>(tool: &str, arguments: &Value) -> Result<T, RegistryError> {
    let value = if arguments.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        arguments.clone()
    };
    serde_json::from_value(value).map_err(|e| RegistryError::InvalidArguments {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}
