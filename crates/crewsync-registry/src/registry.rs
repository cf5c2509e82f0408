//! The tool registry.

use serde_json::Value;
use tracing::{debug, info};

use crewsync_protocol::mcp::tools::ToolContent;
use crewsync_types::{default_crew, CrewMember};

use crate::builtin;
use crate::error::RegistryError;
use crate::roster::CrewRoster;
use crate::tool::{RegisteredTool, ToolDescriptor, ToolHandler};

/// Roster capacity used when nothing is configured.
pub const DEFAULT_MAX_CREW_SIZE: usize = 10;

/// Insertion-ordered table of tools plus the crew roster they act on.
///
/// Built-in tools come first, then one fixed-text tool per crew member.
/// The registry is owned by a single dispatcher; mutation goes through
/// `&mut self` only.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    roster: CrewRoster,
}

impl ToolRegistry {
    /// Creates a registry seeded with the built-in tools and the default crew.
    pub fn new(max_crew_size: usize) -> Self {
        Self::with_crew(default_crew(), max_crew_size)
    }

    /// Creates a registry seeded with the built-in tools and `crew`.
    ///
    /// Seeding ignores `max_crew_size`; the limit applies to later
    /// [`ToolRegistry::register`] calls.
    pub fn with_crew(crew: Vec<CrewMember>, max_crew_size: usize) -> Self {
        let names: Vec<String> = crew.iter().map(|m| m.name.clone()).collect();
        let mut tools = builtin::descriptors(&names, max_crew_size);
        let mut seeded = Vec::with_capacity(crew.len());

        for member in crew {
            if tools.iter().any(|t| t.descriptor.name == member.name) {
                debug!(name = %member.name, "skipping duplicate crew member");
                continue;
            }
            tools.push(member_tool(&member));
            seeded.push(member);
        }

        info!(
            tools = tools.len(),
            crew = seeded.len(),
            max_crew_size,
            "tool registry ready"
        );

        Self {
            tools,
            roster: CrewRoster::seeded(seeded, max_crew_size),
        }
    }

    /// Descriptors in insertion order.
    pub fn list(&self) -> Vec<&ToolDescriptor> {
        self.tools.iter().map(|t| &t.descriptor).collect()
    }

    /// Looks up a tool by exact name.
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.find(name).map(|t| &t.descriptor)
    }

    /// Returns true if a tool named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// The crew roster.
    pub fn roster(&self) -> &CrewRoster {
        &self.roster
    }

    /// Runs the tool named `name` with `arguments`.
    ///
    /// Arguments are not checked against the declared schema here; each
    /// handler defaults what is missing.
    pub fn invoke(
        &mut self,
        name: &str,
        arguments: &Value,
    ) -> Result<Vec<ToolContent>, RegistryError> {
        let handler = self
            .find(name)
            .map(|t| t.handler.clone())
            .ok_or_else(|| RegistryError::UnknownTool {
                name: name.to_string(),
            })?;

        debug!(tool = name, ?handler, "invoking tool");

        match handler {
            ToolHandler::SyncCrew => builtin::sync_crew(&self.roster, arguments),
            ToolHandler::AddCrewMember => builtin::add_crew_member(self, arguments),
            ToolHandler::ListCrew => Ok(builtin::list_crew(&self.roster)),
            ToolHandler::Echo => builtin::echo(arguments),
            ToolHandler::Member { role } => Ok(builtin::member(name, &role)),
        }
    }

    /// Adds a crew member and a fixed-text tool named after them.
    ///
    /// A blank name is refused with [`RegistryError::EmptyName`] (reported
    /// as invalid params) instead of creating a tool nobody can call by
    /// name. On failure the registry is left untouched.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        role: impl Into<String>,
    ) -> Result<&ToolDescriptor, RegistryError> {
        let member = CrewMember::new(name, role);

        if member.name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.contains(&member.name) {
            return Err(RegistryError::Conflict { name: member.name });
        }

        let tool = member_tool(&member);
        self.roster.push(member)?;
        self.tools.push(tool);

        let added = &self.tools[self.tools.len() - 1].descriptor;
        info!(name = %added.name, crew = self.roster.len(), "crew member registered");
        Ok(added)
    }

    fn find(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.iter().find(|t| t.descriptor.name == name)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CREW_SIZE)
    }
}

fn member_tool(member: &CrewMember) -> RegisteredTool {
    RegisteredTool {
        descriptor: ToolDescriptor {
            name: member.name.clone(),
            description: format!("Consult crew member {}: {}", member.name, member.role),
            arguments: Vec::new(),
        },
        handler: ToolHandler::Member {
            role: member.role.clone(),
        },
    }
}
