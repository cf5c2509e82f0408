use serde::Deserialize;
use serde_json::Value;

use crewsync_protocol::mcp::tools::ToolContent;

use super::{parse_args, ADD_CREW_MEMBER};
use crate::error::RegistryError;
use crate::registry::ToolRegistry;
use crate::roster::CrewRoster;

const RULE_WIDTH: usize = 50;

#[derive(Debug, Default, Deserialize)]
struct AddCrewMemberArgs {
    #[serde(default)]
    name: String,
    #[serde(default)]
    role: String,
}

/// Registers a new member; capacity and name conflicts surface as errors.
pub(crate) fn add_crew_member(
    registry: &mut ToolRegistry,
    arguments: &Value,
) -> Result<Vec<ToolContent>, RegistryError> {
    let args: AddCrewMemberArgs = parse_args(ADD_CREW_MEMBER, arguments)?;
    registry.register(args.name.clone(), args.role.clone())?;

    Ok(vec![ToolContent::text(format!(
        "✅ {} added to crew!\n🆕 Role: {}\n👥 Total crew members: {}",
        args.name,
        args.role,
        registry.roster().len()
    ))])
}

pub(crate) fn list_crew(roster: &CrewRoster) -> Vec<ToolContent> {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        format!(
            "👥 Current Crew ({}/{} members):",
            roster.len(),
            roster.max_size()
        ),
        rule.clone(),
    ];
    lines.extend(roster.iter().map(|m| format!("• {}: {}", m.name, m.role)));
    lines.push(rule);
    lines.push(format!(
        "💡 Use 'add_crew_member' to expand the team (max {})",
        roster.max_size()
    ));

    vec![ToolContent::text(lines.join("\n"))]
}

/// Fixed text for a member tool.
pub(crate) fn member(name: &str, role: &str) -> Vec<ToolContent> {
    vec![ToolContent::text(format!("{name}: {role}"))]
}
