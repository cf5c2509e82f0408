use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crewsync_protocol::mcp::tools::ToolContent;
use crewsync_types::Priority;

use super::{parse_args, SYNC_CREW};
use crate::error::RegistryError;
use crate::roster::CrewRoster;

#[derive(Debug, Default, Deserialize)]
struct SyncCrewArgs {
    #[serde(default)]
    task: String,
    #[serde(default)]
    crew_members: Option<Vec<String>>,
    #[serde(default)]
    priority: Option<Priority>,
}

/// Brings the requested members (or the whole crew) together on a task.
///
/// More than `max_size` requested members are silently truncated.
pub(crate) fn sync_crew(
    roster: &CrewRoster,
    arguments: &Value,
) -> Result<Vec<ToolContent>, RegistryError> {
    let args: SyncCrewArgs = parse_args(SYNC_CREW, arguments)?;
    let priority = args.priority.unwrap_or_default();
    let mut members = args.crew_members.unwrap_or_else(|| roster.names());
    if members.len() > roster.max_size() {
        debug!(
            requested = members.len(),
            max = roster.max_size(),
            "truncating crew selection"
        );
        members.truncate(roster.max_size());
    }

    let task = &args.task;
    let mut lines = vec![
        format!(
            "🔄 Crew Sync Agent - {} Priority",
            priority.as_str().to_uppercase()
        ),
        format!("📋 Task: {task}"),
        format!("👥 Active Crew ({} members):", members.len()),
        String::new(),
    ];

    for name in &members {
        match roster.get(name) {
            Some(member) => {
                lines.push(format!("  {}", member.role));
                lines.push(format!("    ↳ Synchronized for: {task}"));
            }
            None => lines.push(format!("  ❓ {name} - Unknown crew member")),
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "✅ Crew synchronization complete for {} members",
        members.len()
    ));
    lines.push(format!("🎯 Ready to collaborate on: {task}"));

    Ok(vec![ToolContent::text(lines.join("\n"))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewsync_types::{default_crew, CrewMember};
    use serde_json::json;

    fn text(out: Vec<ToolContent>) -> String {
        match out.into_iter().next() {
            Some(ToolContent::Text { text }) => text,
            None => panic!("no content"),
        }
    }

    #[test]
    fn defaults_to_whole_crew_and_medium() {
        let roster = CrewRoster::seeded(default_crew(), 10);
        let out = text(sync_crew(&roster, &json!({"task": "ship it"})).expect("sync"));
        assert!(out.starts_with("🔄 Crew Sync Agent - MEDIUM Priority"));
        assert!(out.contains("👥 Active Crew (6 members):"));
        assert!(out.contains("Synchronized for: ship it"));
    }

    #[test]
    fn unknown_members_are_marked() {
        let roster = CrewRoster::seeded(default_crew(), 10);
        let args = json!({"task": "t", "crew_members": ["Taylor", "Ghost"], "priority": "urgent"});
        let out = text(sync_crew(&roster, &args).expect("sync"));
        assert!(out.contains("URGENT Priority"));
        assert!(out.contains("Team Coordinator"));
        assert!(out.contains("❓ Ghost - Unknown crew member"));
    }

    #[test]
    fn selection_is_capped_at_capacity() {
        let roster = CrewRoster::seeded(vec![CrewMember::new("a", "role a")], 2);
        let args = json!({"task": "t", "crew_members": ["a", "b", "c", "d"]});
        let out = text(sync_crew(&roster, &args).expect("sync"));
        assert!(out.contains("Active Crew (2 members)"));
        assert!(!out.contains("❓ c"));
    }

    #[test]
    fn missing_task_is_empty() {
        let roster = CrewRoster::seeded(default_crew(), 10);
        let out = text(sync_crew(&roster, &json!({})).expect("sync"));
        assert!(out.contains("📋 Task: \n"));
    }

    #[test]
    fn invalid_priority_is_rejected() {
        let roster = CrewRoster::seeded(default_crew(), 10);
        let err = sync_crew(&roster, &json!({"priority": "critical"})).expect_err("bad");
        assert!(matches!(err, RegistryError::InvalidArguments { .. }));
    }
}
