//! Registry lifecycle: seed → list → register → invoke → capacity.

use serde_json::json;

use crewsync_protocol::mcp::tools::ToolContent;
use crewsync_registry::{RegistryError, ToolRegistry, DEFAULT_MAX_CREW_SIZE};
use crewsync_types::CrewMember;

fn names(registry: &ToolRegistry) -> Vec<String> {
    registry.list().iter().map(|d| d.name.clone()).collect()
}

#[test]
fn list_is_deterministic() {
    let a = ToolRegistry::default();
    let b = ToolRegistry::default();
    assert_eq!(a.list(), b.list());
    assert_eq!(a.list(), a.list());
}

#[test]
fn echo_is_registered() {
    let registry = ToolRegistry::default();
    let echo = registry.get("echo").expect("echo present");
    assert_eq!(echo.arguments.len(), 1);
    assert!(echo.arguments[0].required);
}

#[test]
fn fill_roster_to_capacity_then_fail() {
    let mut registry = ToolRegistry::default();
    let free = DEFAULT_MAX_CREW_SIZE - registry.roster().len();

    for i in 0..free {
        let before = registry.len();
        registry
            .register(format!("Member{i}"), "Generalist")
            .expect("below capacity");
        assert_eq!(registry.len(), before + 1);
    }

    let snapshot = names(&registry);
    let err = registry.register("Overflow", "Nope").expect_err("at capacity");
    assert!(matches!(err, RegistryError::CapacityExceeded { max, .. } if max == DEFAULT_MAX_CREW_SIZE));
    assert_eq!(names(&registry), snapshot);
    assert!(!registry.contains("Overflow"));
}

#[test]
fn add_crew_member_tool_at_capacity_errors() {
    let mut registry = ToolRegistry::new(6);
    let err = registry
        .invoke("add_crew_member", &json!({"name": "Alex", "role": "Security"}))
        .expect_err("full");
    assert_eq!(
        err.to_string(),
        "Cannot add Alex: crew size limit (6) reached"
    );
}

#[test]
fn added_member_joins_sync() {
    let mut registry = ToolRegistry::default();
    registry
        .invoke("add_crew_member", &json!({"name": "Alex", "role": "🛡️ Security Specialist"}))
        .expect("add");

    let out = registry
        .invoke("sync_crew", &json!({"task": "audit", "crew_members": ["Alex"]}))
        .expect("sync");
    let ToolContent::Text { text } = &out[0];
    assert!(text.contains("🛡️ Security Specialist"));
    assert!(!text.contains("Unknown crew member"));
}

#[test]
fn empty_custom_crew() {
    let mut registry = ToolRegistry::with_crew(Vec::new(), 1);
    assert_eq!(names(&registry), vec!["sync_crew", "add_crew_member", "list_crew", "echo"]);
    registry.register("Solo", "Does everything").expect("room for one");
    assert!(registry.register("Duo", "Too many").is_err());
}

#[test]
fn member_tools_return_fixed_text() {
    let mut registry =
        ToolRegistry::with_crew(vec![CrewMember::new("Kim", "Reviewer")], DEFAULT_MAX_CREW_SIZE);
    let first = registry.invoke("Kim", &json!({})).expect("kim");
    let second = registry.invoke("Kim", &json!({"ignored": true})).expect("kim");
    assert_eq!(first, second);
    assert_eq!(first, vec![ToolContent::text("Kim: Reviewer")]);
}
